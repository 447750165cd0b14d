//! 6502 Disassembler Module
//!
//! Converts cartridge bytes into [`Line`]s, resolves labels and hands the
//! result to the exporter.

pub mod decoder;
pub mod exporter;
pub mod formatter;
pub mod labels;

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::addressing::AddressingMode;
use crate::opcodes::OpcodeDescriptor;
use crate::DisassembleError;
use labels::LabelRegistry;

/// A single decoded instruction.
///
/// Built once by the decoder; the rendered text and comment are computed at
/// construction and never change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    address: u16,
    descriptor: &'static OpcodeDescriptor,
    operand_bytes: Vec<u8>,
    text: String,
    comment: String,
}

impl Line {
    /// Decode result for `descriptor` at `address`.
    ///
    /// `operand_bytes` must hold exactly `descriptor.operand_count` bytes, in
    /// stream order.
    pub fn new(
        address: u16,
        descriptor: &'static OpcodeDescriptor,
        operand_bytes: Vec<u8>,
        options: &DisassemblyOptions,
    ) -> Self {
        debug_assert_eq!(operand_bytes.len(), descriptor.operand_count);

        let text = formatter::format_instruction(descriptor, &operand_bytes, address, options);
        let comment = formatter::format_comment(descriptor.addressing_mode, &operand_bytes);

        Self {
            address,
            descriptor,
            operand_bytes,
            text,
            comment,
        }
    }

    /// Address of the opcode byte.
    pub fn address(&self) -> u16 {
        self.address
    }

    pub fn descriptor(&self) -> &'static OpcodeDescriptor {
        self.descriptor
    }

    pub fn opcode(&self) -> u8 {
        self.descriptor.opcode
    }

    pub fn mnemonic(&self) -> &'static str {
        self.descriptor.mnemonic
    }

    pub fn addressing_mode(&self) -> AddressingMode {
        self.descriptor.addressing_mode
    }

    /// Raw operand bytes in the order they were read.
    pub fn operand_bytes(&self) -> &[u8] {
        &self.operand_bytes
    }

    /// Mnemonic plus rendered operand, e.g. `STA $02`.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Annotation text; empty when there is nothing to say.
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Total encoded size in bytes.
    pub fn size_bytes(&self) -> usize {
        self.descriptor.size_bytes()
    }

    /// The two operand bytes, in stream order, when this line addresses a
    /// full 16-bit target.
    pub fn target_operand(&self) -> Option<[u8; 2]> {
        if !self.addressing_mode().targets_address() {
            return None;
        }
        match self.operand_bytes.as_slice() {
            &[first, second] => Some([first, second]),
            _ => None,
        }
    }
}

/// Trailing bytes that could not form a complete instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leftover {
    /// Address of the first leftover byte.
    pub address: u16,

    /// The bytes, verbatim, starting with the truncated opcode.
    pub bytes: Vec<u8>,
}

/// Options controlling disassembly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisassemblyOptions {
    /// Address assigned to the first byte of the stream.
    pub origin: u16,

    /// Render relative branches as their absolute target instead of the raw
    /// offset byte.
    pub resolve_branches: bool,
}

impl Default for DisassemblyOptions {
    fn default() -> Self {
        Self {
            origin: 0x0000,
            resolve_branches: false,
        }
    }
}

/// Result of one disassembly run, ready for export.
#[derive(Debug, Clone)]
pub struct Listing {
    lines: Vec<Line>,
    leftover: Option<Leftover>,
    labels: LabelRegistry,
}

impl Listing {
    /// Decoded lines in stream order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Truncated tail, if the stream ended mid-instruction.
    pub fn leftover(&self) -> Option<&Leftover> {
        self.leftover.as_ref()
    }

    pub fn labels(&self) -> &LabelRegistry {
        &self.labels
    }

    /// Render the listing body (no header banner) to a string.
    pub fn render(&self) -> String {
        let mut out = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = exporter::write_body(&mut out, self);
        String::from_utf8_lossy(&out).into_owned()
    }
}

/// Disassemble a byte slice into a [`Listing`].
///
/// Runs the decode pass and the label scan. Fails on the first unsupported
/// opcode; nothing after it is decoded.
///
/// ```
/// use a2600_disasm::{disassemble, DisassembleError, DisassemblyOptions};
///
/// let err = disassemble(&[0xEA, 0x02], DisassemblyOptions::default()).unwrap_err();
/// assert!(matches!(err, DisassembleError::UnknownOpcode { offset: 1, opcode: 0x02 }));
/// ```
pub fn disassemble(bytes: &[u8], options: DisassemblyOptions) -> Result<Listing, DisassembleError> {
    let decoded = decoder::DecodeEngine::new(bytes.iter().copied(), options).run()?;
    let labels = LabelRegistry::scan(&decoded.lines);

    debug!(
        lines = decoded.lines.len(),
        labels = labels.declared().count(),
        leftover = decoded.leftover.as_ref().map_or(0, |l| l.bytes.len()),
        "disassembly complete"
    );

    Ok(Listing {
        lines: decoded.lines,
        leftover: decoded.leftover,
        labels,
    })
}

/// Read a whole cartridge image from disk.
pub fn read_image(path: &Path) -> Result<Vec<u8>, DisassembleError> {
    fs::read(path).map_err(|source| DisassembleError::FileOpen {
        path: path.to_path_buf(),
        source,
    })
}
