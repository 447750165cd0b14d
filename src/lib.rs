//! # Atari 2600 Disassembler
//!
//! Converts raw 6502 machine code (an Atari 2600 cartridge image) into an
//! annotated assembly listing.
//!
//! ## Quick Start
//!
//! ```rust
//! use a2600_disasm::{disassemble, DisassemblyOptions};
//!
//! // LDA $0080 ; JMP $10F0
//! let rom = [0xAD, 0x00, 0x80, 0x4C, 0x10, 0xF0];
//! let listing = disassemble(&rom, DisassemblyOptions::default()).unwrap();
//!
//! assert_eq!(listing.lines().len(), 2);
//! assert_eq!(listing.lines()[0].text(), "LDA $0080");
//! assert_eq!(listing.lines()[1].comment(), "ROM address $1000 via mirror");
//! ```
//!
//! ## Architecture
//!
//! A run makes three sequential passes:
//!
//! 1. **Decode** - [`disassembler::decoder`] walks the byte stream once,
//!    forward only, turning each opcode and its operands into a [`Line`].
//!    A tail too short to hold a full instruction is kept as leftover bytes.
//! 2. **Label scan** - [`disassembler::labels`] counts how many lines target
//!    each address through a 16-bit operand.
//! 3. **Export** - [`disassembler::exporter`] writes the header banner, the
//!    lines (preceded by labels for multiply-referenced addresses) and the
//!    leftover block.
//!
//! ## Modules
//!
//! - `addressing` - Addressing mode enumeration
//! - `opcodes` - Opcode metadata table
//! - `zero_page` - TIA register names
//! - `disassembler` - Decoding, formatting, labels and export

pub mod addressing;
pub mod disassembler;
pub mod opcodes;
pub mod zero_page;

use std::io;
use std::path::PathBuf;

// Re-export public API
pub use addressing::AddressingMode;
pub use disassembler::exporter::Header;
pub use disassembler::labels::{Label, LabelRegistry};
pub use disassembler::{disassemble, DisassemblyOptions, Leftover, Line, Listing};
pub use opcodes::{OpcodeDescriptor, OPCODE_TABLE};

/// Errors that abort a disassembly run.
///
/// A truncated final instruction is not an error: its bytes end up in
/// [`Listing::leftover`].
#[derive(Debug, thiserror::Error)]
pub enum DisassembleError {
    /// Byte at `offset` is not a documented opcode.
    ///
    /// Decoding stops here because the length of the instruction, and so the
    /// position of the next one, is unknown.
    #[error("instruction not found for opcode 0x{opcode:02X} at offset 0x{offset:04X}")]
    UnknownOpcode { offset: usize, opcode: u8 },

    /// The instruction at `offset` would sit past 0xFFFF once the origin is applied.
    #[error("offset 0x{offset:X} does not fit in the 16-bit address space")]
    AddressOverflow { offset: usize },

    /// Input or output file could not be opened.
    #[error("error opening file {}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing the listing failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}
