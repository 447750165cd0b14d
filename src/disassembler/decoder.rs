//! Instruction decoder for the disassembler
//!
//! A single forward pass over the byte stream, written as an explicit state
//! machine:
//!
//! ```text
//! Scanning --opcode--> Decoding --operands complete--> Scanning
//!                      Decoding --stream exhausted---> Truncated --> Done
//! Scanning --no bytes left-----------------------------------------> Done
//! ```

use tracing::{trace, warn};

use crate::disassembler::{DisassemblyOptions, Leftover, Line};
use crate::opcodes::{self, OpcodeDescriptor};
use crate::DisassembleError;

/// Output of the decode pass.
#[derive(Debug, Clone, Default)]
pub struct Decoded {
    pub lines: Vec<Line>,
    pub leftover: Option<Leftover>,
}

#[derive(Debug)]
enum State {
    Scanning,
    Decoding {
        offset: usize,
        descriptor: &'static OpcodeDescriptor,
    },
    Truncated {
        offset: usize,
        opcode: u8,
        operands: Vec<u8>,
    },
    Done,
}

/// Drives the byte stream through the decode state machine.
pub struct DecodeEngine<I> {
    bytes: I,
    /// Stream offset of the next unread byte.
    offset: usize,
    options: DisassemblyOptions,
}

impl<I: Iterator<Item = u8>> DecodeEngine<I> {
    pub fn new(bytes: I, options: DisassemblyOptions) -> Self {
        Self {
            bytes,
            offset: 0,
            options,
        }
    }

    /// Consume the stream.
    ///
    /// Returns at the first unsupported opcode with
    /// [`DisassembleError::UnknownOpcode`].
    pub fn run(mut self) -> Result<Decoded, DisassembleError> {
        let mut decoded = Decoded::default();
        let mut state = State::Scanning;

        loop {
            state = match state {
                State::Scanning => self.scan()?,
                State::Decoding { offset, descriptor } => {
                    let operands = self.read_operands(descriptor.operand_count);
                    if operands.len() < descriptor.operand_count {
                        State::Truncated {
                            offset,
                            opcode: descriptor.opcode,
                            operands,
                        }
                    } else {
                        let address = self.address_of(offset)?;
                        let line = Line::new(address, descriptor, operands, &self.options);
                        trace!(address = line.address(), text = line.text(), "decoded");
                        decoded.lines.push(line);
                        State::Scanning
                    }
                }
                State::Truncated {
                    offset,
                    opcode,
                    operands,
                } => {
                    warn!(
                        offset,
                        opcode,
                        available = operands.len(),
                        "stream ended mid-instruction, keeping tail as leftover bytes"
                    );
                    let mut bytes = Vec::with_capacity(1 + operands.len());
                    bytes.push(opcode);
                    bytes.extend(operands);
                    decoded.leftover = Some(Leftover {
                        address: self.leftover_address(offset),
                        bytes,
                    });
                    State::Done
                }
                State::Done => break,
            };
        }

        Ok(decoded)
    }

    fn scan(&mut self) -> Result<State, DisassembleError> {
        let offset = self.offset;
        let Some(opcode) = self.next_byte() else {
            return Ok(State::Done);
        };

        let descriptor =
            opcodes::lookup(opcode).ok_or(DisassembleError::UnknownOpcode { offset, opcode })?;
        Ok(State::Decoding { offset, descriptor })
    }

    /// Read up to `count` bytes; fewer are returned only at end of stream.
    fn read_operands(&mut self, count: usize) -> Vec<u8> {
        let mut operands = Vec::with_capacity(count);
        while operands.len() < count {
            match self.next_byte() {
                Some(byte) => operands.push(byte),
                None => break,
            }
        }
        operands
    }

    fn next_byte(&mut self) -> Option<u8> {
        let byte = self.bytes.next()?;
        self.offset += 1;
        Some(byte)
    }

    fn address_of(&self, offset: usize) -> Result<u16, DisassembleError> {
        usize::from(self.options.origin)
            .checked_add(offset)
            .and_then(|address| u16::try_from(address).ok())
            .ok_or(DisassembleError::AddressOverflow { offset })
    }

    /// Address of a truncated tail. Never fails: a tail starting at 0x10000
    /// wraps to 0x0000 rather than losing the bytes.
    fn leftover_address(&self, offset: usize) -> u16 {
        self.options.origin.wrapping_add(offset as u16)
    }
}
