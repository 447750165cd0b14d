//! Label registry
//!
//! Counts how many decoded lines reference each address through a 16-bit
//! operand. Only addresses referenced more than once get a label in the
//! listing; a single reference is usually plain fall-through and a label
//! there would be noise.

use std::collections::BTreeMap;
use std::fmt;

use crate::disassembler::Line;

/// Convert 16-bit operand bytes, as written in the stream, into the address
/// the registry is keyed by.
///
/// The 6502 stores addresses low byte first. This is the only place that
/// conversion happens; callers must not swap the bytes themselves.
pub fn target_address(operand: [u8; 2]) -> u16 {
    u16::from_le_bytes(operand)
}

/// A symbolic name for a referenced address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Label {
    pub address: u16,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "L{:04X}", self.address)
    }
}

/// Usage counts per target address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelRegistry {
    usages: BTreeMap<u16, usize>,
}

impl LabelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from every address-targeting operand in `lines`.
    pub fn scan(lines: &[Line]) -> Self {
        let mut registry = Self::new();
        for operand in lines.iter().filter_map(Line::target_operand) {
            registry.record(target_address(operand));
        }
        registry
    }

    /// Count one more reference to `address`.
    pub fn record(&mut self, address: u16) {
        *self.usages.entry(address).or_insert(0) += 1;
    }

    /// Label and usage count for `address`, if it was ever referenced.
    pub fn find(&self, address: u16) -> Option<(Label, usize)> {
        self.usages.get(&address).map(|&count| (Label { address }, count))
    }

    /// The label to declare in front of the line at `address`, if any.
    pub fn declaration_for(&self, address: u16) -> Option<Label> {
        match self.find(address) {
            Some((label, count)) if count > 1 => Some(label),
            _ => None,
        }
    }

    /// All labels referenced more than once, in address order.
    ///
    /// Some of these may point into the middle of an instruction or outside
    /// the image, in which case no declaration is emitted for them.
    pub fn declared(&self) -> impl Iterator<Item = Label> + '_ {
        self.usages
            .iter()
            .filter(|&(_, &count)| count > 1)
            .map(|(&address, _)| Label { address })
    }
}
