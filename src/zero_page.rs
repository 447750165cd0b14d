//! # Zero Page Register Names
//!
//! Symbolic names for the Atari 2600 hardware registers mapped into the low
//! part of zero page. The TIA decodes writes at 0x00-0x2C and reads at
//! 0x30-0x3D (reads also alias 0x00-0x0D, but the write names are the ones
//! listings conventionally show there).

/// Known register addresses, sorted by address.
const REGISTERS: [(u8, &str); 59] = [
    // TIA write registers
    (0x00, "VSYNC"),
    (0x01, "VBLANK"),
    (0x02, "WSYNC"),
    (0x03, "RSYNC"),
    (0x04, "NUSIZ0"),
    (0x05, "NUSIZ1"),
    (0x06, "COLUP0"),
    (0x07, "COLUP1"),
    (0x08, "COLUPF"),
    (0x09, "COLUBK"),
    (0x0A, "CTRLPF"),
    (0x0B, "REFP0"),
    (0x0C, "REFP1"),
    (0x0D, "PF0"),
    (0x0E, "PF1"),
    (0x0F, "PF2"),
    (0x10, "RESP0"),
    (0x11, "RESP1"),
    (0x12, "RESM0"),
    (0x13, "RESM1"),
    (0x14, "RESBL"),
    (0x15, "AUDC0"),
    (0x16, "AUDC1"),
    (0x17, "AUDF0"),
    (0x18, "AUDF1"),
    (0x19, "AUDV0"),
    (0x1A, "AUDV1"),
    (0x1B, "GRP0"),
    (0x1C, "GRP1"),
    (0x1D, "ENAM0"),
    (0x1E, "ENAM1"),
    (0x1F, "ENABL"),
    (0x20, "HMP0"),
    (0x21, "HMP1"),
    (0x22, "HMM0"),
    (0x23, "HMM1"),
    (0x24, "HMBL"),
    (0x25, "VDELP0"),
    (0x26, "VDELP1"),
    (0x27, "VDELBL"),
    (0x28, "RESMP0"),
    (0x29, "RESMP1"),
    (0x2A, "HMOVE"),
    (0x2B, "HMCLR"),
    (0x2C, "CXCLR"),
    // TIA read registers
    (0x30, "CXM0P"),
    (0x31, "CXM1P"),
    (0x32, "CXP0FB"),
    (0x33, "CXP1FB"),
    (0x34, "CXM0FB"),
    (0x35, "CXM1FB"),
    (0x36, "CXBLPF"),
    (0x37, "CXPPMM"),
    (0x38, "INPT0"),
    (0x39, "INPT1"),
    (0x3A, "INPT2"),
    (0x3B, "INPT3"),
    (0x3C, "INPT4"),
    (0x3D, "INPT5"),
];

/// Look up the register name for a zero-page address.
///
/// ```
/// use a2600_disasm::zero_page;
///
/// assert_eq!(zero_page::lookup(0x02), Some("WSYNC"));
/// assert_eq!(zero_page::lookup(0x80), None);
/// ```
pub fn lookup(address: u8) -> Option<&'static str> {
    REGISTERS
        .binary_search_by_key(&address, |&(addr, _)| addr)
        .ok()
        .map(|idx| REGISTERS[idx].1)
}
