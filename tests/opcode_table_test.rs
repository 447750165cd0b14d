//! Opcode table validation tests
//!
//! Verifies that the instruction table is complete and consistent.

use a2600_disasm::{opcodes, AddressingMode, OPCODE_TABLE};

#[test]
fn test_opcode_table_completeness() {
    assert_eq!(OPCODE_TABLE.len(), 256, "Opcode table must cover every byte value");

    let documented = OPCODE_TABLE.iter().flatten().count();
    assert_eq!(documented, 151, "NMOS 6502 has 151 documented opcodes");
}

#[test]
fn test_entries_indexed_by_own_opcode() {
    for (opcode, entry) in OPCODE_TABLE.iter().enumerate() {
        if let Some(descriptor) = entry {
            assert_eq!(
                descriptor.opcode as usize, opcode,
                "Entry at 0x{:02X} describes opcode 0x{:02X}",
                opcode, descriptor.opcode
            );
        }
    }
}

#[test]
fn test_operand_count_matches_mode() {
    for descriptor in OPCODE_TABLE.iter().flatten() {
        assert_eq!(
            descriptor.operand_count,
            descriptor.addressing_mode.operand_len(),
            "Opcode 0x{:02X} ({}) operand count disagrees with {:?}",
            descriptor.opcode,
            descriptor.mnemonic,
            descriptor.addressing_mode
        );
        assert!(descriptor.size_bytes() >= 1 && descriptor.size_bytes() <= 3);
    }
}

#[test]
fn test_documented_opcodes_have_nonzero_cycles() {
    for descriptor in OPCODE_TABLE.iter().flatten() {
        assert!(
            (2..=7).contains(&descriptor.cycles),
            "Opcode 0x{:02X} ({}) has {} cycles",
            descriptor.opcode,
            descriptor.mnemonic,
            descriptor.cycles
        );
    }
}

#[test]
fn test_mnemonic_count() {
    let mut mnemonics: Vec<&str> = OPCODE_TABLE.iter().flatten().map(|d| d.mnemonic).collect();
    mnemonics.sort_unstable();
    mnemonics.dedup();
    assert_eq!(mnemonics.len(), 56);
}

#[test]
fn test_branches_are_relative() {
    for opcode in [0x10, 0x30, 0x50, 0x70, 0x90, 0xB0, 0xD0, 0xF0] {
        let descriptor = opcodes::lookup(opcode).unwrap();
        assert_eq!(descriptor.addressing_mode, AddressingMode::Relative);
        assert!(descriptor.mnemonic.starts_with('B'));
    }
}

#[test]
fn test_lda_variants() {
    let expected = [
        (0xA9, AddressingMode::Immediate, 2),
        (0xA5, AddressingMode::ZeroPage, 3),
        (0xB5, AddressingMode::ZeroPageX, 4),
        (0xAD, AddressingMode::Absolute, 4),
        (0xBD, AddressingMode::AbsoluteX, 4),
        (0xB9, AddressingMode::AbsoluteY, 4),
        (0xA1, AddressingMode::IndirectX, 6),
        (0xB1, AddressingMode::IndirectY, 5),
    ];

    for (opcode, mode, cycles) in expected {
        let descriptor = opcodes::lookup(opcode).unwrap();
        assert_eq!(descriptor.mnemonic, "LDA");
        assert_eq!(descriptor.addressing_mode, mode);
        assert_eq!(descriptor.cycles, cycles);
    }
}

#[test]
fn test_undocumented_opcodes_absent() {
    for opcode in [0x02, 0x03, 0x04, 0x0B, 0x1A, 0x80, 0x9C, 0xA3, 0xEB, 0xFF] {
        assert!(opcodes::lookup(opcode).is_none(), "0x{:02X} should be unsupported", opcode);
    }
}
