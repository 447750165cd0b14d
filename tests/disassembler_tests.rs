//! End-to-end disassembly tests
//!
//! Feed small cartridge fragments through `disassemble` and check the
//! rendered listing text.

use a2600_disasm::disassembler::exporter;
use a2600_disasm::{disassemble, DisassembleError, DisassemblyOptions, Header, Label};

fn render(bytes: &[u8]) -> String {
    disassemble(bytes, DisassemblyOptions::default()).unwrap().render()
}

#[test]
fn test_absolute_load_has_no_comment_or_label() {
    let listing = disassemble(&[0xAD, 0x00, 0x80], DisassemblyOptions::default()).unwrap();

    assert_eq!(listing.lines().len(), 1);
    let line = &listing.lines()[0];
    assert_eq!(line.address(), 0x0000);
    assert_eq!(line.text(), "LDA $0080");
    assert_eq!(line.comment(), "");
    assert!(listing.labels().declared().next().is_none());
    assert_eq!(listing.render(), "0000 AD [ 00 80 ] LDA $0080\n");
}

#[test]
fn test_jump_through_f0_mirror() {
    let listing = disassemble(&[0x4C, 0x10, 0xF0], DisassemblyOptions::default()).unwrap();

    let line = &listing.lines()[0];
    assert_eq!(line.text(), "JMP $10F0");
    assert_eq!(line.comment(), "ROM address $1000 via mirror");
    assert_eq!(
        listing.render(),
        "0000 4C [ 10 F0 ] JMP $10F0  ; ROM address $1000 via mirror\n"
    );
}

#[test]
fn test_label_declared_for_twice_referenced_address() {
    let bytes = [
        0x4C, 0x03, 0x00, // JMP -> 0x0003
        0xEA, // NOP
        0x4C, 0x03, 0x00, // JMP -> 0x0003
    ];

    assert_eq!(
        render(&bytes),
        "0000 4C [ 03 00 ] JMP $0300\n\
         L0003:\n\
         0003 EA [ ] NOP\n\
         0004 4C [ 03 00 ] JMP $0300\n"
    );
}

#[test]
fn test_single_reference_gets_no_label() {
    let bytes = [0x20, 0x03, 0x00, 0x60];
    let listing = disassemble(&bytes, DisassemblyOptions::default()).unwrap();

    assert_eq!(listing.labels().find(0x0003), Some((Label { address: 0x0003 }, 1)));
    assert!(!listing.render().contains(':'));
}

#[test]
fn test_indexed_and_indirect_operands_count_as_references() {
    let bytes = [
        0xBD, 0x06, 0x00, // LDA $0600,X -> 0x0006
        0x6C, 0x06, 0x00, // JMP ($0600) -> 0x0006
        0x60, // RTS
    ];

    let text = render(&bytes);
    assert!(text.contains("L0006:\n0006 60 [ ] RTS\n"), "{}", text);
}

#[test]
fn test_label_inside_instruction_is_not_emitted() {
    // Both JMPs target 0x0001, the middle of the first instruction.
    let bytes = [0x4C, 0x01, 0x00, 0x4C, 0x01, 0x00];
    let listing = disassemble(&bytes, DisassemblyOptions::default()).unwrap();

    assert_eq!(listing.labels().declared().count(), 1);
    assert!(!listing.render().contains("L0001:"));
}

#[test]
fn test_labels_follow_origin() {
    let options = DisassemblyOptions {
        origin: 0xF000,
        ..Default::default()
    };
    let bytes = [
        0xEA, // F000 NOP
        0x4C, 0x00, 0xF0, // F001 JMP $F000
        0x4C, 0x00, 0xF0, // F004 JMP $F000
    ];

    let text = disassemble(&bytes, options).unwrap().render();
    assert!(text.starts_with("LF000:\nF000 EA [ ] NOP\n"), "{}", text);
    assert!(text.contains("F001 4C [ 00 F0 ] JMP $00F0  ; ROM address $0000 via mirror\n"));
}

#[test]
fn test_zero_page_register_comments() {
    let bytes = [
        0x85, 0x02, // STA WSYNC
        0xA5, 0x3C, // LDA INPT4
        0x95, 0x20, // STA HMP0,X
        0xB5, 0x3E, // unnamed TIA space
        0xA6, 0x81, // LDX RIOT RAM
        0x86, 0x50, // no annotation
    ];

    assert_eq!(
        render(&bytes),
        "0000 85 [ 02 ] STA $02  ; WSYNC\n\
         0002 A5 [ 3C ] LDA $3C  ; INPT4\n\
         0004 95 [ 20 ] STA $20,X  ; HMP0\n\
         0006 B5 [ 3E ] LDA $3E,X  ; in TIA Addresses\n\
         0008 A6 [ 81 ] LDX $81  ; in RIOT RAM\n\
         000A 86 [ 50 ] STX $50\n"
    );
}

#[test]
fn test_relative_branch_left_unresolved_by_default() {
    assert_eq!(render(&[0xD0, 0xFE]), "0000 D0 [ FE ] BNE FE\n");
}

#[test]
fn test_relative_branch_resolved_on_request() {
    let options = DisassemblyOptions {
        origin: 0xF000,
        resolve_branches: true,
    };
    let listing = disassemble(&[0xD0, 0xFE], options).unwrap();
    assert_eq!(listing.lines()[0].text(), "BNE $F000");
}

#[test]
fn test_truncated_tail_goes_to_leftover_block() {
    let bytes = [0xA9, 0x01, 0x8D, 0x80];
    let listing = disassemble(&bytes, DisassemblyOptions::default()).unwrap();

    assert_eq!(listing.lines().len(), 1);
    let leftover = listing.leftover().unwrap();
    assert_eq!(leftover.address, 0x0002);
    assert_eq!(leftover.bytes, vec![0x8D, 0x80]);
    assert_eq!(listing.render(), "0000 A9 [ 01 ] LDA #$01\n  0002  8D 80\n");
}

#[test]
fn test_truncated_tail_at_top_of_address_space() {
    let options = DisassemblyOptions {
        origin: 0xFFFF,
        ..Default::default()
    };
    let listing = disassemble(&[0xEA, 0xA9], options).unwrap();

    assert_eq!(listing.lines().len(), 1);
    assert_eq!(listing.leftover().unwrap().bytes, vec![0xA9]);
    assert_eq!(listing.render(), "FFFF EA [ ] NOP\n  0000  A9\n");
}

#[test]
fn test_truncated_only_instruction() {
    let listing = disassemble(&[0x4C], DisassemblyOptions::default()).unwrap();

    assert!(listing.lines().is_empty());
    assert_eq!(listing.render(), "  0000  4C\n");
}

#[test]
fn test_unknown_opcode_aborts() {
    let bytes = [0xA9, 0x00, 0xEA, 0x02, 0xEA];
    let err = disassemble(&bytes, DisassemblyOptions::default()).unwrap_err();

    match err {
        DisassembleError::UnknownOpcode { offset, opcode } => {
            assert_eq!(offset, 3);
            assert_eq!(opcode, 0x02);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_unknown_opcode_message() {
    let err = disassemble(&[0xFF], DisassemblyOptions::default()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "instruction not found for opcode 0xFF at offset 0x0000"
    );
}

#[test]
fn test_export_writes_header_then_body() {
    let bytes = [0x78, 0xD8, 0xA2, 0xFF, 0x9A];
    let listing = disassemble(&bytes, DisassemblyOptions::default()).unwrap();
    let header = Header {
        filename: "combat.a26",
        generated: "today",
    };

    let mut out = Vec::new();
    exporter::export(&mut out, &header, &listing).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with(";  Original filename: combat.a26\n;  Generated today\n"));
    assert!(text.ends_with(
        "0000 78 [ ] SEI\n\
         0001 D8 [ ] CLD\n\
         0002 A2 [ FF ] LDX #$FF\n\
         0004 9A [ ] TXS\n"
    ));
}
