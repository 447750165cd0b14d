//! Fuzz target for the disassembler.
//!
//! Feeds arbitrary byte sequences through decode and export and checks that
//! every input byte is accounted for exactly once.

#![no_main]

use a2600_disasm::{disassemble, DisassembleError, DisassemblyOptions};
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    bytes: Vec<u8>,
    origin: u16,
    resolve_branches: bool,
}

fuzz_target!(|input: FuzzInput| {
    if input.bytes.len() > 65536 {
        return;
    }

    let options = DisassemblyOptions {
        origin: input.origin,
        resolve_branches: input.resolve_branches,
    };

    let listing = match disassemble(&input.bytes, options) {
        Ok(listing) => listing,
        Err(DisassembleError::UnknownOpcode { offset, opcode }) => {
            assert_eq!(input.bytes[offset], opcode);
            return;
        }
        Err(DisassembleError::AddressOverflow { offset }) => {
            assert!(input.origin as usize + offset > 0xFFFF);
            return;
        }
        Err(e) => panic!("unexpected error: {}", e),
    };

    let mut expected = input.origin as usize;
    for line in listing.lines() {
        assert_eq!(line.address() as usize, expected);
        assert_eq!(line.operand_bytes().len(), line.descriptor().operand_count);
        expected += line.size_bytes();
    }

    let leftover = listing.leftover().map_or(0, |l| l.bytes.len());
    assert!(leftover <= 2);
    assert_eq!(expected - input.origin as usize + leftover, input.bytes.len());

    let _ = listing.render();
});
