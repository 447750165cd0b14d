//! Listing export
//!
//! Writes, in order: the header banner, each line (preceded by its label
//! declaration when the address is referenced more than once) and finally the
//! leftover bytes block.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::disassembler::{Leftover, Line, Listing};
use crate::DisassembleError;

/// Banner written at the top of a listing file.
///
/// The generation time is supplied by the caller so that the body of the
/// listing stays deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header<'a> {
    pub filename: &'a str,
    pub generated: &'a str,
}

impl fmt::Display for Header<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, ";  Original filename: {}", self.filename)?;
        writeln!(f, ";  Generated {}", self.generated)?;
        writeln!(f, ";  Created using {}", env!("CARGO_PKG_NAME"))
    }
}

/// `AAAA OO [ B1 B2 ] TEXT  ; COMMENT`
impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:04X} {:02X} [ ", self.address(), self.opcode())?;
        for byte in self.operand_bytes() {
            write!(f, "{:02X} ", byte)?;
        }
        write!(f, "] {}", self.text())?;
        if !self.comment().is_empty() {
            write!(f, "  ; {}", self.comment())?;
        }
        Ok(())
    }
}

/// `  AAAA  HH HH ...`
impl fmt::Display for Leftover {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "  {:04X} ", self.address)?;
        for byte in &self.bytes {
            write!(f, " {:02X}", byte)?;
        }
        Ok(())
    }
}

/// Write the listing body: labels, lines and the leftover block.
pub fn write_body<W: Write>(out: &mut W, listing: &Listing) -> io::Result<()> {
    for line in listing.lines() {
        if let Some(label) = listing.labels().declaration_for(line.address()) {
            writeln!(out, "{}:", label)?;
        }
        writeln!(out, "{}", line)?;
    }

    if let Some(leftover) = listing.leftover() {
        writeln!(out, "{}", leftover)?;
    }

    Ok(())
}

/// Write a complete listing, header first.
pub fn export<W: Write>(
    out: &mut W,
    header: &Header<'_>,
    listing: &Listing,
) -> Result<(), DisassembleError> {
    write!(out, "{}", header)?;
    write_body(out, listing)?;
    out.flush()?;
    Ok(())
}

/// Create (or truncate) the listing file at `path`.
pub fn create_output(path: &Path) -> Result<BufWriter<File>, DisassembleError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| DisassembleError::FileOpen {
            path: path.to_path_buf(),
            source,
        })
}
