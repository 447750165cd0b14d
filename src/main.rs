//! Command-line front end: read a cartridge image, write its listing.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use a2600_disasm::disassembler::{exporter, read_image};
use a2600_disasm::{disassemble, DisassemblyOptions, Header};

#[derive(Debug, Parser)]
#[command(version, about = "Disassemble an Atari 2600 cartridge image")]
struct Cli {
    /// Cartridge image to disassemble
    input: PathBuf,

    /// Listing file to write (stdout when omitted)
    output: Option<PathBuf>,

    /// Address of the first byte, in hex (e.g. F000)
    #[arg(long, value_parser = parse_hex_u16, default_value = "0")]
    origin: u16,

    /// Show relative branch targets as absolute addresses
    #[arg(long)]
    resolve_branches: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_hex_u16(s: &str) -> Result<u16, String> {
    let digits = s.trim_start_matches('$').trim_start_matches("0x");
    u16::from_str_radix(digits, 16).map_err(|e| format!("invalid hex address '{}': {}", s, e))
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let bytes = read_image(&cli.input)?;
    info!(path = %cli.input.display(), size = bytes.len(), "loaded image");

    let options = DisassemblyOptions {
        origin: cli.origin,
        resolve_branches: cli.resolve_branches,
    };
    let listing = disassemble(&bytes, options)
        .with_context(|| format!("failed to disassemble {}", cli.input.display()))?;

    let generated = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| format!("{} (seconds since Unix epoch)", d.as_secs()))
        .unwrap_or_else(|_| "at an unknown time".to_string());
    let filename = cli.input.display().to_string();
    let header = Header {
        filename: &filename,
        generated: &generated,
    };

    match &cli.output {
        Some(path) => {
            let mut out = exporter::create_output(path)?;
            exporter::export(&mut out, &header, &listing)?;
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            exporter::export(&mut out, &header, &listing)?;
            out.flush()?;
        }
    }

    Ok(())
}
