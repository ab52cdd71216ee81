//! Astryx hashing CLI
//!
//! A thin wrapper over `astryx-core`: hashes a single argument or piped
//! stdin and prints the hex digest followed by a newline. All digest
//! logic lives in the core crate; this binary only moves bytes.

use std::io::{self, IsTerminal, Read};

use anyhow::Context;
use clap::Parser;

#[derive(Parser)]
#[command(name = "astryx")]
#[command(version)]
#[command(about = "Astryx (GAQWH) - adaptive quantum-walk hashing CLI")]
struct Cli {
    /// Data to hash (reads from stdin if omitted)
    data: Option<String>,

    /// Output digest size in bits (multiple of 64, up to 512)
    #[arg(short, long, default_value_t = 256)]
    bits: usize,
}

fn main() {
    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let data = match cli.data {
        Some(data) => data,
        None => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                // No argument and nothing piped in: not an error, just
                // nothing to do.
                println!("astryx: no data provided; pass a string argument or pipe input");
                return Ok(());
            }
            let mut buf = String::new();
            stdin
                .lock()
                .read_to_string(&mut buf)
                .context("failed to read stdin as UTF-8 text")?;
            buf.trim().to_string()
        }
    };

    let digest = astryx_core::hash(&data, cli.bits)?;
    println!("{digest}");
    Ok(())
}
