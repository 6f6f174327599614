//! uuid2btaddr - derive Bluetooth static device addresses from UUIDs
//!
//! Usage:
//!   uuid2btaddr 6ba7b810-9dad-11d1-80b4-00c04fd430c8 ...

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use uuid2btaddr::derive::derive_address_str;

#[derive(Parser, Debug)]
#[command(name = "uuid2btaddr")]
#[command(about = "Derive Bluetooth static device addresses from 128-bit UUIDs", long_about = None)]
struct Cli {
    /// UUIDs in canonical hyphenated form (e.g. 6ba7b810-9dad-11d1-80b4-00c04fd430c8)
    uuids: Vec<String>,
}

fn run(cli: &Cli) -> ExitCode {
    let mut failed = false;
    for input in &cli.uuids {
        match derive_address_str(input) {
            Ok(addr) => println!("{} -> {}", input, addr),
            Err(e) => {
                tracing::warn!(input = %input, "Skipping argument");
                eprintln!("uuid2btaddr: {:#}", e);
                failed = true;
            }
        }
    }
    if failed {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // Usage goes to stdout with status 1 when no UUIDs are supplied
    if cli.uuids.is_empty() {
        println!("Usage: uuid2btaddr <128bit UUID>...");
        return ExitCode::from(1);
    }

    run(&cli)
}
