//! Cracker CLI: loads a table and inverts a single hash against it. Exits
//! 0 whether or not a plaintext is found; non-zero only on malformed
//! input, a missing file, or a deserialization failure.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use human_repr::HumanDuration;
use rainbow_cli::init_logging;

/// Attempts to recover the plaintext behind a hash digest using a
/// previously generated rainbow table.
#[derive(Parser)]
struct Args {
    /// The digest to crack, in hexadecimal.
    hash_hex: String,

    /// Path to a rainbow table file produced by rainbow-gen.
    table_file: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_path = match init_logging("rainbow_cracker") {
        Ok(path) => path,
        Err(e) => {
            eprintln!("[-] Unable to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(log = %log_path.display(), "logging initialized");

    println!("[+] Cracking parameters:");
    println!("    Hash to crack: {}", args.hash_hex);
    println!("    Rainbow table: {}", args.table_file.display());

    let load_start = Instant::now();
    let manager = match rainbow_core::load(&args.table_file) {
        Ok(manager) => manager,
        Err(e) => {
            eprintln!("\n[-] Error loading rainbow table: {e}");
            tracing::error!(error = %e, "failed to load table");
            return ExitCode::FAILURE;
        }
    };
    let load_elapsed = load_start.elapsed();
    println!(
        "    Table loaded in {}",
        load_elapsed.human_duration()
    );

    println!("\n[+] Rainbow table information:");
    println!("    {}", manager.config());

    println!("\n[+] Starting crack attempt...");
    let crack_start = Instant::now();
    let result = match manager.lookup(&args.hash_hex, None) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("\n[-] Error: {e}");
            tracing::error!(error = %e, "lookup failed");
            return ExitCode::FAILURE;
        }
    };
    let crack_elapsed = crack_start.elapsed();

    match result {
        Some(plaintext) => {
            println!("\n[+] Success! Password found:");
            println!("    Hash: {}", args.hash_hex);
            println!("    Password: {}", String::from_utf8_lossy(&plaintext));
            println!("    Time taken: {}", crack_elapsed.human_duration());
            tracing::info!(duration = %crack_elapsed.human_duration(), "password recovered");
        }
        None => {
            println!("\n[-] No match found");
            println!("    Time taken: {}", crack_elapsed.human_duration());
            tracing::info!(duration = %crack_elapsed.human_duration(), "no match found");
        }
    }

    ExitCode::SUCCESS
}
