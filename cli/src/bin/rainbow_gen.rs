//! Generator CLI: precomputes a table and writes it to disk. Thin glue
//! over `rainbow_core::TableManager` — no algorithm lives here.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use human_repr::HumanDuration;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rainbow_cli::{init_logging, AuditFile, CharsetConfig};
use rainbow_core::{Algorithm, TableConfig, TableManager};

/// Precomputes a rainbow table and writes it to disk.
#[derive(Parser)]
struct Args {
    /// Hash algorithm: sha1 or md5.
    algorithm: String,

    /// Charset name, looked up in the configuration file.
    charset_name: String,

    /// Minimum password length.
    min_length: u32,

    /// Maximum password length.
    max_length: u32,

    /// Number of hash/reduce rounds per chain.
    chain_length: u32,

    /// Number of chains to generate.
    number_of_chains: u64,

    /// Path the generated table is written to.
    output_file: PathBuf,

    /// Path to the charsets configuration file.
    #[arg(long, default_value = "config/config.toml")]
    config: PathBuf,

    /// Optional path for the plaintext audit log of (password, tail) pairs.
    #[arg(long)]
    audit: Option<PathBuf>,

    /// Overwrite `output_file` without prompting.
    #[arg(long)]
    force: bool,

    /// Seed the RNG explicitly, for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,

    /// Distribute chain construction across a rayon thread pool instead
    /// of generating sequentially on the calling thread.
    #[arg(long)]
    parallel: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_path = init_logging("rainbow_generator")?;
    tracing::info!(log = %log_path.display(), "logging initialized");

    if args.output_file.exists() && !args.force {
        print!(
            "File {} already exists. Overwrite? (y/n): ",
            args.output_file.display()
        );
        io::stdout().flush().ok();
        let mut response = String::new();
        io::stdin().read_line(&mut response)?;
        if !response.trim().eq_ignore_ascii_case("y") {
            tracing::info!("operation cancelled by user");
            return Ok(());
        }
    }

    let algorithm = Algorithm::parse(&args.algorithm).context("invalid algorithm")?;
    let charsets = CharsetConfig::load(&args.config)?;
    let charset = charsets.expand(&args.charset_name)?;

    if args.min_length > args.max_length {
        bail!("min_length must be <= max_length");
    }

    let avg_length = (args.min_length + args.max_length) as f64 / 2.0;
    let estimated_bytes =
        args.number_of_chains as f64 * (avg_length + algorithm.digest_len() as f64);
    tracing::info!(
        estimated_mb = estimated_bytes / (1024.0 * 1024.0),
        "estimated table memory usage"
    );

    tracing::info!(
        algorithm = %algorithm,
        charset = args.charset_name,
        min_length = args.min_length,
        max_length = args.max_length,
        chain_length = args.chain_length,
        number_of_chains = args.number_of_chains,
        output_file = %args.output_file.display(),
        "rainbow table generator configuration"
    );

    let config = TableConfig::new(
        algorithm,
        charset.as_bytes().to_vec(),
        args.min_length,
        args.max_length,
        args.chain_length,
        args.number_of_chains,
    )
    .context("invalid table parameters")?;

    let mut manager = TableManager::new(config);
    let seed = args.seed.unwrap_or_else(rand::random);

    let start = Instant::now();
    let report = match &args.audit {
        Some(path) => {
            let mut audit = AuditFile::create(path)?;
            let report = if args.parallel {
                manager.generate_table_parallel(seed, &mut audit, None)?
            } else {
                let mut rng = StdRng::seed_from_u64(seed);
                manager.generate_table(&mut rng, &mut audit, None)?
            };
            audit.flush()?;
            report
        }
        None if args.parallel => manager.generate_table_parallel(seed, (), None)?,
        None => {
            let mut rng = StdRng::seed_from_u64(seed);
            manager.generate_table(&mut rng, (), None)?
        }
    };
    let elapsed = start.elapsed();

    tracing::info!(
        collisions = report.collisions,
        chains = report.chains_requested,
        duration = %elapsed.human_duration(),
        "rainbow table generation finished"
    );

    rainbow_core::save(&manager, &args.output_file)?;
    tracing::info!(path = %args.output_file.display(), "rainbow table saved");

    Ok(())
}
