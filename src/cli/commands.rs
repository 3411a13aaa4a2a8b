use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::exporter::{archive_processed, encode_payload, parse_directory};
use crate::storage::config::DEFAULT_CONFIG_FILE;
use crate::storage::sink::object_name;
use crate::storage::{BucketDir, ExportConfig, PayloadSink};

#[derive(Parser)]
#[command(name = "aim-session-exporter")]
#[command(version = "0.1.0")]
#[command(about = "Export aim-trainer session logs as line-delimited JSON", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse session files and hand the payload to the configured bucket
    Export {
        /// Directory to scan for session files (defaults to the working directory)
        #[arg(long)]
        dir: Option<PathBuf>,
        /// Write the payload to this file instead of the configured bucket
        #[arg(long)]
        output: Option<PathBuf>,
        /// Destination config (defaults to exporter.json in the scan directory)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Leave parsed files in place instead of moving them to processed/
        #[arg(long)]
        keep: bool,
    },
    /// Summarize the session files a directory would export
    Stats {
        /// Directory to scan for session files (defaults to the working directory)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Export { dir, output, config, keep }) => export(dir, output, config, keep),
        Some(Commands::Stats { dir }) => show_stats(dir),
        None => {
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

fn scan_dir(dir: Option<PathBuf>) -> Result<PathBuf> {
    match dir {
        Some(dir) => Ok(dir),
        None => env::current_dir().context("Failed to resolve working directory"),
    }
}

fn export(
    dir: Option<PathBuf>,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
    keep: bool,
) -> Result<()> {
    let dir = scan_dir(dir)?;
    let (sessions, files) = parse_directory(&dir)?;
    let payload = encode_payload(&sessions)?;
    eprintln!("{} bytes buffered from {} sessions", payload.len(), sessions.len());

    // Parsed files leave the scan directory before the payload is handed
    // off, so a later hand-off failure never re-exports them.
    if !keep {
        archive_processed(&files)?;
    }

    match output {
        Some(path) => {
            fs::write(&path, &payload)
                .with_context(|| format!("Failed to write payload to {}", path.display()))?;
            println!("Payload written to {}", path.display());
        }
        None => {
            let config_path = config.unwrap_or_else(|| dir.join(DEFAULT_CONFIG_FILE));
            let config = ExportConfig::load(&config_path)?;
            let bucket = BucketDir::new(dir.join(&config.bucket_name));
            let object = object_name();
            bucket.store(&object, &payload)?;
            println!("Payload stored as object {} in bucket '{}'", object, config.bucket_name);
        }
    }

    Ok(())
}

fn show_stats(dir: Option<PathBuf>) -> Result<()> {
    let dir = scan_dir(dir)?;
    let (sessions, files) = parse_directory(&dir)?;

    let total_kills: usize = sessions.iter().map(|s| s.kills.len()).sum();
    let with_statistics = sessions.iter().filter(|s| s.statistics.is_some()).count();

    println!("Session Export Statistics");
    println!("=========================");
    println!("Session files: {}", files.len());
    println!("Total kills: {}", total_kills);
    println!("Sessions with statistics: {}", with_statistics);

    if let Some(oldest) = sessions.iter().map(|s| s.time).min() {
        println!("Oldest session: {}", oldest.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(newest) = sessions.iter().map(|s| s.time).max() {
        println!("Newest session: {}", newest.format("%Y-%m-%d %H:%M:%S"));
    }

    Ok(())
}
