//! Filerev CLI - interactive driver for the in-memory versioning engine
//!
//! Provides:
//! - a shell over one `CommitStore` (init / commit / log / revert / verify)
//! - table and JSON renderings of the commit history
//! - scripted sessions via `--script` for non-interactive use
//!
//! The history lives in this process only; it is gone when the shell exits.

mod output;
mod shell;

use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use filerev_store::{CommitStore, DiskStore};

#[derive(Parser)]
#[command(name = "filerev")]
#[command(about = "Record and restore file states by content hash", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory tracked paths resolve against
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Read shell commands from a script file instead of stdin
    #[arg(short, long)]
    script: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure logger
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&cli.log_level)
    ).init();

    log::debug!("tracking files under {:?}", cli.root);
    let mut store = CommitStore::new(DiskStore::new(&cli.root));

    match cli.script {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("Failed to open script {:?}", path))?;
            shell::run(&mut store, BufReader::new(file), false)
        }
        None => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            shell::run(&mut store, stdin.lock(), interactive)
        }
    }
}
