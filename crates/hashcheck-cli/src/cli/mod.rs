//! CLI for hashcheck. The two file modes of the tool map to the `generate`
//! and `compare` subcommands.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use hashcheck_core::config;
use std::path::{Path, PathBuf};

use commands::{run_compare, run_completions, run_generate, run_man};

/// Digests match (or were generated).
pub const EXIT_OK: i32 = 0;
/// Digests do not match.
pub const EXIT_MISMATCH: i32 = 1;
/// Any other error (e.g. writing output). Never shares a code with an outcome.
pub const EXIT_FAILURE: i32 = 4;
/// A file and an expected hash are both needed before comparing.
pub const EXIT_PENDING: i32 = 2;
/// The selected file could not be read.
pub const EXIT_READ_FAILED: i32 = 3;

/// Top-level CLI for hashcheck.
#[derive(Debug, Parser)]
#[command(name = "hashcheck")]
#[command(about = "Generate and compare SHA-256 digests of files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Compute the SHA-256 digest of a file.
    Generate {
        /// Path to the file.
        path: PathBuf,
    },

    /// Compare a file's SHA-256 digest with an expected value (exact match).
    Compare {
        /// Path to the file.
        path: PathBuf,

        /// Expected digest: 64 lowercase hex characters.
        hash: Option<String>,
    },

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the man page (roff).
    Man,
}

impl CliCommand {
    /// Parse arguments, run the command and return the process exit code.
    pub async fn run_from_args() -> Result<i32> {
        let cli = Cli::parse();
        let config_path = match config::config_path() {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::warn!("config location unavailable ({:#}); using defaults", e);
                None
            }
        };
        cli.command.run(config_path.as_deref()).await
    }

    /// Run this command with configuration from `config_path` (defaults when None).
    /// A broken config file falls back to defaults rather than failing the command.
    pub async fn run(self, config_path: Option<&Path>) -> Result<i32> {
        let load_config = || {
            let cfg = config_path
                .map(config::load_or_default_at)
                .unwrap_or_default();
            tracing::debug!("loaded config: {:?}", cfg);
            cfg
        };

        match self {
            CliCommand::Generate { path } => {
                let cfg = load_config();
                run_generate(&cfg, &path).await
            }
            CliCommand::Compare { path, hash } => {
                let cfg = load_config();
                run_compare(&cfg, &path, hash.as_deref()).await
            }
            CliCommand::Completions { shell } => {
                run_completions(shell);
                Ok(EXIT_OK)
            }
            CliCommand::Man => {
                run_man()?;
                Ok(EXIT_OK)
            }
        }
    }
}

#[cfg(test)]
mod tests;
