//! Command line argument parsing for the mvd-search CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// mvd-search - term positions and compact integer arrays for multi-version documents
#[derive(Parser, Debug, Clone)]
#[command(name = "mvd-search")]
#[command(about = "Term positions and compact integer arrays for multi-version documents")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct MvdArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "MVD_SEARCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl MvdArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Pack a JSON array of integers
    Compress(CompressArgs),

    /// Unpack compressed integer arrays
    Decompress(DecompressArgs),

    /// Resolve the position of a term in a fragment sequence
    Resolve(ResolveArgs),
}

/// Arguments for compressing an integer array
#[derive(Parser, Debug, Clone)]
pub struct CompressArgs {
    /// JSON file holding an array of integers ("-" for stdin)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Write a checksummed binary stream to this file
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,
}

/// Arguments for decompressing integer arrays
#[derive(Parser, Debug, Clone)]
pub struct DecompressArgs {
    /// JSON word array, or a binary stream with --binary ("-" for stdin)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Read a binary stream written by `compress --output`
    #[arg(long)]
    pub binary: bool,
}

/// Arguments for resolving a term position
#[derive(Parser, Debug, Clone)]
pub struct ResolveArgs {
    /// JSON file holding an array of {"text", "versions"} fragments ("-" for stdin)
    #[arg(value_name = "FRAGMENTS")]
    pub fragments: PathBuf,

    /// Index of the fragment the term starts in
    #[arg(short, long, conflicts_with = "global")]
    pub index: Option<usize>,

    /// Character offset of the term within its fragment
    #[arg(short, long, default_value = "0")]
    pub offset: usize,

    /// Global offset of the term (computed from index and offset if omitted)
    #[arg(short, long, requires = "index")]
    pub start: Option<usize>,

    /// Global offset of the term; locates the fragment automatically
    #[arg(short, long)]
    pub global: Option<usize>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
