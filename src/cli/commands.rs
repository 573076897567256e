//! Command implementations for the mvd-search CLI.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use std::slice;

use log::info;
use serde::de::DeserializeOwned;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::MvdConfig;
use crate::error::{MvdError, Result};
use crate::mvd::{self, Fragment};
use crate::storage::{self, WordReader};

/// Execute a CLI command.
pub fn execute_command(args: MvdArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            MvdConfig::from_json_file(path)?
        }
        None => MvdConfig::default(),
    };

    match &args.command {
        Command::Compress(compress_args) => compress(compress_args, &config, &args),
        Command::Decompress(decompress_args) => decompress(decompress_args, &config, &args),
        Command::Resolve(resolve_args) => resolve(resolve_args, &config, &args),
    }
}

/// Pack an integer array.
fn compress(args: &CompressArgs, config: &MvdConfig, cli_args: &MvdArgs) -> Result<()> {
    let result = run_compress(args, config)?;
    output_result("Array compressed", &result, cli_args)
}

/// Unpack one JSON word array or every array of a binary stream.
fn decompress(args: &DecompressArgs, config: &MvdConfig, cli_args: &MvdArgs) -> Result<()> {
    let result = run_decompress(args, config)?;
    output_result("Arrays decompressed", &result, cli_args)
}

/// Resolve a term position.
fn resolve(args: &ResolveArgs, config: &MvdConfig, cli_args: &MvdArgs) -> Result<()> {
    let result = run_resolve(args, config)?;
    output_result("Term position resolved", &result, cli_args)
}

fn run_compress(args: &CompressArgs, config: &MvdConfig) -> Result<CompressionResult> {
    let values: Vec<i32> = read_json(&args.input)?;
    let compressed = config.codec().encode(&values);

    if let Some(output) = &args.output {
        storage::write_arrays(output, slice::from_ref(&compressed))?;
        info!("Wrote {} words to {}", compressed.len(), output.display());
    }

    Ok(CompressionResult {
        values: values.len(),
        byte_width: compressed.byte_width(),
        padding: compressed.padding(),
        words: compressed.words().to_vec(),
        output: args
            .output
            .as_ref()
            .map(|path| path.to_string_lossy().to_string()),
    })
}

fn run_decompress(args: &DecompressArgs, config: &MvdConfig) -> Result<DecompressionResult> {
    let arrays = if args.binary {
        WordReader::new(open_input(&args.input)?)
            .read_all()?
            .iter()
            .map(|array| array.decode())
            .collect()
    } else {
        let words: Vec<u32> = read_json(&args.input)?;
        vec![config.codec().decode(&words)?]
    };

    Ok(DecompressionResult { arrays })
}

fn run_resolve(args: &ResolveArgs, config: &MvdConfig) -> Result<ResolutionResult> {
    let fragments: Vec<Fragment> = read_json(&args.fragments)?;
    let resolver = config.resolver();

    let position = match (args.global, args.index) {
        (Some(global), _) => resolver.resolve_at(&fragments, global)?,
        (None, Some(index)) => {
            // Without --start the term is assumed to begin at `offset` of
            // fragment `index` in the global character stream.
            let start = match args.start {
                Some(start) => start,
                None => mvd::total_len(&fragments[..index.min(fragments.len())]) + args.offset,
            };
            resolver.resolve(&fragments, index, args.offset, start)?
        }
        (None, None) => {
            return Err(MvdError::invalid_argument(
                "either --global or --index must be given",
            ));
        }
    };

    Ok(ResolutionResult {
        start: position.start(),
        versions: position.versions().iter().collect(),
        ends: position.ends().iter().copied().collect(),
    })
}

/// Open a file, or stdin for "-".
fn open_input(path: &Path) -> Result<Box<dyn Read>> {
    if path.as_os_str() == "-" {
        Ok(Box::new(io::stdin().lock()))
    } else {
        Ok(Box::new(BufReader::new(File::open(path)?)))
    }
}

/// Parse a JSON document from a file or stdin.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let reader = open_input(path)?;
    serde_json::from_reader(reader).map_err(|e| {
        MvdError::invalid_argument(format!("failed to parse {}: {e}", path.display()))
    })
}
