//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{MvdArgs, OutputFormat};
use crate::error::Result;

/// Result structure for compression.
#[derive(Debug, Serialize, Deserialize)]
pub struct CompressionResult {
    pub values: usize,
    pub byte_width: usize,
    pub padding: usize,
    pub words: Vec<u32>,
    pub output: Option<String>,
}

/// Result structure for decompression.
#[derive(Debug, Serialize, Deserialize)]
pub struct DecompressionResult {
    pub arrays: Vec<Vec<i32>>,
}

/// Result structure for position resolution.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResolutionResult {
    pub start: usize,
    pub versions: Vec<usize>,
    pub ends: Vec<usize>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &MvdArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &MvdArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in &obj {
                println!("{key}: {}", format_value(val));
            }
        }
        other => println!("{}", format_value(&other)),
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &MvdArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for human output.
pub fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "-".to_string(),
    }
}
