//! `cjson` CLI — minify, validate, and measure JSON documents from the
//! command line.
//!
//! ## Usage
//!
//! ```sh
//! # Minify a document (stdin → stdout)
//! echo '{"name": "Alice", "age": 30}' | cjson minify
//!
//! # Minify from file to file
//! cjson minify -i data.json -o data.min.json
//!
//! # Re-render in pretty form instead of compact
//! cjson minify --pretty -i data.json
//!
//! # Validate a document against the codec's shape rules
//! cjson validate -i data.json
//!
//! # Show size statistics for the minified form
//! cjson stats -i data.json
//! ```
//!
//! Every subcommand routes the input through `loads`, so the codec's
//! contract applies everywhere: the root must be an object, arrays hold
//! scalars only, and objects nest one level at most.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "cjson", version, about = "Strict JSON document codec CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Canonicalize a JSON document to compact form
    Minify {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Pretty-print instead of emitting compact output
        #[arg(long)]
        pretty: bool,
    },
    /// Check that a document parses and fits the supported shape
    Validate {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Show input vs minified byte sizes
    Stats {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Minify {
            input,
            output,
            pretty,
        } => {
            let json = read_input(input.as_deref())?;
            let doc = cjson_core::loads(&json).context("Failed to parse JSON document")?;
            let compact = cjson_core::dumps(&doc).context("Failed to encode document")?;
            let rendered = if pretty {
                // Compact output is already canonical; reparse it for the
                // pretty renderer rather than growing a second encoder.
                let value: serde_json::Value = serde_json::from_str(&compact)?;
                serde_json::to_string_pretty(&value)?
            } else {
                compact
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Validate { input } => {
            let json = read_input(input.as_deref())?;
            let doc = cjson_core::loads(&json).context("Document is not valid")?;
            println!("OK: {} top-level key(s)", doc.len());
        }
        Commands::Stats { input } => {
            let json = read_input(input.as_deref())?;
            let doc = cjson_core::loads(&json).context("Failed to parse JSON document")?;
            let compact = cjson_core::dumps(&doc).context("Failed to encode document")?;
            let input_bytes = json.len();
            let compact_bytes = compact.len();
            let ratio = if input_bytes > 0 {
                (1.0 - (compact_bytes as f64 / input_bytes as f64)) * 100.0
            } else {
                0.0
            };
            println!("Input size:    {} bytes", input_bytes);
            println!("Minified size: {} bytes", compact_bytes);
            println!("Reduction:     {:.1}%", ratio);
        }
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
