//! OxiHuff CLI - Huffman compression for single files
//!
//! Compresses files into `.huf` streams and restores them.

mod commands;
mod utils;

use clap::{Parser, Subcommand};
use commands::{OutputOptions, cmd_compress, cmd_extract, cmd_info, cmd_test};
use oxihuff::ExtractOptions;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oxihuff")]
#[command(author, version, about = "Pure Rust Huffman compressor")]
#[command(long_about = "
OxiHuff compresses files with a static Huffman code. Each output file carries
its own code tree, so no side information is needed to restore it.

Examples:
  oxihuff compress notes.txt
  oxihuff compress -k a.log b.log c.log
  oxihuff extract notes.txt.huf
  oxihuff extract -c notes.txt.huf > notes.txt
  oxihuff test notes.txt.huf
  oxihuff info --json notes.txt.huf
")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress files to <file>.huf
    #[command(alias = "c")]
    Compress {
        /// Files to compress
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output file (single input only)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite existing output files
        #[arg(short, long)]
        force: bool,

        /// Write to standard output
        #[arg(short = 'c', long)]
        stdout: bool,

        /// Keep input files
        #[arg(short, long)]
        keep: bool,

        /// Show progress bar
        #[arg(short = 'P', long)]
        progress: bool,
    },

    /// Decompress .huf files
    #[command(alias = "x")]
    Extract {
        /// Files to decompress
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output file (single input only)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite existing output files
        #[arg(short, long)]
        force: bool,

        /// Write to standard output
        #[arg(short = 'c', long)]
        stdout: bool,

        /// Keep input files
        #[arg(short, long)]
        keep: bool,

        /// Largest output size accepted, in bytes (default 0: no limit)
        #[arg(short = 'm', long, default_value_t = 0)]
        max_output: u64,

        /// Show progress bar
        #[arg(short = 'P', long)]
        progress: bool,
    },

    /// Test integrity of .huf files
    #[command(alias = "t")]
    Test {
        /// Files to test
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Largest output size accepted, in bytes (default 0: no limit)
        #[arg(short = 'm', long, default_value_t = 0)]
        max_output: u64,
    },

    /// Show stream information
    #[command(alias = "i")]
    Info {
        /// File to inspect
        file: PathBuf,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },
}

fn extract_options(max_output: u64) -> ExtractOptions {
    if max_output == 0 {
        ExtractOptions::UNLIMITED
    } else {
        ExtractOptions::with_max_output_len(max_output)
    }
}

fn main() {
    let cli = Cli::parse();
    utils::init_logger(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Compress {
            files,
            output,
            force,
            stdout,
            keep,
            progress,
        } => cmd_compress(
            &files,
            &OutputOptions {
                output,
                force,
                stdout,
                keep,
            },
            progress,
        ),
        Commands::Extract {
            files,
            output,
            force,
            stdout,
            keep,
            max_output,
            progress,
        } => cmd_extract(
            &files,
            &OutputOptions {
                output,
                force,
                stdout,
                keep,
            },
            &extract_options(max_output),
            progress,
        ),
        Commands::Test { files, max_output } => {
            cmd_test(&files, &extract_options(max_output), cli.verbose > 0)
        }
        Commands::Info { file, json } => cmd_info(&file, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_compress_alias() {
        let cli = Cli::try_parse_from(["oxihuff", "c", "-k", "a.txt", "b.txt"]).unwrap();
        match cli.command {
            Commands::Compress { files, keep, .. } => {
                assert_eq!(files.len(), 2);
                assert!(keep);
            }
            _ => panic!("expected compress"),
        }
    }

    #[test]
    fn test_extract_limit_zero_is_unlimited() {
        assert_eq!(extract_options(0), ExtractOptions::UNLIMITED);
        assert_eq!(extract_options(5).max_output_len, Some(5));
    }

    #[test]
    fn test_extract_defaults_to_no_limit() {
        let cli = Cli::try_parse_from(["oxihuff", "x", "a.huf"]).unwrap();
        match cli.command {
            Commands::Extract { max_output, .. } => {
                assert_eq!(extract_options(max_output), ExtractOptions::UNLIMITED);
            }
            _ => panic!("expected extract"),
        }
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["oxihuff", "-v", "-q", "info", "x.huf"]).is_err());
    }
}
