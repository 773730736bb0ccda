use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "documenter-index")]
#[command(about = "Inspect and validate Documenter search indexes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record count and per-category tallies.
    Stats {
        /// Index file; defaults to the embedded index.
        file: Option<PathBuf>,
    },
    /// Print records, one per line.
    Dump {
        /// Index file; defaults to the embedded index.
        file: Option<PathBuf>,
        /// Restrict output to one category.
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short = 'n', long, default_value = "25")]
        limit: usize,
    },
    /// Parse an index file and check its invariants.
    Validate { file: PathBuf },
    /// Print all records at an exact location.
    Lookup {
        location: String,
        /// Index file; defaults to the embedded index.
        file: Option<PathBuf>,
    },
}
