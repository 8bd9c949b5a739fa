//! CLI struct definitions for the precept command-line interface.
//!
//! All clap-derived types live here. Dispatch logic lives in `lib.rs`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "precept",
    version = env!("CARGO_PKG_VERSION"),
    about = "Deterministic registry of software-design principles: list, look up, filter by paradigm, and search a curated catalog.",
    disable_version_flag = true
)]
pub(crate) struct Cli {
    /// Load the catalog from a markdown file instead of the embedded one.
    #[clap(long, global = true)]
    pub catalog: Option<PathBuf>,
    #[clap(subcommand)]
    pub command: Command,
}

/// Output format selector shared by every query command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON records.
    Json,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// List all categories in catalog order.
    Categories {
        #[clap(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// List the principles of one category in catalog order.
    Principles {
        /// Category identifier (see `precept categories`).
        #[clap(long, short)]
        category: String,
        #[clap(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Show a single principle in full.
    Show {
        /// Principle identifier, e.g. `separation-of-concerns`.
        #[clap(value_parser)]
        principle: String,
        #[clap(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// List all principles of one paradigm, in catalog order across categories.
    Paradigm {
        /// Paradigm tag: universal, functional, or object-oriented.
        /// An unknown value matches nothing rather than failing.
        #[clap(value_parser)]
        paradigm: String,
        #[clap(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Case-insensitive substring search over names and descriptions.
    Search {
        /// Query text; omit it to list the full catalog.
        #[clap(value_parser)]
        query: Option<String>,
        #[clap(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Show catalog provenance: source, checksum, and entity counts.
    Catalog {
        #[clap(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Print the precept version.
    Version,
}
