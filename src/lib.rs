//! Precept: a registry of software-design principles
//!
//! **Precept models a curated catalog of design principles as structured,
//! queryable data.**
//!
//! The catalog groups principles into categories, each tagged with the
//! paradigm it applies to (universal, functional, object-oriented). The
//! registry holds the whole catalog in memory and exposes deterministic,
//! read-only query operations over it; presentation concerns (rendering,
//! publishing) live outside and merely read the registry's output.
//!
//! # Core properties
//!
//! - **Immutable**: the registry is built once and never mutated; rebuilding
//!   means constructing a new instance
//! - **Deterministic**: identifiers are stable slugs of display names, and
//!   every query preserves catalog order
//! - **Total where it can be**: paradigm filtering and search always have a
//!   well-defined (possibly empty) answer; only identifier lookups fail
//! - **Lock-free reads**: immutability makes concurrent queries safe without
//!   coordination
//!
//! # Architecture
//!
//! - `core::catalog` — the embedded catalog document and its provenance
//! - `core::loader` — markdown catalog → ordered category/principle specs
//! - `core::registry` — invariant-checked construction plus pure queries
//! - `cli` + [`run`] — the `precept` command-line surface over the registry

pub mod core;

mod cli;

use crate::cli::{Cli, Command, OutputFormat};
use crate::core::catalog::CatalogSource;
use crate::core::error::PreceptError;
use crate::core::loader::{self, LoadedCatalog};
use crate::core::model::{Paradigm, Principle};
use crate::core::output;
use clap::Parser;

/// Parse CLI arguments, load the catalog, and dispatch the command.
///
/// Each query arm loads the catalog itself; `version` never touches it.
pub fn run() -> Result<(), PreceptError> {
    let cli = Cli::parse();
    let catalog_path = cli.catalog;

    match cli.command {
        Command::Version => {
            // Version command - simple output for scripts/parsing
            println!("v{}", env!("CARGO_PKG_VERSION"));
        }
        Command::Categories { format } => {
            let loaded = load_catalog(catalog_path.as_deref())?;
            let registry = &loaded.registry;
            match format {
                OutputFormat::Json => print_json(&registry.categories())?,
                OutputFormat::Text => {
                    use colored::Colorize;
                    println!("Categories ({}):", registry.category_count());
                    for category in registry.categories() {
                        println!(
                            "- {}  {}  {}",
                            category.identifier.bold(),
                            format!("[{}]", category.paradigm).cyan(),
                            category.title
                        );
                    }
                }
            }
        }
        Command::Principles { category, format } => {
            let loaded = load_catalog(catalog_path.as_deref())?;
            let registry = &loaded.registry;
            let category = registry.category(&category)?;
            let principles = registry.principles_in(&category.identifier)?;
            match format {
                OutputFormat::Json => print_json(&principles)?,
                OutputFormat::Text => {
                    println!("{} ({}):", category.title, principles.len());
                    print_principle_lines(&principles);
                }
            }
        }
        Command::Show { principle, format } => {
            let loaded = load_catalog(catalog_path.as_deref())?;
            let principle = loaded.registry.principle(&principle)?;
            match format {
                OutputFormat::Json => print_json(principle)?,
                OutputFormat::Text => {
                    use colored::Colorize;
                    println!("{}", principle.name.bold());
                    println!(
                        "{}",
                        format!(
                            "id: {}  category: {}  position: {}",
                            principle.identifier, principle.category_id, principle.ordinal
                        )
                        .dimmed()
                    );
                    println!();
                    println!("{}", principle.description);
                }
            }
        }
        Command::Paradigm { paradigm, format } => {
            let loaded = load_catalog(catalog_path.as_deref())?;
            // Unknown paradigm values match nothing; filtering is total.
            let principles = match Paradigm::parse(&paradigm) {
                Some(p) => loaded.registry.by_paradigm(p),
                None => Vec::new(),
            };
            match format {
                OutputFormat::Json => print_json(&principles)?,
                OutputFormat::Text => {
                    println!("Principles for paradigm {} ({}):", paradigm, principles.len());
                    print_principle_lines(&principles);
                }
            }
        }
        Command::Search { query, format } => {
            let loaded = load_catalog(catalog_path.as_deref())?;
            let query = query.unwrap_or_default();
            let principles = loaded.registry.search(&query);
            match format {
                OutputFormat::Json => print_json(&principles)?,
                OutputFormat::Text => {
                    println!("Matches ({}):", principles.len());
                    print_principle_lines(&principles);
                }
            }
        }
        Command::Catalog { format } => {
            let loaded = load_catalog(catalog_path.as_deref())?;
            let registry = &loaded.registry;
            match format {
                OutputFormat::Json => {
                    let info = serde_json::json!({
                        "source": &loaded.origin,
                        "checksum": &loaded.checksum,
                        "categories": registry.category_count(),
                        "principles": registry.principle_count(),
                    });
                    println!("{}", serde_json::to_string_pretty(&info)?);
                }
                OutputFormat::Text => {
                    println!("Catalog source: {}", loaded.origin);
                    println!("Checksum: {}", loaded.checksum);
                    println!(
                        "Entities: {} categories, {} principles",
                        registry.category_count(),
                        registry.principle_count()
                    );
                }
            }
        }
    }

    Ok(())
}

fn load_catalog(path: Option<&std::path::Path>) -> Result<LoadedCatalog, PreceptError> {
    match path {
        Some(path) => loader::load(CatalogSource::from_file(path)?),
        None => loader::load_embedded(),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), PreceptError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_principle_lines(principles: &[&Principle]) {
    use colored::Colorize;
    for principle in principles {
        println!(
            "- {}  {}: {}",
            principle.identifier.bold(),
            principle.name,
            output::compact_line(&principle.description, 72).dimmed()
        );
    }
}
