//! Markdown catalog loader.
//!
//! Turns the catalog document into the ordered category/principle specs the
//! registry consumes. The format mirrors the source material's heading
//! structure:
//!
//! - `# <paradigm section>` — one of the three paradigm sections
//! - `## <category title>` — a category within the current paradigm
//! - `### <principle name>` — a principle within the current category
//! - following paragraph lines — that principle's description
//!
//! Structural violations (an unknown paradigm heading, a principle outside
//! any category, prose not attached to a principle) are construction errors
//! at this boundary; the registry itself never sees raw text.

use crate::core::catalog::{CatalogOrigin, CatalogSource};
use crate::core::error::PreceptError;
use crate::core::model::{CategorySpec, Paradigm, PrincipleSpec};
use crate::core::registry::Registry;
use crate::core::slug::slugify;

/// A fully constructed registry together with its source provenance.
#[derive(Debug)]
pub struct LoadedCatalog {
    pub origin: CatalogOrigin,
    /// Hex SHA-256 of the raw source text.
    pub checksum: String,
    pub registry: Registry,
}

/// Parse catalog markdown into ordered category specs.
pub fn parse_catalog(text: &str) -> Result<Vec<CategorySpec>, PreceptError> {
    let mut specs: Vec<CategorySpec> = Vec::new();
    let mut paradigm: Option<Paradigm> = None;
    let mut description_lines: Vec<String> = Vec::new();

    // Prose binds to the most recent principle, exactly once. Prose anywhere
    // else (under a section or category heading, or after a description has
    // already been set) is a structural violation, never a silent overwrite.
    fn flush_description(
        specs: &mut [CategorySpec],
        lines: &mut Vec<String>,
    ) -> Result<(), PreceptError> {
        if lines.is_empty() {
            return Ok(());
        }
        let text = lines.join(" ");
        lines.clear();
        match specs.last_mut().and_then(|c| c.principles.last_mut()) {
            Some(principle) if principle.description.is_empty() => {
                principle.description = text;
                Ok(())
            }
            _ => Err(PreceptError::Construction(format!(
                "stray prose {:?} is not attached to a principle",
                crate::core::output::compact_line(&text, 60)
            ))),
        }
    }

    for line in text.lines() {
        let trimmed = line.trim();
        if let Some(heading) = trimmed.strip_prefix("### ") {
            flush_description(&mut specs, &mut description_lines)?;
            let category = specs.last_mut().ok_or_else(|| {
                PreceptError::Construction(format!(
                    "principle {:?} appears before any category heading",
                    heading
                ))
            })?;
            category.principles.push(PrincipleSpec {
                name: heading.trim().to_string(),
                description: String::new(),
            });
        } else if let Some(heading) = trimmed.strip_prefix("## ") {
            flush_description(&mut specs, &mut description_lines)?;
            let paradigm = paradigm.ok_or_else(|| {
                PreceptError::Construction(format!(
                    "category {:?} appears before any paradigm section",
                    heading
                ))
            })?;
            specs.push(CategorySpec {
                title: heading.trim().to_string(),
                paradigm,
                principles: Vec::new(),
            });
        } else if let Some(heading) = trimmed.strip_prefix("# ") {
            flush_description(&mut specs, &mut description_lines)?;
            paradigm = Some(paradigm_for_section(heading.trim())?);
        } else if !trimmed.is_empty() {
            description_lines.push(trimmed.to_string());
        }
    }
    flush_description(&mut specs, &mut description_lines)?;

    for category in &specs {
        for principle in &category.principles {
            if principle.description.trim().is_empty() {
                return Err(PreceptError::Construction(format!(
                    "principle {:?} in {:?} has no description",
                    principle.name, category.title
                )));
            }
        }
    }

    Ok(specs)
}

/// Map a top-level section heading to its paradigm tag.
fn paradigm_for_section(heading: &str) -> Result<Paradigm, PreceptError> {
    match slugify(heading).as_str() {
        "universal-principles" => Ok(Paradigm::Universal),
        "functional-programming-principles" => Ok(Paradigm::Functional),
        "object-oriented-principles" => Ok(Paradigm::ObjectOriented),
        _ => Err(PreceptError::Construction(format!(
            "unknown paradigm section heading: {:?}",
            heading
        ))),
    }
}

/// Parse a catalog source and build the registry from it.
pub fn load(source: CatalogSource) -> Result<LoadedCatalog, PreceptError> {
    let checksum = source.checksum();
    let specs = parse_catalog(&source.text)?;
    let registry = Registry::build(specs)?;
    Ok(LoadedCatalog {
        origin: source.origin,
        checksum,
        registry,
    })
}

/// Load the catalog compiled into the binary.
pub fn load_embedded() -> Result<LoadedCatalog, PreceptError> {
    load(CatalogSource::embedded())
}
