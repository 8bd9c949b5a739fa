//! The principle registry: an immutable, build-once catalog with pure queries.
//!
//! Construction validates every catalog invariant up front; after `build`
//! returns, no operation mutates the registry and no query can fail except
//! the identifier lookups, which report `NotFound`. Ordering is insertion
//! order everywhere — lookups never reorder entities.

use crate::core::error::PreceptError;
use crate::core::model::{Category, CategorySpec, Paradigm, Principle};
use crate::core::slug::slugify;
use rustc_hash::FxHashMap;

/// Immutable in-memory catalog of categories and principles.
///
/// Shared-reference queries only; the registry is safe to share across
/// threads without locking. Rebuilding means constructing a new instance.
#[derive(Debug)]
pub struct Registry {
    categories: Vec<Category>,
    /// All principles in catalog order (categories in order, members in order).
    principles: Vec<Principle>,
    category_index: FxHashMap<String, usize>,
    principle_index: FxHashMap<String, usize>,
    /// Category identifier -> indices into `principles`, in catalog order.
    members: FxHashMap<String, Vec<usize>>,
}

impl Registry {
    /// Build a registry from loader-boundary category specs.
    ///
    /// Fails with `Construction` on any invariant violation: empty display
    /// text, a title or name that slugs to nothing, or a duplicate
    /// identifier. Query operations never raise `Construction`.
    pub fn build(specs: Vec<CategorySpec>) -> Result<Self, PreceptError> {
        let mut categories = Vec::with_capacity(specs.len());
        let mut principles = Vec::new();
        let mut category_index = FxHashMap::default();
        let mut principle_index = FxHashMap::default();
        let mut members: FxHashMap<String, Vec<usize>> = FxHashMap::default();

        for (cat_ordinal, spec) in specs.into_iter().enumerate() {
            let title = spec.title.trim().to_string();
            let identifier = slugify(&title);
            if identifier.is_empty() {
                return Err(PreceptError::Construction(format!(
                    "category title {:?} yields an empty identifier",
                    spec.title
                )));
            }
            if category_index.contains_key(&identifier) {
                return Err(PreceptError::Construction(format!(
                    "duplicate category identifier: {}",
                    identifier
                )));
            }
            category_index.insert(identifier.clone(), categories.len());

            let mut member_indices = Vec::with_capacity(spec.principles.len());
            for (ordinal, p) in spec.principles.into_iter().enumerate() {
                let name = p.name.trim().to_string();
                let pid = slugify(&name);
                if pid.is_empty() {
                    return Err(PreceptError::Construction(format!(
                        "principle name {:?} in category {} yields an empty identifier",
                        p.name, identifier
                    )));
                }
                if principle_index.contains_key(&pid) {
                    return Err(PreceptError::Construction(format!(
                        "duplicate principle identifier: {}",
                        pid
                    )));
                }
                principle_index.insert(pid.clone(), principles.len());
                member_indices.push(principles.len());
                principles.push(Principle {
                    identifier: pid,
                    name,
                    description: p.description.trim().to_string(),
                    category_id: identifier.clone(),
                    ordinal,
                });
            }
            members.insert(identifier.clone(), member_indices);

            categories.push(Category {
                identifier,
                title,
                paradigm: spec.paradigm,
                ordinal: cat_ordinal,
            });
        }

        Ok(Registry {
            categories,
            principles,
            category_index,
            principle_index,
            members,
        })
    }

    /// All categories in catalog order. Never fails.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All principles in catalog order across categories. Never fails.
    pub fn principles(&self) -> &[Principle] {
        &self.principles
    }

    /// Exact category lookup by identifier.
    pub fn category(&self, category_id: &str) -> Result<&Category, PreceptError> {
        self.category_index
            .get(category_id)
            .map(|&i| &self.categories[i])
            .ok_or_else(|| PreceptError::NotFound(format!("category: {}", category_id)))
    }

    /// Principles of one category in catalog order.
    ///
    /// An existing-but-empty category yields an empty sequence; an unknown
    /// identifier is `NotFound`.
    pub fn principles_in(&self, category_id: &str) -> Result<Vec<&Principle>, PreceptError> {
        let indices = self
            .members
            .get(category_id)
            .ok_or_else(|| PreceptError::NotFound(format!("category: {}", category_id)))?;
        Ok(indices.iter().map(|&i| &self.principles[i]).collect())
    }

    /// Exact principle lookup by identifier.
    pub fn principle(&self, principle_id: &str) -> Result<&Principle, PreceptError> {
        self.principle_index
            .get(principle_id)
            .map(|&i| &self.principles[i])
            .ok_or_else(|| PreceptError::NotFound(format!("principle: {}", principle_id)))
    }

    /// All principles whose category carries `paradigm`, in catalog order
    /// across categories. Total: every paradigm has a well-defined answer.
    pub fn by_paradigm(&self, paradigm: Paradigm) -> Vec<&Principle> {
        self.principles
            .iter()
            .filter(|p| {
                self.category_index
                    .get(&p.category_id)
                    .map(|&i| self.categories[i].paradigm == paradigm)
                    .unwrap_or(false)
            })
            .collect()
    }

    /// Case-insensitive substring search over names and descriptions, in
    /// catalog order. An empty or whitespace-only query is defined as the
    /// full catalog, so the operation is total.
    pub fn search(&self, query: &str) -> Vec<&Principle> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.principles.iter().collect();
        }
        self.principles
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn principle_count(&self) -> usize {
        self.principles.len()
    }
}
