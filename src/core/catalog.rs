//! Embedded catalog source and provenance.
//!
//! The curated catalog is baked into the binary at compile time for hermetic
//! deployment — no external files required. Consumers that want a different
//! catalog point the loader at an on-disk file instead; either way the raw
//! source text and its checksum are available for drift detection.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

/// The curated principle catalog shipped with the crate.
pub const EMBEDDED_CATALOG: &str = include_str!("../../catalog/PRINCIPLES.md");

/// Where a catalog's source text came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "path")]
pub enum CatalogOrigin {
    /// Compiled into the binary from `catalog/PRINCIPLES.md`.
    Embedded,
    /// Loaded from a file at runtime.
    File(PathBuf),
}

impl std::fmt::Display for CatalogOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogOrigin::Embedded => f.write_str("embedded"),
            CatalogOrigin::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Raw catalog text plus provenance, ready for the loader.
#[derive(Debug, Clone)]
pub struct CatalogSource {
    pub origin: CatalogOrigin,
    pub text: String,
}

impl CatalogSource {
    /// The catalog compiled into the binary.
    pub fn embedded() -> Self {
        CatalogSource {
            origin: CatalogOrigin::Embedded,
            text: EMBEDDED_CATALOG.to_string(),
        }
    }

    /// Read a catalog file from disk.
    pub fn from_file(path: &Path) -> Result<Self, crate::core::error::PreceptError> {
        let text = std::fs::read_to_string(path)?;
        Ok(CatalogSource {
            origin: CatalogOrigin::File(path.to_path_buf()),
            text,
        })
    }

    /// Hex SHA-256 of the raw source text. Identical source yields an
    /// identical checksum, so consumers can detect catalog drift across
    /// rebuilds without diffing wording.
    pub fn checksum(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.text.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}
