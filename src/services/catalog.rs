use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use validator::Validate;

use crate::models::{Catalog, CoffeeProfile};

/// Errors that can occur while loading a catalog file
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid profile {id}: {errors}")]
    InvalidProfile {
        id: u32,
        errors: validator::ValidationErrors,
    },

    #[error("Duplicate coffee id {0}")]
    DuplicateId(u32),
}

/// Load the catalog from a JSON file, or fall back to the built-in one
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, CatalogError> {
    let Some(path) = path else {
        tracing::debug!("No catalog file configured, using built-in catalog");
        return Ok(Catalog::reference());
    };

    let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_catalog(&raw)
}

/// Parse a JSON array of profiles, preserving its order
pub fn parse_catalog(raw: &str) -> Result<Catalog, CatalogError> {
    let profiles: Vec<CoffeeProfile> = serde_json::from_str(raw)?;

    let mut seen = HashSet::with_capacity(profiles.len());
    for profile in &profiles {
        profile.validate().map_err(|errors| CatalogError::InvalidProfile {
            id: profile.id,
            errors,
        })?;
        if !seen.insert(profile.id) {
            return Err(CatalogError::DuplicateId(profile.id));
        }
    }

    if profiles.is_empty() {
        tracing::warn!("Catalog is empty; recommendations will always be empty");
    }

    Ok(Catalog::new(profiles))
}
