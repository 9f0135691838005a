use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::{ForestArtifact, ForestClassifier, ForestError};

/// Errors that can occur while loading the classifier artifact
#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("Failed to open model artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse model artifact {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid model artifact {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: ForestError,
    },
}

/// Load and validate a forest artifact from disk
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<ForestClassifier, ModelLoadError> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|source| ModelLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let artifact: ForestArtifact =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| ModelLoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let forest = ForestClassifier::from_artifact(artifact).map_err(|source| ModelLoadError::Invalid {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("Loaded forest with {} trees from {}", forest.tree_count(), path.display());
    Ok(forest)
}
