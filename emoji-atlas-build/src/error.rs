use emoji_atlas_catalog::{CatalogIoError, Violation};
use emoji_atlas_sources::SourceError;
use thiserror::Error;

/// Fatal pipeline errors. Every variant is raised before the output file is
/// touched, except [`BuildError::Write`] itself.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Required input not found: {0}")]
    MissingInput(String),

    #[error("Failed to read {path}: {source}")]
    Source {
        path: String,
        #[source]
        source: SourceError,
    },

    #[error("No usable input: registry and annotations are both missing or empty")]
    NoUsableInput,

    #[error("No records survived the merge; refusing to write an empty catalog")]
    EmptyCatalog,

    #[error("Catalog failed validation with {count} problem(s), first: {first}")]
    Invalid { count: usize, first: Violation },

    #[error(transparent)]
    Write(#[from] CatalogIoError),
}

impl BuildError {
    pub fn missing_input(path: &std::path::Path) -> Self {
        Self::MissingInput(path.display().to_string())
    }

    pub fn source(path: &std::path::Path, source: SourceError) -> Self {
        Self::Source {
            path: path.display().to_string(),
            source,
        }
    }
}
