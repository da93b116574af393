use emoji_atlas_build::BuildError;
use emoji_atlas_catalog::CatalogIoError;
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Catalog build failed
    #[error("Build failed: {0}")]
    Build(#[from] BuildError),

    /// Reading an existing catalog failed
    #[error("{0}")]
    Catalog(#[from] CatalogIoError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// An existing catalog broke one or more invariants
    #[error("Catalog has {0} problem(s)")]
    Invalid(usize),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
