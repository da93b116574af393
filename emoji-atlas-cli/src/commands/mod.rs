pub(crate) mod build;
pub(crate) mod config;
pub(crate) mod stats;
pub(crate) mod verify;

use std::path::{Path, PathBuf};

use crate::cli_types::InputArgs;
use crate::settings::{Settings, resolve_paths};

/// Catalog path for `stats`/`verify`: the flag, else the configured output path.
pub(crate) fn catalog_path(flag: Option<&Path>, settings: &Settings) -> PathBuf {
    resolve_paths(&InputArgs::default(), flag, settings).output.path
}
