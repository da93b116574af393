//! Settings file and input/output path resolution.
//!
//! Each path is resolved through a priority chain:
//!
//! 1. Command-line flag
//! 2. Environment variable (`EMOJI_ATLAS_*`)
//! 3. `settings.toml` (`[inputs]` / `[output]`)
//! 4. Built-in default in the working directory
//!
//! Anything other than the built-in default counts as an explicit request,
//! so a missing explicit input is an error rather than a skipped source.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use emoji_atlas_build::{
    DEFAULT_ANNOTATIONS_PATH, DEFAULT_DERIVED_PATH, DEFAULT_OUTPUT_PATH, DEFAULT_REGISTRY_PATH,
    PipelineConfig, SourcePath,
};
use serde::Deserialize;

use crate::CliError;
use crate::cli_types::InputArgs;

pub(crate) const ENV_REGISTRY: &str = "EMOJI_ATLAS_REGISTRY";
pub(crate) const ENV_ANNOTATIONS: &str = "EMOJI_ATLAS_ANNOTATIONS";
pub(crate) const ENV_DERIVED: &str = "EMOJI_ATLAS_DERIVED";
pub(crate) const ENV_OUTPUT: &str = "EMOJI_ATLAS_OUTPUT";

/// Default settings location: `<config dir>/emoji-atlas/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("emoji-atlas").join("settings.toml")
}

/// Contents of `settings.toml`. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub inputs: InputSettings,
    pub output: OutputSettings,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct InputSettings {
    pub registry: Option<PathBuf>,
    pub annotations: Option<PathBuf>,
    pub derived: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct OutputSettings {
    pub path: Option<PathBuf>,
}

impl Settings {
    pub(crate) fn parse(text: &str) -> Result<Self, CliError> {
        toml::from_str(text).map_err(|e| CliError::config(e.to_string()))
    }

    /// Load settings from `path`.
    ///
    /// A missing file at the default location yields empty settings; a
    /// missing file the user named with `--config` is an error.
    pub(crate) fn load(path: &Path, explicit: bool) -> Result<Self, CliError> {
        if !path.exists() {
            if explicit {
                return Err(CliError::config(format!(
                    "settings file not found: {}",
                    path.display()
                )));
            }
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
            .map_err(|e| CliError::config(format!("{}: {}", path.display(), e)))
    }
}

/// Where a resolved path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PathSource {
    /// Given on the command line.
    Flag,
    /// Read from an environment variable.
    EnvVar(&'static str),
    /// Read from the settings file.
    ConfigFile,
    /// Built-in default.
    Default,
}

impl fmt::Display for PathSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag => write!(f, "command line"),
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResolvedPath {
    pub path: PathBuf,
    pub source: PathSource,
}

impl ResolvedPath {
    pub(crate) fn is_explicit(&self) -> bool {
        self.source != PathSource::Default
    }

    fn to_source_path(&self) -> SourcePath {
        SourcePath {
            path: self.path.clone(),
            explicit: self.is_explicit(),
        }
    }
}

/// All four paths after resolution.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedPaths {
    pub registry: ResolvedPath,
    pub annotations: ResolvedPath,
    pub derived: ResolvedPath,
    pub output: ResolvedPath,
}

impl ResolvedPaths {
    pub(crate) fn pipeline_config(&self, dry_run: bool) -> PipelineConfig {
        PipelineConfig {
            registry: self.registry.to_source_path(),
            annotations: self.annotations.to_source_path(),
            derived: self.derived.to_source_path(),
            output: self.output.path.clone(),
            dry_run,
        }
    }
}

/// Resolve every path against the real process environment.
pub(crate) fn resolve_paths(
    inputs: &InputArgs,
    output: Option<&Path>,
    settings: &Settings,
) -> ResolvedPaths {
    resolve_paths_with(inputs, output, settings, |var| std::env::var_os(var))
}

/// Resolve every path, reading environment variables through `env`.
pub(crate) fn resolve_paths_with<F>(
    inputs: &InputArgs,
    output: Option<&Path>,
    settings: &Settings,
    env: F,
) -> ResolvedPaths
where
    F: Fn(&str) -> Option<OsString>,
{
    ResolvedPaths {
        registry: resolve(
            inputs.registry.as_deref(),
            ENV_REGISTRY,
            settings.inputs.registry.as_deref(),
            DEFAULT_REGISTRY_PATH,
            &env,
        ),
        annotations: resolve(
            inputs.annotations.as_deref(),
            ENV_ANNOTATIONS,
            settings.inputs.annotations.as_deref(),
            DEFAULT_ANNOTATIONS_PATH,
            &env,
        ),
        derived: resolve(
            inputs.derived.as_deref(),
            ENV_DERIVED,
            settings.inputs.derived.as_deref(),
            DEFAULT_DERIVED_PATH,
            &env,
        ),
        output: resolve(
            output,
            ENV_OUTPUT,
            settings.output.path.as_deref(),
            DEFAULT_OUTPUT_PATH,
            &env,
        ),
    }
}

fn resolve<F>(
    flag: Option<&Path>,
    var: &'static str,
    setting: Option<&Path>,
    default: &str,
    env: &F,
) -> ResolvedPath
where
    F: Fn(&str) -> Option<OsString>,
{
    if let Some(path) = flag {
        return ResolvedPath {
            path: path.to_path_buf(),
            source: PathSource::Flag,
        };
    }
    if let Some(value) = env(var).filter(|v| !v.is_empty()) {
        return ResolvedPath {
            path: PathBuf::from(value),
            source: PathSource::EnvVar(var),
        };
    }
    if let Some(path) = setting.filter(|p| !p.as_os_str().is_empty()) {
        return ResolvedPath {
            path: path.to_path_buf(),
            source: PathSource::ConfigFile,
        };
    }
    ResolvedPath {
        path: PathBuf::from(default),
        source: PathSource::Default,
    }
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
