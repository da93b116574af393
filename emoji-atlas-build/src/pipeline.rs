//! The whole run: read sources, build, validate, write.
//!
//! Inputs are read fully into memory and every fatal condition is checked
//! before the output path is touched. The write itself goes through
//! [`write_catalog`], which renames a finished temporary file into place.

use std::path::{Path, PathBuf};

use emoji_atlas_catalog::{CatalogRecord, validate_catalog, write_catalog};
use emoji_atlas_sources::{
    Annotations, Registry, SourceError, parse_annotations_file, parse_registry_file,
};

use crate::builder::{BuildStats, SourceMode, build_catalog};
use crate::error::BuildError;
use crate::progress::BuildProgress;
use crate::stats::CatalogStats;

pub const DEFAULT_REGISTRY_PATH: &str = "emoji-test.txt";
pub const DEFAULT_ANNOTATIONS_PATH: &str = "annotations.json";
pub const DEFAULT_DERIVED_PATH: &str = "annotations-derived.json";
pub const DEFAULT_OUTPUT_PATH: &str = "emojis.json";

/// An input location and whether the user asked for it explicitly.
///
/// An explicit path that does not exist is fatal; a defaulted one that does
/// not exist just means the source is unavailable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePath {
    pub path: PathBuf,
    pub explicit: bool,
}

impl SourcePath {
    pub fn explicit(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            explicit: true,
        }
    }

    pub fn fallback(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            explicit: false,
        }
    }
}

/// Resolved paths for one run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub registry: SourcePath,
    pub annotations: SourcePath,
    /// Supplementary ("derived") annotation document, merged into `annotations`.
    pub derived: SourcePath,
    pub output: PathBuf,
    /// Build and validate without writing.
    pub dry_run: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            registry: SourcePath::fallback(DEFAULT_REGISTRY_PATH),
            annotations: SourcePath::fallback(DEFAULT_ANNOTATIONS_PATH),
            derived: SourcePath::fallback(DEFAULT_DERIVED_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            dry_run: false,
        }
    }
}

/// Parsed inputs. `None` means the source was not available.
#[derive(Debug, Default)]
pub struct Sources {
    pub registry: Option<Registry>,
    pub annotations: Option<Annotations>,
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub mode: SourceMode,
    pub build: BuildStats,
    pub catalog: CatalogStats,
    /// Where the catalog was written; `None` on a dry run.
    pub output: Option<PathBuf>,
    /// `# Version:` header of the registry, when one was read.
    pub registry_version: Option<String>,
    pub registry_entries: usize,
    pub annotation_entries: usize,
}

/// Read and parse every available input.
pub fn load_sources(config: &PipelineConfig) -> Result<Sources, BuildError> {
    let registry = read_source(&config.registry, "Registry", parse_registry_file)?;
    if let Some(registry) = &registry {
        log::info!(
            "Read {} registry entries from {}",
            registry.len(),
            config.registry.path.display()
        );
    }

    let base = read_source(&config.annotations, "Annotations", parse_annotations_file)?;
    let derived = read_source(&config.derived, "Derived annotations", parse_annotations_file)?;

    let annotations = match (base, derived) {
        (Some(mut base), Some(derived)) => {
            base.merge(derived);
            Some(base)
        }
        (base, derived) => base.or(derived),
    };
    if let Some(annotations) = &annotations {
        log::info!("Read annotations for {} sequences", annotations.len());
    }

    Ok(Sources {
        registry,
        annotations,
    })
}

/// Build the catalog from already-loaded sources and validate it.
pub fn build_validated(
    sources: &Sources,
    progress: &dyn BuildProgress,
) -> Result<(Vec<CatalogRecord>, SourceMode, BuildStats), BuildError> {
    let catalog = build_catalog(
        sources.registry.as_ref(),
        sources.annotations.as_ref(),
        progress,
    )?;

    let violations = validate_catalog(&catalog.records);
    if let Some(first) = violations.first() {
        for violation in &violations {
            log::debug!("{}", violation);
        }
        return Err(BuildError::Invalid {
            count: violations.len(),
            first: first.clone(),
        });
    }

    Ok((catalog.records, catalog.mode, catalog.stats))
}

/// Run the full pipeline.
pub fn run(config: &PipelineConfig, progress: &dyn BuildProgress) -> Result<BuildReport, BuildError> {
    progress.on_phase("Loading sources");
    let sources = load_sources(config)?;

    let (records, mode, build) = build_validated(&sources, progress)?;

    let output = if config.dry_run {
        log::info!("Dry run: not writing {}", config.output.display());
        None
    } else {
        write_catalog(&config.output, &records)?;
        Some(config.output.clone())
    };

    Ok(BuildReport {
        mode,
        build,
        catalog: CatalogStats::from_records(&records),
        output,
        registry_version: sources
            .registry
            .as_ref()
            .and_then(|r| r.data_version.clone()),
        registry_entries: sources.registry.as_ref().map_or(0, Registry::len),
        annotation_entries: sources.annotations.as_ref().map_or(0, Annotations::len),
    })
}

fn read_source<T>(
    source: &SourcePath,
    label: &str,
    parse: fn(&Path) -> Result<T, SourceError>,
) -> Result<Option<T>, BuildError> {
    if !source.path.exists() {
        if source.explicit {
            return Err(BuildError::missing_input(&source.path));
        }
        log::warn!(
            "{} not found at {}; skipping",
            label,
            source.path.display()
        );
        return Ok(None);
    }

    parse(&source.path)
        .map(Some)
        .map_err(|e| BuildError::source(&source.path, e))
}
