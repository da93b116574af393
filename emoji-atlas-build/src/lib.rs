//! Build the emoji catalog from the registry and CLDR annotations.
//!
//! This crate owns the merge logic: choosing which source drives the set of
//! records, overlaying annotations, assigning slugs, sorting, validating,
//! and writing the result.

pub mod builder;
pub mod error;
pub mod pipeline;
pub mod progress;
pub mod stats;

pub use builder::{BuildStats, Catalog, CatalogBuilder, SourceMode, build_catalog, display_name};
pub use error::BuildError;
pub use pipeline::{
    BuildReport, DEFAULT_ANNOTATIONS_PATH, DEFAULT_DERIVED_PATH, DEFAULT_OUTPUT_PATH,
    DEFAULT_REGISTRY_PATH, PipelineConfig, SourcePath, Sources, build_validated, load_sources,
    run,
};
pub use progress::{BuildProgress, LogProgress, SilentProgress};
pub use stats::CatalogStats;
