//! Readers for the two Unicode data sources behind the emoji catalog.
//!
//! - [`registry`]: the line-oriented `emoji-test.txt` registry, which decides
//!   which sequences exist and supplies group, subgroup and version.
//! - [`annotations`]: CLDR annotation JSON, which supplies display names and
//!   search keywords.

pub mod annotations;
pub mod error;
pub mod registry;

pub use annotations::{
    Annotation, AnnotationShape, Annotations, parse_annotations, parse_annotations_file,
    parse_annotations_value,
};
pub use error::SourceError;
pub use registry::{
    Qualification, Registry, RegistryEntry, RegistryStats, parse_registry, parse_registry_file,
};
