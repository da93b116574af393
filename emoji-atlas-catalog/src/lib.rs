//! Emoji catalog data model, text normalization, and catalog JSON I/O.
//!
//! This crate defines the persisted record type and the pure helpers every
//! other stage leans on: slugs and keyword tokens, the emoji-likeness
//! heuristics used when no registry is available, and whole-catalog checks.

pub mod classify;
pub mod json;
pub mod normalize;
pub mod types;
pub mod validate;

pub use classify::{CATEGORIES, guess_category, looks_like_emoji};
pub use json::{CatalogIoError, load_catalog, to_catalog_string, write_catalog};
pub use normalize::{SlugAssigner, slugify, tokenize_keywords};
pub use types::*;
pub use validate::{Violation, validate_catalog};
