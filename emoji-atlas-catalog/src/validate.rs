//! Whole-catalog invariant checks.
//!
//! Keyword normalization is enforced by [`KeywordSet`](crate::types::KeywordSet)
//! itself; everything that spans records is checked here.

use std::collections::HashMap;
use std::fmt;

use crate::types::CatalogRecord;

/// A broken catalog invariant, with the index of the offending record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    EmptyChar { index: usize },
    DuplicateChar { index: usize, first: usize, emoji: String },
    EmptySlug { index: usize },
    DuplicateSlug { index: usize, first: usize, slug: String },
    EmptyCategory { index: usize },
    EmptyVersion { index: usize },
    OutOfOrder { index: usize },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyChar { index } => write!(f, "record {index}: empty char"),
            Self::DuplicateChar { index, first, emoji } => {
                write!(f, "record {index}: char {emoji} already used by record {first}")
            }
            Self::EmptySlug { index } => write!(f, "record {index}: empty slug"),
            Self::DuplicateSlug { index, first, slug } => {
                write!(f, "record {index}: slug '{slug}' already used by record {first}")
            }
            Self::EmptyCategory { index } => write!(f, "record {index}: empty category"),
            Self::EmptyVersion { index } => write!(f, "record {index}: empty version"),
            Self::OutOfOrder { index } => {
                write!(f, "record {index}: sorts before the previous record")
            }
        }
    }
}

/// Check every cross-record invariant. An empty result means the catalog is valid.
pub fn validate_catalog(records: &[CatalogRecord]) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut chars: HashMap<&str, usize> = HashMap::with_capacity(records.len());
    let mut slugs: HashMap<&str, usize> = HashMap::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        if record.emoji.is_empty() {
            violations.push(Violation::EmptyChar { index });
        } else if let Some(&first) = chars.get(record.emoji.as_str()) {
            violations.push(Violation::DuplicateChar {
                index,
                first,
                emoji: record.emoji.clone(),
            });
        } else {
            chars.insert(&record.emoji, index);
        }

        if record.slug.is_empty() {
            violations.push(Violation::EmptySlug { index });
        } else if let Some(&first) = slugs.get(record.slug.as_str()) {
            violations.push(Violation::DuplicateSlug {
                index,
                first,
                slug: record.slug.clone(),
            });
        } else {
            slugs.insert(&record.slug, index);
        }

        if record.category.is_empty() {
            violations.push(Violation::EmptyCategory { index });
        }
        if record.version.is_empty() {
            violations.push(Violation::EmptyVersion { index });
        }

        if index > 0 && records[index - 1].sort_key() > record.sort_key() {
            violations.push(Violation::OutOfOrder { index });
        }
    }

    violations
}
