//! Data model types for the emoji catalog.
//!
//! [`CatalogRecord`] is the only persisted entity: the presentation layer
//! reads the emitted array of records directly, so field names and their
//! order here are the on-disk contract.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Category assigned when neither the registry nor the heuristic guesser
/// can place an emoji.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Emoji version assumed when a source does not state one.
pub const DEFAULT_VERSION: &str = "1.0";

// ── Catalog Record ──────────────────────────────────────────────────────────

/// A single emoji in the final catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRecord {
    /// URL-safe identifier, unique across the catalog.
    pub slug: String,
    /// The literal character sequence (ZWJ sequences, modifiers and flags included).
    #[serde(rename = "char")]
    pub emoji: String,
    /// Human-readable display name.
    pub name: String,
    /// Top-level grouping, e.g. `"Smileys & Emotion"`.
    pub category: String,
    /// Finer grouping within the category, when the registry provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subgroup: Option<String>,
    pub keywords: KeywordSet,
    /// Emoji version that introduced the character.
    pub version: String,
}

impl CatalogRecord {
    /// Ordering used for the emitted catalog: category first, then name.
    pub fn sort_key(&self) -> (&str, &str) {
        (&self.category, &self.name)
    }
}

/// Sort records into catalog order. The sort is stable, so records with an
/// identical `(category, name)` keep their processing order.
pub fn sort_records(records: &mut [CatalogRecord]) {
    records.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
}

// ── Keywords ────────────────────────────────────────────────────────────────

/// An ordered set of search keywords.
///
/// Every keyword is trimmed and lowercased on the way in; empty strings and
/// case-insensitive duplicates are rejected, so the set always satisfies the
/// catalog's keyword invariant. Serialized as a plain JSON array.
///
/// Deserialization is strict: an array holding a keyword that is empty, not
/// lowercase, or repeated is an error rather than being silently repaired.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct KeywordSet(IndexSet<String>);

impl KeywordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a keyword after normalizing it. Returns `false` if it was empty
    /// or already present.
    pub fn insert(&mut self, keyword: &str) -> bool {
        let keyword = keyword.trim().to_lowercase();
        if keyword.is_empty() {
            return false;
        }
        self.0.insert(keyword)
    }

    /// Union another set into this one, keeping this set's order first.
    pub fn union_with(&mut self, other: &KeywordSet) {
        for keyword in other.iter() {
            self.0.insert(keyword.to_string());
        }
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.0.contains(keyword.trim().to_lowercase().as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> Extend<S> for KeywordSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for keyword in iter {
            self.insert(keyword.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

/// A stored keyword list that breaks the keyword invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeywordError {
    #[error("empty keyword")]
    Empty,
    #[error("keyword is not lowercase: {0:?}")]
    NotLowercase(String),
    #[error("duplicate keyword: {0:?}")]
    Duplicate(String),
}

impl TryFrom<Vec<String>> for KeywordSet {
    type Error = KeywordError;

    fn try_from(keywords: Vec<String>) -> Result<Self, Self::Error> {
        let mut set = IndexSet::with_capacity(keywords.len());
        for keyword in keywords {
            if keyword.trim().is_empty() {
                return Err(KeywordError::Empty);
            }
            if keyword != keyword.trim().to_lowercase() {
                return Err(KeywordError::NotLowercase(keyword));
            }
            if set.contains(&keyword) {
                return Err(KeywordError::Duplicate(keyword));
            }
            set.insert(keyword);
        }
        Ok(Self(set))
    }
}

impl From<KeywordSet> for Vec<String> {
    fn from(set: KeywordSet) -> Self {
        set.0.into_iter().collect()
    }
}
