//! Text normalization: slugs and keyword tokens.
//!
//! All functions here are pure and total. Garbage in yields an empty string
//! or an empty set, never an error.

use std::collections::{HashMap, HashSet};

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::types::KeywordSet;

/// Base used by [`SlugAssigner`] when a name slugifies to nothing
/// (e.g. a name made only of emoji glyphs).
pub const FALLBACK_SLUG: &str = "emoji";

/// Convert text to a URL-safe slug.
///
/// Lowercases, decomposes and drops combining marks (`"Piñata"` → `"pinata"`),
/// spells `&` as `and`, and collapses every run of characters outside
/// `[a-z0-9]` into a single hyphen with none leading or trailing.
///
/// ```
/// use emoji_atlas_catalog::normalize::slugify;
///
/// assert_eq!(slugify("grinning face"), "grinning-face");
/// assert_eq!(slugify("Smileys & Emotion"), "smileys-and-emotion");
/// assert_eq!(slugify("flag: Côte d’Ivoire"), "flag-cote-d-ivoire");
/// assert_eq!(slugify("😀"), "");
/// ```
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    let decomposed = text
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .replace('&', " and ");

    for c in decomposed.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(c);
            pending_hyphen = false;
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Split a display name into keyword tokens.
///
/// Splits on whitespace, commas, colons, parentheses and hyphens; tokens are
/// lowercased and empty ones dropped.
///
/// ```
/// use emoji_atlas_catalog::normalize::tokenize_keywords;
///
/// let kw = tokenize_keywords("flag: Guinea-Bissau");
/// assert_eq!(kw.iter().collect::<Vec<_>>(), vec!["flag", "guinea", "bissau"]);
/// ```
pub fn tokenize_keywords(name: &str) -> KeywordSet {
    name.split(|c: char| c.is_whitespace() || matches!(c, ',' | ':' | '(' | ')' | '-'))
        .filter(|token| !token.is_empty())
        .collect()
}

/// Hands out unique slugs in call order.
///
/// The first request for a base returns the bare slug; later requests for the
/// same base get `-2`, `-3`, ... appended. Numbering depends only on call
/// order, so callers must feed names in a deterministic order.
///
/// A generated suffix can coincide with a later name's own slug (`"fire"`
/// twice, then `"fire 2"`); issued slugs are tracked so the later one moves
/// on to `fire-2-2` instead of colliding.
#[derive(Debug, Default)]
pub struct SlugAssigner {
    seen: HashMap<String, usize>,
    issued: HashSet<String>,
}

impl SlugAssigner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce a fresh slug for `name`.
    pub fn assign(&mut self, name: &str) -> String {
        let mut base = slugify(name);
        if base.is_empty() {
            base = FALLBACK_SLUG.to_string();
        }

        loop {
            let count = self.seen.entry(base.clone()).or_insert(0);
            *count += 1;
            let candidate = if *count == 1 {
                base.clone()
            } else {
                format!("{base}-{count}")
            };
            if self.issued.insert(candidate.clone()) {
                return candidate;
            }
        }
    }

    /// Number of slugs issued so far.
    pub fn len(&self) -> usize {
        self.issued.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issued.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/normalize_tests.rs"]
mod tests;
