//! Merge parsed sources into catalog records.
//!
//! When the registry has entries it is authoritative: it decides which
//! sequences exist, their category, subgroup, version and baseline name, and
//! annotations only add keywords (and a name where the registry has none).
//! Without a registry, annotation entries are filtered by
//! [`looks_like_emoji`] and categorized by [`guess_category`].
//!
//! Slugs are assigned in processing order (registry order, else annotation
//! order) before the final `(category, name)` sort, so collision suffixes
//! are stable for identical inputs.

use emoji_atlas_catalog::{
    CatalogRecord, DEFAULT_VERSION, KeywordSet, SlugAssigner, UNCATEGORIZED, guess_category,
    looks_like_emoji, sort_records, tokenize_keywords,
};
use emoji_atlas_sources::{Annotation, Annotations, Registry};

use crate::error::BuildError;
use crate::progress::BuildProgress;

/// Which source drove the set of records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMode {
    /// The registry listed the sequences; annotations were overlaid.
    Registry,
    /// No registry: annotations were filtered and categorized heuristically.
    AnnotationsOnly,
}

impl SourceMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Registry => "registry",
            Self::AnnotationsOnly => "annotations only",
        }
    }
}

/// Counters from a single build.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BuildStats {
    pub records: usize,
    /// Records that received annotation data.
    pub annotated: usize,
    /// Annotation entries the registry does not list.
    pub unmatched_annotations: usize,
    /// Annotation entries rejected as non-emoji (annotations-only mode).
    pub rejected_non_emoji: usize,
}

/// The finished, sorted catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub records: Vec<CatalogRecord>,
    pub mode: SourceMode,
    pub stats: BuildStats,
}

/// One-shot catalog builder.
///
/// Owns the slug table for exactly one run; [`CatalogBuilder::build`]
/// consumes it, so repeated builds in one process never share counters.
pub struct CatalogBuilder<'a> {
    registry: Option<&'a Registry>,
    annotations: Option<&'a Annotations>,
    slugs: SlugAssigner,
    stats: BuildStats,
}

/// Record fields gathered before a slug is assigned.
struct PendingRecord {
    emoji: String,
    name: String,
    category: String,
    subgroup: Option<String>,
    keywords: KeywordSet,
    version: String,
}

impl<'a> CatalogBuilder<'a> {
    pub fn new(registry: Option<&'a Registry>, annotations: Option<&'a Annotations>) -> Self {
        Self {
            registry,
            annotations,
            slugs: SlugAssigner::new(),
            stats: BuildStats::default(),
        }
    }

    /// Merge, slug, and sort.
    pub fn build(mut self, progress: &dyn BuildProgress) -> Result<Catalog, BuildError> {
        let registry = self.registry.filter(|r| !r.is_empty());
        let annotations = self.annotations.filter(|a| !a.is_empty());

        let (mode, pending) = match (registry, annotations) {
            (Some(registry), annotations) => {
                progress.on_phase(&format!("Merging {} registry entries", registry.len()));
                (SourceMode::Registry, self.from_registry(registry, annotations))
            }
            (None, Some(annotations)) => {
                progress.on_phase(&format!(
                    "No registry available; classifying {} annotation entries",
                    annotations.len()
                ));
                (SourceMode::AnnotationsOnly, self.from_annotations(annotations))
            }
            (None, None) => return Err(BuildError::NoUsableInput),
        };

        let total = pending.len();
        let mut records = Vec::with_capacity(total);
        for (i, p) in pending.into_iter().enumerate() {
            let record = CatalogRecord {
                slug: self.slugs.assign(&p.name),
                emoji: p.emoji,
                name: p.name,
                category: p.category,
                subgroup: p.subgroup,
                keywords: p.keywords,
                version: p.version,
            };
            progress.on_record(i + 1, total, &record);
            records.push(record);
        }

        if records.is_empty() {
            return Err(BuildError::EmptyCatalog);
        }

        sort_records(&mut records);
        self.stats.records = records.len();

        progress.on_complete(&format!(
            "Built {} records from {}",
            records.len(),
            mode.as_str()
        ));

        Ok(Catalog {
            records,
            mode,
            stats: self.stats,
        })
    }

    fn from_registry(
        &mut self,
        registry: &Registry,
        annotations: Option<&Annotations>,
    ) -> Vec<PendingRecord> {
        if let Some(annotations) = annotations {
            self.stats.unmatched_annotations = annotations
                .entries
                .keys()
                .filter(|emoji| registry.get(emoji).is_none())
                .count();
            if self.stats.unmatched_annotations > 0 {
                log::debug!(
                    "Dropping {} annotation entries not listed in the registry",
                    self.stats.unmatched_annotations
                );
            }
        }

        registry
            .entries
            .iter()
            .map(|(emoji, entry)| {
                let annotation = annotations.and_then(|a| a.get(emoji));
                if annotation.is_some() {
                    self.stats.annotated += 1;
                }

                let raw_name = if entry.name.trim().is_empty() {
                    annotation.and_then(|a| a.name.as_deref()).unwrap_or("")
                } else {
                    &entry.name
                };
                let name = display_name(emoji, raw_name);
                let keywords = merged_keywords(annotation, emoji, &name);

                PendingRecord {
                    emoji: emoji.clone(),
                    name,
                    category: non_empty(&entry.group).unwrap_or(UNCATEGORIZED).to_string(),
                    subgroup: non_empty(&entry.subgroup).map(str::to_string),
                    keywords,
                    version: non_empty(&entry.version)
                        .unwrap_or(DEFAULT_VERSION)
                        .to_string(),
                }
            })
            .collect()
    }

    fn from_annotations(&mut self, annotations: &Annotations) -> Vec<PendingRecord> {
        let mut pending = Vec::with_capacity(annotations.len());

        for (emoji, annotation) in &annotations.entries {
            if !looks_like_emoji(emoji) {
                log::debug!("Skipping non-emoji annotation entry {:?}", emoji);
                self.stats.rejected_non_emoji += 1;
                continue;
            }
            self.stats.annotated += 1;

            let name = display_name(emoji, annotation.name.as_deref().unwrap_or(""));
            let keywords = merged_keywords(Some(annotation), emoji, &name);
            let category = guess_category(&name, keywords.iter());

            pending.push(PendingRecord {
                emoji: emoji.clone(),
                name,
                category: category.to_string(),
                subgroup: None,
                keywords,
                version: DEFAULT_VERSION.to_string(),
            });
        }

        pending
    }
}

/// Build a catalog in one call.
pub fn build_catalog(
    registry: Option<&Registry>,
    annotations: Option<&Annotations>,
    progress: &dyn BuildProgress,
) -> Result<Catalog, BuildError> {
    CatalogBuilder::new(registry, annotations).build(progress)
}

/// Annotation keywords followed by the tokenized display name. A name that
/// fell back to the sequence itself contributes no tokens.
fn merged_keywords(annotation: Option<&Annotation>, emoji: &str, name: &str) -> KeywordSet {
    let mut keywords = annotation.map(|a| a.keywords.clone()).unwrap_or_default();
    if name != emoji {
        keywords.union_with(&tokenize_keywords(name));
    }
    keywords
}

/// Trim a name and strip a leading glyph (`"😀 grinning face"` →
/// `"grinning face"`). An empty result falls back to the sequence itself.
pub fn display_name(emoji: &str, raw: &str) -> String {
    let raw = raw.trim();
    let name = match raw.split_once(char::is_whitespace) {
        Some((first, rest)) if is_glyph_prefix(emoji, first) => rest.trim_start(),
        None if is_glyph_prefix(emoji, raw) => "",
        _ => raw,
    };

    if name.is_empty() {
        emoji.to_string()
    } else {
        name.to_string()
    }
}

fn is_glyph_prefix(emoji: &str, token: &str) -> bool {
    token == emoji || (looks_like_emoji(token) && !token.chars().any(char::is_alphanumeric))
}

fn non_empty(s: &str) -> Option<&str> {
    let s = s.trim();
    (!s.is_empty()).then_some(s)
}

#[cfg(test)]
#[path = "tests/builder_tests.rs"]
mod tests;
