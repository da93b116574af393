//! Summary counts over a finished catalog.

use std::collections::{BTreeMap, BTreeSet};

use emoji_atlas_catalog::CatalogRecord;

/// Counts shown after a build and by `emoji-atlas stats`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogStats {
    pub total: usize,
    /// Records per category, ordered by category name.
    pub by_category: BTreeMap<String, usize>,
    pub with_subgroup: usize,
    /// Distinct `version` values.
    pub versions: BTreeSet<String>,
    pub keywords: usize,
}

impl CatalogStats {
    pub fn from_records(records: &[CatalogRecord]) -> Self {
        let mut stats = Self {
            total: records.len(),
            ..Self::default()
        };

        for record in records {
            *stats.by_category.entry(record.category.clone()).or_insert(0) += 1;
            if record.subgroup.is_some() {
                stats.with_subgroup += 1;
            }
            stats.versions.insert(record.version.clone());
            stats.keywords += record.keywords.len();
        }

        stats
    }

    pub fn category_count(&self, category: &str) -> usize {
        self.by_category.get(category).copied().unwrap_or(0)
    }
}
