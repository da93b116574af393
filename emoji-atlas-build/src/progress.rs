//! Build progress reporting.

use emoji_atlas_catalog::CatalogRecord;

/// Trait for receiving catalog build progress updates.
pub trait BuildProgress {
    /// Called when a phase starts (e.g., "Merging 3781 registry entries").
    fn on_phase(&self, message: &str);

    /// Called after each record is produced, before the final sort.
    fn on_record(&self, current: usize, total: usize, record: &CatalogRecord);

    /// Called when the build is complete.
    fn on_complete(&self, message: &str);
}

/// A no-op progress reporter that discards all updates.
pub struct SilentProgress;

impl BuildProgress for SilentProgress {
    fn on_phase(&self, _message: &str) {}
    fn on_record(&self, _current: usize, _total: usize, _record: &CatalogRecord) {}
    fn on_complete(&self, _message: &str) {}
}

/// A progress reporter that logs to the `log` crate.
pub struct LogProgress;

impl BuildProgress for LogProgress {
    fn on_phase(&self, message: &str) {
        log::info!("{}", message);
    }

    fn on_record(&self, current: usize, total: usize, record: &CatalogRecord) {
        if current.is_multiple_of(1000) || current == total {
            log::debug!(
                "  [{}/{}] {} {} ({})",
                current,
                total,
                record.emoji,
                record.slug,
                record.category
            );
        }
    }

    fn on_complete(&self, message: &str) {
        log::info!("{}", message);
    }
}
