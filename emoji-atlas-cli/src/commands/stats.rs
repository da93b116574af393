use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use emoji_atlas_build::CatalogStats;
use emoji_atlas_catalog::load_catalog;

use crate::CliError;
use crate::settings::Settings;

use super::catalog_path;

pub(crate) fn run_stats(catalog: Option<&Path>, settings: &Settings) -> Result<(), CliError> {
    let path = catalog_path(catalog, settings);

    if !path.exists() {
        log::warn!("No catalog found at {}", path.display());
        log::info!("Run 'emoji-atlas build' to create one.");
        return Ok(());
    }

    let records = load_catalog(&path)?;
    let stats = CatalogStats::from_records(&records);

    log::info!(
        "{}",
        "Emoji Catalog Statistics".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Catalog: {}", path.display());
    crate::log_blank();
    log::info!("  Emojis:          {:>6}", stats.total);
    log::info!("  Categories:      {:>6}", stats.by_category.len());
    log::info!("  With subgroup:   {:>6}", stats.with_subgroup);
    log::info!("  Keywords:        {:>6}", stats.keywords);
    log::info!("  Versions:        {:>6}", stats.versions.len());
    crate::log_blank();
    for (category, count) in &stats.by_category {
        log::info!("  {:<20} {:>6}", category, count);
    }

    Ok(())
}
