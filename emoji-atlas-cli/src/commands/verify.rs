use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use emoji_atlas_catalog::{load_catalog, validate_catalog};

use crate::CliError;
use crate::settings::Settings;

use super::catalog_path;

/// Re-check an emitted catalog against every catalog invariant.
pub(crate) fn run_verify(catalog: Option<&Path>, settings: &Settings) -> Result<(), CliError> {
    let path = catalog_path(catalog, settings);

    log::info!(
        "{}",
        format!("Verifying {}", path.display()).if_supports_color(Stdout, |t| t.bold()),
    );

    let records = load_catalog(&path)?;
    let violations = validate_catalog(&records);

    if violations.is_empty() {
        log::info!(
            "  {} {} records",
            "OK".if_supports_color(Stdout, |t| t.green()),
            records.len(),
        );
        return Ok(());
    }

    for violation in &violations {
        log::warn!("{}", violation);
    }
    Err(CliError::Invalid(violations.len()))
}
