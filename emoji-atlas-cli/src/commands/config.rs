use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::cli_types::InputArgs;
use crate::settings::{ResolvedPath, Settings, resolve_paths};

/// Show the settings file and each resolved path with its source.
pub(crate) fn run_config_show(settings_file: &Path, settings: &Settings) {
    log::info!(
        "{}",
        "emoji-atlas Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if settings_file.exists() {
        log::info!(
            "  Settings file: {} {}",
            settings_file.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            settings_file.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    crate::log_blank();

    let paths = resolve_paths(&InputArgs::default(), None, settings);
    for (label, resolved) in [
        ("registry", &paths.registry),
        ("annotations", &paths.annotations),
        ("derived", &paths.derived),
        ("output", &paths.output),
    ] {
        show_path(label, resolved);
    }
}

fn show_path(label: &str, resolved: &ResolvedPath) {
    let state = if resolved.path.exists() {
        "found".if_supports_color(Stdout, |t| t.green()).to_string()
    } else {
        "missing".if_supports_color(Stdout, |t| t.dimmed()).to_string()
    };
    log::info!(
        "  {:<12} {} {}",
        format!("{}:", label),
        resolved.path.display(),
        format!("[{}, {}]", resolved.source, state).if_supports_color(Stdout, |t| t.dimmed()),
    );
}

/// Print the settings file path.
pub(crate) fn run_config_path(settings_file: &Path) {
    log::info!("{}", settings_file.display());
}
