use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use emoji_atlas_build::{BuildReport, LogProgress, SourceMode};

use crate::CliError;
use crate::cli_types::InputArgs;
use crate::settings::{ResolvedPath, Settings, resolve_paths};

/// Build the catalog and print a summary.
pub(crate) fn run_build(
    inputs: &InputArgs,
    output: Option<&Path>,
    dry_run: bool,
    settings: &Settings,
) -> Result<(), CliError> {
    let paths = resolve_paths(inputs, output, settings);

    log::info!(
        "{}",
        "Building emoji catalog".if_supports_color(Stdout, |t| t.bold()),
    );
    log_input("Registry", &paths.registry);
    log_input("Annotations", &paths.annotations);
    log_input("Derived", &paths.derived);
    crate::log_blank();

    let report = emoji_atlas_build::run(&paths.pipeline_config(dry_run), &LogProgress)?;

    crate::log_blank();
    print_summary(&report);
    Ok(())
}

fn log_input(label: &str, resolved: &ResolvedPath) {
    log::debug!(
        "  {:<12} {} ({})",
        format!("{}:", label),
        resolved.path.display(),
        resolved.source,
    );
}

fn print_summary(report: &BuildReport) {
    let stats = &report.catalog;

    match &report.output {
        Some(path) => log::info!(
            "{} {} emojis to {}",
            "Wrote".if_supports_color(Stdout, |t| t.green()),
            stats.total,
            path.display().if_supports_color(Stdout, |t| t.cyan()),
        ),
        None => log::info!(
            "{} {} emojis (dry run, nothing written)",
            "Built".if_supports_color(Stdout, |t| t.green()),
            stats.total,
        ),
    }

    match report.mode {
        SourceMode::Registry => {
            let version = report.registry_version.as_deref().unwrap_or("unknown");
            log::info!(
                "  Source:       registry v{} ({} entries, {} annotated)",
                version,
                report.registry_entries,
                report.build.annotated,
            );
            if report.build.unmatched_annotations > 0 {
                log::info!(
                    "  Unmatched:    {} annotation entries not in the registry",
                    report.build.unmatched_annotations,
                );
            }
        }
        SourceMode::AnnotationsOnly => {
            log::warn!("No registry was read; categories were guessed from names and keywords");
            log::info!(
                "  Source:       annotations only ({} entries, {} rejected as non-emoji)",
                report.annotation_entries,
                report.build.rejected_non_emoji,
            );
        }
    }

    crate::log_blank();
    log::info!("{}", "By category".if_supports_color(Stdout, |t| t.bold()));
    for (category, count) in &stats.by_category {
        log::info!("  {:<20} {:>6}", category, count);
    }
}
