//! emoji-atlas CLI
//!
//! Builds, inspects and verifies the emoji catalog.

mod cli_types;
mod commands;
mod error;
mod logging;
mod settings;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;
use settings::Settings;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose, cli.quiet, cli.logfile.as_deref()) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let explicit = cli.config.is_some();
    let settings_file = cli.config.unwrap_or_else(settings::settings_path);
    let load_settings = || Settings::load(&settings_file, explicit);

    match cli.command {
        Commands::Build {
            inputs,
            output,
            dry_run,
        } => commands::build::run_build(&inputs, output.as_deref(), dry_run, &load_settings()?),
        Commands::Stats { catalog } => {
            commands::stats::run_stats(catalog.as_deref(), &load_settings()?)
        }
        Commands::Verify { catalog } => {
            commands::verify::run_verify(catalog.as_deref(), &load_settings()?)
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                commands::config::run_config_show(&settings_file, &load_settings()?);
                Ok(())
            }
            ConfigAction::Path => {
                commands::config::run_config_path(&settings_file);
                Ok(())
            }
        },
    }
}

/// Print an empty line through the logger so it also lands in `--logfile`.
pub(crate) fn log_blank() {
    log::info!("");
}
