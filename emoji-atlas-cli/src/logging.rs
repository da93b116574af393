//! Terminal/log-file output setup.
//!
//! All user-facing output goes through the `log` macros. Info lines are
//! printed bare; warnings and errors get a coloured prefix. `--verbose`
//! switches to debug level with timestamps, `--quiet` shows only warnings
//! and errors, and `RUST_LOG` overrides both.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

pub(crate) fn init(verbose: bool, quiet: bool, logfile: Option<&Path>) -> Result<(), CliError> {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let file = match logfile {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            Some(Mutex::new(File::create(path)?))
        }
        None => None,
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stdout)
        .format(move |buf, record| {
            let message = format_message(record.level(), &record.args().to_string());
            let line = if verbose {
                format!("{} {}", buf.timestamp_millis(), message)
            } else {
                message
            };

            if let Some(Ok(mut file)) = file.as_ref().map(|f| f.lock()) {
                let plain = strip_ansi_escapes::strip(line.as_bytes());
                let _ = file.write_all(&plain).and_then(|()| file.write_all(b"\n"));
            }

            writeln!(buf, "{}", line)
        });

    builder
        .try_init()
        .map_err(|e| CliError::config(format!("failed to initialize logging: {}", e)))
}

fn format_message(level: Level, message: &str) -> String {
    match level {
        Level::Error => format!(
            "{} {}",
            "error:".if_supports_color(Stdout, |t| t.red()),
            message
        ),
        Level::Warn => format!(
            "{} {}",
            "warning:".if_supports_color(Stdout, |t| t.yellow()),
            message
        ),
        Level::Info => message.to_string(),
        Level::Debug | Level::Trace => format!(
            "{}",
            message.if_supports_color(Stdout, |t| t.dimmed())
        ),
    }
}
