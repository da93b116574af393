//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "emoji-atlas")]
#[command(
    about = "Build a searchable emoji catalog from the Unicode registry and CLDR annotations",
    long_about = None
)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    /// Settings file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Input file overrides shared by commands that read the sources.
#[derive(Args, Clone, Default)]
pub(crate) struct InputArgs {
    /// Unicode emoji registry (emoji-test.txt)
    #[arg(long)]
    pub registry: Option<PathBuf>,

    /// CLDR annotations document (annotations.json)
    #[arg(long)]
    pub annotations: Option<PathBuf>,

    /// Supplementary CLDR annotations (annotations-derived.json)
    #[arg(long)]
    pub derived: Option<PathBuf>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Build the catalog and write it as JSON
    Build {
        #[command(flatten)]
        inputs: InputArgs,

        /// Where to write the catalog (default: emojis.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Build and validate without writing anything
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Show statistics for an existing catalog
    Stats {
        /// Catalog to read (default: the configured output path)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Check an existing catalog against the catalog invariants
    Verify {
        /// Catalog to read (default: the configured output path)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show resolved input/output paths and where each came from
    Show,

    /// Print the settings file path
    Path,
}
