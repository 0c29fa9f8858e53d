// cover-ignore/src/cli.rs
//! This file defines the command-line interface (CLI) for the cover-ignore
//! application, including all arguments and their environment-variable
//! fallbacks.

use clap::Parser;
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "cover-ignore",
    version = env!("CARGO_PKG_VERSION"),
    about = "Remove ignored files from a code-coverage profile",
    long_about = "cover-ignore post-processes a code-coverage profile by removing every line that matches one of the regular-expression rules in a YAML ignore specification. The profile is rewritten in place, so excluded files and paths no longer count against coverage metrics."
)]
pub struct Cli {
    /// Path to the YAML ignore specification.
    #[arg(
        long = "spec",
        short = 's',
        value_name = "FILE",
        env = "COVER_IGNORE_SPEC_PATH",
        default_value = ".coverage-ignore.yaml",
        help = "Path to the YAML ignore specification."
    )]
    pub spec: PathBuf,

    /// Path to the coverage profile to filter in place.
    #[arg(
        long = "profile",
        short = 'p',
        value_name = "FILE",
        env = "COVER_IGNORE_COVER_PROFILE_PATH",
        default_value = "cover.out",
        help = "Path to the coverage profile to filter in place."
    )]
    pub profile: PathBuf,

    /// Print the filtered profile to stdout instead of rewriting the file.
    #[arg(long = "dry-run", help = "Print the filtered profile to stdout instead of rewriting the file.")]
    pub dry_run: bool,

    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for this run)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,
}
