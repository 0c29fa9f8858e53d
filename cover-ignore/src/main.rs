// cover-ignore/src/main.rs
//! cover-ignore entry point.
//!
//! Parses the CLI, initializes logging, and runs the filter operation. Any
//! failure (configuration, spec parsing, rule compilation, file I/O) is
//! fatal and reported on stderr with a non-zero exit status.

use anyhow::Result;
use clap::Parser;

use cover_ignore::cli::Cli;
use cover_ignore::commands::filter::{run_filter, FilterOptions};
use cover_ignore::logger;

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    run_filter(&FilterOptions {
        spec_path: args.spec,
        profile_path: args.profile,
        dry_run: args.dry_run,
    })
}
