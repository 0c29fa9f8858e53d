//! Filter command implementation: the end-to-end profile rewrite.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use cover_ignore_core::{filter_profile, IgnoreSpec};

/// Options for the ergonomic run_filter API
pub struct FilterOptions {
    pub spec_path: PathBuf,
    pub profile_path: PathBuf,
    pub dry_run: bool,
}

/// The main operation runner for the cover-ignore CLI.
///
/// Loads the ignore spec, reads the coverage profile, filters it, and
/// rewrites the profile in place (or prints it under `--dry-run`). Any
/// failure aborts before the profile is touched; a partially filtered
/// result is never written.
pub fn run_filter(opts: &FilterOptions) -> Result<()> {
    info!("Starting cover-ignore operation.");

    let spec = IgnoreSpec::load_from_file(&opts.spec_path)?;

    let profile_data = fs::read(&opts.profile_path).with_context(|| {
        format!(
            "Failed to read coverage profile {}",
            opts.profile_path.display()
        )
    })?;

    let retained = filter_profile(&spec, &profile_data)
        .context("Failed to apply ignore rules to coverage profile")?;

    debug!(
        "Profile filtered. Original size: {} bytes, retained lines: {}",
        profile_data.len(),
        retained.len()
    );

    // Single '\n' separator, no extra trailing separator: byte-exact join
    // of the retained lines.
    let output = retained.join("\n");

    if opts.dry_run {
        info!("Dry run: writing filtered profile to stdout.");
        io::stdout().lock().write_all(output.as_bytes())?;
    } else {
        info!(
            "Writing filtered profile back to {}",
            opts.profile_path.display()
        );
        fs::write(&opts.profile_path, output).with_context(|| {
            format!(
                "Failed to write filtered coverage profile {}",
                opts.profile_path.display()
            )
        })?;
    }

    info!("cover-ignore operation completed.");
    Ok(())
}
