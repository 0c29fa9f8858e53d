//! Logger initialization for the cover-ignore CLI.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes the global logger.
///
/// With `None`, the level comes from `RUST_LOG` (default: warn). An explicit
/// level overrides the environment entirely, which is how `--quiet` and
/// `--debug` are implemented.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level_override {
        builder.filter_level(level);
    }
    builder.format_timestamp(None);
    // try_init: tests may initialize the logger more than once.
    let _ = builder.try_init();
}
