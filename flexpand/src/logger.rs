// flexpand/src/logger.rs
//! Logger setup for the flexpand binary.

use log::LevelFilter;

/// Initializes `env_logger`.
///
/// With `Some(level)` the level is forced; with `None` the `RUST_LOG`
/// environment variable decides, defaulting to `warn`. Repeated calls are
/// harmless.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder
        .format_timestamp(None)
        .format_target(false)
        .try_init()
        .ok();
}
