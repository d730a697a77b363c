//! Logging setup
//!
//! The library only emits `log` records; the binary decides where they go.

use log::LevelFilter;

/// Initialize the terminal logger
///
/// `debug_enabled` forces debug level. Otherwise warnings and errors are
/// shown, and `RUST_LOG` overrides either default when set.
pub fn init_logger(debug_enabled: bool) {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    // A second call (e.g. from tests) keeps the first logger
    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
}
