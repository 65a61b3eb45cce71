//! Tracing subscriber setup
//!
//! RUST_LOG wins over the configured level. Logs go to stderr so the
//! allowance table on stdout stays machine readable.

use tracing_subscriber::EnvFilter;
use tunjangan_config::LoggingSettings;

pub fn init(settings: &LoggingSettings, level_override: Option<&str>) {
    let level = level_override.unwrap_or(&settings.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if settings.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
