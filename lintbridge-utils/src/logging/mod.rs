//! Logging setup on the tracing ecosystem
//!
//! Embedding hosts call [`init_logging`] once at startup; the core crate only
//! emits `tracing` events and never installs a subscriber itself.

use tracing::Level;
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Subscriber configuration for embedding hosts
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub level: Level,
    pub include_location: bool,
    pub colored_output: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            include_location: false,
            colored_output: true,
        }
    }
}

/// Initialize the global subscriber with the given configuration.
///
/// The `RUST_LOG` environment variable overrides the configured level.
pub fn init_logging(config: LoggerConfig) -> crate::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(config.level.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_file(config.include_location)
        .with_line_number(config.include_location)
        .with_ansi(config.colored_output);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| crate::UtilError::Config(format!("Failed to initialize logging: {e}")))?;

    Ok(())
}

/// Initialize logging with defaults, optionally overriding the level.
pub fn basic_config(level: Option<Level>) -> crate::Result<()> {
    let config = LoggerConfig {
        level: level.unwrap_or(Level::INFO),
        ..Default::default()
    };
    init_logging(config)
}
