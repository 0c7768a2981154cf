//! Two-stream logging setup.
//!
//! Records at INFO and below-severity (DEBUG, TRACE) go to stdout, WARN and
//! ERROR go to stderr, both through [`AdminFormatter`]. Re-invocation is a
//! no-op once the global subscriber is installed, so there is never
//! duplicate output on re-entry.

use std::io;
use tracing::{Level, Metadata};
use tracing_subscriber::{
    filter::filter_fn, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

use crate::format::AdminFormatter;

/// Logging configuration.
pub struct LoggingConfig {
    /// Env-filter directive (e.g. "info", "kafka_admin=debug")
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }
}

/// True for DEBUG/INFO/TRACE records, which belong on stdout.
fn informational(meta: &Metadata<'_>) -> bool {
    *meta.level() >= Level::INFO
}

/// Install the global subscriber. Returns false when one was already
/// installed and the call was a no-op.
pub fn init_logging(config: LoggingConfig) -> bool {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let stdout_layer = fmt::layer()
        .event_format(AdminFormatter)
        .with_writer(io::stdout)
        .with_filter(filter_fn(informational));

    let stderr_layer = fmt::layer()
        .event_format(AdminFormatter)
        .with_writer(io::stderr)
        .with_filter(filter_fn(|meta| !informational(meta)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(stderr_layer)
        .try_init()
        .is_ok()
}

/// Install the global subscriber with the filter taken from `RUST_LOG`.
pub fn init_logging_from_env() -> bool {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    init_logging(LoggingConfig::new().with_filter(filter))
}
