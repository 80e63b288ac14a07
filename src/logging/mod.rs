// Logging module for structured logging using the tracing crate

use crate::config::{LogFormat, LoggingConfig};
use std::error::Error;
use tracing_subscriber::filter::{EnvFilter, ParseError};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Registry;

/// Initialize the tracing subscriber for structured logging
///
/// Events go to stderr so they never interleave with the prompts on stdout.
/// The filter comes from `RUST_LOG` when it is set, otherwise from
/// `logging.level`.
///
/// # Errors
///
/// Returns an error if the filter directives are invalid or a global
/// subscriber is already installed.
///
/// # Examples
///
/// ```
/// use watermark_manager::config::LoggingConfig;
/// use watermark_manager::logging::init_subscriber;
///
/// init_subscriber(&LoggingConfig::default()).expect("Failed to initialize logging");
/// tracing::warn!("Application started");
/// ```
pub fn init_subscriber(config: &LoggingConfig) -> Result<(), Box<dyn Error>> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(&config.level, env.as_deref())?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    match config.format {
        LogFormat::Json => Registry::default()
            .with(filter)
            .with(fmt_layer.json())
            .try_init()?,
        LogFormat::Text => Registry::default().with(filter).with(fmt_layer).try_init()?,
    }

    Ok(())
}

/// Build the event filter. A non-empty `env` value wins over `level`.
pub fn build_filter(level: &str, env: Option<&str>) -> Result<EnvFilter, ParseError> {
    match env.map(str::trim) {
        Some(directives) if !directives.is_empty() => EnvFilter::try_new(directives),
        _ => EnvFilter::try_new(level.trim()),
    }
}
