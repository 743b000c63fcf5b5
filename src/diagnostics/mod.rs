//! Internal diagnostics
//!
//! The loggers report their own activity (suppressed messages, failed
//! fan-out destinations) through `tracing`. This module installs the
//! `tracing-subscriber` that renders those events on stderr, so they never
//! mix with what the console logger prints on stdout.

pub mod config;


pub use config::{DiagnosticsConfig, LogFormat};

use std::io::IsTerminal;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global diagnostics subscriber
///
/// # Errors
/// Fails on an invalid configuration or when a global subscriber is
/// already set.
pub fn init_diagnostics(config: &DiagnosticsConfig) -> anyhow::Result<()> {
    config.validate()?;

    let filter = build_filter(config);
    let use_ansi = config.colored && std::io::stderr().is_terminal();

    let result = match config.format {
        LogFormat::Full => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_ansi(use_ansi)
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Compact => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_ansi(use_ansi)
                    .with_target(false)
                    .compact()
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_ansi(false).json().with_writer(std::io::stderr))
            .try_init(),
    };

    result.map_err(|e| anyhow::anyhow!("Failed to install diagnostics subscriber: {e}"))
}

/// Builds the event filter; `RUST_LOG` wins over the configured level
pub(crate) fn build_filter(config: &DiagnosticsConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}
