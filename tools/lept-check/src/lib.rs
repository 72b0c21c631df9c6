//! Command-line checker for JSON scalar texts.
//!
//! Wraps [`lept_json::parse_value`] with file and stdin input, parallel
//! checking, and per-input reporting.

mod check;
mod config;

use std::sync::Once;

use thiserror::Error;

pub use check::{check_input, check_source, Checker, Report, Summary};
pub use config::{CheckConfig, Input};

/// Errors surfaced by the checker.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The input could not be read.
    #[error("cannot read {input}: {source}")]
    Io {
        input: String,
        #[source]
        source: std::io::Error,
    },
    /// The input was read but is not a single valid JSON scalar.
    #[error(transparent)]
    Parse(#[from] lept_json::ParseError),
    /// Bad command-line arguments.
    #[error("{0}")]
    Usage(String),
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=lept_json=trace` or
/// `RUST_LOG=lept_check=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}
