//! Subscriber setup for the binaries.
//!
//! The library only emits `tracing` events. Binaries call [`init`] once at
//! startup to print them on stderr and decide themselves how to treat a
//! failure.

use thiserror::Error;
use tracing_subscriber::filter::{EnvFilter, ParseError};
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;

/// Why the stderr subscriber could not be installed.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The filter directives do not parse.
    #[error("invalid log filter '{directives}': {source}")]
    Filter {
        /// Directives as given.
        directives: String,
        /// Parser error from `tracing-subscriber`.
        #[source]
        source: ParseError,
    },

    /// Another global subscriber is already in place.
    #[error("global tracing subscriber already installed")]
    AlreadyInstalled(#[from] TryInitError),
}

/// Filter directives in precedence order: explicit `level`, then `RUST_LOG`,
/// then `default`.
fn directives(level: Option<&str>, default: &str) -> String {
    level
        .filter(|l| !l.trim().is_empty())
        .map(str::to_owned)
        .or_else(|| std::env::var(EnvFilter::DEFAULT_ENV).ok())
        .unwrap_or_else(|| default.to_owned())
}

fn build_filter(directives: String) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(&directives).map_err(|source| LoggingError::Filter {
        directives,
        source,
    })
}

/// Install a compact stderr subscriber as the global default.
///
/// # Errors
/// [`LoggingError::Filter`] if the chosen directives are malformed, or
/// [`LoggingError::AlreadyInstalled`] if a global subscriber exists.
pub fn init(level: Option<&str>, default: &str) -> Result<(), LoggingError> {
    let filter = build_filter(directives(level, default))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()?;
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
