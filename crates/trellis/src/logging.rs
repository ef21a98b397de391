//! Structured logging setup.
//!
//! Trellis emits `tracing` events throughout: structural changes at `debug`,
//! per-pane placement at `trace`, and declined inserts at `warn`. Embedders
//! that already install a subscriber need nothing from this module.

use std::io;

use tracing_subscriber::EnvFilter;

use crate::{Error, Result};

/// Environment variable holding the filter directive, e.g.
/// `TRELLIS_LOG=trellis=debug`.
pub const LOG_ENV: &str = "TRELLIS_LOG";

/// Build the filter from [`LOG_ENV`], falling back to `default_directive`.
pub fn filter(default_directive: &str) -> Result<EnvFilter> {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_directive))
        .map_err(|e| Error::Logging(e.to_string()))
}

/// Install a global compact formatter writing to stderr. Fails if a global
/// subscriber is already set or the directive is malformed.
pub fn init(default_directive: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(default_directive)?)
        .with_writer(io::stderr)
        .compact()
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}
