//! Framework error type.
//!
//! Sub-crates define their own error enums (`GridError`, `BehaviorError`,
//! `OutputError`, …) and either convert into `SarError` via `From` impls or
//! wrap it as one variant.  Both patterns are acceptable; prefer whichever
//! keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `sar-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum SarError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `sar-*` crates.
pub type SarResult<T> = Result<T, SarError>;
