//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// The error type for `rw-core`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    /// A distribution or model parameter is out of its valid domain.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `rw-core`.
pub type CoreResult<T> = Result<T, CoreError>;
