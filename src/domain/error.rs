//! Error types for the emoji catalog plugin.
//!
//! This module defines the centralized error type [`CatalogError`] and a type alias
//! [`Result`] used throughout the crate. Errors are implemented with `thiserror`.
//!
//! Only one error kind is ever shown to the user: a load failure. The variants
//! below keep enough detail for the trace log while callers treat every
//! fetch or decode problem the same way (see [`CatalogError::is_load_failure`]).

use thiserror::Error;

/// The main error type for catalog operations.
///
/// # Examples
///
/// ```
/// use emoji_catalog::CatalogError;
///
/// let err = CatalogError::Http { status: 404 };
/// assert!(err.is_load_failure());
/// assert_eq!(err.to_string(), "HTTP 404");
/// ```
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog request completed with a non-success status.
    ///
    /// The host also reports transport failures (DNS, refused connection,
    /// TLS) through this path, so no separate variant exists for them.
    #[error("HTTP {status}")]
    Http {
        /// Status code reported by the host.
        status: u16,
    },

    /// The response body was not a usable catalog document.
    ///
    /// Wraps the `serde_json` error so the log shows line and column.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CatalogError {
    /// Returns `true` for the errors that surface to the user as a load failure.
    #[must_use]
    pub const fn is_load_failure(&self) -> bool {
        matches!(self, Self::Http { .. } | Self::Parse(_))
    }
}

/// A specialized `Result` type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
