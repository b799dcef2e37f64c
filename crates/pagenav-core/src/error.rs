//! Error types for pagination.

use thiserror::Error;

/// Invalid pagination configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Page size must be at least one record.
    #[error("Page size must be greater than zero")]
    ZeroPageSize,

    /// Page numbers start at one.
    #[error("Minimum page number must be at least 1")]
    ZeroMinPage,

    /// Builder validation failed.
    #[error("Invalid configuration: {message}")]
    Invalid { message: String },
}

impl From<crate::config::PaginationConfigBuilderError> for ConfigError {
    fn from(err: crate::config::PaginationConfigBuilderError) -> Self {
        Self::Invalid {
            message: err.to_string(),
        }
    }
}

/// Why a navigation target was not accepted.
///
/// Rejections are not failures: the control simply does not react. They are
/// surfaced so hosts and tests can tell the cases apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The input did not resolve to a number.
    #[error("Target page is not a number")]
    NotANumber,

    /// The target lies past the last page.
    #[error("Page {page} is beyond the last page ({last_page})")]
    BeyondLastPage { page: i64, last_page: u64 },

    /// The target is zero or negative.
    #[error("Page {page} is not a positive page number")]
    NotPositive { page: i64 },
}
