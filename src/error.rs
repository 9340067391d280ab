//! Error types for the feedback service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

// == Cache Error Enum ==
/// Errors raised by the TTL cache engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Key is empty or exceeds the maximum length
    #[error("Invalid cache key: {0}")]
    InvalidKey(String),
}

// == Product Error Enum ==
/// Failure kinds surfaced by product operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProductError {
    /// A required argument was missing or blank
    #[error("Input is null or blank: {0}")]
    InvalidInput(String),

    /// No product carries the requested id
    #[error("Not found product by id [{0}]")]
    NotFound(String),

    /// More than one product carries an id that should be unique
    #[error("Found too many [{count}] results with id [{id}]")]
    Ambiguous { id: String, count: usize },

    /// Reading or writing the backing store failed
    #[error("Store error: {0}")]
    Store(String),
}

impl From<CacheError> for ProductError {
    fn from(err: CacheError) -> Self {
        ProductError::Store(err.to_string())
    }
}

// == IntoResponse Implementation ==
// Every failure kind maps to 404 with the message as body.
impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        (StatusCode::NOT_FOUND, self.to_string()).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for product operations.
pub type Result<T> = std::result::Result<T, ProductError>;
