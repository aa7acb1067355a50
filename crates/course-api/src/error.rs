//! API error type

use crate::types::CourseId;
use thiserror::Error;

/// Errors returned by `CourseApi` implementations
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure (connection refused, timeout, invalid JSON, ...)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status code
    #[error("API responded with {status}: {message}")]
    Status { status: u16, message: String },

    /// The course to update or delete does not exist
    #[error("course {0} not found")]
    NotFound(CourseId),

    /// The API rejected the payload
    #[error("{0}")]
    Validation(String),

    /// The configured base URL is unusable
    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(String),
}

pub type ApiResult<T> = Result<T, ApiError>;
