//! Error types for the course catalog.
//!
//! - [`FetchError`] - Transport and decode failures (hard errors)
//! - [`CatalogError`] - Outcome errors of a fetch cycle, soft or hard

use thiserror::Error;

use crate::config::{FETCH_FAILED_MESSAGE, FETCH_FALLBACK_MESSAGE, NO_COURSES_PREFIX};
use crate::models::LearningPath;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Request rejected before a response arrived (offline, CORS, ...).
    /// Carries the rejection's own message, possibly empty.
    #[error("{0}")]
    Network(String),
    /// Non-2xx response; the body is not trusted to be course data
    #[error("{}", FETCH_FAILED_MESSAGE)]
    Status(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Response body is not text
    #[error("Invalid response content")]
    InvalidContent,
    /// Body could not be decoded as a course list
    #[error("{0}")]
    Decode(String),
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

/// Why a fetch cycle settled without courses to show.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Successful response with zero items.
    #[error("{}: {}", NO_COURSES_PREFIX, .0)]
    NoCourses(LearningPath),
    /// Transport or decode failure.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl CatalogError {
    /// True for the confirmed-empty result.
    pub fn is_soft(&self) -> bool {
        matches!(self, Self::NoCourses(_))
    }

    /// Message shown to the user.
    ///
    /// Falls back to [`FETCH_FALLBACK_MESSAGE`] when the underlying failure
    /// carries no text.
    pub fn message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            FETCH_FALLBACK_MESSAGE.to_string()
        } else {
            message
        }
    }
}
