//! Media URL validation.
//!
//! Course records come from the network; only http(s) URLs and site-relative
//! paths are rendered as links or images.

use thiserror::Error;

use crate::config::ALLOWED_MEDIA_SCHEMES;

/// Result of URL validation
#[derive(Debug, Clone, PartialEq)]
pub enum UrlValidation {
    /// URL is safe to render
    Valid(String),
    /// URL is invalid or unsafe
    Invalid(UrlValidationError),
}

/// Errors that can occur during URL validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UrlValidationError {
    #[error("URL is empty")]
    Empty,
    #[error("URL must start with http://, https:// or /")]
    InvalidProtocol,
    #[error("URL has no host")]
    NoHost,
}

/// Validate a course video or thumbnail URL.
///
/// Checks:
/// 1. URL is not empty
/// 2. URL is site-relative (`/x`, not `//x`) or uses an allowed scheme
/// 3. Absolute URLs have a host
pub fn validate_media_url(url: &str) -> UrlValidation {
    let url = url.trim();

    if url.is_empty() {
        return UrlValidation::Invalid(UrlValidationError::Empty);
    }

    if url.starts_with('/') && !url.starts_with("//") {
        return UrlValidation::Valid(url.to_string());
    }

    let url_lower = url.to_lowercase();
    let Some(scheme) = ALLOWED_MEDIA_SCHEMES
        .iter()
        .find(|scheme| url_lower.starts_with(**scheme))
    else {
        return UrlValidation::Invalid(UrlValidationError::InvalidProtocol);
    };

    if extract_host(&url[scheme.len()..]).is_none() {
        return UrlValidation::Invalid(UrlValidationError::NoHost);
    }

    UrlValidation::Valid(url.to_string())
}

/// Validated URL, or `None` when it must not be rendered.
pub fn media_url(url: &str) -> Option<String> {
    match validate_media_url(url) {
        UrlValidation::Valid(url) => Some(url),
        UrlValidation::Invalid(_) => None,
    }
}

/// Extract host from the part of a URL after its scheme
fn extract_host(without_scheme: &str) -> Option<String> {
    // Host part ends at the first /, ? or #
    let host_part = without_scheme.split(['/', '?', '#']).next()?;

    // Drop userinfo and port
    let host_part = host_part.rsplit('@').next()?;
    let host = host_part.split(':').next()?;

    if host.is_empty() {
        return None;
    }

    Some(host.to_lowercase())
}
