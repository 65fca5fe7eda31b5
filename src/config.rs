//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the page heading.
pub const APP_NAME: &str = "Pathways";

// =============================================================================
// Network Configuration
// =============================================================================

/// Course catalog endpoint (site-relative).
pub const COURSES_ENDPOINT: &str = "/api/courses";

/// Query parameter carrying the selected learning path label.
pub const PATH_QUERY_PARAM: &str = "path";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// URL schemes accepted for course videos and thumbnails.
/// Site-relative paths (`/media/...`) are accepted as well.
pub const ALLOWED_MEDIA_SCHEMES: &[&str] = &["https://", "http://"];

// =============================================================================
// Messages
// =============================================================================

/// Shown for any non-2xx response from the catalog endpoint.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch courses";

/// Soft error for a successful response with no courses; followed by `: {path}`.
pub const NO_COURSES_PREFIX: &str = "No courses available for the selected path";

/// Shown when a failure carries no message of its own.
pub const FETCH_FALLBACK_MESSAGE: &str = "An error occurred while fetching the courses.";

/// Shown when the browser is settled with no courses and no error.
pub const EMPTY_STATE_MESSAGE: &str = "No courses available for the selected path.";

/// Label of the loading indicator.
pub const LOADING_LABEL: &str = "Loading...";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
