//! Utility modules for web and network operations.
//!
//! Provides:
//! - [`HttpCourseSource`] - Course source backed by the catalog endpoint, with
//!   a fetch timeout raced through `Promise.race`
//! - [`media_url`] - URL validation for course media

mod course_api;
mod fetch;
mod url;

pub use course_api::HttpCourseSource;
pub use url::media_url;
