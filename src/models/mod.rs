//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Course`] - Catalog record as served by the endpoint
//! - [`LearningPath`] - The fixed set of selectable tracks
//! - [`CatalogState`], [`BrowserView`] - Fetch-cycle state and its render contract

mod catalog;
mod course;
mod path;

pub use catalog::{BrowserView, CatalogState};
pub use course::Course;
pub use path::LearningPath;
