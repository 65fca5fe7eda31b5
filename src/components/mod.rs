//! UI components built with Leptos.
//!
//! - [`CatalogPage`] - Path selection, fetch-cycle status and course list
//! - [`PathSelector`] - Learning path carousel
//! - [`CourseList`] - Course cards for the active path
//! - [`icons`] - Centralized icon definitions (change theme here)

mod catalog;
mod course_list;
pub mod icons;
mod path_selector;

pub use catalog::CatalogPage;
pub use course_list::CourseList;
pub use path_selector::PathSelector;
