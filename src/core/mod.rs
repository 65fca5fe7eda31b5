//! Core logic of the course catalog, independent of the UI layer.
//!
//! This module provides:
//! - [`CourseBrowser`] - Path selection and fetch-cycle state machine
//! - [`CourseSource`] and [`run_cycle`] - Data source capability and cycle driver
//! - [`error`] - Fetch and catalog error types

mod browser;
pub mod error;
mod source;

pub use browser::{CourseBrowser, FetchCycle, Settlement};
pub use source::{CourseSource, run_cycle};
