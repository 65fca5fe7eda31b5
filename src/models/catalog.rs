//! Catalog view state.

use super::{Course, LearningPath};
use crate::core::error::CatalogError;

/// State of the current fetch cycle.
///
/// A single tagged value so that "loading with an error" or "loading with
/// stale courses" cannot be represented.
#[derive(Clone, Debug, PartialEq)]
pub enum CatalogState {
    /// A request for the selected path is in flight.
    Loading,
    /// The cycle settled with a soft (empty result) or hard error.
    Failed(CatalogError),
    /// The cycle settled with courses. Empty only before the first cycle.
    Loaded(Vec<Course>),
}

impl CatalogState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// User-facing error message, if the cycle failed.
    pub fn error(&self) -> Option<String> {
        match self {
            Self::Failed(err) => Some(err.message()),
            _ => None,
        }
    }

    /// Courses of the settled cycle; empty while loading or failed.
    pub fn courses(&self) -> &[Course] {
        match self {
            Self::Loaded(courses) => courses,
            _ => &[],
        }
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::Loaded(Vec::new())
    }
}

/// What the browser renders for a given state.
///
/// | state | view |
/// |-------|------|
/// | loading | [`BrowserView::Loading`] (selector muted, spinner shown) |
/// | failed | [`BrowserView::Error`] with the message verbatim |
/// | loaded, non-empty | [`BrowserView::Courses`] |
/// | loaded, empty | [`BrowserView::Empty`] |
#[derive(Clone, Debug, PartialEq)]
pub enum BrowserView {
    Loading,
    Error {
        message: String,
        /// Confirmed empty result rather than a failure.
        soft: bool,
    },
    Courses {
        courses: Vec<Course>,
        path: LearningPath,
    },
    Empty,
}
