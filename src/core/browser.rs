//! Course browser state machine.
//!
//! Owns the selected path and the state of the current fetch cycle.
//! Every [`CourseBrowser::select_path`] call starts a new cycle and hands
//! back a [`FetchCycle`] token; a settlement is applied only when its token
//! is still the newest one, so a slow response for an earlier selection can
//! never overwrite a later one.

use crate::core::error::{CatalogError, FetchError};
use crate::models::{BrowserView, CatalogState, Course, LearningPath};

/// Monotonic identifier of a fetch cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CycleId(u64);

impl CycleId {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Token for one fetch cycle, returned by [`CourseBrowser::select_path`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchCycle {
    id: CycleId,
    path: LearningPath,
}

impl FetchCycle {
    pub fn id(&self) -> CycleId {
        self.id
    }

    /// Path the cycle fetches for.
    pub fn path(&self) -> LearningPath {
        self.path
    }
}

/// Result of offering a response to the browser.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum Settlement {
    /// The cycle was current; state now reflects the response.
    Applied,
    /// A newer cycle started meanwhile; the response was dropped.
    Discarded,
}

#[derive(Clone, Debug)]
pub struct CourseBrowser {
    selected: LearningPath,
    state: CatalogState,
    current: CycleId,
}

impl CourseBrowser {
    /// Browser with the default path selected and no cycle started yet.
    pub fn new() -> Self {
        Self {
            selected: LearningPath::default(),
            state: CatalogState::default(),
            current: CycleId(0),
        }
    }

    pub fn selected_path(&self) -> LearningPath {
        self.selected
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    #[cfg(test)]
    pub fn current_cycle(&self) -> CycleId {
        self.current
    }

    /// Select `path` and start a fresh fetch cycle for it.
    ///
    /// Re-selecting the active path starts a new cycle too. Courses and
    /// error are cleared and the state is [`CatalogState::Loading`] before
    /// this returns, so the caller issues its request against a clean slate.
    pub fn select_path(&mut self, path: LearningPath) -> FetchCycle {
        self.selected = path;
        self.current = CycleId(self.current.0.wrapping_add(1));
        self.state = CatalogState::Loading;
        FetchCycle {
            id: self.current,
            path,
        }
    }

    pub fn is_current(&self, cycle: &FetchCycle) -> bool {
        cycle.id == self.current && cycle.path == self.selected
    }

    /// Apply the outcome of `cycle`'s request.
    ///
    /// An empty course list settles as the soft [`CatalogError::NoCourses`].
    pub fn settle(
        &mut self,
        cycle: &FetchCycle,
        result: Result<Vec<Course>, FetchError>,
    ) -> Settlement {
        if !self.is_current(cycle) {
            return Settlement::Discarded;
        }

        self.state = match result {
            Ok(courses) if courses.is_empty() => {
                CatalogState::Failed(CatalogError::NoCourses(cycle.path))
            }
            Ok(courses) => CatalogState::Loaded(courses),
            Err(err) => CatalogState::Failed(err.into()),
        };
        Settlement::Applied
    }

    /// Render contract: a pure function of the current state.
    pub fn view(&self) -> BrowserView {
        match &self.state {
            CatalogState::Loading => BrowserView::Loading,
            CatalogState::Failed(err) => BrowserView::Error {
                message: err.message(),
                soft: err.is_soft(),
            },
            CatalogState::Loaded(courses) if courses.is_empty() => BrowserView::Empty,
            CatalogState::Loaded(courses) => BrowserView::Courses {
                courses: courses.clone(),
                path: self.selected,
            },
        }
    }
}

impl Default for CourseBrowser {
    fn default() -> Self {
        Self::new()
    }
}
