//! Course data source capability and the fetch-cycle driver.

use crate::core::browser::{FetchCycle, Settlement};
use crate::core::error::FetchError;
use crate::models::{Course, LearningPath};

/// Anything that can produce the course list for a learning path.
///
/// The browser runs on a single-threaded event loop, so implementations
/// need not be `Send`.
#[allow(async_fn_in_trait)]
pub trait CourseSource {
    async fn fetch_courses(&self, path: LearningPath) -> Result<Vec<Course>, FetchError>;
}

/// Drive one fetch cycle: request the cycle's path from `source`, then hand
/// the outcome to `settle`.
///
/// The request is the only suspension point. `settle` is expected to forward
/// to [`CourseBrowser::settle`](crate::core::CourseBrowser::settle), which
/// drops the outcome if a newer cycle has started.
pub async fn run_cycle<S, F>(source: &S, cycle: FetchCycle, settle: F) -> Settlement
where
    S: CourseSource,
    F: FnOnce(&FetchCycle, Result<Vec<Course>, FetchError>) -> Settlement,
{
    let result = source.fetch_courses(cycle.path()).await;
    settle(&cycle, result)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use tokio::sync::oneshot;

    use super::*;
    use crate::core::CourseBrowser;
    use crate::core::browser::tests::course;

    type Reply = Result<Vec<Course>, FetchError>;

    /// Answers every request with the same reply.
    struct FixedSource(Reply);

    impl CourseSource for FixedSource {
        async fn fetch_courses(&self, _path: LearningPath) -> Reply {
            self.0.clone()
        }
    }

    /// Answers each path once, when the test sends the reply.
    struct ScriptedSource {
        pending: RefCell<HashMap<LearningPath, oneshot::Receiver<Reply>>>,
    }

    impl ScriptedSource {
        fn new() -> Self {
            Self {
                pending: RefCell::new(HashMap::new()),
            }
        }

        fn expect(&self, path: LearningPath) -> oneshot::Sender<Reply> {
            let (tx, rx) = oneshot::channel();
            self.pending.borrow_mut().insert(path, rx);
            tx
        }
    }

    impl CourseSource for ScriptedSource {
        async fn fetch_courses(&self, path: LearningPath) -> Reply {
            let rx = self.pending.borrow_mut().remove(&path);
            match rx {
                Some(rx) => rx
                    .await
                    .unwrap_or_else(|_| Err(FetchError::Network("reply dropped".to_string()))),
                None => Err(FetchError::Network(format!("unexpected request: {}", path))),
            }
        }
    }

    async fn select_and_run<S: CourseSource>(
        browser: &RefCell<CourseBrowser>,
        source: &S,
        path: LearningPath,
    ) -> Settlement {
        let cycle = browser.borrow_mut().select_path(path);
        assert!(browser.borrow().state().is_loading());
        run_cycle(source, cycle, |cycle, result| {
            browser.borrow_mut().settle(cycle, result)
        })
        .await
    }

    #[tokio::test]
    async fn test_cycle_with_two_courses() {
        let browser = RefCell::new(CourseBrowser::new());
        let source = FixedSource(Ok(vec![course("A"), course("B")]));

        let outcome = select_and_run(&browser, &source, LearningPath::DevOps).await;
        assert_eq!(outcome, Settlement::Applied);

        let browser = browser.borrow();
        assert!(!browser.state().is_loading());
        assert_eq!(browser.state().error(), None);
        assert_eq!(
            browser.view(),
            crate::models::BrowserView::Courses {
                courses: vec![course("A"), course("B")],
                path: LearningPath::DevOps,
            }
        );
    }

    #[tokio::test]
    async fn test_cycle_with_empty_result() {
        let browser = RefCell::new(CourseBrowser::new());
        let source = FixedSource(Ok(Vec::new()));

        let _ = select_and_run(&browser, &source, LearningPath::Dsa).await;

        let browser = browser.borrow();
        assert!(!browser.state().is_loading());
        assert!(browser.state().courses().is_empty());
        assert_eq!(
            browser.state().error().as_deref(),
            Some("No courses available for the selected path: DSA")
        );
    }

    #[tokio::test]
    async fn test_cycle_with_bad_status() {
        let browser = RefCell::new(CourseBrowser::new());
        let source = FixedSource(Err(FetchError::Status(404)));

        let _ = select_and_run(&browser, &source, LearningPath::AiMl).await;

        let browser = browser.borrow();
        assert!(!browser.state().is_loading());
        assert!(browser.state().courses().is_empty());
        assert_eq!(
            browser.state().error().as_deref(),
            Some("Failed to fetch courses")
        );
    }

    #[tokio::test]
    async fn test_cycle_with_thrown_error() {
        let browser = RefCell::new(CourseBrowser::new());
        let source = FixedSource(Err(FetchError::Network("Network down".to_string())));

        let _ = select_and_run(&browser, &source, LearningPath::FullStack).await;
        assert_eq!(
            browser.borrow().state().error().as_deref(),
            Some("Network down")
        );
    }

    #[tokio::test]
    async fn test_slow_response_does_not_overwrite_newer_cycle() {
        let browser = RefCell::new(CourseBrowser::new());
        let source = ScriptedSource::new();
        let slow_tx = source.expect(LearningPath::FrontEnd);
        let fast_tx = source.expect(LearningPath::BackEnd);

        let slow_cycle = browser.borrow_mut().select_path(LearningPath::FrontEnd);
        let fast_cycle = browser.borrow_mut().select_path(LearningPath::BackEnd);

        let slow = run_cycle(&source, slow_cycle, |cycle, result| {
            browser.borrow_mut().settle(cycle, result)
        });
        let fast = async {
            fast_tx.send(Ok(vec![course("X")])).unwrap();
            let outcome = run_cycle(&source, fast_cycle, |cycle, result| {
                browser.borrow_mut().settle(cycle, result)
            })
            .await;
            // The slow request resolves only after the fast one settled.
            slow_tx.send(Ok(vec![course("Y")])).unwrap();
            outcome
        };

        let (slow, fast) = tokio::join!(slow, fast);
        assert_eq!(fast, Settlement::Applied);
        assert_eq!(slow, Settlement::Discarded);

        let browser = browser.borrow();
        assert_eq!(browser.selected_path(), LearningPath::BackEnd);
        assert_eq!(browser.state().courses(), &[course("X")]);
    }

    #[tokio::test]
    async fn test_reselecting_active_path_reruns_cycle() {
        let browser = RefCell::new(CourseBrowser::new());
        let source = FixedSource(Ok(vec![course("A")]));

        let _ = select_and_run(&browser, &source, LearningPath::DevOps).await;
        let first = browser.borrow().current_cycle();

        let outcome = select_and_run(&browser, &source, LearningPath::DevOps).await;
        assert_eq!(outcome, Settlement::Applied);

        let browser = browser.borrow();
        assert!(browser.current_cycle() > first);
        assert!(!browser.state().is_loading());
        assert_eq!(browser.state().courses(), &[course("A")]);
    }
}
