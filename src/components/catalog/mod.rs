//! Catalog page.
//!
//! Reactive shell around [`CourseBrowser`]: the state machine lives in a
//! signal, each path selection starts a cycle and spawns its request, and the
//! page renders whatever [`CourseBrowser::view`] says.
//!
//! ## Layout
//!
//! | View | Display |
//! |------|---------|
//! | Loading | Muted path selector with a spinner overlay |
//! | Error | Message region with the error text verbatim |
//! | Courses | [`CourseList`] for the selected path |
//! | Empty | Static "no courses" message |

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::components::icons as ic;
use crate::components::{CourseList, PathSelector};
use crate::config::{COURSES_ENDPOINT, EMPTY_STATE_MESSAGE, LOADING_LABEL};
use crate::core::error::FetchError;
use crate::core::{CourseBrowser, FetchCycle, Settlement, run_cycle};
use crate::models::{BrowserView, LearningPath};
use crate::utils::HttpCourseSource;

stylance::import_crate_style!(css, "src/components/catalog/catalog.module.css");

/// Paths offered by the selector, in display order.
const PATHS: &[LearningPath] = &LearningPath::ALL;

// =============================================================================
// Console Logging
// =============================================================================

fn cycle_start_message(cycle: &FetchCycle) -> String {
    format!(
        "Fetching courses for '{}' (cycle {})",
        cycle.path(),
        cycle.id().get()
    )
}

fn settled_message(cycle: &FetchCycle, browser: &CourseBrowser) -> String {
    let state = browser.state();
    let summary = match state.error() {
        Some(message) => format!("error: {}", message),
        None => format!("{} courses", state.courses().len()),
    };
    format!(
        "Settled '{}' (cycle {}): {}",
        cycle.path(),
        cycle.id().get(),
        summary
    )
}

fn discarded_message(cycle: &FetchCycle) -> String {
    format!(
        "Discarded stale response for '{}' (cycle {})",
        cycle.path(),
        cycle.id().get()
    )
}

fn failure_message(cycle: &FetchCycle, err: &FetchError) -> String {
    format!("Course fetch for '{}' failed: {:?}", cycle.path(), err)
}

#[cfg_attr(not(target_arch = "wasm32"), allow(unused_variables))]
fn log(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&message.into());
}

#[cfg_attr(not(target_arch = "wasm32"), allow(unused_variables))]
fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&message.into());
}

#[cfg_attr(not(target_arch = "wasm32"), allow(unused_variables))]
fn error(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&message.into());
}

/// Course catalog page: path selector plus the current cycle's result.
#[component]
pub fn CatalogPage() -> impl IntoView {
    let browser = RwSignal::new(CourseBrowser::new());
    let source = HttpCourseSource::new(COURSES_ENDPOINT);

    // Start a cycle and run its request in the background.
    let select = move |path: LearningPath| {
        let Some(cycle) = browser.try_update(|b| b.select_path(path)) else {
            return;
        };
        log(&cycle_start_message(&cycle));

        spawn_local(async move {
            let outcome = run_cycle(&source, cycle, |cycle, result| {
                if let Err(e) = &result {
                    error(&failure_message(cycle, e));
                }
                browser
                    .try_update(|b| b.settle(cycle, result))
                    .unwrap_or(Settlement::Discarded)
            })
            .await;

            match outcome {
                Settlement::Applied => {
                    if let Some(message) =
                        browser.try_with_untracked(|b| settled_message(&cycle, b))
                    {
                        log(&message);
                    }
                }
                Settlement::Discarded => warn(&discarded_message(&cycle)),
            }
        });
    };

    // First cycle for the default path
    select(LearningPath::default());

    let selected = Signal::derive(move || browser.with(|b| b.selected_path()));
    let loading = Signal::derive(move || browser.with(|b| b.state().is_loading()));
    let view_state = Memo::new(move |_| browser.with(|b| b.view()));

    let wrapper_class = move || {
        if loading.get() {
            format!("{} {}", css::selectorWrapper, css::loading)
        } else {
            css::selectorWrapper.to_string()
        }
    };

    view! {
        <div class=css::page>
            <div class=wrapper_class>
                <PathSelector
                    paths=PATHS
                    selected=selected
                    busy=loading
                    on_select=Callback::new(select)
                />

                <Show when=move || loading.get()>
                    <div class=css::overlay>
                        <div class=css::spinner role="status">{LOADING_LABEL}</div>
                    </div>
                </Show>
            </div>

            {move || match view_state.get() {
                BrowserView::Loading => view! {
                    <div class=css::placeholder aria-hidden="true"></div>
                }.into_any(),
                BrowserView::Error { message, soft } => {
                    let (class, icon) = if soft {
                        (format!("{} {}", css::message, css::notice), ic::INFO)
                    } else {
                        (format!("{} {}", css::message, css::error), ic::ALERT)
                    };
                    view! {
                        <div class=class role="alert">
                            <Icon icon=icon />
                            <span>{message}</span>
                        </div>
                    }.into_any()
                }
                BrowserView::Courses { courses, path } => view! {
                    <CourseList courses=courses path=path />
                }.into_any(),
                BrowserView::Empty => view! {
                    <div class=css::message>
                        <Icon icon=ic::EMPTY />
                        <span>{EMPTY_STATE_MESSAGE}</span>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
