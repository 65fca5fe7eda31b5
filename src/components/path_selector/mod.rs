//! Learning path carousel.
//!
//! Shows the ordered path labels with the active one highlighted, plus
//! previous/next buttons that step through the list with wrap-around.
//! The `busy` flag only mutes the carousel; clicks still go through.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::models::LearningPath;

stylance::import_crate_style!(css, "src/components/path_selector/path_selector.module.css");

/// Path `offset` steps away from `current`, wrapping at both ends.
///
/// Returns `current` when it is not part of `paths`.
fn neighbour(paths: &[LearningPath], current: LearningPath, offset: isize) -> LearningPath {
    let Some(index) = paths.iter().position(|p| *p == current) else {
        return current;
    };
    let len = paths.len() as isize;
    paths[(index as isize + offset).rem_euclid(len) as usize]
}

#[component]
pub fn PathSelector(
    paths: &'static [LearningPath],
    #[prop(into)] selected: Signal<LearningPath>,
    #[prop(into)] busy: Signal<bool>,
    on_select: Callback<LearningPath>,
) -> impl IntoView {
    let step = move |offset: isize| {
        on_select.run(neighbour(paths, selected.get_untracked(), offset));
    };

    let carousel_class = move || {
        if busy.get() {
            format!("{} {}", css::carousel, css::busy)
        } else {
            css::carousel.to_string()
        }
    };

    view! {
        <nav class=carousel_class aria-label="Learning paths" aria-busy=move || busy.get()>
            <button class=css::arrow on:click=move |_| step(-1) title="Previous path">
                <Icon icon=ic::CHEVRON_LEFT />
            </button>

            <ul class=css::track role="tablist">
                {paths
                    .iter()
                    .copied()
                    .map(|path| view! { <PathTab path=path selected=selected on_select=on_select /> })
                    .collect_view()}
            </ul>

            <button class=css::arrow on:click=move |_| step(1) title="Next path">
                <Icon icon=ic::CHEVRON_RIGHT />
            </button>
        </nav>
    }
}

#[component]
fn PathTab(
    path: LearningPath,
    selected: Signal<LearningPath>,
    on_select: Callback<LearningPath>,
) -> impl IntoView {
    let is_active = Signal::derive(move || selected.get() == path);

    let tab_class = move || {
        if is_active.get() {
            format!("{} {}", css::tab, css::active)
        } else {
            css::tab.to_string()
        }
    };

    view! {
        <li>
            <button
                class=tab_class
                role="tab"
                aria-selected=move || is_active.get()
                on:click=move |_| on_select.run(path)
            >
                {path.label()}
            </button>
        </li>
    }
}
