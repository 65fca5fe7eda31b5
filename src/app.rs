//! Root application module.
//!
//! Contains the main App component and application-level setup following
//! Leptos conventions.

use leptos::prelude::*;

use crate::components::CatalogPage;
use crate::config::APP_NAME;

stylance::import_crate_style!(css, "src/app.module.css");

/// Root application component.
///
/// Renders the catalog page under the application heading. Render errors
/// replace the page with a short notice and a reload button.
#[component]
pub fn App() -> impl IntoView {
    let reload = |_: leptos::ev::MouseEvent| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    };

    view! {
        <main class=css::app>
            <h1 class=css::title>{APP_NAME}</h1>
            <ErrorBoundary
                fallback=move |errors| view! {
                    <div class=css::crash role="alert">
                        <p>"The course catalog could not be displayed."</p>
                        <ul class=css::crashDetails>
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect_view()
                            }
                        </ul>
                        <button class=css::reload on:click=reload>"Reload"</button>
                    </div>
                }
            >
                <CatalogPage />
            </ErrorBoundary>
        </main>
    }
}
