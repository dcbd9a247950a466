use dioxus::prelude::*;

use crate::pages::dashboard::DashboardView;

/// Routed dashboard page. Also serves `/revenue`, `/engagement` and `/settings`.
#[component]
pub fn Dashboard() -> Element {
    // Subscribe to the global language code (if provided) so the page
    // re-renders when the locale changes in the navbar.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        DashboardView {}
    }
}
