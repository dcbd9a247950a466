#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::views::{Dashboard, Users};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopShell)]
    #[route("/")]
    Dashboard {},
    #[route("/users")]
    Users {},
    #[route("/revenue")]
    Revenue {},
    #[route("/engagement")]
    Engagement {},
    #[route("/settings")]
    Settings {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

// Shared theme and chart bridge, embedded so packaged builds need no asset directory.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));
const CHARTS_JS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/charts.js"
));

#[cfg(feature = "desktop")]
fn main() {
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("StartupMetrics – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn nav_dashboard(content: Element) -> Element {
    rsx!(Link { class: "sidebar__link", active_class: "sidebar__link--active", to: Route::Dashboard {}, {content} })
}
fn nav_users(content: Element) -> Element {
    rsx!(Link { class: "sidebar__link", active_class: "sidebar__link--active", to: Route::Users {}, {content} })
}
fn nav_revenue(content: Element) -> Element {
    rsx!(Link { class: "sidebar__link", active_class: "sidebar__link--active", to: Route::Revenue {}, {content} })
}
fn nav_engagement(content: Element) -> Element {
    rsx!(Link { class: "sidebar__link", active_class: "sidebar__link--active", to: Route::Engagement {}, {content} })
}
fn nav_settings(content: Element) -> Element {
    rsx!(Link { class: "sidebar__link", active_class: "sidebar__link--active", to: Route::Settings {}, {content} })
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global language code; AppNavbar updates it from the locale picker.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    register_nav(NavBuilder {
        dashboard: nav_dashboard,
        users: nav_users,
        revenue: nav_revenue,
        engagement: nav_engagement,
        settings: nav_settings,
    });

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }
        document::Script { src: ui::CHART_JS_CDN }
        document::Script { "{CHARTS_JS_INLINE}" }

        // Keyed by language so the routed subtree remounts on change.
        div {
            key: "{lang_code()}",
            Router::<Route> { }
        }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

#[component]
fn DesktopShell() -> Element {
    rsx! {
        AppNavbar {
            Outlet::<Route> {}
        }
    }
}

#[component]
fn Revenue() -> Element {
    rsx! { Dashboard {} }
}

#[component]
fn Engagement() -> Element {
    rsx! { Dashboard {} }
}

#[component]
fn Settings() -> Element {
    rsx! { Dashboard {} }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    dioxus::logger::tracing::debug!(path = %segments.join("/"), "unknown route, redirecting");
    let nav = navigator();
    use_effect(move || {
        nav.replace(Route::Dashboard {});
    });
    rsx! {}
}
