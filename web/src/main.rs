use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::views::{Dashboard, Users};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
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

fn nav_dashboard(content: Element) -> Element {
    rsx!(Link {
        class: "sidebar__link",
        active_class: "sidebar__link--active",
        to: Route::Dashboard {},
        {content}
    })
}
fn nav_users(content: Element) -> Element {
    rsx!(Link {
        class: "sidebar__link",
        active_class: "sidebar__link--active",
        to: Route::Users {},
        {content}
    })
}
fn nav_revenue(content: Element) -> Element {
    rsx!(Link {
        class: "sidebar__link",
        active_class: "sidebar__link--active",
        to: Route::Revenue {},
        {content}
    })
}
fn nav_engagement(content: Element) -> Element {
    rsx!(Link {
        class: "sidebar__link",
        active_class: "sidebar__link--active",
        to: Route::Engagement {},
        {content}
    })
}
fn nav_settings(content: Element) -> Element {
    rsx!(Link {
        class: "sidebar__link",
        active_class: "sidebar__link--active",
        to: Route::Settings {},
        {content}
    })
}

fn main() {
    dioxus::launch(App);
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
        document::Link { rel: "preconnect", href: "https://fonts.googleapis.com" }
        document::Link {
            rel: "stylesheet",
            href: "https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap",
        }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }
        document::Script { src: ui::CHART_JS_CDN }
        document::Script { src: ui::CHARTS_JS }

        Router::<Route> {}
    }
}

#[component]
fn WebShell() -> Element {
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

/// Unknown paths go back to the dashboard.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    dioxus::logger::tracing::debug!(path = %segments.join("/"), "unknown route, redirecting");
    let nav = navigator();
    use_effect(move || {
        nav.replace(Route::Dashboard {});
    });
    rsx! {}
}
