use crate::i18n;
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

// Sidebar stylesheet (inlined as well for release native builds)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Platform-supplied navigation links.
///
/// `ui` does not know each platform's `Route` enum, so platforms register a
/// `NavBuilder` whose closures wrap the (already localized) link content in a
/// router `Link`:
///
/// ```ignore
/// use ui::components::app_navbar::{register_nav, NavBuilder};
/// fn nav_users(content: Element) -> Element {
///     rsx!(Link { class: "sidebar__link", active_class: "sidebar__link--active", to: Route::Users {}, {content} })
/// }
/// ```
///
/// Without a registered builder the sidebar renders plain labels.
pub struct NavBuilder {
    pub dashboard: fn(content: Element) -> Element,
    pub users: fn(content: Element) -> Element,
    pub revenue: fn(content: Element) -> Element,
    pub engagement: fn(content: Element) -> Element,
    pub settings: fn(content: Element) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    if NAV_BUILDER.set(builder).is_err() {
        tracing::debug!("navigation builder already registered");
    }
}

/// Sidebar, mobile header and the main content frame around `children`.
#[component]
pub fn AppNavbar(children: Element) -> Element {
    i18n::init();

    let mut sidebar_open = use_signal(|| false);
    let mut current_lang = use_signal(|| "en-US".to_string());
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Global language code signal, if the platform provided one.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                tracing::debug!(lang = %val, "switched language");
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!(lang = %val, %err, "language switch failed"),
        }
    };

    let entry = |icon: &'static str, label: String| {
        rsx! {
            span { class: "sidebar__icon", aria_hidden: "true", "{icon}" }
            span { class: "sidebar__label", "{label}" }
        }
    };

    let (main_links, settings_link) = match NAV_BUILDER.get() {
        Some(b) => (
            rsx! {
                {(b.dashboard)(entry("▦", t!("nav-dashboard")))}
                {(b.users)(entry("👥", t!("nav-users")))}
                {(b.revenue)(entry("▤", t!("nav-revenue")))}
                {(b.engagement)(entry("◔", t!("nav-engagement")))}
            },
            (b.settings)(entry("⚙", t!("nav-settings"))),
        ),
        None => (
            rsx! {
                span { class: "sidebar__link", {entry("▦", t!("nav-dashboard"))} }
                span { class: "sidebar__link", {entry("👥", t!("nav-users"))} }
                span { class: "sidebar__link", {entry("▤", t!("nav-revenue"))} }
                span { class: "sidebar__link", {entry("◔", t!("nav-engagement"))} }
            },
            rsx! {
                span { class: "sidebar__link", {entry("⚙", t!("nav-settings"))} }
            },
        ),
    };

    let sidebar_class = if sidebar_open() {
        "sidebar sidebar--open"
    } else {
        "sidebar"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        div { class: "shell",
            // Hidden marker keeps the shell subscribed to the global language signal.
            div { style: "display:none", "{lang_marker}" }

            aside { id: "sidebar", class: "{sidebar_class}",
                div { class: "sidebar__header",
                    Brand {}
                    button {
                        r#type: "button",
                        class: "sidebar__close",
                        aria_label: t!("nav-close-menu"),
                        onclick: move |_| sidebar_open.set(false),
                        "✕"
                    }
                }

                // Links close the drawer on mobile once clicked.
                nav { class: "sidebar__nav", onclick: move |_| sidebar_open.set(false),
                    {main_links}
                }

                div { class: "sidebar__footer",
                    div { onclick: move |_| sidebar_open.set(false), {settings_link} }

                    if show_switcher {
                        div { class: "sidebar__locale",
                            label {
                                class: "visually-hidden",
                                r#for: "locale-select",
                                {t!("nav-language-label")}
                            }
                            select {
                                id: "locale-select",
                                value: "{current_lang()}",
                                oninput: on_change,
                                for code in langs() {
                                    option { key: "{code}", value: "{code}", "{code}" }
                                }
                            }
                        }
                    }
                }
            }

            header { class: "mobile-header",
                Brand {}
                button {
                    r#type: "button",
                    class: "mobile-header__toggle",
                    aria_label: t!("nav-open-menu"),
                    aria_controls: "sidebar",
                    onclick: move |_| sidebar_open.toggle(),
                    "☰"
                }
            }

            if sidebar_open() {
                div {
                    class: "shell__backdrop",
                    onclick: move |_| sidebar_open.set(false),
                }
            }

            main { class: "shell__main", {children} }
        }
    }
}

#[component]
fn Brand() -> Element {
    rsx! {
        div { class: "brand",
            span { class: "brand__mark", aria_hidden: "true", "▮▮" }
            span { class: "brand__name", "StartupMetrics" }
        }
    }
}
