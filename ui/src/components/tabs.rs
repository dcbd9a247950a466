use dioxus::prelude::*;

/// Horizontal strip of [`Tab`] buttons.
#[component]
pub fn Tabs(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        div { class: "tabs {class}", role: "tablist", {children} }
    }
}

#[component]
pub fn Tab(label: String, active: bool, onclick: EventHandler<MouseEvent>) -> Element {
    let class = if active { "tab tab--active" } else { "tab" };

    rsx! {
        button {
            r#type: "button",
            role: "tab",
            class: "{class}",
            aria_selected: "{active}",
            onclick: move |evt| onclick.call(evt),
            "{label}"
        }
    }
}
