use dioxus::prelude::*;

#[component]
pub fn Card(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        div { class: "card {class}", {children} }
    }
}

#[component]
pub fn CardHeader(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        div { class: "card__header {class}", {children} }
    }
}

#[component]
pub fn CardBody(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        div { class: "card__body {class}", {children} }
    }
}
