use dioxus::prelude::*;

#[component]
pub fn Heading(text: String) -> Element {
    rsx! {
        h2 { class: "heading", "{text}" }
    }
}
