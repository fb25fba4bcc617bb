use dioxus::prelude::*;

#[component]
pub fn Paragraph(text: String) -> Element {
    rsx! {
        p { class: "paragraph", "{text}" }
    }
}
