use dioxus::prelude::*;

#[component]
pub fn BlockQuote(text: String) -> Element {
    rsx! {
        blockquote { class: "block-quote", "{text}" }
    }
}
