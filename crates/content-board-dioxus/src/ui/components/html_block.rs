use dioxus::prelude::*;

/// Raw markup from an html block, injected as-is.
///
/// Nothing is sanitized here: the content is trusted exactly as far as
/// whoever typed it.
#[component]
pub fn HtmlBlock(markup: String) -> Element {
    rsx! {
        div { class: "html-block", dangerous_inner_html: "{markup}" }
    }
}
