use dioxus::prelude::*;

/// Bullet list with one entry per content line
#[component]
pub fn ListComponent(items: Vec<String>) -> Element {
    rsx! {
        ul {
            class: "bullet-list",
            for (index, item) in items.into_iter().enumerate() {
                li { key: "{index}", class: "bullet-item", "{item}" }
            }
        }
    }
}
