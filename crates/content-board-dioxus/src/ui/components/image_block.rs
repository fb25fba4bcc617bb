use content_board_engine::render::IMAGE_ALT;
use dioxus::prelude::*;

/// Image whose source is the block content, unvalidated
#[component]
pub fn ImageBlock(src: String) -> Element {
    rsx! {
        img { class: "block-image", src: "{src}", alt: IMAGE_ALT }
    }
}
