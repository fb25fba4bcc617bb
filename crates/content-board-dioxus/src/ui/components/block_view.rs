use crate::ui::components::{
    block_quote::BlockQuote, heading::Heading, html_block::HtmlBlock, image_block::ImageBlock,
    list_component::ListComponent, paragraph::Paragraph, table_block::TableBlock,
};
use content_board_engine::Rendered;
use dioxus::prelude::*;

/// Draw a rendered block. Shared by the board cards and the preview.
#[component]
pub fn BlockView(rendered: Rendered) -> Element {
    match rendered {
        Rendered::Heading(text) => rsx! {
            Heading { text }
        },
        Rendered::Quote(text) => rsx! {
            BlockQuote { text }
        },
        Rendered::Paragraph(text) => rsx! {
            Paragraph { text }
        },
        Rendered::Image { src } => rsx! {
            ImageBlock { src }
        },
        Rendered::List { items } => rsx! {
            ListComponent { items }
        },
        Rendered::Table(grid) => rsx! {
            TableBlock { grid }
        },
        Rendered::Html(markup) => rsx! {
            HtmlBlock { markup }
        },
    }
}
