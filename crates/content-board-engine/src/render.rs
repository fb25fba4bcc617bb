use crate::models::{Block, BlockKind};
use crate::table::{self, TableGrid};
use html_escape::{encode_double_quoted_attribute, encode_text};

/// Alt text given to every rendered image
pub const IMAGE_ALT: &str = "Content";

/// Display structure for one block, independent of any edit session.
///
/// Frontends turn this into widgets (Dioxus elements, terminal lines) or use
/// [`Rendered::to_html`] for a markup string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Heading(String),
    Quote(String),
    Paragraph(String),
    Image { src: String },
    List { items: Vec<String> },
    Table(TableGrid),
    /// Markup embedded verbatim. Never sanitized: whoever supplies the
    /// content controls what ends up in the page.
    Html(String),
}

/// Map a block to what it looks like in the preview
pub fn render(block: &Block) -> Rendered {
    let content = block.content.clone();
    match block.kind {
        BlockKind::Title => Rendered::Heading(content),
        BlockKind::Quote => Rendered::Quote(content),
        BlockKind::Text => Rendered::Paragraph(content),
        BlockKind::Image => Rendered::Image { src: content },
        BlockKind::List => Rendered::List {
            items: list_items(&block.content),
        },
        BlockKind::Table => Rendered::Table(table::decode(&block.content)),
        BlockKind::Html => Rendered::Html(content),
    }
}

/// One entry per line; blank lines become empty entries
pub fn list_items(content: &str) -> Vec<String> {
    content.split('\n').map(str::to_string).collect()
}

impl Rendered {
    pub fn to_html(&self) -> String {
        match self {
            Rendered::Heading(text) => format!("<h2>{}</h2>", encode_text(text)),
            Rendered::Quote(text) => format!("<blockquote>{}</blockquote>", encode_text(text)),
            Rendered::Paragraph(text) => format!("<p>{}</p>", encode_text(text)),
            Rendered::Image { src } => format!(
                "<img src=\"{}\" alt=\"{IMAGE_ALT}\">",
                encode_double_quoted_attribute(src)
            ),
            Rendered::List { items } => {
                let items: String = items
                    .iter()
                    .map(|item| format!("<li>{}</li>", encode_text(item)))
                    .collect();
                format!("<ul>{items}</ul>")
            }
            Rendered::Table(grid) => table_html(grid),
            Rendered::Html(markup) => format!("<div>{markup}</div>"),
        }
    }
}

fn table_html(grid: &TableGrid) -> String {
    let head: String = grid
        .headers
        .iter()
        .map(|h| format!("<th>{}</th>", encode_text(h)))
        .collect();
    let body: String = grid
        .rows
        .iter()
        .map(|row| {
            let cells: String = row
                .iter()
                .map(|c| format!("<td>{}</td>", encode_text(c)))
                .collect();
            format!("<tr>{cells}</tr>")
        })
        .collect();
    format!("<table><thead><tr>{head}</tr></thead><tbody>{body}</tbody></table>")
}
