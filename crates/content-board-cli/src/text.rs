//! Plain-text rendering of blocks and edit forms for the terminal panes.

use content_board_engine::{EditForm, Rendered};

/// Marker drawn at the end of the text being edited
pub const CURSOR: char = '▏';

pub fn rendered_lines(rendered: &Rendered) -> Vec<String> {
    let mut lines = Vec::new();
    match rendered {
        Rendered::Heading(text) => lines.push(format!("## {text}")),
        Rendered::Quote(text) => lines.extend(text.split('\n').map(|l| format!("> {l}"))),
        Rendered::Paragraph(text) => lines.extend(text.split('\n').map(str::to_string)),
        Rendered::Image { src } => lines.push(format!("[image: {src}]")),
        Rendered::List { items } => lines.extend(items.iter().map(|item| format!("• {item}"))),
        Rendered::Table(grid) => {
            lines.push(grid.headers.join(" | "));
            lines.push("---".to_string());
            lines.extend(grid.rows.iter().map(|row| row.join(" | ")));
        }
        Rendered::Html(markup) => lines.push(format!("[html] {markup}")),
    }
    lines.push(String::new()); // Blank line between blocks
    lines
}

/// Lines for the editor pane; `focused` is the index of the active table field
pub fn edit_form_lines(form: &EditForm, focused: usize) -> Vec<String> {
    match form {
        EditForm::TextArea { draft } => {
            let mut lines: Vec<String> = draft.split('\n').map(str::to_string).collect();
            if let Some(last) = lines.last_mut() {
                last.push(CURSOR);
            }
            lines.push(String::new());
            lines.push("Ctrl+S: Save | Esc: Cancel".to_string());
            lines
        }
        EditForm::TableGrid { .. } => {
            let mut lines: Vec<String> = form
                .fields()
                .into_iter()
                .enumerate()
                .map(|(index, field)| {
                    if index == focused {
                        format!("> {}: {}{CURSOR}", field.placeholder, field.value)
                    } else {
                        format!("  {}: {}", field.placeholder, field.value)
                    }
                })
                .collect();
            lines.push(String::new());
            lines.push("Tab: Next field | Ctrl+R: Add row | Esc: Done".to_string());
            lines
        }
    }
}
