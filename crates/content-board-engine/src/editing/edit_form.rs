use crate::editing::BoardCmd;
use crate::models::{Block, BlockKind};
use crate::table;

/// Which table field an input edits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldTarget {
    Header(usize),
    Cell { row: usize, cell: usize },
}

impl FieldTarget {
    /// Command that writes `text` into this field
    pub fn edit(self, text: String) -> BoardCmd {
        match self {
            FieldTarget::Header(index) => BoardCmd::EditTableHeader { index, text },
            FieldTarget::Cell { row, cell } => BoardCmd::EditTableCell { row, cell, text },
        }
    }
}

/// One editable input of a table edit form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditField {
    pub target: FieldTarget,
    pub value: String,
    pub placeholder: String,
}

/// Shape of the editor shown for a block in edit mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditForm {
    /// Single multi-line field bound to the session draft
    TextArea { draft: String },
    /// One field per header and body cell, bound to the committed content,
    /// plus an add-row action
    TableGrid {
        headers: Vec<EditField>,
        rows: Vec<Vec<EditField>>,
    },
}

impl EditForm {
    /// Tables commit as they are typed, so only text areas get a save action
    pub fn allows_save(&self) -> bool {
        matches!(self, EditForm::TextArea { .. })
    }

    /// Fields in visual order: headers first, then each body row
    pub fn fields(&self) -> Vec<&EditField> {
        match self {
            EditForm::TextArea { .. } => Vec::new(),
            EditForm::TableGrid { headers, rows } => {
                headers.iter().chain(rows.iter().flatten()).collect()
            }
        }
    }
}

/// Build the edit form for `block`, with `draft` as the current session text
pub fn edit_form(block: &Block, draft: &str) -> EditForm {
    match block.kind {
        BlockKind::Table => table_form(&block.content),
        BlockKind::Title
        | BlockKind::Quote
        | BlockKind::Text
        | BlockKind::Image
        | BlockKind::List
        | BlockKind::Html => EditForm::TextArea {
            draft: draft.to_string(),
        },
    }
}

fn table_form(content: &str) -> EditForm {
    let grid = table::decode(content);
    let headers = grid
        .headers
        .into_iter()
        .enumerate()
        .map(|(index, value)| EditField {
            target: FieldTarget::Header(index),
            value,
            placeholder: format!("Header {}", index + 1),
        })
        .collect();
    let rows = grid
        .rows
        .into_iter()
        .enumerate()
        .map(|(row, cells)| {
            cells
                .into_iter()
                .enumerate()
                .map(|(cell, value)| EditField {
                    target: FieldTarget::Cell { row, cell },
                    value,
                    placeholder: format!("Row {}, Cell {}", row + 1, cell + 1),
                })
                .collect()
        })
        .collect();
    EditForm::TableGrid { headers, rows }
}
