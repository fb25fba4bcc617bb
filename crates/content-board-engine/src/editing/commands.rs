use crate::editing::Board;
use crate::models::{BlockId, BlockKind};

/// A single user intent against the board.
///
/// Frontends translate each click or keystroke into one command and hand it
/// to [`Board::apply`]; they never mutate blocks directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardCmd {
    AddBlock { kind: BlockKind },
    BeginEdit { id: BlockId, content: String },
    CommitEdit,
    CancelEdit,
    DeleteBlock { id: BlockId },
    EditDraft { text: String },
    EditTableHeader { index: usize, text: String },
    EditTableCell { row: usize, cell: usize, text: String },
    AddTableRow { id: BlockId },
}

impl Board {
    pub fn apply(&mut self, cmd: BoardCmd) {
        log::debug!("apply {cmd:?}");
        match cmd {
            BoardCmd::AddBlock { kind } => {
                self.add_block(kind);
            }
            BoardCmd::BeginEdit { id, content } => self.begin_edit(id, content),
            BoardCmd::CommitEdit => self.commit_edit(),
            BoardCmd::CancelEdit => self.cancel_edit(),
            BoardCmd::DeleteBlock { id } => {
                self.delete_block(&id);
            }
            BoardCmd::EditDraft { text } => self.edit_draft(text),
            BoardCmd::EditTableHeader { index, text } => self.edit_table_header(index, &text),
            BoardCmd::EditTableCell { row, cell, text } => self.edit_table_cell(row, cell, &text),
            BoardCmd::AddTableRow { id } => self.add_table_row(&id),
        }
    }
}
