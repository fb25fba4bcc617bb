use crate::editing::edit_form::{EditForm, edit_form};
use crate::models::{Block, BlockId, BlockKind, demo_blocks};
use crate::render::{Rendered, render};
use crate::table;

/// The block being edited and its uncommitted text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub active_id: BlockId,
    pub draft: String,
}

/// Ordered blocks plus at most one edit session.
///
/// Every operation is total: unknown ids and table fields outside the grid
/// are ignored rather than reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    blocks: Vec<Block>,
    session: Option<EditSession>,
}

impl Board {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self {
            blocks,
            session: None,
        }
    }

    /// Board holding the demo blocks
    pub fn demo() -> Self {
        Self::new(demo_blocks())
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, id: &BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| &b.id == id)
    }

    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    pub fn active_id(&self) -> Option<&BlockId> {
        self.session.as_ref().map(|s| &s.active_id)
    }

    pub fn is_editing(&self, id: &BlockId) -> bool {
        self.active_id() == Some(id)
    }

    /// Append an empty block and open it for editing.
    ///
    /// The id is the kind name followed by the new length. After a deletion
    /// this can repeat an id that is still on the board.
    pub fn add_block(&mut self, kind: BlockKind) -> BlockId {
        let id = BlockId::generated(kind, self.blocks.len() + 1);
        self.blocks.push(Block {
            id: id.clone(),
            kind,
            content: String::new(),
        });
        self.session = Some(EditSession {
            active_id: id.clone(),
            draft: String::new(),
        });
        id
    }

    /// Start editing `id` with `current_content` as the draft.
    ///
    /// Replaces any open session; its draft is dropped.
    pub fn begin_edit(&mut self, id: BlockId, current_content: String) {
        if self.get(&id).is_none() {
            log::debug!("begin_edit on unknown block {id}");
            return;
        }
        self.session = Some(EditSession {
            active_id: id,
            draft: current_content,
        });
    }

    /// Write the draft into every block with the active id and close the
    /// session
    pub fn commit_edit(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };
        let mut committed = false;
        for block in self.blocks_mut(&session.active_id) {
            block.content = session.draft.clone();
            committed = true;
        }
        if !committed {
            log::debug!("commit_edit: block {} no longer exists", session.active_id);
        }
    }

    /// Close the session without touching any block
    pub fn cancel_edit(&mut self) {
        self.session = None;
    }

    /// Remove a block. Returns whether anything was removed.
    pub fn delete_block(&mut self, id: &BlockId) -> bool {
        let before = self.blocks.len();
        self.blocks.retain(|b| &b.id != id);
        if self.is_editing(id) {
            self.session = None;
        }
        self.blocks.len() != before
    }

    pub fn edit_draft(&mut self, text: String) {
        if let Some(session) = self.session.as_mut() {
            session.draft = text;
        }
    }

    /// Replace one header of the table being edited, committing immediately
    pub fn edit_table_header(&mut self, index: usize, text: &str) {
        self.edit_active_table(|content| table::with_header(content, index, text));
    }

    /// Replace one body cell of the table being edited, committing immediately
    pub fn edit_table_cell(&mut self, row: usize, cell: usize, text: &str) {
        self.edit_active_table(|content| table::with_cell(content, row, cell, text));
    }

    /// Append an empty row to table `id`, committing immediately
    pub fn add_table_row(&mut self, id: &BlockId) {
        self.edit_table(id, table::with_empty_row);
    }

    /// Rendered form of every block, in board order
    pub fn preview(&self) -> Vec<(BlockId, Rendered)> {
        self.blocks
            .iter()
            .map(|b| (b.id.clone(), render(b)))
            .collect()
    }

    /// Preview of the whole board as a markup string
    pub fn preview_html(&self) -> String {
        self.blocks
            .iter()
            .map(|b| render(b).to_html())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Edit form for `block`, if it carries the id being edited
    pub fn edit_form(&self, block: &Block) -> Option<EditForm> {
        let session = self.session.as_ref().filter(|s| s.active_id == block.id)?;
        Some(edit_form(block, &session.draft))
    }

    fn blocks_mut<'a>(&'a mut self, id: &'a BlockId) -> impl Iterator<Item = &'a mut Block> {
        self.blocks.iter_mut().filter(move |b| &b.id == id)
    }

    fn edit_active_table(&mut self, edit: impl Fn(&str) -> String) {
        if let Some(id) = self.active_id().cloned() {
            self.edit_table(&id, edit);
        }
    }

    /// Apply `edit` to the committed content of every table block with `id`
    /// and mirror the result into the draft when that id is being edited.
    fn edit_table(&mut self, id: &BlockId, edit: impl Fn(&str) -> String) {
        let mut edited = None;
        for block in self.blocks_mut(id).filter(|b| b.kind == BlockKind::Table) {
            block.content = edit(&block.content);
            edited = Some(block.content.clone());
        }
        let Some(content) = edited else {
            return;
        };
        if let Some(session) = self.session.as_mut().filter(|s| &s.active_id == id) {
            session.draft = content;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table_board(content: &str) -> Board {
        Board::new(vec![
            Block::new("title", BlockKind::Title, "Heading"),
            Block::new("table1", BlockKind::Table, content),
        ])
    }

    fn content<'a>(board: &'a Board, id: &str) -> &'a str {
        &board.get(&BlockId::from(id)).unwrap().content
    }

    #[test]
    fn test_commit_replaces_only_the_active_block() {
        let mut board = Board::demo();
        let before = board.clone();

        board.begin_edit("quote".into(), content(&board, "quote").to_string());
        board.edit_draft("Edited quote".to_string());
        board.commit_edit();

        assert_eq!(content(&board, "quote"), "Edited quote");
        assert!(board.session().is_none());
        for (old, new) in before.blocks().iter().zip(board.blocks()) {
            if old.id.as_str() != "quote" {
                assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn test_cancel_never_mutates_content() {
        let mut board = Board::demo();
        let before = board.blocks().to_vec();

        board.begin_edit("text1".into(), "whatever".to_string());
        board.edit_draft("discarded".to_string());
        board.cancel_edit();

        assert_eq!(board.blocks(), before.as_slice());
        assert!(board.session().is_none());
    }

    #[test]
    fn test_add_block_appends_and_opens_editor() {
        let mut board = Board::demo();

        let id = board.add_block(BlockKind::List);

        assert_eq!(id.as_str(), "list8");
        assert_eq!(board.len(), 8);
        let block = board.blocks().last().unwrap();
        assert_eq!(block.kind, BlockKind::List);
        assert_eq!(block.content, "");
        assert_eq!(
            board.session(),
            Some(&EditSession {
                active_id: id,
                draft: String::new()
            })
        );
    }

    #[test]
    fn test_generated_ids_can_collide_after_delete() {
        let mut board = Board::new(Vec::new());
        let first = board.add_block(BlockKind::Text);
        let second = board.add_block(BlockKind::Text);
        board.delete_block(&first);
        let third = board.add_block(BlockKind::Text);

        assert_eq!(second, third);
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn test_delete_existing_block() {
        let mut board = Board::demo();
        board.begin_edit("title".into(), String::new());

        assert!(board.delete_block(&"image1".into()));

        assert_eq!(board.len(), 6);
        assert!(board.get(&"image1".into()).is_none());
        // Session on another block survives
        assert!(board.is_editing(&"title".into()));
    }

    #[test]
    fn test_delete_active_block_clears_session() {
        let mut board = Board::demo();
        board.begin_edit("title".into(), String::new());

        board.delete_block(&"title".into());

        assert!(board.session().is_none());
    }

    #[test]
    fn test_delete_unknown_block_is_noop() {
        let mut board = Board::demo();
        board.begin_edit("title".into(), "draft".to_string());
        let before = board.clone();

        assert!(!board.delete_block(&"missing".into()));

        assert_eq!(board, before);
    }

    #[test]
    fn test_commit_after_block_deleted_just_clears_session() {
        let mut board = Board::demo();
        board.session = Some(EditSession {
            active_id: "gone".into(),
            draft: "draft".to_string(),
        });
        let blocks = board.blocks().to_vec();

        board.commit_edit();

        assert_eq!(board.blocks(), blocks.as_slice());
        assert!(board.session().is_none());
    }

    #[test]
    fn test_begin_edit_replaces_previous_session() {
        let mut board = Board::demo();
        board.begin_edit("title".into(), "unsaved".to_string());
        board.begin_edit("quote".into(), "quote draft".to_string());

        let session = board.session().unwrap();
        assert_eq!(session.active_id.as_str(), "quote");
        assert_eq!(session.draft, "quote draft");
        assert_eq!(content(&board, "title"), "Overview of Arm Lift Surgery");
    }

    #[test]
    fn test_table_cell_edit_commits_to_board_and_draft() {
        let mut board = table_board("A,B\n1,2");
        board.begin_edit("table1".into(), "A,B\n1,2".to_string());

        board.edit_table_cell(0, 1, "X");

        assert_eq!(content(&board, "table1"), "A,B\n1,X");
        assert_eq!(board.session().unwrap().draft, "A,B\n1,X");
    }

    #[test]
    fn test_table_header_edit_commits_to_board_and_draft() {
        let mut board = table_board("A,B\n1,2");
        board.begin_edit("table1".into(), "A,B\n1,2".to_string());

        board.edit_table_header(1, "Beta");

        assert_eq!(content(&board, "table1"), "A,Beta\n1,2");
        assert_eq!(board.session().unwrap().draft, "A,Beta\n1,2");
    }

    #[test]
    fn test_cancel_after_table_edit_keeps_committed_cells() {
        let mut board = table_board("A,B\n1,2");
        board.begin_edit("table1".into(), "A,B\n1,2".to_string());
        board.edit_table_cell(0, 0, "9");

        board.cancel_edit();

        assert_eq!(content(&board, "table1"), "A,B\n9,2");
    }

    #[test]
    fn test_add_table_row() {
        let mut board = table_board("A,B\n1,2");
        board.begin_edit("table1".into(), "A,B\n1,2".to_string());

        board.add_table_row(&"table1".into());

        assert_eq!(content(&board, "table1"), "A,B\n1,2\n,");
        assert_eq!(board.session().unwrap().draft, "A,B\n1,2\n,");
    }

    #[test]
    fn test_add_table_row_ignores_other_kinds() {
        let mut board = table_board("A,B");
        board.add_table_row(&"title".into());
        assert_eq!(content(&board, "title"), "Heading");
    }

    #[test]
    fn test_table_edit_without_session_is_noop() {
        let mut board = table_board("A,B\n1,2");
        board.edit_table_cell(0, 0, "X");
        assert_eq!(content(&board, "table1"), "A,B\n1,2");
    }

    #[test]
    fn test_table_edit_on_non_table_session_is_noop() {
        let mut board = table_board("A,B\n1,2");
        board.begin_edit("title".into(), "Heading".to_string());

        board.edit_table_header(0, "X");

        assert_eq!(content(&board, "title"), "Heading");
        assert_eq!(board.session().unwrap().draft, "Heading");
    }

    #[test]
    fn test_edit_form_only_for_active_block() {
        let mut board = Board::demo();
        let title = board.blocks()[0].clone();
        let quote = board.blocks()[1].clone();
        assert!(board.edit_form(&title).is_none());

        board.begin_edit("title".into(), "draft".to_string());

        assert_eq!(
            board.edit_form(&title),
            Some(EditForm::TextArea {
                draft: "draft".to_string()
            })
        );
        assert!(board.edit_form(&quote).is_none());
    }

    #[test]
    fn test_commit_writes_every_block_sharing_a_reused_id() {
        let mut board = Board::new(Vec::new());
        let first = board.add_block(BlockKind::Text);
        board.add_block(BlockKind::Text);
        board.delete_block(&first);
        let reused = board.add_block(BlockKind::Text);

        board.begin_edit(reused, String::new());
        board.edit_draft("X".to_string());
        board.commit_edit();

        let contents: Vec<_> = board.blocks().iter().map(|b| b.content.as_str()).collect();
        assert_eq!(contents, vec!["X", "X"]);
    }

    #[test]
    fn test_table_edit_reaches_every_block_sharing_a_reused_id() {
        let mut board = Board::new(vec![
            Block::new("table2", BlockKind::Table, "A,B\n1,2"),
            Block::new("table2", BlockKind::Table, "A,B\n1,2"),
        ]);
        board.begin_edit("table2".into(), "A,B\n1,2".to_string());

        board.edit_table_cell(0, 0, "9");
        board.add_table_row(&"table2".into());

        for block in board.blocks() {
            assert_eq!(block.content, "A,B\n9,2\n,");
        }
        assert_eq!(board.session().unwrap().draft, "A,B\n9,2\n,");
    }

    #[test]
    fn test_edit_form_is_built_from_the_block_drawn() {
        let mut board = Board::new(vec![
            Block::new("table2", BlockKind::Table, "Old"),
            Block::new("table2", BlockKind::Table, "New"),
        ]);
        board.begin_edit("table2".into(), String::new());

        let forms: Vec<_> = board
            .blocks()
            .iter()
            .map(|b| board.edit_form(b).unwrap().fields()[0].value.clone())
            .collect();

        assert_eq!(forms, vec!["Old".to_string(), "New".to_string()]);
    }

    #[test]
    fn test_preview_follows_board_order() {
        let board = Board::demo();
        let ids: Vec<_> = board.preview().into_iter().map(|(id, _)| id.0).collect();
        assert_eq!(
            ids,
            vec!["title", "quote", "text1", "image1", "list1", "table1", "html1"]
        );
    }
}
