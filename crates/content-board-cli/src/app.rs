use crate::text::{edit_form_lines, rendered_lines};
use content_board_engine::{BlockId, BlockKind, Board, BoardCmd, EditForm, render};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::ListState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Quit,
}

pub struct App {
    pub board: Board,
    pub list_state: ListState,
    pub new_kind: BlockKind,
    /// Index into the table edit form's fields
    pub focused_field: usize,
}

impl App {
    pub fn new(board: Board, new_kind: BlockKind) -> Self {
        let mut list_state = ListState::default();
        if !board.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            board,
            list_state,
            new_kind,
            focused_field: 0,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match self.board.active_id().cloned() {
            Some(id) => {
                match self.active_form() {
                    Some(EditForm::TextArea { draft }) => self.handle_text_edit_key(key, draft),
                    Some(form @ EditForm::TableGrid { .. }) => {
                        self.handle_table_edit_key(key, &id, &form)
                    }
                    None => self.board.apply(BoardCmd::CancelEdit),
                }
                Action::Continue
            }
            None => self.handle_browse_key(key),
        }
    }

    /// Lines for the right-hand pane: the editor while editing, else the preview
    pub fn content_lines(&self) -> Vec<String> {
        if let Some(form) = self.active_form() {
            return edit_form_lines(&form, self.focused_field);
        }
        if self.board.is_empty() {
            return vec!["Board is empty. Press 'a' to add a block.".to_string()];
        }
        self.board
            .blocks()
            .iter()
            .flat_map(|b| rendered_lines(&render(b)))
            .collect()
    }

    /// Form for the first block carrying the active id
    fn active_form(&self) -> Option<EditForm> {
        let id = self.board.active_id()?;
        self.board.edit_form(self.board.get(id)?)
    }

    fn selected_id(&self) -> Option<BlockId> {
        let index = self.list_state.selected()?;
        self.board.blocks().get(index).map(|b| b.id.clone())
    }

    fn handle_browse_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => return Action::Quit,
            KeyCode::Down | KeyCode::Char('j') => self.select_offset(1),
            KeyCode::Up | KeyCode::Char('k') => self.select_offset(-1),
            KeyCode::Enter | KeyCode::Char('e') => {
                if let Some(index) = self.list_state.selected()
                    && let Some(block) = self.board.blocks().get(index)
                {
                    let cmd = BoardCmd::BeginEdit {
                        id: block.id.clone(),
                        content: block.content.clone(),
                    };
                    self.focused_field = 0;
                    self.board.apply(cmd);
                }
            }
            KeyCode::Char('d') => {
                if let Some(id) = self.selected_id() {
                    self.board.apply(BoardCmd::DeleteBlock { id });
                    self.clamp_selection();
                }
            }
            KeyCode::Char('n') => self.new_kind = self.new_kind.next(),
            KeyCode::Char('a') => {
                self.board.apply(BoardCmd::AddBlock {
                    kind: self.new_kind,
                });
                self.focused_field = 0;
                self.list_state.select(Some(self.board.len() - 1));
            }
            _ => {}
        }
        Action::Continue
    }

    fn handle_text_edit_key(&mut self, key: KeyEvent, mut draft: String) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.board.apply(BoardCmd::CancelEdit),
            KeyCode::Char('s') if ctrl => self.board.apply(BoardCmd::CommitEdit),
            KeyCode::Char(c) if !ctrl => {
                draft.push(c);
                self.board.apply(BoardCmd::EditDraft { text: draft });
            }
            KeyCode::Enter => {
                draft.push('\n');
                self.board.apply(BoardCmd::EditDraft { text: draft });
            }
            KeyCode::Backspace => {
                draft.pop();
                self.board.apply(BoardCmd::EditDraft { text: draft });
            }
            _ => {}
        }
    }

    fn handle_table_edit_key(&mut self, key: KeyEvent, id: &BlockId, form: &EditForm) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let fields = form.fields();
        let count = fields.len().max(1);
        let focused = fields.get(self.focused_field.min(fields.len().saturating_sub(1)));

        match key.code {
            KeyCode::Esc => self.board.apply(BoardCmd::CancelEdit),
            KeyCode::Tab => self.focused_field = (self.focused_field + 1) % count,
            KeyCode::BackTab => self.focused_field = (self.focused_field + count - 1) % count,
            KeyCode::Char('r') if ctrl => {
                self.board.apply(BoardCmd::AddTableRow { id: id.clone() });
            }
            KeyCode::Char(c) if !ctrl => {
                if let Some(field) = focused {
                    let mut value = field.value.clone();
                    value.push(c);
                    self.board.apply(field.target.edit(value));
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = focused {
                    let mut value = field.value.clone();
                    value.pop();
                    self.board.apply(field.target.edit(value));
                }
            }
            _ => {}
        }
    }

    fn select_offset(&mut self, offset: isize) {
        let len = self.board.len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let next = (current + offset).rem_euclid(len as isize) as usize;
        self.list_state.select(Some(next));
    }

    fn clamp_selection(&mut self) {
        let len = self.board.len();
        match self.list_state.selected() {
            _ if len == 0 => self.list_state.select(None),
            Some(index) if index >= len => self.list_state.select(Some(len - 1)),
            _ => {}
        }
    }
}
