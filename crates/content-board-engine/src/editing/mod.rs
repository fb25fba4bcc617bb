//! # Editing
//!
//! The board owns the ordered blocks and the single edit session. Frontends
//! read from it ([`Board::blocks`], [`Board::edit_form`], [`Board::preview`])
//! and write to it only through [`BoardCmd`] values passed to
//! [`Board::apply`].
//!
//! ```rust
//! use content_board_engine::editing::{Board, BoardCmd};
//!
//! let mut board = Board::demo();
//! board.apply(BoardCmd::BeginEdit {
//!     id: "title".into(),
//!     content: "Overview of Arm Lift Surgery".to_string(),
//! });
//! board.apply(BoardCmd::EditDraft { text: "New Title".to_string() });
//! board.apply(BoardCmd::CommitEdit);
//!
//! assert_eq!(board.blocks()[0].content, "New Title");
//! assert!(board.session().is_none());
//! ```
//!
//! Non-table blocks stage their changes in the session draft until a commit.
//! Table blocks write each field edit straight into the board and mirror it
//! into the draft, so cancelling a table edit only leaves edit mode.

pub mod board;
pub mod commands;
pub mod edit_form;

pub use board::{Board, EditSession};
pub use commands::BoardCmd;
pub use edit_form::{EditField, EditForm, FieldTarget};
