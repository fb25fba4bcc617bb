pub mod editing;
pub mod models;
pub mod render;
pub mod table;

// Re-export key types for easier usage
pub use editing::{Board, BoardCmd, EditField, EditForm, EditSession, FieldTarget};
pub use models::{Block, BlockId, BlockKind, KindParseError};
pub use render::{Rendered, render};
pub use table::TableGrid;
