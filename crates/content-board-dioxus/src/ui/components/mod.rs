pub mod add_item_panel;
pub mod block_card;
pub mod block_quote;
pub mod block_view;
pub mod editor_block;
pub mod error_screen;
pub mod heading;
pub mod html_block;
pub mod image_block;
pub mod list_component;
pub mod paragraph;
pub mod preview_panel;
pub mod table_block;
pub mod table_editor;

pub use add_item_panel::AddItemPanel;
pub use block_card::BlockCard;
pub use block_view::BlockView;
pub use error_screen::ErrorScreen;
pub use preview_panel::PreviewPanel;
