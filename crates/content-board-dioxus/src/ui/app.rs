use crate::ui::components::{AddItemPanel, BlockCard, PreviewPanel};
use content_board_engine::{BlockKind, Board, BoardCmd};
use dioxus::prelude::*;

const BOARD_CSS: &str = include_str!("../assets/board.css");

#[component]
pub fn App(initial_board: Board, title: String, new_item_kind: BlockKind) -> Element {
    let mut board = use_signal(|| initial_board.clone());

    // Single entry point for every user event; children only send commands
    let on_command = use_callback(move |cmd: BoardCmd| {
        board.write().apply(cmd);
    });

    let current = board.read().clone();

    rsx! {
        style { {BOARD_CSS} }
        div {
            class: "board-container",
            h1 { class: "board-title", "{title}" }
            for (index, block) in current.blocks().iter().enumerate() {
                BlockCard {
                    key: "{index}-{block.id}",
                    block: block.clone(),
                    form: current.edit_form(block),
                    on_command
                }
            }
            AddItemPanel { initial_kind: new_item_kind, on_command }
            PreviewPanel { items: current.preview() }
        }
    }
}
