use content_board_engine::BoardCmd;
use dioxus::events::Key;
use dioxus::prelude::*;

/// Multi-line editor bound to the session draft.
///
/// Every keystroke replaces the draft; nothing reaches the board until a
/// `CommitEdit`. Escape cancels, Ctrl+Enter saves.
#[component]
pub fn EditorBlock(draft: String, on_command: Callback<BoardCmd>) -> Element {
    rsx! {
        div {
            class: "editor-block",
            textarea {
                class: "editor-textarea",
                value: "{draft}",
                spellcheck: false,
                rows: calculate_textarea_rows(&draft),
                autofocus: true,
                oninput: move |event: Event<FormData>| {
                    on_command.call(BoardCmd::EditDraft { text: event.value() });
                },
                onkeydown: move |event: Event<KeyboardData>| {
                    if let Some(cmd) = keydown_command(&event.key(), event.modifiers().ctrl()) {
                        event.prevent_default();
                        on_command.call(cmd);
                    }
                },
            }
        }
    }
}

/// Rows for the textarea: at least 5, grows with the draft, capped at 20
fn calculate_textarea_rows(content: &str) -> u32 {
    let line_count = content.lines().count() as u32;
    line_count.clamp(5, 20)
}

fn keydown_command(key: &Key, ctrl: bool) -> Option<BoardCmd> {
    match key {
        Key::Escape => Some(BoardCmd::CancelEdit),
        Key::Enter if ctrl => Some(BoardCmd::CommitEdit),
        _ => None,
    }
}
