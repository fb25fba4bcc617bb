use crate::ui::components::{
    block_view::BlockView, editor_block::EditorBlock, table_editor::TableEditor,
};
use content_board_engine::{Block, BoardCmd, EditForm, render};
use dioxus::prelude::*;

/// Card for one block on the board.
///
/// With an edit form the card shows the editor plus Save (not for tables)
/// and Cancel; otherwise the rendered block plus Edit and Delete.
#[component]
pub fn BlockCard(block: Block, form: Option<EditForm>, on_command: Callback<BoardCmd>) -> Element {
    let body = match form {
        Some(form) => rsx! {
            EditingCard { block: block.clone(), form, on_command }
        },
        None => {
            let edit_id = block.id.clone();
            let edit_content = block.content.clone();
            let delete_id = block.id.clone();
            rsx! {
                BlockView { rendered: render(&block) }
                div {
                    class: "card-actions",
                    button {
                        class: "button",
                        onclick: move |_| {
                            on_command.call(BoardCmd::BeginEdit {
                                id: edit_id.clone(),
                                content: edit_content.clone(),
                            });
                        },
                        "Edit"
                    }
                    button {
                        class: "button destructive",
                        onclick: move |_| on_command.call(BoardCmd::DeleteBlock { id: delete_id.clone() }),
                        "Delete"
                    }
                }
            }
        }
    };

    rsx! {
        div {
            class: "card",
            div { class: "card-content", {body} }
        }
    }
}

#[component]
fn EditingCard(block: Block, form: EditForm, on_command: Callback<BoardCmd>) -> Element {
    let allows_save = form.allows_save();
    let editor = match form {
        EditForm::TextArea { draft } => rsx! {
            EditorBlock { draft, on_command }
        },
        EditForm::TableGrid { headers, rows } => rsx! {
            TableEditor { block_id: block.id.clone(), headers, rows, on_command }
        },
    };

    rsx! {
        {editor}
        div {
            class: "card-actions",
            if allows_save {
                button {
                    class: "button",
                    onclick: move |_| on_command.call(BoardCmd::CommitEdit),
                    "Save"
                }
            }
            button {
                class: "button outline",
                onclick: move |_| on_command.call(BoardCmd::CancelEdit),
                "Cancel"
            }
        }
    }
}
