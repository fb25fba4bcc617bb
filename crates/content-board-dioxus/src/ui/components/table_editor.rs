use content_board_engine::{BlockId, BoardCmd, EditField};
use dioxus::prelude::*;

/// Grid of inputs for a table block.
///
/// Each input sends its edit straight to the board, so there is no save
/// button; the grid is always showing committed content.
#[component]
pub fn TableEditor(
    block_id: BlockId,
    headers: Vec<EditField>,
    rows: Vec<Vec<EditField>>,
    on_command: Callback<BoardCmd>,
) -> Element {
    let columns = headers.len().max(1);
    let grid_style = format!("grid-template-columns: repeat({columns}, minmax(0, 1fr));");

    rsx! {
        div {
            class: "table-editor",
            div {
                class: "table-editor-row",
                style: "{grid_style}",
                for field in headers {
                    TableField { key: "{field.placeholder}", field, on_command }
                }
            }
            for (row_index, row) in rows.into_iter().enumerate() {
                div {
                    key: "{row_index}",
                    class: "table-editor-row",
                    style: "{grid_style}",
                    for field in row {
                        TableField { key: "{field.placeholder}", field, on_command }
                    }
                }
            }
            button {
                class: "button",
                onclick: move |_| on_command.call(BoardCmd::AddTableRow { id: block_id.clone() }),
                "Add Row"
            }
        }
    }
}

#[component]
fn TableField(field: EditField, on_command: Callback<BoardCmd>) -> Element {
    let target = field.target;
    rsx! {
        input {
            class: "table-input",
            value: "{field.value}",
            placeholder: "{field.placeholder}",
            oninput: move |event: Event<FormData>| {
                on_command.call(target.edit(event.value()));
            },
        }
    }
}
