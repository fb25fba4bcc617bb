use content_board_engine::{BlockKind, BoardCmd};
use dioxus::prelude::*;

/// Kind selector plus the button that appends a new, empty block
#[component]
pub fn AddItemPanel(initial_kind: BlockKind, on_command: Callback<BoardCmd>) -> Element {
    let mut selected_kind = use_signal(|| initial_kind);

    rsx! {
        div {
            class: "card",
            div {
                class: "card-content",
                h3 { class: "add-item-heading", "Add New Item" }
                div {
                    class: "add-item-controls",
                    select {
                        class: "kind-select",
                        value: "{selected_kind}",
                        onchange: move |event: Event<FormData>| {
                            match event.value().parse::<BlockKind>() {
                                Ok(kind) => selected_kind.set(kind),
                                Err(e) => log::warn!("Ignoring kind selection: {e}"),
                            }
                        },
                        for kind in BlockKind::ALL {
                            option {
                                key: "{kind}",
                                value: kind.as_str(),
                                selected: kind == *selected_kind.read(),
                                "{kind.label()}"
                            }
                        }
                    }
                    button {
                        class: "button",
                        onclick: move |_| {
                            let kind = *selected_kind.read();
                            log::info!("Adding new {kind} block");
                            on_command.call(BoardCmd::AddBlock { kind });
                        },
                        "Add New Item"
                    }
                }
            }
        }
    }
}
