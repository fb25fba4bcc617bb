use content_board_engine::TableGrid;
use dioxus::prelude::*;

/// Read-only table. Ragged rows are drawn with whatever cells they have.
#[component]
pub fn TableBlock(grid: TableGrid) -> Element {
    rsx! {
        table {
            class: "content-table",
            thead {
                tr {
                    for (index, header) in grid.headers.iter().enumerate() {
                        th { key: "{index}", "{header}" }
                    }
                }
            }
            tbody {
                for (row_index, row) in grid.rows.iter().enumerate() {
                    tr {
                        key: "{row_index}",
                        for (cell_index, cell) in row.iter().enumerate() {
                            td { key: "{cell_index}", "{cell}" }
                        }
                    }
                }
            }
        }
    }
}
