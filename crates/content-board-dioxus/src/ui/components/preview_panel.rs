use crate::ui::components::block_view::BlockView;
use content_board_engine::{BlockId, Rendered};
use dioxus::prelude::*;

/// Read-only rendering of every block, in board order
#[component]
pub fn PreviewPanel(items: Vec<(BlockId, Rendered)>) -> Element {
    rsx! {
        h2 { class: "preview-heading", "Preview" }
        div {
            class: "card preview",
            div {
                class: "card-content",
                for (index, (id, rendered)) in items.into_iter().enumerate() {
                    BlockView { key: "{index}-{id}", rendered }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use content_board_engine::Board;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render as render_html;

    fn render_preview(board: &Board) -> String {
        let mut dom = VirtualDom::new_with_props(
            PreviewPanel,
            PreviewPanelProps {
                items: board.preview(),
            },
        );
        dom.rebuild_in_place();
        render_html(&dom)
    }

    #[test]
    fn test_preview_renders_seed_blocks_in_order() {
        let html = render_preview(&Board::demo());

        let positions: Vec<usize> = [
            "Overview of Arm Lift Surgery",
            "An arm lift, or brachioplasty",
            "Healthcation partners",
            "https://example.com/arm-lift.jpg",
            "Improved arm contour",
            "Recovery Time",
            "custom-content",
        ]
        .iter()
        .map(|needle| html.find(needle).expect("seed content should be rendered"))
        .collect();

        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_empty_preview() {
        let html = render_preview(&Board::default());
        assert!(html.contains("Preview"));
        assert!(!html.contains("<h2 class=\"heading\""));
    }
}
