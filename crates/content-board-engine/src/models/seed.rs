use crate::models::{Block, BlockKind};

/// The demo blocks a fresh board starts with
pub fn demo_blocks() -> Vec<Block> {
    vec![
        Block::new("title", BlockKind::Title, "Overview of Arm Lift Surgery"),
        Block::new(
            "quote",
            BlockKind::Quote,
            "An arm lift, or brachioplasty, is a cosmetic procedure designed to remove excess skin and fat from the upper arms, resulting in a more toned and contoured appearance.",
        ),
        Block::new(
            "text1",
            BlockKind::Text,
            "Healthcation partners with highly skilled surgeons in top medical destinations to provide high-quality, affordable arm lift surgeries.",
        ),
        Block::new(
            "image1",
            BlockKind::Image,
            "https://example.com/arm-lift.jpg",
        ),
        Block::new(
            "list1",
            BlockKind::List,
            "Improved arm contour\nReduced excess skin\nEnhanced self-confidence",
        ),
        Block::new(
            "table1",
            BlockKind::Table,
            "Procedure,Duration,Recovery Time\nArm Lift,2-3 hours,2-3 weeks",
        ),
        Block::new(
            "html1",
            BlockKind::Html,
            r#"<div class="custom-content"><span style="color: blue;">Custom</span> HTML content</div>"#,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_blocks_cover_every_kind_once() {
        let blocks = demo_blocks();
        let kinds: Vec<_> = blocks.iter().map(|b| b.kind).collect();
        assert_eq!(kinds, BlockKind::ALL.to_vec());
    }

    #[test]
    fn test_demo_block_ids() {
        let ids: Vec<_> = demo_blocks().into_iter().map(|b| b.id.0).collect();
        assert_eq!(
            ids,
            vec!["title", "quote", "text1", "image1", "list1", "table1", "html1"]
        );
    }
}
