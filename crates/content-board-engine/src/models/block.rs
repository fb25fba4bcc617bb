use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifier of a block within a board.
///
/// Ids are plain strings: seed blocks carry hand-picked ids, new blocks get
/// `kind` followed by the board length at the time of creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlockId(pub String);

impl BlockId {
    /// Id for the `position`-th block of the given kind, e.g. `text8`
    pub fn generated(kind: BlockKind, position: usize) -> Self {
        Self(format!("{}{position}", kind.as_str()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// The closed set of content types a block may have.
///
/// The kind decides both how a block is rendered and which edit form it gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    /// Section heading
    Title,
    /// Block quotation
    Quote,
    /// Plain paragraph
    #[default]
    Text,
    /// Image whose content is the source URL
    Image,
    /// Bullet list, one item per line
    List,
    /// Comma/newline delimited grid, first row is the header
    Table,
    /// Raw markup embedded without sanitization
    Html,
}

impl BlockKind {
    /// All kinds, in the order offered by the add-item selector
    pub const ALL: [BlockKind; 7] = [
        BlockKind::Title,
        BlockKind::Quote,
        BlockKind::Text,
        BlockKind::Image,
        BlockKind::List,
        BlockKind::Table,
        BlockKind::Html,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BlockKind::Title => "title",
            BlockKind::Quote => "quote",
            BlockKind::Text => "text",
            BlockKind::Image => "image",
            BlockKind::List => "list",
            BlockKind::Table => "table",
            BlockKind::Html => "html",
        }
    }

    /// Human readable label used when picking a kind for a new block
    pub fn label(self) -> &'static str {
        match self {
            BlockKind::Title => "Title (h2)",
            BlockKind::Quote => "Quote (blockquote)",
            BlockKind::Text => "Text (p)",
            BlockKind::Image => "Image (img)",
            BlockKind::List => "Unordered List (ul)",
            BlockKind::Table => "Table",
            BlockKind::Html => "Custom HTML",
        }
    }

    /// Tables commit every field edit straight to the board and have no save step
    pub fn edits_live(self) -> bool {
        self == BlockKind::Table
    }

    /// The kind after this one in [`BlockKind::ALL`], wrapping around
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown block kind: {0:?}")]
pub struct KindParseError(pub String);

impl FromStr for BlockKind {
    type Err = KindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| KindParseError(s.to_string()))
    }
}

/// One content item of a fixed kind with a raw string payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub id: BlockId,
    pub kind: BlockKind,
    pub content: String,
}

impl Block {
    pub fn new(id: impl Into<String>, kind: BlockKind, content: impl Into<String>) -> Self {
        Self {
            id: BlockId(id.into()),
            kind,
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("title", BlockKind::Title)]
    #[case("quote", BlockKind::Quote)]
    #[case("text", BlockKind::Text)]
    #[case("image", BlockKind::Image)]
    #[case("list", BlockKind::List)]
    #[case("table", BlockKind::Table)]
    #[case("html", BlockKind::Html)]
    fn test_kind_names(#[case] name: &str, #[case] kind: BlockKind) {
        assert_eq!(name.parse::<BlockKind>(), Ok(kind));
        assert_eq!(kind.as_str(), name);
    }

    #[rstest]
    #[case("")]
    #[case("Title")]
    #[case("paragraph")]
    fn test_unknown_kind_is_rejected(#[case] name: &str) {
        let err = name.parse::<BlockKind>().unwrap_err();
        assert_eq!(err, KindParseError(name.to_string()));
    }

    #[test]
    fn test_generated_id_concatenates_kind_and_position() {
        assert_eq!(BlockId::generated(BlockKind::Text, 8).as_str(), "text8");
        assert_eq!(BlockId::generated(BlockKind::Html, 1).as_str(), "html1");
    }

    #[test]
    fn test_next_kind_wraps() {
        assert_eq!(BlockKind::Title.next(), BlockKind::Quote);
        assert_eq!(BlockKind::Html.next(), BlockKind::Title);
    }

    #[test]
    fn test_only_tables_edit_live() {
        let live: Vec<_> = BlockKind::ALL.into_iter().filter(|k| k.edits_live()).collect();
        assert_eq!(live, vec![BlockKind::Table]);
    }
}
