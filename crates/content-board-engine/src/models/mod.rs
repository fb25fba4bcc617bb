pub mod block;
pub mod seed;

pub use block::{Block, BlockId, BlockKind, KindParseError};
pub use seed::demo_blocks;
