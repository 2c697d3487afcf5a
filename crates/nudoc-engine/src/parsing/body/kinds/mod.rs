pub mod fence;
pub mod link;

pub use fence::{CommentFence, FenceLine, PreformattedFence};
pub use link::Link;
