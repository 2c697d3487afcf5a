pub mod document;
pub mod header;
pub mod node;

pub use document::{Body, Document};
pub use header::{Header, HeaderKey};
pub use node::Node;
