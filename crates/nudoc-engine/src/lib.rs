//! # nudoc-engine
//!
//! Parser and renderers for nudoc, a small line-oriented document format.
//!
//! ```text
//! Name: Intro
//! Description: A first post
//! Slug: intro
//! Date: 2024-01-01
//! Tags: #meta #nudoc
//! ---
//! # A topic
//! > https://example.com An example link
//! ```
//!
//! Input flows through a [`LineReader`], the header parser, the body parser and
//! ends up as an immutable [`Document`], which any of the renderers turn into
//! HTML, Markdown or canonical nudoc text.

pub mod error;
pub mod io;
pub mod models;
pub mod parsing;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use error::{DateError, ErrorKind, ParseError, TagError};
pub use io::LineReader;
pub use models::{Body, Document, Header, HeaderKey, Node};
pub use parsing::{ParseLimits, parse, parse_body, parse_header, parse_with_limits};
pub use render::{Format, HtmlOptions, RenderOptions, render, render_with};
