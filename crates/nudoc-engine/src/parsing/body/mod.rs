//! # Body Parsing
//!
//! Everything after the header sentinel is the body. Each block is recognised
//! by the marker sequence at the start of its first line:
//!
//! - **`classify`**: `Marker` dispatch table and `LineKind` for a single line
//! - **`kinds`**: block types owning their own syntax (fences, links)
//! - **`builder`**: `BodyBuilder` state machine accumulating open blocks
//!
//! ## Key Invariants
//!
//! - Blocks never nest; at most one block is open at a time
//! - Preformatted blocks are raw zones: no marker is recognised inside
//! - Lists, preformatted blocks and comment blocks must be closed before the
//!   end of input

pub mod builder;
pub mod classify;
pub mod kinds;

use std::io::BufRead;

pub use builder::BodyBuilder;
pub use classify::{LineKind, Marker, classify};

use crate::error::{ErrorKind, ParseError};
use crate::io::LineReader;
use crate::models::Body;

use super::ParseLimits;

/// Reads the remaining lines of `reader` as a document body.
pub fn parse_body<R: BufRead>(
    reader: &mut LineReader<R>,
    limits: &ParseLimits,
) -> Result<Body, ParseError> {
    let mut builder = BodyBuilder::new();
    let mut count = 0usize;

    while let Some(line) = reader.read_line()? {
        count += 1;
        if count > limits.max_body_lines {
            return Err(reader.wrap_error(ErrorKind::TooManyBodyLines {
                max: limits.max_body_lines,
            }));
        }
        builder.push(&line).map_err(|kind| reader.wrap_error(kind))?;
    }

    let nodes = builder.finish().map_err(|kind| reader.wrap_error(kind))?;
    Ok(Body { nodes })
}
