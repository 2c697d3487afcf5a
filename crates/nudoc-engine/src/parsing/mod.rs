pub mod body;
pub mod header;

use std::io::BufRead;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::io::LineReader;
use crate::models::Document;

pub use body::parse_body;
pub use header::parse_header;

/// Upper bound on the number of body lines a document may have.
pub const DEFAULT_MAX_BODY_LINES: usize = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseLimits {
    pub max_body_lines: usize,
}

impl Default for ParseLimits {
    fn default() -> Self {
        Self {
            max_body_lines: DEFAULT_MAX_BODY_LINES,
        }
    }
}

/// Parses a whole document: header, sentinel, then body.
pub fn parse<R: BufRead>(reader: R) -> Result<Document, ParseError> {
    parse_with_limits(reader, &ParseLimits::default())
}

pub fn parse_with_limits<R: BufRead>(
    reader: R,
    limits: &ParseLimits,
) -> Result<Document, ParseError> {
    let mut lines = LineReader::new(reader);
    let header = parse_header(&mut lines)?;
    let body = parse_body(&mut lines, limits)?;

    log::debug!(
        "parsed {:?}: {} nodes from {} lines",
        header.slug,
        body.nodes.len(),
        lines.line() - 1
    );
    Ok(Document { header, body })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::models::Node;
    use crate::tests::{HEADER, sample_document};
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_header_and_body() {
        let input = format!("{HEADER}# Intro\n\nHello.\n");
        let doc = parse(input.as_bytes()).unwrap();

        assert_eq!(doc.header, sample_document().header);
        assert_eq!(
            doc.nodes(),
            &[
                Node::Topic("Intro".to_string()),
                Node::Paragraph("Hello.\n".to_string()),
            ]
        );
    }

    #[test]
    fn header_only_document_has_empty_body() {
        let doc = parse(HEADER.as_bytes()).unwrap();
        assert!(doc.nodes().is_empty());
    }

    #[test]
    fn body_errors_use_document_line_numbers() {
        let input = format!("{HEADER}# Intro\n| List\n- a\n");
        let err = parse(input.as_bytes()).unwrap_err();
        assert_eq!(err.line, 10);
        assert!(matches!(err.kind, ErrorKind::UnterminatedList));
    }

    #[test]
    fn document_from_str() {
        let input = format!("{HEADER}# Intro\n");
        let doc: Document = input.parse().unwrap();
        assert_eq!(doc.topics().collect::<Vec<_>>(), vec!["Intro"]);
    }
}
