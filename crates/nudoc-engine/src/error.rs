use crate::models::HeaderKey;

/// A parse failure together with the 1-based line where it was detected.
///
/// The parser is fail-fast: the first error aborts the whole parse and no
/// partial [`Document`](crate::models::Document) is returned.
#[derive(Debug, thiserror::Error)]
#[error("{kind} (on line {line})")]
pub struct ParseError {
    pub line: usize,
    pub kind: ErrorKind,
}

impl ParseError {
    pub fn new(line: usize, kind: ErrorKind) -> Self {
        Self { line, kind }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    #[error("read line: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid header line: separator \": \" not found")]
    MissingHeaderSeparator,
    #[error("unknown header key {0:?}")]
    UnknownHeaderKey(String),
    #[error("duplicate header key {0}")]
    DuplicateHeaderKey(HeaderKey),
    #[error("missing header key {0}")]
    MissingHeaderKey(HeaderKey),
    #[error("too many header lines (at most {max})")]
    TooManyHeaderLines { max: usize },
    #[error("header is missing its \"---\" line")]
    UnterminatedHeader,
    #[error("invalid date {value:?}: {reason}")]
    InvalidDate { value: String, reason: DateError },
    #[error("invalid tag {tag:?}: {reason}")]
    InvalidTag { tag: String, reason: TagError },

    #[error("invalid link: missing URL")]
    MalformedLink,
    #[error("invalid list item {0:?}: expected \"- \" prefix")]
    MalformedListItem(String),
    #[error("list has no items")]
    EmptyList,
    #[error("missing trailing blank line after list")]
    UnterminatedList,
    #[error("missing closing fence for preformatted block")]
    UnterminatedPreformatted,
    #[error("missing closing fence for comment block")]
    UnterminatedComment,
    #[error("too many body lines (at most {max})")]
    TooManyBodyLines { max: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("expected YYYY-MM-DD")]
    Format,
    #[error(transparent)]
    Calendar(#[from] chrono::ParseError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagError {
    #[error("empty")]
    Empty,
    #[error("missing leading hashtag")]
    MissingMarker,
    #[error("forbidden character {ch:?} at column {column}")]
    ForbiddenChar { ch: char, column: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_line_number() {
        let err = ParseError::new(4, ErrorKind::EmptyList);
        assert_eq!(err.to_string(), "list has no items (on line 4)");
    }

    #[test]
    fn display_includes_tag_reason() {
        let err = ParseError::new(
            5,
            ErrorKind::InvalidTag {
                tag: "#aB".to_string(),
                reason: TagError::ForbiddenChar { ch: 'B', column: 9 },
            },
        );
        assert_eq!(
            err.to_string(),
            "invalid tag \"#aB\": forbidden character 'B' at column 9 (on line 5)"
        );
    }
}
