/// The marker sequence a body line starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Topic,
    Link,
    ListTitle,
    ListItem,
    PreformattedLine,
    LineComment,
    Alternative,
    PreformattedFence,
    CommentFence,
}

impl Marker {
    /// Three character fences, checked before the two character markers.
    const FENCES: [Marker; 2] = [Marker::PreformattedFence, Marker::CommentFence];

    const PREFIXES: [Marker; 7] = [
        Marker::Topic,
        Marker::Link,
        Marker::ListTitle,
        Marker::ListItem,
        Marker::PreformattedLine,
        Marker::LineComment,
        Marker::Alternative,
    ];

    pub const fn sequence(self) -> &'static str {
        match self {
            Marker::Topic => "# ",
            Marker::Link => "> ",
            Marker::ListTitle => "| ",
            Marker::ListItem => "- ",
            Marker::PreformattedLine => "' ",
            Marker::LineComment => "* ",
            Marker::Alternative => "~ ",
            Marker::PreformattedFence => "```",
            Marker::CommentFence => "***",
        }
    }
}

/// Classification of a single body line, without reference to open blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Empty or whitespace only.
    Blank,
    /// A known marker followed by the rest of the line.
    Marked(Marker, &'a str),
    /// Anything else: paragraph text.
    Text,
}

pub fn classify(line: &str) -> LineKind<'_> {
    if is_blank(line) {
        return LineKind::Blank;
    }
    Marker::FENCES
        .into_iter()
        .chain(Marker::PREFIXES)
        .find_map(|m| line.strip_prefix(m.sequence()).map(|rest| LineKind::Marked(m, rest)))
        .unwrap_or(LineKind::Text)
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Intro", Marker::Topic, "Intro")]
    #[case("> https://go.dev Go", Marker::Link, "https://go.dev Go")]
    #[case("| Tools", Marker::ListTitle, "Tools")]
    #[case("- first", Marker::ListItem, "first")]
    #[case("' let x = 1;", Marker::PreformattedLine, "let x = 1;")]
    #[case("* note to self", Marker::LineComment, "note to self")]
    #[case("~ a cat on a mat", Marker::Alternative, "a cat on a mat")]
    #[case("```rust", Marker::PreformattedFence, "rust")]
    #[case("```", Marker::PreformattedFence, "")]
    #[case("***", Marker::CommentFence, "")]
    #[case("**** more", Marker::CommentFence, "* more")]
    fn classifies_markers(#[case] line: &str, #[case] marker: Marker, #[case] rest: &str) {
        assert_eq!(classify(line), LineKind::Marked(marker, rest));
    }

    #[rstest]
    #[case("#no-space")]
    #[case("plain text")]
    #[case("  # indented")]
    #[case("--- rule")]
    #[case("``inline``")]
    #[case("*emphasis*")]
    fn everything_else_is_text(#[case] line: &str) {
        assert_eq!(classify(line), LineKind::Text);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t")]
    fn whitespace_only_is_blank(#[case] line: &str) {
        assert_eq!(classify(line), LineKind::Blank);
    }

    #[test]
    fn marker_alone_without_space_is_text() {
        assert_eq!(classify("#"), LineKind::Text);
        assert_eq!(classify("-"), LineKind::Text);
    }
}
