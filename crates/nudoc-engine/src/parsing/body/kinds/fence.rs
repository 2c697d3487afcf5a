use std::borrow::Cow;

use crate::parsing::body::classify::Marker;

/// A line inside an open preformatted block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceLine<'a> {
    /// Verbatim content, already unescaped.
    Content(&'a str),
    /// The closing fence; carries whatever follows the fence.
    Close(&'a str),
}

/// Preformatted block fence.
///
/// Inside a block, a content line that starts with the fence is written with
/// one extra leading backtick. Any line with four or more leading backticks
/// is therefore content, and exactly three close the block.
pub struct PreformattedFence;

impl PreformattedFence {
    pub const FENCE: &'static str = Marker::PreformattedFence.sequence();
    pub const ESCAPE: char = '`';

    /// Optional metadata after a fence: the content type on the opening line,
    /// the legend on the closing one.
    pub fn meta(rest: &str) -> Option<String> {
        let meta = rest.trim();
        (!meta.is_empty()).then(|| meta.to_string())
    }

    pub fn inner(line: &str) -> FenceLine<'_> {
        match line.strip_prefix(Self::FENCE) {
            Some(rest) if rest.starts_with(Self::ESCAPE) => FenceLine::Content(&line[1..]),
            Some(rest) => FenceLine::Close(rest),
            None => FenceLine::Content(line),
        }
    }

    pub fn escape(line: &str) -> Cow<'_, str> {
        if line.starts_with(Self::FENCE) {
            Cow::Owned(format!("{}{line}", Self::ESCAPE))
        } else {
            Cow::Borrowed(line)
        }
    }
}

/// Multiline comment fence. Everything up to the closing fence is dropped.
pub struct CommentFence;

impl CommentFence {
    pub const FENCE: &'static str = Marker::CommentFence.sequence();

    pub fn closes(line: &str) -> bool {
        line.starts_with(Self::FENCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_backticks_close() {
        assert_eq!(PreformattedFence::inner("```"), FenceLine::Close(""));
        assert_eq!(
            PreformattedFence::inner("``` Output of ls"),
            FenceLine::Close(" Output of ls")
        );
    }

    #[test]
    fn escaped_fence_is_content() {
        assert_eq!(PreformattedFence::inner("````"), FenceLine::Content("```"));
        assert_eq!(
            PreformattedFence::inner("`````md"),
            FenceLine::Content("````md")
        );
    }

    #[test]
    fn other_lines_are_content() {
        assert_eq!(PreformattedFence::inner("  ```"), FenceLine::Content("  ```"));
        assert_eq!(PreformattedFence::inner(""), FenceLine::Content(""));
        assert_eq!(PreformattedFence::inner("``"), FenceLine::Content("``"));
    }

    #[test]
    fn escape_only_touches_fence_lines() {
        assert_eq!(PreformattedFence::escape("```"), "````");
        assert_eq!(PreformattedFence::escape("````x"), "`````x");
        assert_eq!(PreformattedFence::escape("fn main() {}"), "fn main() {}");
        assert!(matches!(PreformattedFence::escape("``"), Cow::Borrowed(_)));
    }

    #[test]
    fn escape_then_inner_gives_back_the_line() {
        for line in ["```", "````", "``` legend", "plain", ""] {
            let escaped = PreformattedFence::escape(line);
            assert_eq!(PreformattedFence::inner(&escaped), FenceLine::Content(line));
        }
    }

    #[test]
    fn meta_is_trimmed_and_optional() {
        assert_eq!(PreformattedFence::meta(" go "), Some("go".to_string()));
        assert_eq!(PreformattedFence::meta("   "), None);
        assert_eq!(PreformattedFence::meta(""), None);
    }

    #[test]
    fn comment_fence_closes_on_prefix() {
        assert!(CommentFence::closes("***"));
        assert!(CommentFence::closes("*** end"));
        assert!(!CommentFence::closes("** *"));
    }
}
