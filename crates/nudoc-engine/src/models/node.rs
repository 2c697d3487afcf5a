use crate::render::{HtmlOptions, html, markdown, nudoc};

/// A body block. The set of variants is closed; every renderer matches on
/// all of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Section heading.
    Topic(String),
    /// A link on its own line. `label` equals `url` when the source had none.
    Link { url: String, label: String },
    /// Bullet list, optionally introduced by a title line. Never empty.
    List {
        title: Option<String>,
        items: Vec<String>,
    },
    /// Fenced verbatim content. Every content line ends with `\n`.
    PreformattedTextBlock {
        /// Syntax-highlighting hint taken from the opening fence.
        content_type: Option<String>,
        content: String,
        /// Accessibility text taken from the closing fence.
        legend: Option<String>,
    },
    /// Verbatim content on a single line.
    PreformattedTextLine { content: String },
    /// Plain text. Every line ends with `\n`.
    Paragraph(String),
    /// Alternative (alt) text; continuation lines are joined with a space.
    Alternative(String),
}

impl Node {
    /// Kind name used in logs and diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Topic(_) => "Topic",
            Node::Link { .. } => "Link",
            Node::List { .. } => "List",
            Node::PreformattedTextBlock { .. } => "PreformattedTextBlock",
            Node::PreformattedTextLine { .. } => "PreformattedTextLine",
            Node::Paragraph(_) => "Paragraph",
            Node::Alternative(_) => "Alternative",
        }
    }

    /// Serializes the node back into nudoc source.
    pub fn to_nudoc(&self) -> String {
        nudoc::node(self)
    }

    pub fn to_markdown(&self) -> String {
        markdown::node(self)
    }

    pub fn to_html(&self, options: &HtmlOptions) -> String {
        html::node(self, options)
    }
}
