use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::models::{Document, Header, Node};

/// Knobs for the HTML template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlOptions {
    /// Class of the wrapper around preformatted blocks.
    pub pre_block_class: String,
    /// Add a copy button next to preformatted blocks.
    pub copy_button: bool,
    /// Heading level for topics. The document name uses `<h1>`, so this is
    /// clamped to 2..=6.
    pub topic_level: u8,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            pre_block_class: "pre-block".to_string(),
            copy_button: true,
            topic_level: 2,
        }
    }
}

impl HtmlOptions {
    fn heading(&self) -> u8 {
        self.topic_level.clamp(2, 6)
    }
}

/// Escapes `& < > " '` so the text is safe both as element content and inside
/// a quoted attribute.
pub fn escape(text: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(text)
}

pub fn document(doc: &Document, options: &HtmlOptions) -> String {
    let mut out = header(&doc.header);
    out.push_str("<main>\n");
    for n in doc.nodes() {
        out.push_str(&node(n, options));
    }
    out.push_str("</main>\n");
    out
}

/// Header region: tags, date, name, description.
pub fn header(h: &Header) -> String {
    let mut out = String::from("<header>\n<ul class=\"tags\">");
    for tag in &h.tags {
        out.push_str(&format!("<li>#{}</li>", escape(tag)));
    }
    out.push_str("</ul>\n");
    out.push_str(&format!("<time datetime=\"{0}\">{0}</time>\n", h.date));
    out.push_str(&format!("<h1>{}</h1>\n", escape(&h.name)));
    out.push_str(&format!(
        "<p class=\"description\">{}</p>\n",
        escape(&h.desc)
    ));
    out.push_str("</header>\n");
    out
}

pub fn node(node: &Node, options: &HtmlOptions) -> String {
    match node {
        Node::Topic(text) => {
            let h = options.heading();
            format!("<h{h}>{}</h{h}>\n", escape(text))
        }
        Node::Link { url, label } => {
            format!("<a href=\"{}\">{}</a>\n", escape(url), escape(label))
        }
        Node::List { title, items } => {
            let mut out = String::new();
            if let Some(title) = title {
                out.push_str(&format!("<p class=\"list-title\">{}</p>\n", escape(title)));
            }
            out.push_str("<ul>\n");
            for item in items {
                out.push_str(&format!("<li>{}</li>\n", escape(item)));
            }
            out.push_str("</ul>\n");
            out
        }
        Node::PreformattedTextBlock {
            content_type,
            content,
            legend,
        } => pre_block(content_type.as_deref(), content, legend.as_deref(), options),
        Node::PreformattedTextLine { content } => {
            format!("<pre><code>{}</code></pre>\n", escape(content))
        }
        Node::Paragraph(text) => format!("<p>{}</p>\n", escape(text.trim_end_matches('\n'))),
        Node::Alternative(text) => format!("<p class=\"alt\">{}</p>\n", escape(text)),
    }
}

fn pre_block(
    content_type: Option<&str>,
    content: &str,
    legend: Option<&str>,
    options: &HtmlOptions,
) -> String {
    let label = legend
        .map(|l| format!(" aria-label=\"{}\"", escape(l)))
        .unwrap_or_default();
    let class = content_type
        .map(|t| format!(" class=\"language-{}\"", escape(t)))
        .unwrap_or_default();

    let mut out = format!("<div class=\"{}\">\n", escape(&options.pre_block_class));
    out.push_str(&format!(
        "<pre{label}><code{class}>{}</code></pre>\n",
        escape(content)
    ));
    if legend.is_some() || options.copy_button {
        out.push_str("<div class=\"meta\">");
        if let Some(legend) = legend {
            out.push_str(&format!("<legend>{}</legend>", escape(legend)));
        }
        if options.copy_button {
            out.push_str("<button>Copy</button>");
        }
        out.push_str("</div>\n");
    }
    out.push_str("</div>\n");
    out
}
