use crate::models::{Document, Header, HeaderKey, Node};
use crate::parsing::body::classify::Marker;
use crate::parsing::body::kinds::PreformattedFence;
use crate::parsing::header::{SENTINEL, SEPARATOR, TAG_MARKER};

/// Canonical source for a whole document. Parsing the result gives back an
/// equal [`Document`].
pub fn document(doc: &Document) -> String {
    let mut out = header(&doc.header);
    for (i, n) in doc.nodes().iter().enumerate() {
        if i > 0 && !out.ends_with("\n\n") {
            out.push('\n');
        }
        out.push_str(&node(n));
    }
    out
}

pub fn header(h: &Header) -> String {
    let tags = h
        .tags
        .iter()
        .map(|t| format!("{TAG_MARKER}{t}"))
        .collect::<Vec<_>>()
        .join(" ");

    let mut out = String::new();
    for key in HeaderKey::ALL {
        let value = match key {
            HeaderKey::Name => h.name.clone(),
            HeaderKey::Description => h.desc.clone(),
            HeaderKey::Slug => h.slug.clone(),
            HeaderKey::Date => h.date.to_string(),
            HeaderKey::Tags => tags.clone(),
        };
        out.push_str(&format!("{key}{SEPARATOR}{value}\n"));
    }
    out.push_str(SENTINEL);
    out.push('\n');
    out
}

pub fn node(node: &Node) -> String {
    match node {
        Node::Topic(text) => line(Marker::Topic, text),
        Node::Link { url, label } if url == label => line(Marker::Link, url),
        Node::Link { url, label } => line(Marker::Link, &format!("{url} {label}")),
        Node::List { title, items } => {
            let mut out = title
                .as_ref()
                .map(|t| line(Marker::ListTitle, t))
                .unwrap_or_default();
            for item in items {
                out.push_str(&line(Marker::ListItem, item));
            }
            // A list is only closed by a blank line.
            out.push('\n');
            out
        }
        Node::PreformattedTextBlock {
            content_type,
            content,
            legend,
        } => {
            let mut out = format!(
                "{}{}\n",
                PreformattedFence::FENCE,
                content_type.as_deref().unwrap_or_default()
            );
            for l in content.split_inclusive('\n') {
                out.push_str(&PreformattedFence::escape(l));
            }
            if !content.is_empty() && !content.ends_with('\n') {
                out.push('\n');
            }
            out.push_str(PreformattedFence::FENCE);
            if let Some(legend) = legend {
                out.push(' ');
                out.push_str(legend);
            }
            out.push('\n');
            out
        }
        Node::PreformattedTextLine { content } => line(Marker::PreformattedLine, content),
        Node::Paragraph(text) if text.ends_with('\n') => text.clone(),
        Node::Paragraph(text) => format!("{text}\n"),
        Node::Alternative(text) => line(Marker::Alternative, text),
    }
}

fn line(marker: Marker, text: &str) -> String {
    format!("{}{text}\n", marker.sequence())
}
