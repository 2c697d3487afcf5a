use crate::models::{Document, Node};

/// Leading backticks of a line that could close a fence. A closing fence may
/// be indented by up to three spaces.
fn backtick_run(line: &str) -> usize {
    let rest = line.trim_start_matches(' ');
    if line.len() - rest.len() > 3 {
        return 0;
    }
    rest.chars().take_while(|c| *c == '`').count()
}

/// Shortest backtick fence that cannot be closed by any line of `content`.
fn code_fence(content: &str) -> String {
    let longest = content.lines().map(backtick_run).max().unwrap_or(0);
    "`".repeat(longest.max(2) + 1)
}

/// Escapes whatever would make `line` open a block other than a paragraph.
/// Leading whitespace is dropped, Markdown ignores it inside paragraphs.
fn plain_line(line: &str) -> String {
    let line = line.trim_start_matches([' ', '\t']);
    let digits = line.len() - line.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    let (number, rest) = line.split_at(digits);
    match rest.chars().next() {
        // Ordered list item
        Some('.' | ')') if digits > 0 => format!("{number}\\{rest}"),
        Some('#' | '-' | '+' | '*' | '_' | '=' | '>' | '`' | '~' | '<' | '[') if digits == 0 => {
            format!("\\{line}")
        }
        _ => line.to_string(),
    }
}

fn plain_text(text: &str) -> String {
    text.lines().map(|l| plain_line(l) + "\n").collect()
}

fn code_block(info: &str, content: &str) -> String {
    let fence = code_fence(content);
    let mut out = format!("{fence}{info}\n{content}");
    if !content.is_empty() && !content.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(&fence);
    out.push('\n');
    out
}

pub fn document(doc: &Document) -> String {
    let h = &doc.header;
    let mut out = format!("# {}\n\n{}\n{}", h.name, plain_text(&h.desc), h.date);
    for tag in &h.tags {
        out.push_str(&format!(" #{tag}"));
    }
    out.push('\n');
    for n in doc.nodes() {
        out.push('\n');
        out.push_str(&node(n));
    }
    out
}

pub fn node(node: &Node) -> String {
    match node {
        Node::Topic(text) => format!("## {text}\n"),
        Node::Link { url, label } => format!("[{label}]({url})\n"),
        Node::List { title, items } => {
            let mut out = title.as_deref().map(plain_text).unwrap_or_default();
            for item in items {
                out.push_str(&format!("- {}\n", plain_line(item)));
            }
            out
        }
        Node::PreformattedTextBlock {
            content_type,
            content,
            legend,
        } => {
            let mut out = code_block(content_type.as_deref().unwrap_or_default(), content);
            if let Some(legend) = legend {
                out.push('\n');
                out.push_str(&plain_text(legend));
            }
            out
        }
        Node::PreformattedTextLine { content } => code_block("", &format!("{content}\n")),
        Node::Paragraph(text) | Node::Alternative(text) => plain_text(text),
    }
}
