use crate::error::ErrorKind;
use crate::models::Node;

use super::{
    classify::{LineKind, Marker, classify},
    kinds::{CommentFence, FenceLine, Link, PreformattedFence},
};

/// Block currently accumulating lines.
#[derive(Debug)]
enum OpenBlock {
    None,
    Paragraph {
        content: String,
    },
    List {
        title: Option<String>,
        items: Vec<String>,
    },
    Preformatted {
        content_type: Option<String>,
        content: String,
    },
    Comment {
        /// Paragraph interrupted by the comment, resumed once it closes.
        resume: Option<String>,
    },
    Alternative {
        text: String,
    },
}

/// Line-at-a-time state machine turning body lines into [`Node`]s.
pub struct BodyBuilder {
    open: OpenBlock,
    out: Vec<Node>,
}

impl BodyBuilder {
    pub fn new() -> Self {
        Self {
            open: OpenBlock::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, line: &str) -> Result<(), ErrorKind> {
        match std::mem::replace(&mut self.open, OpenBlock::None) {
            OpenBlock::None => self.dispatch(line),
            OpenBlock::Preformatted {
                content_type,
                mut content,
            } => {
                match PreformattedFence::inner(line) {
                    FenceLine::Close(rest) => self.out.push(Node::PreformattedTextBlock {
                        content_type,
                        content,
                        legend: PreformattedFence::meta(rest),
                    }),
                    FenceLine::Content(text) => {
                        content.push_str(text);
                        content.push('\n');
                        self.open = OpenBlock::Preformatted {
                            content_type,
                            content,
                        };
                    }
                }
                Ok(())
            }
            OpenBlock::Comment { resume } => {
                if CommentFence::closes(line) {
                    if let Some(content) = resume {
                        self.open = OpenBlock::Paragraph { content };
                    }
                } else {
                    log::trace!("discarding comment line {line:?}");
                    self.open = OpenBlock::Comment { resume };
                }
                Ok(())
            }
            OpenBlock::List { title, mut items } => match classify(line) {
                LineKind::Blank if items.is_empty() => Err(ErrorKind::EmptyList),
                LineKind::Blank => {
                    self.out.push(Node::List { title, items });
                    Ok(())
                }
                LineKind::Marked(Marker::ListItem, item) => {
                    items.push(item.to_string());
                    self.open = OpenBlock::List { title, items };
                    Ok(())
                }
                _ => Err(ErrorKind::MalformedListItem(line.to_string())),
            },
            OpenBlock::Paragraph { mut content } => {
                match classify(line) {
                    LineKind::Blank => {
                        self.out.push(Node::Paragraph(content));
                        return Ok(());
                    }
                    LineKind::Marked(Marker::LineComment, _) => {
                        log::trace!("skipping comment line inside paragraph");
                    }
                    LineKind::Marked(Marker::CommentFence, _) => {
                        self.open = OpenBlock::Comment {
                            resume: Some(content),
                        };
                        return Ok(());
                    }
                    _ => {
                        content.push_str(line);
                        content.push('\n');
                    }
                }
                self.open = OpenBlock::Paragraph { content };
                Ok(())
            }
            OpenBlock::Alternative { mut text } => {
                if let LineKind::Marked(Marker::Alternative, more) = classify(line) {
                    text.push(' ');
                    text.push_str(more);
                    self.open = OpenBlock::Alternative { text };
                    return Ok(());
                }
                self.out.push(Node::Alternative(text));
                self.dispatch(line)
            }
        }
    }

    /// Ends the body. Blocks that need a closing line fail here.
    pub fn finish(mut self) -> Result<Vec<Node>, ErrorKind> {
        match std::mem::replace(&mut self.open, OpenBlock::None) {
            OpenBlock::None => {}
            OpenBlock::Paragraph { content } => self.out.push(Node::Paragraph(content)),
            OpenBlock::Alternative { text } => self.out.push(Node::Alternative(text)),
            OpenBlock::List { .. } => return Err(ErrorKind::UnterminatedList),
            OpenBlock::Preformatted { .. } => return Err(ErrorKind::UnterminatedPreformatted),
            OpenBlock::Comment { .. } => return Err(ErrorKind::UnterminatedComment),
        }
        Ok(self.out)
    }

    /// Starts a new block from a line seen with nothing open.
    fn dispatch(&mut self, line: &str) -> Result<(), ErrorKind> {
        let (marker, rest) = match classify(line) {
            LineKind::Blank => return Ok(()),
            LineKind::Text => {
                self.open = OpenBlock::Paragraph {
                    content: format!("{line}\n"),
                };
                return Ok(());
            }
            LineKind::Marked(marker, rest) => (marker, rest),
        };

        match marker {
            Marker::Topic => self.out.push(Node::Topic(rest.to_string())),
            Marker::Link => self.out.push(Link::parse(rest)?),
            Marker::ListTitle => {
                self.open = OpenBlock::List {
                    title: Some(rest.to_string()),
                    items: vec![],
                }
            }
            Marker::ListItem => {
                self.open = OpenBlock::List {
                    title: None,
                    items: vec![rest.to_string()],
                }
            }
            Marker::PreformattedLine => self.out.push(Node::PreformattedTextLine {
                content: rest.to_string(),
            }),
            Marker::LineComment => log::trace!("discarding comment line {line:?}"),
            Marker::Alternative => {
                self.open = OpenBlock::Alternative {
                    text: rest.to_string(),
                }
            }
            Marker::PreformattedFence => {
                self.open = OpenBlock::Preformatted {
                    content_type: PreformattedFence::meta(rest),
                    content: String::new(),
                }
            }
            Marker::CommentFence => self.open = OpenBlock::Comment { resume: None },
        }
        Ok(())
    }
}

impl Default for BodyBuilder {
    fn default() -> Self {
        Self::new()
    }
}
