use std::str::FromStr;

use super::{Header, Node};
use crate::error::ParseError;
use crate::parsing;

/// A fully parsed document. Either the whole document parses or nothing does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub header: Header,
    pub body: Body,
}

/// Body nodes in reading order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Body {
    pub nodes: Vec<Node>,
}

impl Document {
    pub fn nodes(&self) -> &[Node] {
        &self.body.nodes
    }

    /// Topics in document order, useful as a table of contents.
    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.body.nodes.iter().filter_map(|n| match n {
            Node::Topic(text) => Some(text.as_str()),
            _ => None,
        })
    }
}

impl FromStr for Document {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parsing::parse(s.as_bytes())
    }
}
