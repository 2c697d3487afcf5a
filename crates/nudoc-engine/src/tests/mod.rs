//! Shared fixtures for unit tests.

use chrono::NaiveDate;

use crate::models::{Body, Document, Header, Node};

/// Canonical header matching [`sample_document`].
pub const HEADER: &str = "Name: Intro to nudoc
Description: A tour of the format
Slug: intro
Date: 2024-01-01
Tags: #nudoc #docs
---
";

/// A document using every node variant.
pub fn sample_document() -> Document {
    Document {
        header: Header {
            name: "Intro to nudoc".to_string(),
            desc: "A tour of the format".to_string(),
            slug: "intro".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            tags: vec!["nudoc".to_string(), "docs".to_string()],
        },
        body: Body {
            nodes: vec![
                Node::Topic("Getting started".to_string()),
                Node::Paragraph("nudoc is <small> & simple.\nOne block per line prefix.\n".to_string()),
                Node::Link {
                    url: "https://go.dev".to_string(),
                    label: "The Go website".to_string(),
                },
                Node::List {
                    title: Some("Markers".to_string()),
                    items: vec!["# topic".to_string(), "> link".to_string()],
                },
                Node::PreformattedTextBlock {
                    content_type: Some("sh".to_string()),
                    content: "$ nudoc render intro.nudoc\n```\n".to_string(),
                    legend: Some("Rendering a file".to_string()),
                },
                Node::PreformattedTextLine {
                    content: "  indented stays".to_string(),
                },
                Node::Alternative("A terminal showing HTML output.".to_string()),
            ],
        },
    }
}
