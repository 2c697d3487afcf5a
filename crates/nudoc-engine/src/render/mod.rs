//! # Rendering
//!
//! Pure functions from a parsed [`Document`] to text. Each target has its own
//! module with a `node` function matching every [`Node`](crate::models::Node)
//! variant and a `document` function that adds the header:
//!
//! - **`html`**: markup fragment for a page template, all text escaped
//! - **`markdown`**: nearest Markdown constructs
//! - **`nudoc`**: canonical source text that parses back to the same nodes
//!
//! Rendering never fails.

pub mod html;
pub mod markdown;
pub mod nudoc;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::Document;

pub use html::HtmlOptions;

/// Output format of [`render`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Html,
    #[serde(alias = "md")]
    Markdown,
    Nudoc,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::Html, Format::Markdown, Format::Nudoc];

    pub const fn as_str(self) -> &'static str {
        match self {
            Format::Html => "html",
            Format::Markdown => "markdown",
            Format::Nudoc => "nudoc",
        }
    }

    /// Conventional file extension for the format.
    pub const fn extension(self) -> &'static str {
        match self {
            Format::Html => "html",
            Format::Markdown => "md",
            Format::Nudoc => "nudoc",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown format {0:?} (expected html, markdown or nudoc)")]
pub struct UnknownFormat(pub String);

impl FromStr for Format {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(Format::Html),
            "markdown" | "md" => Ok(Format::Markdown),
            "nudoc" => Ok(Format::Nudoc),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

/// Everything a renderer may be configured with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub html: HtmlOptions,
}

/// Renders `doc` with default options.
pub fn render(doc: &Document, format: Format) -> String {
    render_with(doc, format, &RenderOptions::default())
}

pub fn render_with(doc: &Document, format: Format, options: &RenderOptions) -> String {
    match format {
        Format::Html => html::document(doc, &options.html),
        Format::Markdown => markdown::document(doc),
        Format::Nudoc => nudoc::document(doc),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::sample_document;
    use rstest::rstest;

    #[rstest]
    #[case("html", Format::Html)]
    #[case("HTML", Format::Html)]
    #[case("markdown", Format::Markdown)]
    #[case("md", Format::Markdown)]
    #[case("nudoc", Format::Nudoc)]
    fn parses_format_names(#[case] name: &str, #[case] format: Format) {
        assert_eq!(name.parse::<Format>().unwrap(), format);
    }

    #[test]
    fn rejects_unknown_format() {
        let err = "pdf".parse::<Format>().unwrap_err();
        assert_eq!(err, UnknownFormat("pdf".to_string()));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for format in Format::ALL {
            assert_eq!(format.to_string().parse::<Format>().unwrap(), format);
        }
    }

    #[test]
    fn render_dispatches_on_format() {
        let doc = sample_document();
        assert!(render(&doc, Format::Html).starts_with("<header>"));
        assert!(render(&doc, Format::Markdown).starts_with("# Intro to nudoc"));
        assert!(render(&doc, Format::Nudoc).starts_with("Name: Intro to nudoc\n"));
    }

    #[test]
    fn render_with_uses_html_options() {
        let doc = sample_document();
        let options = RenderOptions {
            html: HtmlOptions {
                topic_level: 3,
                ..HtmlOptions::default()
            },
        };
        let html = render_with(&doc, Format::Html, &options);
        assert!(html.contains("<h3>Getting started</h3>"));
    }
}
