use crate::error::ErrorKind;
use crate::models::Node;

/// Link line: `> URL label`. The label is optional and defaults to the URL.
pub struct Link;

impl Link {
    pub const SEPARATOR: char = ' ';

    pub fn parse(rest: &str) -> Result<Node, ErrorKind> {
        let (url, label) = rest.split_once(Self::SEPARATOR).unwrap_or((rest, ""));
        if url.is_empty() {
            return Err(ErrorKind::MalformedLink);
        }
        let label = match label.trim() {
            "" => url,
            label => label,
        };
        Ok(Node::Link {
            url: url.to_string(),
            label: label.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn link(url: &str, label: &str) -> Node {
        Node::Link {
            url: url.to_string(),
            label: label.to_string(),
        }
    }

    #[test]
    fn splits_on_first_space() {
        assert_eq!(
            Link::parse("https://go.dev The Go website").unwrap(),
            link("https://go.dev", "The Go website")
        );
    }

    #[test]
    fn label_defaults_to_url() {
        assert_eq!(
            Link::parse("https://go.dev").unwrap(),
            link("https://go.dev", "https://go.dev")
        );
        assert_eq!(
            Link::parse("https://go.dev   ").unwrap(),
            link("https://go.dev", "https://go.dev")
        );
    }

    #[test]
    fn missing_url_is_an_error() {
        assert!(matches!(Link::parse(""), Err(ErrorKind::MalformedLink)));
        assert!(matches!(Link::parse(" label"), Err(ErrorKind::MalformedLink)));
    }
}
