use std::fmt;

use chrono::NaiveDate;

/// Metadata block at the top of every document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub desc: String,
    pub slug: String,
    pub date: NaiveDate,
    /// Tag names without their leading `#`.
    pub tags: Vec<String>,
}

/// The fixed set of keys a header may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderKey {
    Name,
    Description,
    Slug,
    Date,
    Tags,
}

impl HeaderKey {
    /// All keys in canonical order.
    pub const ALL: [HeaderKey; 5] = [
        HeaderKey::Name,
        HeaderKey::Description,
        HeaderKey::Slug,
        HeaderKey::Date,
        HeaderKey::Tags,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            HeaderKey::Name => "Name",
            HeaderKey::Description => "Description",
            HeaderKey::Slug => "Slug",
            HeaderKey::Date => "Date",
            HeaderKey::Tags => "Tags",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }
}

impl fmt::Display for HeaderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_key_is_case_sensitive() {
        assert_eq!(HeaderKey::from_key("Slug"), Some(HeaderKey::Slug));
        assert_eq!(HeaderKey::from_key("slug"), None);
        assert_eq!(HeaderKey::from_key("Desc"), None);
    }

    #[test]
    fn all_keys_round_trip_through_as_str() {
        for key in HeaderKey::ALL {
            assert_eq!(HeaderKey::from_key(key.as_str()), Some(key));
        }
    }
}
