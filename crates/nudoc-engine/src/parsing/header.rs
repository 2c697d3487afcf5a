//! # Header Parsing
//!
//! A document opens with a short run of `Key: value` lines closed by a `---`
//! sentinel line. Every recognised key must appear exactly once, so the
//! header is at most [`MAX_HEADER_LINES`] lines long.

use std::io::BufRead;
use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::{DateError, ErrorKind, ParseError, TagError};
use crate::io::LineReader;
use crate::models::{Header, HeaderKey};

/// Line that ends the header.
pub const SENTINEL: &str = "---";
/// Separator between a header key and its value.
pub const SEPARATOR: &str = ": ";
/// Marker every tag starts with in the source.
pub const TAG_MARKER: char = '#';
/// Separator between tags.
pub const TAG_DELIMITER: char = ' ';
/// All keys plus the sentinel line.
pub const MAX_HEADER_LINES: usize = HeaderKey::ALL.len() + 1;

/// Reads the header from the start of `reader`, consuming the sentinel line.
pub fn parse_header<R: BufRead>(reader: &mut LineReader<R>) -> Result<Header, ParseError> {
    let mut fields = HeaderFields::default();

    for count in 1..=MAX_HEADER_LINES {
        let Some(line) = reader.read_line()? else {
            return Err(reader.wrap_error(ErrorKind::UnterminatedHeader));
        };
        if line == SENTINEL {
            return fields.finish().map_err(|kind| reader.wrap_error(kind));
        }
        if count == MAX_HEADER_LINES {
            break;
        }
        fields.push(&line).map_err(|kind| reader.wrap_error(kind))?;
    }

    Err(reader.wrap_error(ErrorKind::TooManyHeaderLines {
        max: MAX_HEADER_LINES,
    }))
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate, ErrorKind> {
    static DATE_SHAPE: OnceLock<Regex> = OnceLock::new();
    let shape = DATE_SHAPE
        .get_or_init(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("Invalid date regex"));

    let invalid = |reason| ErrorKind::InvalidDate {
        value: value.to_string(),
        reason,
    };
    if !shape.is_match(value) {
        return Err(invalid(DateError::Format));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|err| invalid(DateError::Calendar(err)))
}

/// Parses a space separated list of `#tag` values.
///
/// Columns in errors are counted from the first character of `value`.
pub fn parse_tags(value: &str) -> Result<Vec<String>, ErrorKind> {
    parse_tags_at(value, 1)
}

/// Parses a single `#tag`, returning the name without its marker.
pub fn parse_tag(tag: &str) -> Result<String, ErrorKind> {
    parse_tag_at(tag, 1)
}

pub fn is_valid_tag_char(c: char) -> bool {
    c.is_ascii_lowercase() || c == '-'
}

fn parse_tags_at(value: &str, mut column: usize) -> Result<Vec<String>, ErrorKind> {
    let mut tags = Vec::new();
    for tag in value.split(TAG_DELIMITER) {
        tags.push(parse_tag_at(tag, column)?);
        column += tag.chars().count() + 1;
    }
    Ok(tags)
}

fn parse_tag_at(tag: &str, column: usize) -> Result<String, ErrorKind> {
    let invalid = |reason| ErrorKind::InvalidTag {
        tag: tag.to_string(),
        reason,
    };

    let Some(name) = tag.strip_prefix(TAG_MARKER) else {
        return Err(invalid(if tag.is_empty() {
            TagError::Empty
        } else {
            TagError::MissingMarker
        }));
    };
    if name.is_empty() {
        return Err(invalid(TagError::Empty));
    }
    if let Some((i, ch)) = name.chars().enumerate().find(|(_, c)| !is_valid_tag_char(*c)) {
        return Err(invalid(TagError::ForbiddenChar {
            ch,
            column: column + 1 + i,
        }));
    }
    Ok(name.to_string())
}

#[derive(Default)]
struct HeaderFields {
    name: Option<String>,
    desc: Option<String>,
    slug: Option<String>,
    date: Option<NaiveDate>,
    tags: Option<Vec<String>>,
}

impl HeaderFields {
    fn push(&mut self, line: &str) -> Result<(), ErrorKind> {
        let (key, value) = line
            .split_once(SEPARATOR)
            .ok_or(ErrorKind::MissingHeaderSeparator)?;
        let key =
            HeaderKey::from_key(key).ok_or_else(|| ErrorKind::UnknownHeaderKey(key.to_string()))?;
        if self.has(key) {
            return Err(ErrorKind::DuplicateHeaderKey(key));
        }

        match key {
            HeaderKey::Name => self.name = Some(value.to_string()),
            HeaderKey::Description => self.desc = Some(value.to_string()),
            HeaderKey::Slug => self.slug = Some(value.to_string()),
            HeaderKey::Date => self.date = Some(parse_date(value)?),
            HeaderKey::Tags => {
                let column = key.as_str().len() + SEPARATOR.len() + 1;
                self.tags = Some(parse_tags_at(value, column)?);
            }
        }
        Ok(())
    }

    fn has(&self, key: HeaderKey) -> bool {
        match key {
            HeaderKey::Name => self.name.is_some(),
            HeaderKey::Description => self.desc.is_some(),
            HeaderKey::Slug => self.slug.is_some(),
            HeaderKey::Date => self.date.is_some(),
            HeaderKey::Tags => self.tags.is_some(),
        }
    }

    fn finish(self) -> Result<Header, ErrorKind> {
        Ok(Header {
            name: self.name.ok_or(ErrorKind::MissingHeaderKey(HeaderKey::Name))?,
            desc: self
                .desc
                .ok_or(ErrorKind::MissingHeaderKey(HeaderKey::Description))?,
            slug: self.slug.ok_or(ErrorKind::MissingHeaderKey(HeaderKey::Slug))?,
            date: self.date.ok_or(ErrorKind::MissingHeaderKey(HeaderKey::Date))?,
            tags: self.tags.ok_or(ErrorKind::MissingHeaderKey(HeaderKey::Tags))?,
        })
    }
}
