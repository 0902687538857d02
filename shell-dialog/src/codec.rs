//! Line-oriented text encodings for the filter and place lists.
//!
//! Both formats split on any CR or LF and ignore blank lines.
//!
//! - Filters: `Display name|pattern` per line. Only the first `|` separates;
//!   a line without `|` is used as both name and pattern.
//! - Places: one folder path per line. Parsed places are always appended
//!   after the host's own places ([`PlaceOrder::Bottom`]).
//!
//! Neither format escapes anything: a `|` inside a display name cannot be
//! expressed, and surrounding whitespace is kept verbatim.

use std::path::PathBuf;

use crate::config::FilterEntry;
use crate::places::{PlaceEntry, PlaceOrder};

fn content_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(['\r', '\n'])
        .filter(|line| !line.trim().is_empty())
}

/// Parses filter text into entries, preserving line order.
pub fn parse_filters(text: &str) -> Vec<FilterEntry> {
    content_lines(text)
        .map(|line| match line.split_once('|') {
            Some((name, pattern)) => FilterEntry::new(name, pattern),
            None => FilterEntry::new(line, line),
        })
        .collect()
}

/// Encodes filters as `name|pattern` lines, each terminated by a newline.
pub fn encode_filters(filters: &[FilterEntry]) -> String {
    let mut out = String::new();
    for f in filters {
        out.push_str(&f.display_name);
        out.push('|');
        out.push_str(&f.pattern);
        out.push('\n');
    }
    out
}

/// Parses place text into entries, preserving line order.
pub fn parse_places(text: &str) -> Vec<PlaceEntry> {
    content_lines(text)
        .map(|line| PlaceEntry::new(PathBuf::from(line), PlaceOrder::Bottom))
        .collect()
}

/// Encodes place paths one per line, each terminated by a newline.
///
/// The order tag is not representable and is dropped.
pub fn encode_places<I, P>(paths: I) -> String
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    let mut out = String::new();
    for p in paths {
        out.push_str(&p.into().to_string_lossy());
        out.push('\n');
    }
    out
}
