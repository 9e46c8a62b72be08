//! Timelog entry recognition.
//!
//! A timelog line is an entry when it starts with `YYYY-MM-DD HH:MM: `.
//! Anything else (blank day separators, `#` comments, stray text) is skipped.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;
use thiserror::Error;

/// Pre-compiled regex for the `YYYY-MM-DD HH:MM: label` entry shape.
static ENTRY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}): (.*)").unwrap()
});

/// Format of the timestamp prefix.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Label suffix marking the span ending at this entry as not worked.
pub const NON_WORK_MARKER: &str = "**";

/// Errors raised while parsing an entry-shaped line.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The prefix has the timestamp shape but is not a real date or time.
    #[error("invalid timestamp {text:?}: {source}")]
    InvalidTimestamp {
        text: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// A recognized timelog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub timestamp: NaiveDateTime,
    pub label: String,
}

impl Entry {
    /// Whether the span ending at this entry counts as worked time.
    pub fn is_work(&self) -> bool {
        !is_non_work(&self.label)
    }
}

/// Outcome of looking at a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    Entry(Entry),
    /// Not an entry: comment, blank separator or unrecognized text.
    Skip,
}

/// Returns true when the label carries the trailing `**` marker.
pub fn is_non_work(label: &str) -> bool {
    label.ends_with(NON_WORK_MARKER)
}

/// Parses one line of a timelog.
///
/// Lines that don't look like entries yield [`ParsedLine::Skip`]. A line whose
/// prefix looks like a timestamp but isn't a valid one is an error, since that
/// usually means the log itself is damaged.
pub fn parse_line(line: &str) -> Result<ParsedLine, ParseError> {
    let Some(caps) = ENTRY_RE.captures(line) else {
        return Ok(ParsedLine::Skip);
    };

    let text = &caps[1];
    let timestamp = NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT).map_err(|source| {
        ParseError::InvalidTimestamp {
            text: text.to_string(),
            source,
        }
    })?;

    Ok(ParsedLine::Entry(Entry {
        timestamp,
        label: caps[2].to_string(),
    }))
}
