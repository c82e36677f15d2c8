use serde::{Deserialize, Serialize};

use crate::placeholder::placeholder_url;

// NOTE: Schema Design Goals
//
// 1. Fidelity: Mirror the archive document as published - records are
//    deserialized as-is, with no validation pass beyond what serde needs.
// 2. Closed kind set: `type` is a tagged enum over the four known kinds,
//    with an explicit Unknown catch-all so unrecognized values are a
//    handled branch rather than a deserialization failure.
// 3. Weak references: `connections` entries are record *names*, not ids.
//    The store layer resolves them into id-based links once at load time;
//    nothing downstream should join on names.

/// Archive record kind. Determines grid destination and map color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    Person,
    Movement,
    Event,
    Resource,
    /// Any `type` value outside the closed set. Lands in no grid.
    #[serde(other)]
    Unknown,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Person => "Person",
            RecordKind::Movement => "Movement",
            RecordKind::Event => "Event",
            RecordKind::Resource => "Resource",
            RecordKind::Unknown => "Unknown",
        }
    }
}

/// One archive entry: a person, movement, event, or resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// Unique identifier, stable across renders. Join key for navigation
    /// and graph edges.
    pub id: String,

    #[serde(rename = "type")]
    pub kind: RecordKind,

    /// Display title. Also the value other records' `connections` refer to.
    pub name: String,

    /// Display string, e.g. "1818" or "1955-1968". The sortable year is
    /// its leading integer span (see [`leading_year`]).
    pub dates: String,

    pub summary: String,

    /// Long-form body, rendered verbatim (may contain markup).
    #[serde(default)]
    pub detail: String,

    /// Ordered, searchable tags.
    #[serde(default)]
    pub key_terms: Vec<String>,

    /// Image URLs. Absent or empty-first-entry lists fall back to a
    /// generated placeholder keyed by name.
    #[serde(default)]
    pub images: Vec<String>,

    /// Citations; entries with a URL scheme render as links.
    #[serde(default)]
    pub sources: Vec<String>,

    /// Names of related records, defining one-directional map edges.
    #[serde(default)]
    pub connections: Vec<String>,
}

impl Record {
    /// Sortable year derived from `dates`, if it has a leading integer.
    pub fn year(&self) -> Option<i32> {
        leading_year(&self.dates)
    }

    /// Thumbnail URL: first image when present and non-empty, otherwise
    /// the generated placeholder.
    pub fn thumbnail_url(&self) -> String {
        match self.images.first() {
            Some(first) if !first.is_empty() => first.clone(),
            _ => placeholder_url(&self.name),
        }
    }
}

/// Parse the leading integer span of a date display string.
///
/// "1955-1968" yields 1955; "c. 1820" yields None (no leading digit);
/// an empty or non-numeric string yields None. A leading '-' is accepted
/// for BCE years.
pub fn leading_year(dates: &str) -> Option<i32> {
    let s = dates.trim_start();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1i32, rest),
        None => (1i32, s),
    };
    let span: String = digits.chars().take_while(|c| c.is_ascii_digit()).collect();
    if span.is_empty() {
        return None;
    }
    span.parse::<i32>().ok().map(|y| sign * y)
}
