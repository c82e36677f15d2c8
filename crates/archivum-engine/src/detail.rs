use archivum_types::Record;
use serde::Serialize;

/// One entry of a record's source list. Entries with a URL scheme are
/// presented as "View Source" links; everything else is plain citation
/// text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value")]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Link(String),
    Citation(String),
}

impl Source {
    pub fn classify(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Source::Link(raw.to_string())
        } else {
            Source::Citation(raw.to_string())
        }
    }
}

/// Full-content display for a single record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    pub id: String,
    pub name: String,
    pub dates: String,
    /// Long-form body, carried verbatim.
    pub body: String,
    /// One gallery entry per image URL; empty means no gallery.
    pub gallery: Vec<String>,
    pub sources: Vec<Source>,
}

impl DetailView {
    pub fn build(record: &Record) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            dates: record.dates.clone(),
            body: record.detail.clone(),
            gallery: record.images.clone(),
            sources: record.sources.iter().map(|s| Source::classify(s)).collect(),
        }
    }
}
