use archivum_types::{Record, RecordKind};
use serde::Serialize;

/// Timeline axis orientation. A layout flag only: toggling it never
/// re-sorts or re-filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

impl Orientation {
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Vertical => Orientation::Horizontal,
            Orientation::Horizontal => Orientation::Vertical,
        }
    }
}

/// One entry on the chronological axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub id: String,
    pub name: String,
    pub dates: String,
    pub year: Option<i32>,
    pub kind: RecordKind,
    /// Event-kind entries get a distinguishing accent color.
    pub accent: bool,
}

/// Build the timeline over the full dataset, sorted ascending by the
/// leading year of `dates`.
///
/// Undated records (no parseable leading integer) order after every
/// dated record, keeping their relative document order.
pub fn build_timeline(records: &[Record]) -> Vec<TimelineEntry> {
    let mut entries: Vec<TimelineEntry> = records
        .iter()
        .map(|record| TimelineEntry {
            id: record.id.clone(),
            name: record.name.clone(),
            dates: record.dates.clone(),
            year: record.year(),
            kind: record.kind,
            accent: record.kind == RecordKind::Event,
        })
        .collect();

    entries.sort_by_key(|entry| match entry.year {
        Some(year) => (false, year),
        None => (true, 0),
    });

    entries
}

/// Scan entries in layout order and return the index of the first one
/// whose year is at or past the requested year. None means no entry
/// qualifies and the caller falls through silently.
pub fn jump_to_year(entries: &[TimelineEntry], year: i32) -> Option<usize> {
    entries
        .iter()
        .position(|entry| matches!(entry.year, Some(y) if y >= year))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, kind: &str, name: &str, dates: &str) -> Record {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "type": kind,
            "name": name,
            "dates": dates,
            "summary": "s",
        }))
        .unwrap()
    }

    #[test]
    fn sorts_by_leading_year_regardless_of_input_order() {
        let records = vec![
            record("b", "Event", "Y", "1968"),
            record("a", "Person", "X", "1955-1968"),
        ];

        let entries = build_timeline(&records);
        let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn undated_records_sort_last_in_document_order() {
        let records = vec![
            record("u1", "Resource", "Undated A", "Ongoing"),
            record("a", "Person", "X", "1818"),
            record("u2", "Resource", "Undated B", "c. unknown"),
        ];

        let entries = build_timeline(&records);
        let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "u1", "u2"]);
    }

    #[test]
    fn event_entries_carry_the_accent() {
        let records = vec![
            record("a", "Person", "X", "1818"),
            record("b", "Event", "Y", "1863"),
        ];

        let entries = build_timeline(&records);
        assert!(!entries[0].accent);
        assert!(entries[1].accent);
    }

    #[test]
    fn jump_finds_first_entry_at_or_past_year() {
        let records = vec![
            record("a", "Person", "X", "1818"),
            record("b", "Event", "Y", "1863"),
            record("c", "Movement", "Z", "1955"),
        ];
        let entries = build_timeline(&records);

        assert_eq!(jump_to_year(&entries, 1863), Some(1));
        assert_eq!(jump_to_year(&entries, 1850), Some(1));
        assert_eq!(jump_to_year(&entries, 1700), Some(0));
    }

    #[test]
    fn jump_past_the_end_falls_through() {
        let records = vec![record("a", "Person", "X", "1818")];
        let entries = build_timeline(&records);
        assert_eq!(jump_to_year(&entries, 2000), None);
    }

    #[test]
    fn jump_never_lands_on_undated_entries() {
        let records = vec![record("u", "Resource", "Undated", "Ongoing")];
        let entries = build_timeline(&records);
        assert_eq!(jump_to_year(&entries, 0), None);
    }

    #[test]
    fn orientation_toggle_round_trips() {
        let o = Orientation::Vertical;
        assert_eq!(o.toggled(), Orientation::Horizontal);
        assert_eq!(o.toggled().toggled(), Orientation::Vertical);
    }
}
