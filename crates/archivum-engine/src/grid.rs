use archivum_types::{Record, RecordKind};
use serde::Serialize;

/// Destination grids of the library view. Movement and Event records
/// share a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GridId {
    People,
    Movements,
    Resources,
}

/// Map a record kind to its destination grid. Exhaustive: the unknown
/// kind is a handled branch that lands nowhere, not a silent fallthrough.
pub fn destination(kind: RecordKind) -> Option<GridId> {
    match kind {
        RecordKind::Person => Some(GridId::People),
        RecordKind::Movement | RecordKind::Event => Some(GridId::Movements),
        RecordKind::Resource => Some(GridId::Resources),
        RecordKind::Unknown => None,
    }
}

/// One rendered card: the summary face of a record in a grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub id: String,
    pub kind: RecordKind,
    pub title: String,
    pub dates: String,
    pub thumbnail: String,
    pub key_terms: Vec<String>,
    pub summary: String,
}

impl Card {
    fn from_record(record: &Record) -> Self {
        Self {
            id: record.id.clone(),
            kind: record.kind,
            title: record.name.clone(),
            dates: record.dates.clone(),
            thumbnail: record.thumbnail_url(),
            key_terms: record.key_terms.clone(),
            summary: record.summary.clone(),
        }
    }
}

/// The three category grids, rebuilt from scratch on every call: prior
/// contents are fully replaced, never diffed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Grids {
    pub people: Vec<Card>,
    pub movements: Vec<Card>,
    pub resources: Vec<Card>,
}

pub fn build_grids<'a, I>(records: I) -> Grids
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut grids = Grids::default();
    for record in records {
        let grid = match destination(record.kind) {
            Some(GridId::People) => &mut grids.people,
            Some(GridId::Movements) => &mut grids.movements,
            Some(GridId::Resources) => &mut grids.resources,
            None => continue,
        };
        grid.push(Card::from_record(record));
    }
    grids
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, kind: &str, name: &str) -> Record {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "type": kind,
            "name": name,
            "dates": "1900",
            "summary": "s",
        }))
        .unwrap()
    }

    #[test]
    fn events_share_the_movements_grid() {
        let records = vec![
            record("a", "Person", "X"),
            record("b", "Movement", "M"),
            record("c", "Event", "E"),
            record("d", "Resource", "R"),
        ];

        let grids = build_grids(&records);
        assert_eq!(grids.people.len(), 1);
        assert_eq!(grids.movements.len(), 2);
        assert_eq!(grids.resources.len(), 1);
    }

    #[test]
    fn unknown_kind_lands_in_no_grid() {
        let records = vec![record("x", "Widget", "Odd")];
        let grids = build_grids(&records);
        assert_eq!(grids, Grids::default());
    }

    #[test]
    fn rebuilding_from_equal_input_is_idempotent() {
        let records = vec![record("a", "Person", "X"), record("b", "Event", "E")];
        let first = build_grids(&records);
        let second = build_grids(&records);
        assert_eq!(first, second);
    }

    #[test]
    fn card_thumbnail_uses_placeholder_when_images_missing() {
        let records = vec![record("a", "Person", "Ida B. Wells")];
        let grids = build_grids(&records);
        assert_eq!(
            grids.people[0].thumbnail,
            "https://placehold.co/400x300/1e1e1e/DAA520?text=Ida+B.+Wells"
        );
    }
}
