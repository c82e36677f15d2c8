use archivum_types::{Record, RecordKind};

/// The four type checkboxes of the library view. "movement" covers both
/// Movement and Event records, which share a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindSelection {
    pub all: bool,
    pub person: bool,
    pub movement: bool,
    pub resource: bool,
}

impl Default for KindSelection {
    fn default() -> Self {
        Self::everything()
    }
}

impl KindSelection {
    /// The startup state: "All" checked.
    pub fn everything() -> Self {
        Self {
            all: true,
            person: false,
            movement: false,
            resource: false,
        }
    }

    /// Whether a record of this kind passes the checkbox selection.
    /// "All" overrides the per-kind checkboxes entirely.
    pub fn admits(&self, kind: RecordKind) -> bool {
        if self.all {
            return true;
        }
        match kind {
            RecordKind::Person => self.person,
            RecordKind::Movement | RecordKind::Event => self.movement,
            RecordKind::Resource => self.resource,
            RecordKind::Unknown => false,
        }
    }
}

/// A library filter: free-text query plus kind checkboxes.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    pub query: String,
    pub kinds: KindSelection,
}

impl Filter {
    pub fn matches(&self, record: &Record) -> bool {
        if !self.kinds.admits(record.kind) {
            return false;
        }

        if self.query.is_empty() {
            return true;
        }

        let needle = self.query.to_lowercase();
        record.name.to_lowercase().contains(&needle)
            || record.summary.to_lowercase().contains(&needle)
            || record
                .key_terms
                .iter()
                .any(|term| term.to_lowercase().contains(&needle))
    }
}

/// Return the matching subset in input order. Filtering feeds the grids
/// only; timeline and map always consume the full dataset.
pub fn filter_records<'a>(records: &'a [Record], filter: &Filter) -> Vec<&'a Record> {
    records.iter().filter(|r| filter.matches(r)).collect()
}
