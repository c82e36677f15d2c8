use std::collections::HashMap;
use std::path::Path;

use archivum_types::Record;

use crate::Result;

// NOTE: Why resolve connections at load time?
//
// The published dataset cross-references records by *name*, a weak join:
// renaming a record silently breaks every inbound reference. Resolving
// names into id-based links once, here, means
// - renderers only ever see links that point at real records
// - broken references surface once as diagnostics instead of degrading
//   each view slightly differently
// The raw `connections` lists stay on the records untouched; the archive
// is the source of truth and is never rewritten.

/// A resolved directed edge between two records, by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub from: String,
    pub to: String,
}

/// A problem found while loading the dataset. None of these abort the
/// load; they degrade output and are reported once by the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadDiagnostic {
    /// Two records share an id; the later one is unreachable by lookup.
    DuplicateId { id: String },

    /// A `connections` entry names no record in the dataset.
    UnresolvedConnection { from: String, name: String },
}

impl std::fmt::Display for LoadDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadDiagnostic::DuplicateId { id } => {
                write!(f, "duplicate record id '{}'", id)
            }
            LoadDiagnostic::UnresolvedConnection { from, name } => {
                write!(f, "record '{}' connects to unknown name '{}'", from, name)
            }
        }
    }
}

/// The loaded dataset: records in document order, resolved links, and
/// load diagnostics. Immutable after load.
#[derive(Debug, Clone)]
pub struct Archive {
    records: Vec<Record>,
    by_id: HashMap<String, usize>,
    links: Vec<Link>,
    diagnostics: Vec<LoadDiagnostic>,
}

impl Archive {
    /// Load the archive document from disk. One fetch, no retry: any IO
    /// or parse failure is returned as-is and the caller renders a single
    /// terminal message.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let records: Vec<Record> = serde_json::from_str(&content)?;
        Ok(Self::from_records(records))
    }

    /// Build an archive from already-deserialized records, resolving
    /// name-based connections into id links.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut diagnostics = Vec::new();

        let mut by_id: HashMap<String, usize> = HashMap::new();
        for (idx, record) in records.iter().enumerate() {
            if by_id.contains_key(&record.id) {
                diagnostics.push(LoadDiagnostic::DuplicateId {
                    id: record.id.clone(),
                });
            } else {
                by_id.insert(record.id.clone(), idx);
            }
        }

        // Name lookup for connection resolution. First record wins on
        // name collisions, matching lookup-by-name order in the source.
        let mut by_name: HashMap<&str, &str> = HashMap::new();
        for record in &records {
            by_name.entry(record.name.as_str()).or_insert(record.id.as_str());
        }

        let mut links = Vec::new();
        for record in &records {
            for target in &record.connections {
                match by_name.get(target.as_str()) {
                    Some(to_id) => links.push(Link {
                        from: record.id.clone(),
                        to: (*to_id).to_string(),
                    }),
                    None => diagnostics.push(LoadDiagnostic::UnresolvedConnection {
                        from: record.id.clone(),
                        name: target.clone(),
                    }),
                }
            }
        }

        Self {
            records,
            by_id,
            links,
            diagnostics,
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&Record> {
        self.by_id.get(id).map(|&idx| &self.records[idx])
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn diagnostics(&self) -> &[LoadDiagnostic] {
        &self.diagnostics
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn record(id: &str, kind: &str, name: &str, connections: &[&str]) -> Record {
        let conns: Vec<String> = connections.iter().map(|s| s.to_string()).collect();
        serde_json::from_value(serde_json::json!({
            "id": id,
            "type": kind,
            "name": name,
            "dates": "1850",
            "summary": "",
            "connections": conns,
        }))
        .unwrap()
    }

    #[test]
    fn resolves_connections_to_id_links() {
        let archive = Archive::from_records(vec![
            record("a", "Person", "X", &[]),
            record("b", "Event", "Y", &["X"]),
        ]);

        assert_eq!(
            archive.links(),
            &[Link {
                from: "b".to_string(),
                to: "a".to_string()
            }]
        );
        assert!(archive.diagnostics().is_empty());
    }

    #[test]
    fn unresolved_connection_becomes_diagnostic_not_link() {
        let archive = Archive::from_records(vec![record("a", "Person", "X", &["Nobody"])]);

        assert!(archive.links().is_empty());
        assert_eq!(
            archive.diagnostics(),
            &[LoadDiagnostic::UnresolvedConnection {
                from: "a".to_string(),
                name: "Nobody".to_string()
            }]
        );
    }

    #[test]
    fn duplicate_ids_are_reported_and_first_wins() {
        let archive = Archive::from_records(vec![
            record("a", "Person", "First", &[]),
            record("a", "Person", "Second", &[]),
        ]);

        assert_eq!(archive.get("a").unwrap().name, "First");
        assert_eq!(
            archive.diagnostics(),
            &[LoadDiagnostic::DuplicateId {
                id: "a".to_string()
            }]
        );
    }

    #[test]
    fn load_reads_document_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":"a","type":"Person","name":"X","dates":"1818","summary":"s"}}]"#
        )
        .unwrap();

        let archive = Archive::load(file.path()).unwrap();
        assert_eq!(archive.len(), 1);
        assert_eq!(archive.get("a").unwrap().name, "X");
    }

    #[test]
    fn load_surfaces_parse_failure() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = Archive::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("parse"));
    }

    #[test]
    fn load_surfaces_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = Archive::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
