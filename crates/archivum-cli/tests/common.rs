use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture: a temp workspace directory plus a small archive
/// dataset, with a command builder pointing the binary at both.
pub struct TestFixture {
    dir: TempDir,
}

pub const SAMPLE_DATASET: &str = r#"[
  {
    "id": "a",
    "type": "Person",
    "name": "X",
    "dates": "1818",
    "summary": "Abolitionist and orator",
    "detail": "Long-form body for X.",
    "key_terms": ["Term1", "Oratory"],
    "images": [],
    "sources": ["https://example.org/doc", "A printed citation, 1845."],
    "connections": []
  },
  {
    "id": "b",
    "type": "Event",
    "name": "Y",
    "dates": "1863",
    "summary": "Proclamation event",
    "connections": ["X"]
  },
  {
    "id": "c",
    "type": "Movement",
    "name": "M",
    "dates": "1955-1968",
    "summary": "A movement",
    "key_terms": ["Boycott"]
  },
  {
    "id": "e",
    "type": "Person",
    "name": "Z",
    "dates": "1968",
    "summary": "Later figure"
  },
  {
    "id": "d",
    "type": "Resource",
    "name": "R",
    "dates": "Ongoing",
    "summary": "A living resource"
  }
]"#;

impl TestFixture {
    pub fn new() -> Self {
        Self::with_dataset(SAMPLE_DATASET)
    }

    pub fn with_dataset(dataset: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        std::fs::write(dir.path().join("archive.json"), dataset)
            .expect("Failed to write dataset");
        Self { dir }
    }

    pub fn dataset_path(&self) -> PathBuf {
        self.dir.path().join("archive.json")
    }

    pub fn workspace_path(&self) -> &std::path::Path {
        self.dir.path()
    }

    /// A command with the dataset and workspace flags preset.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_without_dataset();
        cmd.arg("--data").arg(self.dataset_path());
        cmd
    }

    /// A command with only the workspace flag preset, for tests that
    /// pass their own `--data`.
    pub fn command_without_dataset(&self) -> Command {
        let mut cmd = Command::cargo_bin("archivum").expect("Binary not built");
        cmd.arg("--archivum-dir").arg(self.dir.path());
        cmd
    }
}
