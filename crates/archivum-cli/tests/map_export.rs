mod common;
use common::TestFixture;
use predicates::prelude::*;

#[test]
fn export_writes_nodes_and_resolved_edges() {
    let fixture = TestFixture::new();
    let out = fixture.workspace_path().join("map.dot");

    fixture
        .command()
        .arg("map")
        .arg("export")
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("5 nodes, 1 edges"));

    let dot = std::fs::read_to_string(&out).expect("Export file missing");
    assert!(dot.starts_with("digraph archive {"));
    // Connection "X" on record b resolved to an id-based edge b -> a.
    assert!(dot.contains("\"b\" -> \"a\";"));
    assert!(dot.contains("\"a\" [label=\"X\""));
}

#[test]
fn export_defaults_to_the_fixed_filename() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .current_dir(fixture.workspace_path())
        .arg("map")
        .arg("export")
        .assert()
        .success();

    assert!(fixture.workspace_path().join("relationship-map.dot").exists());
}

#[test]
fn unresolved_connections_warn_and_produce_no_edge() {
    let dataset = r#"[
      {"id": "a", "type": "Person", "name": "X", "dates": "1818", "summary": "s",
       "connections": ["Nobody"]}
    ]"#;
    let fixture = TestFixture::with_dataset(dataset);
    let out = fixture.workspace_path().join("map.dot");

    fixture
        .command()
        .arg("map")
        .arg("export")
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "record 'a' connects to unknown name 'Nobody'",
        ));

    let dot = std::fs::read_to_string(&out).unwrap();
    assert!(!dot.contains("->"));
}
