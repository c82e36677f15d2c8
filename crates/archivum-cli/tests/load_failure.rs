mod common;
use common::TestFixture;
use predicates::prelude::*;

#[test]
fn missing_dataset_is_a_single_terminal_error() {
    let fixture = TestFixture::new();

    fixture
        .command_without_dataset()
        .arg("--data")
        .arg(fixture.workspace_path().join("does-not-exist.json"))
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load archive dataset"));
}

#[test]
fn malformed_dataset_is_a_single_terminal_error() {
    let fixture = TestFixture::with_dataset("{ not an array ]");

    fixture
        .command()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load archive dataset"));
}

#[test]
fn duplicate_ids_warn_but_do_not_abort() {
    let dataset = r#"[
      {"id": "a", "type": "Person", "name": "First", "dates": "1818", "summary": "s"},
      {"id": "a", "type": "Person", "name": "Second", "dates": "1820", "summary": "s"}
    ]"#;
    let fixture = TestFixture::with_dataset(dataset);

    fixture
        .command()
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("duplicate record id 'a'"));
}

#[test]
fn json_format_keeps_stdout_machine_readable_despite_diagnostics() {
    let dataset = r#"[
      {"id": "a", "type": "Person", "name": "X", "dates": "1818", "summary": "s",
       "connections": ["Nobody"]}
    ]"#;
    let fixture = TestFixture::with_dataset(dataset);

    let output = fixture
        .command()
        .arg("list")
        .arg("--format")
        .arg("json")
        .output()
        .expect("Failed to run list");

    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be pure JSON");
    assert_eq!(parsed["people"].as_array().unwrap().len(), 1);
}
