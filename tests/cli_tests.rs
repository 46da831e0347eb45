//! End-to-end tests for the `check`, `update`, `resolve` and `books` commands.
//!
//! Each test writes a small question bank to a temporary directory and runs the
//! compiled binary against it.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};

fn bin() -> Command {
    Command::cargo_bin("bijbelquiz-refs").expect("binary should be built")
}

fn write_questions(dir: &Path, questions: &Value) -> PathBuf {
    let path = dir.join("questions.json");
    std::fs::write(&path, serde_json::to_string_pretty(questions).unwrap()).unwrap();
    path
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_check_lists_failing_references() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_questions(
        dir.path(),
        &json!([
            {"id": "q1", "biblicalReference": "Genesis 1:1"},
            {"id": "q2", "biblicalReference": "Ester 2:17"},
            {"id": "q3", "biblicalReference": "Nonexistentbook 1:1"},
            {"id": "q4"}
        ]),
    );

    bin()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout("q2: Ester\nq3: Nonexistentbook\n");
}

#[test]
fn test_check_blank_reference_passes() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_questions(dir.path(), &json!([{"id": "q1", "biblicalReference": ""}]));

    bin()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_check_respects_max_checks() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_questions(
        dir.path(),
        &json!([
            {"id": "q1", "biblicalReference": "Ester 1:1"},
            {"id": "q2", "biblicalReference": "Psalm 23"}
        ]),
    );

    bin()
        .arg("check")
        .arg(&path)
        .arg("1")
        .assert()
        .success()
        .stdout("q1: Ester\n");
}

#[test]
fn test_check_rejects_non_integer_max_checks() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_questions(dir.path(), &json!([]));

    bin()
        .arg("check")
        .arg(&path)
        .arg("many")
        .assert()
        .failure()
        .stderr(predicate::str::contains("many"));
}

#[test]
fn test_check_rejects_negative_max_checks() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_questions(dir.path(), &json!([{"id": "q1", "biblicalReference": "Ester 1:1"}]));

    // Read as a value for MAX_CHECKS, not as an unknown flag
    bin()
        .arg("check")
        .arg(&path)
        .arg("-5")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("invalid value '-5'"))
        .stderr(predicate::str::contains("MAX_CHECKS"));
}

#[test]
fn test_check_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_questions(
        dir.path(),
        &json!([
            {"id": "q1", "biblicalReference": "Psalm 23"},
            {"id": "q2", "biblicalReference": "Genesis abc"}
        ]),
    );

    let output = bin()
        .args(["--format", "json", "check"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["examined"], 2);
    assert_eq!(report["failures"], json!([{"id": "q1", "book": "Psalm"}]));
    assert_eq!(report["unparseable"], json!(["q2"]));
}

#[test]
fn test_missing_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.json");

    bin()
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("❌ Error: File not found"))
        .stderr(predicate::str::contains("nope.json"));
}

#[test]
fn test_invalid_json_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("questions.json");
    std::fs::write(&path, "[{\"id\": \"q1\",").unwrap();

    bin()
        .arg("update")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON in"));
}

#[test]
fn test_non_array_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_questions(dir.path(), &json!({"id": "q1"}));

    bin()
        .arg("update")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expected questions to be a list"));

    // Nothing was written
    assert!(!dir.path().join("questions.json.backup").exists());
}

#[test]
fn test_update_rewrites_and_backs_up() {
    let dir = tempfile::tempdir().unwrap();
    let original = json!([{"id": "q1", "biblicalReference": "Ester 1:1"}]);
    let path = write_questions(dir.path(), &original);

    bin()
        .arg("update")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated: Ester 1:1 → Esther 1:1"))
        .stdout(predicate::str::contains("Creating backup:"))
        .stdout(predicate::str::contains("questions.json.backup"))
        .stdout(predicate::str::contains(
            "✅ Successfully updated 1 biblical references",
        ));

    let updated = read_json(&path);
    assert_eq!(updated[0]["biblicalReference"], "Esther 1:1");

    let backup = read_json(&dir.path().join("questions.json.backup"));
    assert_eq!(backup, original);
}

#[test]
fn test_update_preserves_other_fields_and_unicode() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("questions.json");
    std::fs::write(
        &path,
        r#"[{"question": "Wie schreef 1 Korintiërs?", "id": "q1", "biblicalReference": "1 Korinthe 1:1", "answers": ["Paulus", "Petrus"]}]"#,
    )
    .unwrap();

    bin().arg("update").arg(&path).arg("no-backup").assert().success();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"biblicalReference\": \"1 Korintiërs 1:1\""));
    assert!(text.contains("Wie schreef 1 Korintiërs?"));
    // Key order is kept
    let question_pos = text.find("\"question\"").unwrap();
    let id_pos = text.find("\"id\"").unwrap();
    assert!(question_pos < id_pos);
    assert!(text.starts_with("[\n  {\n    \"question\""));
}

#[test]
fn test_update_without_backup() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_questions(dir.path(), &json!([{"id": "q1", "biblicalReference": "Psalm 23"}]));

    for flag in ["no-backup", "FALSE", "0"] {
        bin().arg("update").arg(&path).arg(flag).assert().success();
        assert!(!dir.path().join("questions.json.backup").exists());
    }

    assert_eq!(read_json(&path)[0]["biblicalReference"], "Psalmen 23");
}

#[test]
fn test_update_nothing_to_do() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_questions(
        dir.path(),
        &json!([{"id": "q1", "biblicalReference": "Genesis 1:1"}, {"id": "q2"}]),
    );
    let before = std::fs::read_to_string(&path).unwrap();

    bin()
        .arg("update")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ No biblical references needed updating"));

    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn test_update_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_questions(
        dir.path(),
        &json!([
            {"id": "q1", "biblicalReference": "1 Samuel 1:1"},
            {"id": "q2", "biblicalReference": "Psalm 1 en 2"}
        ]),
    );

    bin().arg("update").arg(&path).arg("0").assert().success();
    let first = std::fs::read_to_string(&path).unwrap();

    bin()
        .arg("update")
        .arg(&path)
        .arg("0")
        .assert()
        .success()
        .stdout(predicate::str::contains("No biblical references needed updating"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), first);
}

#[test]
fn test_update_dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_questions(dir.path(), &json!([{"id": "q1", "biblicalReference": "Ester 1:1"}]));
    let before = std::fs::read_to_string(&path).unwrap();

    bin()
        .args(["update", "--dry-run"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated: Ester 1:1 → Esther 1:1"))
        .stdout(predicate::str::contains("would be updated"));

    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    assert!(!dir.path().join("questions.json.backup").exists());
}

#[cfg(unix)]
#[test]
fn test_update_aborts_when_backup_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_questions(dir.path(), &json!([{"id": "q1", "biblicalReference": "Ester 1:1"}]));
    let before = std::fs::read_to_string(&path).unwrap();

    // A directory where the backup file should go makes the backup write fail
    std::fs::create_dir(dir.path().join("questions.json.backup")).unwrap();

    bin()
        .arg("update")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("❌ Error:"));

    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn test_resolve_command() {
    bin()
        .args(["resolve", "Genesis 1:1-3", "1 Samuel 17"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Genesis 1:1-3 => Genesis (#1), chapter 1, verses 1-3",
        ))
        .stdout(predicate::str::contains("1 Samuel 17 => 1 Samuël (#9), chapter 17"))
        .stdout(predicate::str::contains("suggested spelling: 1 Samuël 17"));

    bin()
        .args(["resolve", "Ester 1:1"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("unknown book 'Ester'"))
        .stdout(predicate::str::contains("suggested spelling: Esther 1:1"));
}

#[test]
fn test_books_command() {
    bin()
        .args(["--format", "tsv", "books"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("number\tname\n1\tGenesis\n"))
        .stdout(predicate::str::contains("67\tOpenbaring\n"));

    bin()
        .args(["books", "--aliases"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Psalm → Psalmen"));
}

#[test]
fn test_custom_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = dir.path().join("catalog.json");
    std::fs::write(
        &catalog,
        r#"{"version": "1.0.0", "books": [{"number": 1, "name": "Genesis"}], "aliases": [{"alias": "Gen", "canonical": "Genesis"}]}"#,
    )
    .unwrap();
    let path = write_questions(
        dir.path(),
        &json!([
            {"id": "q1", "biblicalReference": "Gen 1:1"},
            {"id": "q2", "biblicalReference": "Exodus 3"}
        ]),
    );

    bin()
        .arg("--catalog")
        .arg(&catalog)
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout("q1: Gen\nq2: Exodus\n");

    bin()
        .arg("--catalog")
        .arg(&catalog)
        .args(["update"])
        .arg(&path)
        .arg("no-backup")
        .assert()
        .success();
    assert_eq!(read_json(&path)[0]["biblicalReference"], "Genesis 1:1");
}
