use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const FRAME: &str = "\
TABLE:  \"JOINT COORDINATES\"
   Joint=\"1\"   CoordSys=\"GLOBAL\"   XorR=0   Y=0   Z=0   SpecialJt=No
   Joint=\"2\"   CoordSys=\"GLOBAL\"   XorR=6   Y=0   _
Z=3.5

TABLE:  \"JOINT RESTRAINT ASSIGNMENTS\"
   Joint=\"1\"   U1=Yes   U2=Yes   U3=Yes

END TABLE DATA
";

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn s2kio() -> Command {
    Command::cargo_bin("s2kio").unwrap()
}

#[test]
fn test_check_prints_summary() {
    let dir = TempDir::new().unwrap();
    let file = write_file(dir.path(), "frame.s2k", FRAME);

    s2kio()
        .arg("check")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("OK  2 tables, 3 rows"))
        .stdout(predicate::str::contains("JOINT RESTRAINT ASSIGNMENTS"));
}

#[test]
fn test_check_rejects_bad_value() {
    let dir = TempDir::new().unwrap();
    let file = write_file(
        dir.path(),
        "bad.s2k",
        "TABLE:  \"JOINT COORDINATES\"\n   Joint=\"1\"   XorR=left\n\n",
    );

    s2kio()
        .arg("check")
        .arg(&file)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("left"))
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_missing_file_is_not_a_format_error() {
    s2kio()
        .args(["check", "/nonexistent/frame.s2k"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn test_normalize_writes_control_table_first() {
    let dir = TempDir::new().unwrap();
    let file = write_file(dir.path(), "frame.s2k", FRAME);
    let out = dir.path().join("normalized.s2k");

    s2kio()
        .arg("normalize")
        .arg(&file)
        .arg("-o")
        .arg(&out)
        .args(["--program-version", "23.0.0", "--units-code", "kN_m_C"])
        .assert()
        .success();

    let text = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "TABLE:  \"PROGRAM CONTROL\"");
    assert_eq!(
        lines[1],
        "   ProgramName=\"SAP2000\"   Version=\"23.0.0\"   CurrUnits=\"KN, m, C\""
    );
    assert_eq!(lines[2], " ");
    assert!(text.contains("   Joint=\"2\"   CoordSys=\"GLOBAL\"   XorR=6   Y=0   Z=3.5\n"));
    assert_eq!(lines.last(), Some(&"END TABLE DATA"));

    // Normalized output reads back and normalizes to itself
    s2kio()
        .arg("normalize")
        .arg(&out)
        .assert()
        .success()
        .stdout(text);
}

#[test]
fn test_export_json() {
    let dir = TempDir::new().unwrap();
    let file = write_file(dir.path(), "frame.s2k", FRAME);

    let output = s2kio().arg("export").arg(&file).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let joints = &value["tables"][0];
    assert_eq!(joints["name"], "JOINT COORDINATES");
    assert_eq!(joints["identifier"], "joint-coordinates");
    assert_eq!(joints["rows"][1]["Z"], 3.5);
    assert_eq!(joints["rows"][0]["SpecialJt"], false);
}

#[test]
fn test_export_csv_needs_one_table() {
    let dir = TempDir::new().unwrap();
    let file = write_file(dir.path(), "frame.s2k", FRAME);

    s2kio()
        .args(["export", "-f", "csv"])
        .arg(&file)
        .assert()
        .failure();

    s2kio()
        .args(["export", "-f", "csv", "-t", "Joint Restraint Assignments"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Joint,U1,U2,U3,R1,R2,R3\n1,Yes,Yes,Yes,,,\n"));
}

#[test]
fn test_schema_file_adds_tables() {
    let dir = TempDir::new().unwrap();
    let schema = write_file(
        dir.path(),
        "survey.json",
        r#"{"tables": [{"name": "SURVEY POINTS", "columns": [
            {"name": "Point", "type": "text"},
            {"name": "Elevation", "type": "number"}
        ]}]}"#,
    );
    let file = write_file(
        dir.path(),
        "survey.s2k",
        "TABLE:  \"SURVEY POINTS\"\n   Point=\"P1\"   Elevation=101.5\n\nEND TABLE DATA\n",
    );

    s2kio().arg("check").arg(&file).assert().code(1);

    s2kio()
        .arg("--schema")
        .arg(&schema)
        .arg("check")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("SURVEY POINTS"));
}

#[test]
fn test_tables_lists_builtin_catalog() {
    s2kio()
        .arg("tables")
        .assert()
        .success()
        .stdout(predicate::str::contains("PROGRAM CONTROL"))
        .stdout(predicate::str::contains("joint-coordinates"));

    s2kio()
        .args(["tables", "--no-builtin"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
