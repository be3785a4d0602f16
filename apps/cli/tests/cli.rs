use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const PROVIDERS: &str = r#"[
  {"firstName": "David", "npi": 1013941673, "basicInfo": {"cred_approval_status": "APPROVED", "degree": "MD"},
   "address": [{"stateId": 33}, {"stateId": 1}], "createdAt": "2024-06-01"},
  {"firstName": "Sarah", "npi": 1000000000, "basicInfo": {"cred_approval_status": "PENDING", "degree": "NP"},
   "address": [], "createdAt": "2023-11-20"}
]"#;

const APPROVED: &str = r#"[
  {"id": "1", "field": "basicInfo.cred_approval_status", "operator": "equals", "value": "approved"},
  {"id": "2", "field": "", "operator": "", "value": null}
]"#;

const BROKEN: &str = r#"[
  {"id": "a", "field": "favoriteColor", "operator": "equals", "value": "red"},
  {"id": "b", "field": "firstName", "operator": "soundsLike", "value": "dave"}
]"#;

const FUZZY: &str = r#"[
  {"id": "f", "field": "firstName", "operator": "soundsLike", "value": "dave"}
]"#;

fn workspace() -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("providers.json"), PROVIDERS).expect("write records");
    fs::write(dir.path().join("approved.json"), APPROVED).expect("write rules");
    fs::write(dir.path().join("broken.json"), BROKEN).expect("write rules");
    fs::write(dir.path().join("fuzzy.json"), FUZZY).expect("write rules");
    dir
}

fn roster(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("roster").expect("bin");
    cmd.current_dir(dir)
        .env_remove("ROSTER_LOG")
        .env_remove("RUST_LOG")
        .env_remove("ROSTER_CONFIG")
        .env_remove("ROSTER_CATALOG");
    cmd
}

fn file(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

#[test]
fn filter_prints_matching_records() {
    let dir = workspace();
    let output = roster(dir.path())
        .args(["filter", "--records", "providers.json", "--rules", "approved.json"])
        .output()
        .expect("run filter");
    assert!(output.status.success());
    let matched: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(matched.as_array().map(Vec::len), Some(1));
    assert_eq!(matched[0]["firstName"], "David");
}

#[test]
fn filter_counts_with_existential_paths() {
    let dir = workspace();
    fs::write(
        file(&dir, "state.json"),
        r#"[{"id": "s", "field": "address.stateId", "operator": "in", "value": [33, 44]}]"#,
    )
    .expect("write rules");
    roster(dir.path())
        .args(["filter", "--records", "providers.json", "--rules", "state.json", "--count"])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn filter_reads_records_from_stdin() {
    let dir = workspace();
    roster(dir.path())
        .args(["filter", "--records", "-", "--rules", "approved.json", "--count"])
        .write_stdin(PROVIDERS)
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn now_flag_controls_in_last() {
    let dir = workspace();
    fs::write(
        file(&dir, "recent.json"),
        r#"[{"id": "r", "field": "createdAt", "operator": "inLast", "value": 30, "secondValue": "days"}]"#,
    )
    .expect("write rules");
    roster(dir.path())
        .args(["filter", "--records", "providers.json", "--rules", "recent.json"])
        .args(["--now", "2024-06-15T00:00:00Z", "--count"])
        .assert()
        .success()
        .stdout("1\n");
    roster(dir.path())
        .args(["filter", "--records", "providers.json", "--rules", "recent.json"])
        .args(["--now", "2030-01-01T00:00:00Z", "--count"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn unknown_operator_fails_open_unless_strict() {
    let dir = workspace();
    roster(dir.path())
        .args(["filter", "--records", "providers.json", "--rules", "fuzzy.json", "--count"])
        .assert()
        .success()
        .stdout("2\n");

    roster(dir.path())
        .args(["filter", "--records", "providers.json", "--rules", "broken.json", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown field 'favoriteColor'"))
        .stderr(predicate::str::contains("unknown operator 'soundsLike'"));
}

#[test]
fn settings_file_can_flip_policy() {
    let dir = workspace();
    fs::write(
        file(&dir, "roster.toml"),
        "[filter]\nunknownOperator = \"matchNone\"\n",
    )
    .expect("write settings");
    roster(dir.path())
        .args(["filter", "--records", "providers.json", "--rules", "fuzzy.json", "--count"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn validate_reports_each_bad_rule() {
    let dir = workspace();
    roster(dir.path())
        .args(["validate", "--rules", "broken.json", "--catalog", "providers"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("rule 'a'"))
        .stdout(predicate::str::contains("rule 'b'"))
        .stderr(predicate::str::contains("2 invalid rules"));

    roster(dir.path())
        .args(["validate", "--rules", "approved.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 active rules are valid for 'providers'"));
}

#[test]
fn fields_lists_catalog() {
    let dir = workspace();
    roster(dir.path())
        .args(["fields", "credentialing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("inLast"));

    roster(dir.path())
        .args(["fields", "billing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown catalog 'billing'"));
}

#[test]
fn records_must_be_an_array() {
    let dir = workspace();
    fs::write(file(&dir, "one.json"), r#"{"firstName": "David"}"#).expect("write records");
    roster(dir.path())
        .args(["filter", "--records", "one.json", "--rules", "approved.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must hold an array of records, found object"));
}
