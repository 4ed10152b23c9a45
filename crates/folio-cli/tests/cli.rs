use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn folio(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.arg("--root").arg(dir.path());
    cmd
}

#[test]
fn init_creates_the_workspace() {
    let dir = TempDir::new().unwrap();
    folio(&dir)
        .args(["init", "--owner", "Ada"])
        .assert()
        .success()
        .stdout(predicate::str::contains("initialized folio workspace"));

    assert!(dir.path().join(".folio/config.yaml").is_file());
}

#[test]
fn entry_add_then_list() {
    let dir = TempDir::new().unwrap();
    folio(&dir).args(["init"]).assert().success();

    folio(&dir)
        .args([
            "entry",
            "add",
            "projects",
            r#"{"title": "Tyre Wear Detector", "description": "CV pipeline"}"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("added projects entry"));

    folio(&dir)
        .args(["entry", "list", "projects"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tyre Wear Detector"));
}

#[test]
fn entry_deactivate_hides_from_default_list() {
    let dir = TempDir::new().unwrap();
    folio(&dir).args(["init"]).assert().success();

    let out = folio(&dir)
        .args([
            "--json",
            "entry",
            "add",
            "skills",
            r#"{"name": "Rust", "category": "Backend"}"#,
        ])
        .output()
        .unwrap();
    assert!(out.status.success());
    let created: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let id = created["id"].as_str().unwrap();

    folio(&dir)
        .args(["entry", "deactivate", "skills", id])
        .assert()
        .success();

    folio(&dir)
        .args(["entry", "list", "skills"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rust").not());

    folio(&dir)
        .args(["entry", "list", "skills", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rust"));
}

#[test]
fn entry_add_rejects_bad_json() {
    let dir = TempDir::new().unwrap();
    folio(&dir).args(["init"]).assert().success();

    folio(&dir)
        .args(["entry", "add", "projects", "{not json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid JSON"));
}

#[test]
fn entry_rejects_unknown_kind() {
    let dir = TempDir::new().unwrap();
    folio(&dir).args(["init"]).assert().success();

    folio(&dir)
        .args(["entry", "list", "widgets"])
        .assert()
        .failure();
}

#[test]
fn profile_set_requires_name_first() {
    let dir = TempDir::new().unwrap();
    folio(&dir).args(["init"]).assert().success();

    folio(&dir)
        .args(["profile", "set", "--title", "Engineer"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--name is required"));

    folio(&dir)
        .args(["profile", "set", "--name", "Ada", "--title", "Engineer"])
        .assert()
        .success();

    folio(&dir)
        .args(["profile", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada"));
}

#[test]
fn show_summarizes_the_landing_view() {
    let dir = TempDir::new().unwrap();
    folio(&dir).args(["init", "--owner", "Ada"]).assert().success();
    folio(&dir)
        .args([
            "entry",
            "add",
            "projects",
            r#"{"title": "Demo", "description": ""}"#,
        ])
        .assert()
        .success();

    folio(&dir)
        .args(["show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("projects"))
        .stdout(predicate::str::contains("1"));
}

#[test]
fn show_fails_before_init() {
    let dir = TempDir::new().unwrap();
    folio(&dir)
        .args(["show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not initialized"));
}
