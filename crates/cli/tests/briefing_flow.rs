use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn repobrief() -> Command {
    let mut cmd = Command::cargo_bin("repobrief").expect("binary builds");
    // Force the local engine regardless of the host environment
    cmd.env_remove("ANTHROPIC_API_KEY");
    cmd
}

fn write_rust_fixture(root: &std::path::Path) {
    fs::create_dir(root.join("src")).unwrap();
    fs::write(
        root.join("Cargo.toml"),
        "[package]\nname = \"fixture\"\nversion = \"0.1.0\"\n",
    )
    .unwrap();
    fs::write(root.join("src/main.rs"), "fn main() {}\n").unwrap();
}

#[test]
fn briefs_a_rust_project_locally() {
    let temp = tempdir().unwrap();
    write_rust_fixture(temp.path());

    repobrief()
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("PROJECT TYPE:     Rust project"))
        .stdout(predicate::str::contains("ENTRY POINT:      src/main.rs"))
        .stdout(predicate::str::contains("cargo build && cargo run"))
        .stdout(predicate::str::contains("Local Analysis"));
}

#[test]
fn json_mode_emits_the_briefing_shape() {
    let temp = tempdir().unwrap();
    write_rust_fixture(temp.path());

    let output = repobrief()
        .arg(temp.path())
        .arg("--json")
        .arg("--quiet")
        .output()
        .unwrap();
    assert!(output.status.success());

    let briefing: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(briefing["how_to_run"], "cargo build && cargo run");
    assert!(briefing["core_files"].is_array());
    assert!(briefing["start_editing"].is_array());
}

#[test]
fn output_flag_saves_the_report() {
    let temp = tempdir().unwrap();
    write_rust_fixture(temp.path());
    let saved = temp.path().join("briefing.txt");

    repobrief()
        .arg(temp.path())
        .arg("--output")
        .arg(&saved)
        .assert()
        .success();

    let contents = fs::read_to_string(&saved).unwrap();
    assert!(contents.contains("PROJECT TYPE:     Rust project"));
}

#[test]
fn missing_directory_fails_with_nonzero_exit() {
    let temp = tempdir().unwrap();
    repobrief()
        .arg(temp.path().join("does-not-exist"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Directory not found"));
}

#[test]
fn node_fixture_reports_node_run_command() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("package.json"), "{\"name\": \"fixture\"}").unwrap();
    fs::write(temp.path().join("index.js"), "console.log('hi')\n").unwrap();

    repobrief()
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("PROJECT TYPE:     Node.js project"))
        .stdout(predicate::str::contains("npm install && npm start"));
}
