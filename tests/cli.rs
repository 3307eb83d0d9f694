use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

fn bridge(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("colab-bridge").expect("bin");
    cmd.arg("--project-root").arg(root);
    cmd
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).expect("read")).expect("json")
}

#[test]
fn create_writes_notebook_and_prints_colab_link() {
    let dir = tempdir().expect("tempdir");

    bridge(dir.path())
        .args(["create", "beat_demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("beat_demo.ipynb"))
        .stdout(predicate::str::contains(
            "https://colab.research.google.com/github/KIMJISUNG0/techno-prompt-local/blob/main/analysis/beat_demo.ipynb",
        ));

    let notebook = read_json(&dir.path().join("analysis/beat_demo.ipynb"));
    assert_eq!(notebook["nbformat"], 4);
    assert_eq!(notebook["cells"].as_array().expect("cells").len(), 3);
    assert_eq!(notebook["cells"][0]["cell_type"], "markdown");
    let raw = fs::read_to_string(dir.path().join("analysis/beat_demo.ipynb")).expect("read");
    assert!(raw.contains("# 🎵 음악 분석 노트북"));
}

#[test]
fn create_prompts_for_missing_name() {
    let dir = tempdir().expect("tempdir");

    bridge(dir.path())
        .arg("create")
        .write_stdin("prompted\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Notebook name:"));

    assert!(dir.path().join("analysis/prompted.ipynb").exists());
}

#[test]
fn create_prompts_for_empty_name() {
    let dir = tempdir().expect("tempdir");

    bridge(dir.path())
        .args(["create", ""])
        .write_stdin("prompted\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Notebook name:"));

    assert!(dir.path().join("analysis/prompted.ipynb").exists());
}

#[test]
fn create_with_unknown_template_warns_and_succeeds() {
    let dir = tempdir().expect("tempdir");

    bridge(dir.path())
        .args(["create", "typo", "--template", "music_analysys"])
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown template 'music_analysys'"));

    assert!(dir.path().join("analysis/typo.ipynb").exists());
}

#[test]
fn create_rejects_path_separators() {
    let dir = tempdir().expect("tempdir");

    bridge(dir.path())
        .args(["create", "nested/name"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("path separator"));
}

#[test]
fn shortcuts_is_idempotent() {
    let dir = tempdir().expect("tempdir");
    let tasks_file = dir.path().join(".vscode/tasks.json");

    bridge(dir.path()).arg("shortcuts").assert().success();
    let first = fs::read_to_string(&tasks_file).expect("tasks.json");

    bridge(dir.path())
        .arg("shortcuts")
        .assert()
        .success()
        .stdout(predicate::str::contains("(0 added, 3 already present)"));
    let second = fs::read_to_string(&tasks_file).expect("tasks.json");

    assert_eq!(first, second);
    let json = read_json(&tasks_file);
    assert_eq!(json["version"], "2.0.0");
    assert_eq!(json["tasks"].as_array().expect("tasks").len(), 3);
}

#[test]
fn shortcuts_fails_on_malformed_tasks_file() {
    let dir = tempdir().expect("tempdir");
    fs::create_dir_all(dir.path().join(".vscode")).expect("mkdir");
    fs::write(dir.path().join(".vscode/tasks.json"), "not json").expect("write");

    bridge(dir.path())
        .arg("shortcuts")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));
}

#[test]
fn sync_prints_steps_without_side_effects() {
    let dir = tempdir().expect("tempdir");

    bridge(dir.path())
        .arg("sync")
        .assert()
        .success()
        .stdout(predicate::str::contains("git add analysis/"))
        .stdout(predicate::str::contains("git push origin main"));

    assert_eq!(fs::read_dir(dir.path()).expect("read_dir").count(), 0);
}

#[test]
fn download_prints_target_path() {
    let dir = tempdir().expect("tempdir");

    bridge(dir.path())
        .args(["download", "analysis/from_colab.ipynb"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Save it to analysis/from_colab.ipynb"));
}

#[test]
fn jupyter_reports_missing_server() {
    let dir = tempdir().expect("tempdir");
    fs::write(
        dir.path().join(".colab-config.json"),
        r#"{ "server_program": "colab-bridge-test-missing-jupyter" }"#,
    )
    .expect("write");

    bridge(dir.path())
        .arg("jupyter")
        .assert()
        .success()
        .stdout(predicate::str::contains("pip install jupyterlab"))
        .stdout(predicate::str::contains("colab-bridge setup"))
        .stderr(predicate::str::contains("is not installed"));
}

#[test]
fn setup_continues_past_failures() {
    let dir = tempdir().expect("tempdir");
    fs::write(
        dir.path().join(".colab-config.json"),
        r#"{ "package_manager": "colab-bridge-test-missing-pip" }"#,
    )
    .expect("write");

    bridge(dir.path())
        .arg("setup")
        .assert()
        .success()
        .stderr(predicate::str::contains("google-cloud-firestore"))
        .stdout(predicate::str::contains("9").and(predicate::str::contains("failed")));
}

#[test]
fn invalid_config_file_is_fatal_for_create() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join(".colab-config.json"), "{ nope").expect("write");

    bridge(dir.path())
        .args(["create", "beat_demo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(".colab-config.json"));

    assert!(!dir.path().join("analysis").exists());
}

#[test]
fn guidance_commands_ignore_broken_config() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join(".colab-config.json"), "{ nope").expect("write");

    bridge(dir.path())
        .args(["download", "analysis/x.ipynb"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Save it to analysis/x.ipynb"));

    bridge(dir.path())
        .arg("templates")
        .assert()
        .success();

    bridge(dir.path())
        .arg("sync")
        .assert()
        .success()
        .stdout(predicate::str::contains("git push origin main"))
        .stderr(predicate::str::contains("using defaults"));
}

#[test]
fn templates_lists_default() {
    let dir = tempdir().expect("tempdir");

    bridge(dir.path())
        .arg("templates")
        .assert()
        .success()
        .stdout(predicate::str::contains("music_analysis (default)"));
}
