use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

fn make_config(root: &Path) -> PathBuf {
    let vault = root.join("vault");
    fs::create_dir_all(&vault).unwrap();
    let cfg = root.join("config.toml");
    fs::write(
        &cfg,
        format!(
            "version = 1\n[profiles.default]\nvault_root = \"{}\"\nlocale = \"en_US\"\n",
            vault.display()
        ),
    )
    .unwrap();
    cfg
}

fn dtask(cfg: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("dtask"));
    cmd.arg("--config").arg(cfg);
    cmd
}

#[test]
fn add_then_add_again_warns() {
    let tmp = tempdir().unwrap();
    let cfg = make_config(tmp.path());

    dtask(&cfg)
        .args(["add", "--no-open", "--date", "2025-04-16"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Today's task has been added"));

    dtask(&cfg)
        .args(["add", "--no-open", "--date", "2025-04-16"])
        .assert()
        .success()
        .stdout(predicate::str::contains("warning: Today's task already exists"));

    let content =
        fs::read_to_string(tmp.path().join("vault/DailyTasks/2025/April.md")).unwrap();
    assert_eq!(content.matches("2025-04-16").count(), 1);
}

#[test]
fn add_opens_file_with_editor() {
    let tmp = tempdir().unwrap();
    let cfg = make_config(tmp.path());

    dtask(&cfg)
        .env("EDITOR", "true")
        .args(["add", "--date", "2025-04-16"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Today's task has been added"));
}

#[test]
fn add_reports_editor_failure() {
    let tmp = tempdir().unwrap();
    let cfg = make_config(tmp.path());

    dtask(&cfg)
        .env("EDITOR", "false")
        .args(["add", "--date", "2025-04-16"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: could not open 'DailyTasks/2025/April.md'"));

    // The entry itself was written before the editor failed.
    assert!(tmp.path().join("vault/DailyTasks/2025/April.md").is_file());
}
