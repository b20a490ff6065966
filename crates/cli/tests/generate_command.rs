use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Config with an empty vault under `root/vault`. Returns the config path.
fn make_config(root: &Path) -> PathBuf {
    let vault = root.join("vault");
    fs::create_dir_all(&vault).unwrap();
    let cfg = root.join("config.toml");
    write_file(
        &cfg,
        &format!(
            r#"
version = 1
[profiles.default]
vault_root = "{}"
locale = "en_US"
"#,
            vault.display()
        ),
    );
    cfg
}

fn dtask(cfg: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("dtask"));
    cmd.arg("--config").arg(cfg);
    cmd
}

#[test]
fn generate_creates_month_file() {
    let tmp = tempdir().unwrap();
    let cfg = make_config(tmp.path());

    dtask(&cfg)
        .args(["generate", "--date", "2025-04-16"])
        .assert()
        .success()
        .stdout(predicate::str::contains("created: DailyTasks/2025/April.md"));

    let file = tmp.path().join("vault/DailyTasks/2025/April.md");
    let content = fs::read_to_string(file).unwrap();
    assert!(content.starts_with("## 🌧️ 2025-04-16 (Wednesday)"));
    assert!(content.contains("### 🧘 Today's Plan"));
}

#[test]
fn generate_twice_reports_existing_entry() {
    let tmp = tempdir().unwrap();
    let cfg = make_config(tmp.path());

    dtask(&cfg).args(["generate", "--date", "2025-04-16"]).assert().success();
    let file = tmp.path().join("vault/DailyTasks/2025/April.md");
    let first = fs::read_to_string(&file).unwrap();

    dtask(&cfg)
        .args(["generate", "--date", "2025-04-16"])
        .assert()
        .success()
        .stdout(predicate::str::contains("exists:  DailyTasks/2025/April.md"));
    assert_eq!(fs::read_to_string(&file).unwrap(), first);
}

#[test]
fn generate_quiet_prints_nothing() {
    let tmp = tempdir().unwrap();
    let cfg = make_config(tmp.path());

    dtask(&cfg)
        .args(["generate", "--quiet", "--date", "2025-04-16"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn generate_carries_over_yesterdays_tasks() {
    let tmp = tempdir().unwrap();
    let cfg = make_config(tmp.path());
    write_file(
        &tmp.path().join("vault/.dailytask/data.json"),
        r#"{ "taskStatistics": true }"#,
    );
    write_file(
        &tmp.path().join("vault/DailyTasks/2025/April.md"),
        "## 2025-04-30\n\n- [x] shipped\n- [ ] write notes\n",
    );

    dtask(&cfg).args(["generate", "--date", "2025-05-01"]).assert().success();

    let content = fs::read_to_string(tmp.path().join("vault/DailyTasks/2025/May.md")).unwrap();
    assert!(content.starts_with("## 📊 Yesterday's Task Summary\n---\n- Total Tasks: 2\n"));
    assert!(content.contains("- Completion Rate: 50%"));
    assert!(content.contains("- [ ] write notes\n\n## 🌑 2025-05-01 (Thursday)"));
}

#[test]
fn generate_uses_custom_root_and_chinese_names() {
    let tmp = tempdir().unwrap();
    let cfg = make_config(tmp.path());
    write_file(
        &tmp.path().join("vault/.dailytask/data.json"),
        r#"{ "rootDir": "Journal/Tasks", "language": "zh" }"#,
    );

    dtask(&cfg)
        .args(["generate", "--date", "2025-04-16"])
        .assert()
        .success()
        .stdout(predicate::str::contains("created: Journal/Tasks/2025/4月.md"));

    let content =
        fs::read_to_string(tmp.path().join("vault/Journal/Tasks/2025/4月.md")).unwrap();
    assert!(content.starts_with("## 🌧️ 2025-04-16（星期三）"));
}

#[test]
fn generate_fails_when_file_blocks_root() {
    let tmp = tempdir().unwrap();
    let cfg = make_config(tmp.path());
    write_file(&tmp.path().join("vault/DailyTasks"), "not a folder");

    dtask(&cfg)
        .args(["generate", "--date", "2025-04-16"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("FAIL dtask generate"))
        .stdout(predicate::str::contains("cannot create root folder 'DailyTasks'"));
}
