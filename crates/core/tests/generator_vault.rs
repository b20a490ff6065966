use std::fs;

use chrono::{NaiveDate, NaiveTime};
use dailytask_core::clock::FixedClock;
use dailytask_core::generator::{GenerateError, GenerateOptions, Outcome, TaskGenerator};
use dailytask_core::host::RecordingHost;
use dailytask_core::settings::{LanguageSetting, Settings, SettingsManager};
use dailytask_core::storage::FsVault;
use tempfile::tempdir;

fn clock(y: i32, m: u32, d: u32) -> FixedClock {
    let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
    FixedClock(date.and_time(NaiveTime::from_hms_opt(7, 0, 0).unwrap()))
}

fn english() -> Settings {
    Settings { language: LanguageSetting::En, ..Settings::default() }
}

#[test]
fn creates_month_file_on_disk() {
    let tmp = tempdir().unwrap();
    let g = TaskGenerator::new(
        FsVault::new(tmp.path()),
        RecordingHost::new(),
        clock(2025, 4, 16),
        english(),
        "en_US",
    );

    let outcome = g.run(GenerateOptions::default()).unwrap();
    assert_eq!(outcome, Outcome::Created { path: "DailyTasks/2025/April.md".into() });

    let file = tmp.path().join("DailyTasks/2025/April.md");
    let content = fs::read_to_string(&file).unwrap();
    assert!(content.starts_with("## 🌧️ 2025-04-16 (Wednesday)"));

    assert!(!g.run(GenerateOptions::default()).unwrap().is_created());
    assert_eq!(fs::read_to_string(&file).unwrap(), content);
}

#[test]
fn consecutive_days_share_a_file() {
    let tmp = tempdir().unwrap();
    let settings = Settings { task_statistics: true, ..english() };

    let first = TaskGenerator::new(
        FsVault::new(tmp.path()),
        RecordingHost::new(),
        clock(2025, 4, 15),
        settings.clone(),
        "en_US",
    );
    first.run(GenerateOptions::default()).unwrap();

    // Tick one task off yesterday's entry.
    let file = tmp.path().join("DailyTasks/2025/April.md");
    let ticked = fs::read_to_string(&file)
        .unwrap()
        .replacen("- [ ] Meditate", "- [x] Meditate", 1);
    fs::write(&file, ticked).unwrap();

    let second = TaskGenerator::new(
        FsVault::new(tmp.path()),
        RecordingHost::new(),
        clock(2025, 4, 16),
        settings,
        "en_US",
    );
    second.run(GenerateOptions::default()).unwrap();

    let content = fs::read_to_string(&file).unwrap();
    assert!(content.contains("- Total Tasks: 5\n- Completed Tasks: 1\n- Completion Rate: 20%"));
    assert!(content.contains("- [ ] Review yesterday's plan\n"));
    let stats_at = content.find("## 📊 Yesterday's Task Summary").unwrap();
    let today_at = content.find("2025-04-16").unwrap();
    assert!(stats_at < today_at);
}

#[test]
fn folder_in_place_of_file_fails() {
    let tmp = tempdir().unwrap();
    fs::create_dir_all(tmp.path().join("DailyTasks/2025/April.md")).unwrap();

    let g = TaskGenerator::new(
        FsVault::new(tmp.path()),
        RecordingHost::new(),
        clock(2025, 4, 16),
        english(),
        "en_US",
    );
    let err = g.run(GenerateOptions::default()).unwrap_err();
    assert!(matches!(err, GenerateError::TaskFile(ref p) if p == "DailyTasks/2025/April.md"));
}

#[test]
fn settings_file_drives_generation() {
    let tmp = tempdir().unwrap();
    let settings_path = tmp.path().join(".dailytask/data.json");
    fs::create_dir_all(settings_path.parent().unwrap()).unwrap();
    fs::write(&settings_path, r#"{ "rootDir": "Journal", "language": "zh" }"#).unwrap();

    let manager = SettingsManager::load(&settings_path, "en_US").unwrap();
    let g = TaskGenerator::new(
        FsVault::new(tmp.path()),
        RecordingHost::new(),
        clock(2025, 1, 1),
        manager.settings().clone(),
        manager.locale(),
    );

    assert_eq!(g.yesterday_task_path(), "Journal/2024/12月.md");
    let outcome = g.run(GenerateOptions::default()).unwrap();
    assert_eq!(outcome.path(), "Journal/2025/1月.md");
    assert!(tmp.path().join("Journal/2025/1月.md").is_file());
}
