use dailytask_core::settings::{SettingsManager, apply_setting, setting_entries};
use serde_json::Value;
use std::path::Path;
use tabled::{Table, Tabled, settings::Style};
use tracing::{error, info};

use super::{load_config, load_settings};
use crate::{SettingsArgs, SettingsCommand};

/// Longest value shown in the settings table before truncation.
const MAX_VALUE_WIDTH: usize = 48;

#[derive(Tabled)]
struct SettingRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Value")]
    value: String,
}

pub fn run(config: Option<&Path>, profile: Option<&str>, args: SettingsArgs) {
    let rc = load_config(config, profile, "settings");
    let mut manager = load_settings(&rc, "settings");

    match args.command.unwrap_or(SettingsCommand::Show { json: false }) {
        SettingsCommand::Show { json } => show(&manager, json),
        SettingsCommand::Set { key, value } => set(&mut manager, &key, &value),
        SettingsCommand::Reset => {
            if let Err(e) = manager.reset_to_defaults() {
                fail(&e);
            }
            info!(path = %manager.path().display(), "settings reset");
            println!("reset: {}", manager.path().display());
        }
    }
}

fn show(manager: &SettingsManager, json: bool) {
    if json {
        match serde_json::to_string_pretty(manager.settings()) {
            Ok(s) => println!("{s}"),
            Err(e) => fail(&e),
        }
        return;
    }

    let rows: Vec<SettingRow> = setting_entries(manager.settings())
        .into_iter()
        .map(|(key, value)| SettingRow { key, value: display_value(&value) })
        .collect();
    println!("{}", Table::new(&rows).with(Style::rounded()));
    println!("file: {}", manager.path().display());
    println!("language: {}", manager.active_language());
    println!("template: {}", display_value(&Value::from(manager.current_template())));
}

fn set(manager: &mut SettingsManager, key: &str, raw: &str) {
    let updated = match apply_setting(manager.settings(), key, raw) {
        Ok(s) => s,
        Err(e) => fail(&e),
    };
    if let Err(e) = manager.update(|s| *s = updated) {
        fail(&e);
    }
    info!(key, "setting updated");
    println!("set {key} = {raw}");
}

fn display_value(value: &Value) -> String {
    let text = match value {
        Value::String(s) => s.replace('\n', "\\n"),
        other => other.to_string(),
    };
    if text.chars().count() > MAX_VALUE_WIDTH {
        let cut: String = text.chars().take(MAX_VALUE_WIDTH).collect();
        format!("{cut}...")
    } else {
        text
    }
}

fn fail(e: &dyn std::error::Error) -> ! {
    error!("{e}");
    println!("FAIL dtask settings");
    println!("{e}");
    std::process::exit(1);
}
