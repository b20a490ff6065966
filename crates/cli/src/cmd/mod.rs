pub mod add;
pub mod auto;
pub mod doctor;
pub mod generate;
pub mod path;
pub mod settings;
pub mod stats;
pub mod variables;

use chrono::NaiveDate;
use dailytask_core::clock::{Clock, FixedClock, SystemClock};
use dailytask_core::config::loader::{ConfigLoader, default_config_path};
use dailytask_core::config::types::ResolvedConfig;
use dailytask_core::generator::TaskGenerator;
use dailytask_core::settings::SettingsManager;
use dailytask_core::storage::FsVault;
use std::env;
use std::path::Path;

use crate::host::TerminalHost;
use crate::logging;

pub type CliGenerator = TaskGenerator<FsVault, TerminalHost, Box<dyn Clock>>;

/// Load the config and start logging, or print a failure and exit.
pub fn load_config(config: Option<&Path>, profile: Option<&str>, command: &str) -> ResolvedConfig {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => {
            logging::init(&rc);
            rc
        }
        Err(e) => {
            println!("FAIL dtask {command}");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}

pub fn load_settings(rc: &ResolvedConfig, command: &str) -> SettingsManager {
    match SettingsManager::load(&rc.settings_file, resolve_locale(rc)) {
        Ok(manager) => manager,
        Err(e) => {
            println!("FAIL dtask {command}");
            println!("{e}");
            std::process::exit(1);
        }
    }
}

/// Profile locale first, then the usual environment variables.
pub fn resolve_locale(rc: &ResolvedConfig) -> String {
    rc.locale
        .clone()
        .or_else(|| {
            ["LC_ALL", "LC_MESSAGES", "LANG"]
                .iter()
                .filter_map(|var| env::var(var).ok())
                .find(|value| !value.is_empty())
        })
        .unwrap_or_else(|| "en_US".to_string())
}

pub fn clock_for(date: Option<NaiveDate>) -> Box<dyn Clock> {
    match date {
        Some(d) => Box::new(FixedClock::on_date(d)),
        None => Box::new(SystemClock),
    }
}

pub fn build_generator(
    rc: &ResolvedConfig,
    settings: &SettingsManager,
    date: Option<NaiveDate>,
) -> CliGenerator {
    TaskGenerator::new(
        FsVault::new(&rc.vault_root),
        TerminalHost::new(rc.vault_root.clone()),
        clock_for(date),
        settings.settings().clone(),
        settings.locale(),
    )
}
