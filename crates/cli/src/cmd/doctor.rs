use dailytask_core::config::loader::{ConfigLoader, default_config_path};
use dailytask_core::doctor_summary;
use std::path::Path;

use super::{build_generator, load_settings};
use crate::logging;

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => {
            logging::init(&rc);
            let settings = load_settings(&rc, "doctor");
            let generator = build_generator(&rc, &settings, None);

            println!("OK   dtask doctor");
            println!("{}", doctor_summary());
            println!(
                "path: {}",
                config.map_or_else(
                    || default_config_path().display().to_string(),
                    |p| p.display().to_string()
                )
            );
            println!("profile: {}", rc.active_profile);
            println!("vault_root: {}", rc.vault_root.display());
            println!("settings_file: {}", rc.settings_file.display());
            println!("settings_file.exists: {}", rc.settings_file.exists());
            println!("locale: {}", settings.locale());
            println!("language: {}", settings.active_language());
            println!("root_dir: {}", settings.settings().effective_root_dir());
            println!("custom_template: {}", settings.has_custom_template());
            println!("today: {}", generator.today_task_path());
        }
        Err(e) => {
            println!("FAIL dtask doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}
