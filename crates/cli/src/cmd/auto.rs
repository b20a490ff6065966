use std::path::Path;

use super::{build_generator, load_config, load_settings};
use crate::AutoArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &AutoArgs) {
    let rc = load_config(config, profile, "auto");
    let settings = load_settings(&rc, "auto");
    let generator = build_generator(&rc, &settings, args.date);

    match generator.check_auto_generate() {
        None => {
            let mode = serde_json::to_string(&settings.settings().auto_generate_mode)
                .unwrap_or_default();
            println!("skipped: not due (autoGenerateMode = {mode})");
        }
        Some(true) => println!("ok: {}", generator.today_task_path()),
        Some(false) => std::process::exit(1),
    }
}
