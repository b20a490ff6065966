use std::path::Path;

use super::{build_generator, load_config, load_settings};
use crate::PathArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &PathArgs) {
    let rc = load_config(config, profile, "path");
    let settings = load_settings(&rc, "path");
    let generator = build_generator(&rc, &settings, args.date);

    let relative = if args.yesterday {
        generator.yesterday_task_path()
    } else {
        generator.today_task_path()
    };
    println!("{}", rc.vault_root.join(relative).display());
}
