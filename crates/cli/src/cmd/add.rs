use std::path::Path;

use super::{build_generator, load_config, load_settings};
use crate::AddArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &AddArgs) {
    let rc = load_config(config, profile, "add");
    let settings = load_settings(&rc, "add");
    let generator = build_generator(&rc, &settings, args.date);

    // Success and failure are reported through the terminal host.
    if !generator.add_task_manually(!args.no_open) {
        std::process::exit(1);
    }
}
