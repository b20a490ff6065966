use dailytask_core::generator::{GenerateOptions, Outcome};
use std::path::Path;
use tracing::error;

use super::{build_generator, load_config, load_settings};
use crate::GenerateArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &GenerateArgs) {
    let rc = load_config(config, profile, "generate");
    let settings = load_settings(&rc, "generate");
    let generator = build_generator(&rc, &settings, args.date);

    let options = GenerateOptions { open_file: args.open, quiet: args.quiet };
    match generator.run(options) {
        Ok(Outcome::Created { path }) => {
            if !args.quiet {
                println!("created: {path}");
            }
        }
        Ok(Outcome::AlreadyExists { path }) => {
            if !args.quiet {
                println!("exists:  {path}");
            }
        }
        Err(e) => {
            error!("generation failed: {e}");
            println!("FAIL dtask generate");
            println!("{e}");
            std::process::exit(1);
        }
    }
}
