#![deny(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::enum_glob_use,
    clippy::match_same_arms
)]

pub mod clock;
pub mod config;
pub mod dates;
pub mod generator;
pub mod host;
pub mod i18n;
pub mod settings;
pub mod statistics;
pub mod storage;
pub mod tasks;
pub mod templates;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// One-line build summary for `dtask doctor`.
pub fn doctor_summary() -> String {
    format!("dailytask-core v{} on {}", version(), std::env::consts::OS)
}
