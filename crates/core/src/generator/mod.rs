//! Orchestration of one day's entry: folders, duplicate check, statistics,
//! template, append, and reporting back to the host.

mod runner;
mod types;

pub use runner::{TaskGenerator, compose_entry};
pub use types::{GenerateError, GenerateOptions, Outcome};
