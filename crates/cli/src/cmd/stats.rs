use chrono::Local;
use dailytask_core::dates::{format_date, task_file_path, yesterday};
use dailytask_core::i18n::{Translate, TranslationKey};
use dailytask_core::statistics::generate_statistics_content;
use dailytask_core::storage::{FsVault, NodeKind, Vault};
use dailytask_core::tasks::{TaskStatistics, analyze_task_completion, extract_dated_entry};
use serde::Serialize;
use std::path::Path;
use tabled::{Table, Tabled, settings::Style};
use tracing::error;

use super::{load_config, load_settings};
use crate::StatsArgs;

/// Statistics for JSON output.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatsOutput {
    date: String,
    path: String,
    found: bool,
    completion_rate: u32,
    #[serde(flatten)]
    stats: TaskStatistics,
}

#[derive(Tabled)]
struct MetricRow {
    #[tabled(rename = "Metric")]
    metric: String,
    #[tabled(rename = "Value")]
    value: String,
}

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &StatsArgs) {
    let rc = load_config(config, profile, "stats");
    let settings = load_settings(&rc, "stats");
    let catalog = settings.catalog();

    let day = args.date.unwrap_or_else(|| yesterday(Local::now().date_naive()));
    let date = format_date(day);
    let path =
        task_file_path(settings.settings().effective_root_dir(), day, catalog.is_english());

    let vault = FsVault::new(&rc.vault_root);
    let content = match vault.node(&path) {
        Some(NodeKind::File) => match vault.read_file(&path) {
            Ok(content) => Some(content),
            Err(e) => {
                error!("could not read {path}: {e}");
                println!("FAIL dtask stats");
                println!("{e}");
                std::process::exit(1);
            }
        },
        _ => None,
    };

    let entry = content.as_deref().and_then(|c| extract_dated_entry(c, &date));
    let stats = entry.map(analyze_task_completion).unwrap_or_default();

    if args.json {
        let output = StatsOutput {
            date,
            path,
            found: entry.is_some(),
            completion_rate: stats.completion_rate(),
            stats,
        };
        match serde_json::to_string_pretty(&output) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                error!("could not serialize statistics: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    if entry.is_none() {
        println!("(no entry for {date} in {path})");
        return;
    }

    if args.markdown {
        if stats.is_empty() {
            println!("(no tasks in the entry for {date})");
        } else {
            print!("{}", generate_statistics_content(&stats, &catalog));
        }
        return;
    }

    let rows = vec![
        MetricRow {
            metric: catalog.translate(TranslationKey::StatisticsTotalTasks),
            value: stats.total_tasks.to_string(),
        },
        MetricRow {
            metric: catalog.translate(TranslationKey::StatisticsCompletedTasks),
            value: stats.completed_tasks.to_string(),
        },
        MetricRow {
            metric: catalog.translate(TranslationKey::StatisticsCompletionRate),
            value: format!("{}%", stats.completion_rate()),
        },
    ];
    println!("{date} ({path})");
    println!("{}", Table::new(&rows).with(Style::rounded()));

    if !stats.unfinished_tasks.is_empty() {
        println!();
        println!("{}:", catalog.translate(TranslationKey::StatisticsSuggestions));
        for task in &stats.unfinished_tasks {
            println!("- [ ] {task}");
        }
    }
}
