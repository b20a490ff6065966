//! Checkbox task parsing and completion analysis.

pub mod sections;

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

pub use sections::{
    Section, extract_dated_entry, has_dated_entry, split_sections, statistics_precede_entry,
};

static TASK_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*-\s*\[([ xX])\]\s*(.+)$").expect("valid regex"));

/// One `- [ ] text` / `- [x] text` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskLine {
    pub completed: bool,
    pub text: String,
}

impl TaskLine {
    /// Parse a single line. Indentation is allowed; nesting carries no meaning.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        let caps = TASK_LINE.captures(line)?;
        let completed = caps[1].eq_ignore_ascii_case("x");
        Some(Self { completed, text: caps[2].trim().to_string() })
    }
}

/// Completion counts for a block of Markdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatistics {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub unfinished_tasks: Vec<String>,
}

impl TaskStatistics {
    /// Whole-number percentage; 0 when there are no tasks.
    pub fn completion_rate(&self) -> u32 {
        if self.total_tasks == 0 {
            return 0;
        }
        ((self.completed_tasks as f64 / self.total_tasks as f64) * 100.0).round() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.total_tasks == 0
    }
}

/// Count checkbox lines in `text`.
///
/// Every checkbox line counts once, whatever its indentation. Unfinished task
/// texts are kept in document order; a box with nothing but blanks after it
/// is counted but not carried over.
pub fn analyze_task_completion(text: &str) -> TaskStatistics {
    let mut stats = TaskStatistics::default();
    for task in text.lines().filter_map(TaskLine::parse) {
        stats.total_tasks += 1;
        if task.completed {
            stats.completed_tasks += 1;
        } else if !task.text.is_empty() {
            stats.unfinished_tasks.push(task.text);
        }
    }
    stats
}
