//! Markdown rendering of a day's task statistics.

use std::fmt::Write;

use crate::i18n::{Translate, TranslationKey};
use crate::tasks::TaskStatistics;

/// How many unfinished tasks are carried over verbatim.
pub const MAX_SUGGESTIONS: usize = 5;

/// Render `stats` as a Markdown block.
///
/// Unfinished tasks are re-surfaced as fresh checkboxes (at most
/// [`MAX_SUGGESTIONS`]); anything beyond that is summarized in one italic line.
pub fn generate_statistics_content(stats: &TaskStatistics, t: &impl Translate) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "## {}", t.translate(TranslationKey::StatisticsTitle));
    out.push_str("---\n");
    let _ = writeln!(
        out,
        "- {}: {}",
        t.translate(TranslationKey::StatisticsTotalTasks),
        stats.total_tasks
    );
    let _ = writeln!(
        out,
        "- {}: {}",
        t.translate(TranslationKey::StatisticsCompletedTasks),
        stats.completed_tasks
    );
    let _ = writeln!(
        out,
        "- {}: {}%",
        t.translate(TranslationKey::StatisticsCompletionRate),
        stats.completion_rate()
    );

    if stats.unfinished_tasks.is_empty() {
        return out;
    }

    out.push('\n');
    let _ = writeln!(out, "### {}", t.translate(TranslationKey::StatisticsSuggestions));
    out.push_str("---\n");
    for task in stats.unfinished_tasks.iter().take(MAX_SUGGESTIONS) {
        let _ = writeln!(out, "- [ ] {task}");
    }

    let remaining = stats.unfinished_tasks.len().saturating_sub(MAX_SUGGESTIONS);
    if remaining > 0 {
        let key = if remaining == 1 {
            TranslationKey::StatisticsMoreTasksSingular
        } else {
            TranslationKey::StatisticsMoreTasksPlural
        };
        let label = t.translate(key).replace("{count}", &remaining.to_string());
        let _ = writeln!(out, "- *{label}*");
    }

    out
}
