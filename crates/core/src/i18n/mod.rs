//! Translation catalogs.
//!
//! Lookups are threaded explicitly through the code that needs them (see
//! [`Translate`]); there is no process-wide "current language".

mod catalog;

use std::fmt;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

pub use catalog::Catalog;

/// A language with a shipped catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Zh,
    En,
}

impl Language {
    /// Resolve a host locale string such as `zh_CN.UTF-8` or `en-US`.
    ///
    /// Anything that does not start with `zh` resolves to English.
    pub fn from_locale(locale: &str) -> Self {
        if locale.trim().to_lowercase().starts_with("zh") {
            Language::Zh
        } else {
            Language::En
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::Zh => "zh",
            Language::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Keys understood by the catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranslationKey {
    NotificationTaskAdded,
    NotificationTaskExists,
    NotificationError,

    WeekdayMon,
    WeekdayTue,
    WeekdayWed,
    WeekdayThu,
    WeekdayFri,
    WeekdaySat,
    WeekdaySun,

    StatisticsTitle,
    StatisticsTotalTasks,
    StatisticsCompletedTasks,
    StatisticsCompletionRate,
    StatisticsSuggestions,
    /// Overflow line for exactly one hidden task. Contains `{count}`.
    StatisticsMoreTasksSingular,
    /// Overflow line for several hidden tasks. Contains `{count}`.
    StatisticsMoreTasksPlural,
}

impl TranslationKey {
    pub fn for_weekday(day: Weekday) -> Self {
        match day {
            Weekday::Mon => TranslationKey::WeekdayMon,
            Weekday::Tue => TranslationKey::WeekdayTue,
            Weekday::Wed => TranslationKey::WeekdayWed,
            Weekday::Thu => TranslationKey::WeekdayThu,
            Weekday::Fri => TranslationKey::WeekdayFri,
            Weekday::Sat => TranslationKey::WeekdaySat,
            Weekday::Sun => TranslationKey::WeekdaySun,
        }
    }
}

/// Anything that can turn a [`TranslationKey`] into display text.
///
/// Implemented by [`Catalog`] and by plain closures, so tests can pass
/// `|key| format!("{key:?}")` without building a catalog.
pub trait Translate {
    fn translate(&self, key: TranslationKey) -> String;

    /// Localized weekday name.
    fn weekday(&self, day: Weekday) -> String {
        self.translate(TranslationKey::for_weekday(day))
    }

    /// Whether this lookup renders English text.
    ///
    /// Decided by the Monday label so path naming always agrees with the
    /// language the user actually sees.
    fn is_english(&self) -> bool {
        self.translate(TranslationKey::WeekdayMon) == "Monday"
    }
}

impl<F> Translate for F
where
    F: Fn(TranslationKey) -> String,
{
    fn translate(&self, key: TranslationKey) -> String {
        self(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_resolution() {
        assert_eq!(Language::from_locale("zh_CN.UTF-8"), Language::Zh);
        assert_eq!(Language::from_locale("ZH-tw"), Language::Zh);
        assert_eq!(Language::from_locale("en_US.UTF-8"), Language::En);
        assert_eq!(Language::from_locale("fr-FR"), Language::En);
        assert_eq!(Language::from_locale(""), Language::En);
    }

    #[test]
    fn closures_translate() {
        let t = |key: TranslationKey| format!("{key:?}");
        assert_eq!(t.translate(TranslationKey::StatisticsTitle), "StatisticsTitle");
        assert!(!t.is_english());
        assert_eq!(t.weekday(Weekday::Sun), "WeekdaySun");
    }
}
