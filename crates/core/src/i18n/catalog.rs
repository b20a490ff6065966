use super::{Language, Translate, TranslationKey};

/// Static string table for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    language: Language,
}

impl Catalog {
    pub fn for_language(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn get(&self, key: TranslationKey) -> &'static str {
        match self.language {
            Language::Zh => zh(key),
            Language::En => en(key),
        }
    }
}

impl Translate for Catalog {
    fn translate(&self, key: TranslationKey) -> String {
        self.get(key).to_string()
    }
}

fn en(key: TranslationKey) -> &'static str {
    use TranslationKey::*;
    match key {
        NotificationTaskAdded => "Today's task has been added",
        NotificationTaskExists => "Today's task already exists",
        NotificationError => "Error:",

        WeekdayMon => "Monday",
        WeekdayTue => "Tuesday",
        WeekdayWed => "Wednesday",
        WeekdayThu => "Thursday",
        WeekdayFri => "Friday",
        WeekdaySat => "Saturday",
        WeekdaySun => "Sunday",

        StatisticsTitle => "📊 Yesterday's Task Summary",
        StatisticsTotalTasks => "Total Tasks",
        StatisticsCompletedTasks => "Completed Tasks",
        StatisticsCompletionRate => "Completion Rate",
        StatisticsSuggestions => "Consider completing the following tasks today",
        StatisticsMoreTasksSingular => "{count} more task",
        StatisticsMoreTasksPlural => "{count} more tasks",
    }
}

fn zh(key: TranslationKey) -> &'static str {
    use TranslationKey::*;
    match key {
        NotificationTaskAdded => "今日任务已添加",
        NotificationTaskExists => "今日任务已存在",
        NotificationError => "错误：",

        WeekdayMon => "星期一",
        WeekdayTue => "星期二",
        WeekdayWed => "星期三",
        WeekdayThu => "星期四",
        WeekdayFri => "星期五",
        WeekdaySat => "星期六",
        WeekdaySun => "星期日",

        StatisticsTitle => "📊 昨日任务统计",
        StatisticsTotalTasks => "任务总数",
        StatisticsCompletedTasks => "已完成任务",
        StatisticsCompletionRate => "完成率",
        StatisticsSuggestions => "建议今日考虑完成以下任务",
        StatisticsMoreTasksSingular => "还有{count}个未完成任务",
        StatisticsMoreTasksPlural => "还有{count}个未完成任务",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn english_catalog_is_english() {
        let c = Catalog::for_language(Language::En);
        assert!(c.is_english());
        assert_eq!(c.weekday(Weekday::Wed), "Wednesday");
    }

    #[test]
    fn chinese_catalog_is_not_english() {
        let c = Catalog::for_language(Language::Zh);
        assert!(!c.is_english());
        assert_eq!(c.weekday(Weekday::Sun), "星期日");
        assert_eq!(c.get(TranslationKey::StatisticsTitle), "📊 昨日任务统计");
    }
}
