use serde::{Deserialize, Serialize};

use crate::dates::DEFAULT_ROOT_DIR;
use crate::i18n::Language;
use crate::templates::{DEFAULT_TEMPLATE_EN, DEFAULT_TEMPLATE_ZH};

/// When the host should generate the day's entry on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AutoGenerateMode {
    None,
    Daily,
    #[default]
    Workday,
}

/// Language preference as stored; `Auto` follows the host locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageSetting {
    #[default]
    Auto,
    Zh,
    En,
}

impl LanguageSetting {
    pub fn resolve(self, locale: &str) -> Language {
        match self {
            LanguageSetting::Auto => Language::from_locale(locale),
            LanguageSetting::Zh => Language::Zh,
            LanguageSetting::En => Language::En,
        }
    }
}

/// Persisted user settings. Keys are camelCase on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub root_dir: String,
    pub auto_generate_mode: AutoGenerateMode,
    pub language: LanguageSetting,
    pub template_zh: String,
    pub template_en: String,
    pub custom_template: String,
    pub has_custom_template: bool,
    pub task_statistics: bool,
    /// Milliseconds a success notice stays visible.
    pub success_notification_duration: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root_dir: DEFAULT_ROOT_DIR.to_string(),
            auto_generate_mode: AutoGenerateMode::Workday,
            language: LanguageSetting::Auto,
            template_zh: DEFAULT_TEMPLATE_ZH.to_string(),
            template_en: DEFAULT_TEMPLATE_EN.to_string(),
            custom_template: String::new(),
            has_custom_template: false,
            task_statistics: false,
            success_notification_duration: 3000,
        }
    }
}

impl Settings {
    /// Configured root folder, or the default when blank.
    pub fn effective_root_dir(&self) -> &str {
        let trimmed = self.root_dir.trim();
        if trimmed.is_empty() { DEFAULT_ROOT_DIR } else { trimmed }
    }

    /// A user override is in effect only when flagged and non-empty.
    pub fn has_custom_template(&self) -> bool {
        self.has_custom_template && !self.custom_template.trim().is_empty()
    }

    /// Template for `language`.
    ///
    /// A template the user edited wins over an untouched default, even when it
    /// belongs to the other language.
    pub fn template_by_language(&self, language: Language) -> &str {
        let zh_modified = self.template_zh != DEFAULT_TEMPLATE_ZH;
        let en_modified = self.template_en != DEFAULT_TEMPLATE_EN;
        match language {
            Language::Zh if !zh_modified && en_modified => &self.template_en,
            Language::Zh => &self.template_zh,
            Language::En if !en_modified && zh_modified => &self.template_zh,
            Language::En => &self.template_en,
        }
    }

    /// The template a generation run renders.
    pub fn effective_template(&self, language: Language) -> &str {
        if self.has_custom_template() {
            &self.custom_template
        } else {
            self.template_by_language(language)
        }
    }
}
