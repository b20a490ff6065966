use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{SettingsError, merge_with_defaults};
use super::types::Settings;
use crate::i18n::{Catalog, Language};

type Result<T> = std::result::Result<T, SettingsError>;

/// Loads, mutates and persists [`Settings`] as a JSON file.
#[derive(Debug, Clone)]
pub struct SettingsManager {
    path: PathBuf,
    locale: String,
    settings: Settings,
}

impl SettingsManager {
    /// Load settings from `path`, merged over defaults.
    ///
    /// A missing file yields defaults without writing anything. `locale` is the
    /// host locale used when the language setting is `auto`.
    pub fn load(path: impl Into<PathBuf>, locale: impl Into<String>) -> Result<Self> {
        let path = path.into();
        let settings = if path.exists() {
            let raw = fs::read_to_string(&path)
                .map_err(|e| SettingsError::ReadError(path.display().to_string(), e))?;
            let value = serde_json::from_str(&raw)
                .map_err(|e| SettingsError::ParseError(path.display().to_string(), e))?;
            merge_with_defaults(&value, &Settings::default())
        } else {
            debug!(path = %path.display(), "no settings file, using defaults");
            Settings::default()
        };

        Ok(Self { path, locale: locale.into(), settings })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Apply `f` to the settings and persist the result.
    pub fn update(&mut self, f: impl FnOnce(&mut Settings)) -> Result<()> {
        f(&mut self.settings);
        self.save()
    }

    pub fn reset_to_defaults(&mut self) -> Result<()> {
        self.settings = Settings::default();
        self.save()
    }

    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.settings)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| SettingsError::WriteError(self.path.display().to_string(), e))?;
        }
        fs::write(&self.path, json)
            .map_err(|e| SettingsError::WriteError(self.path.display().to_string(), e))?;
        debug!(path = %self.path.display(), "settings saved");
        Ok(())
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn active_language(&self) -> Language {
        self.settings.language.resolve(&self.locale)
    }

    pub fn catalog(&self) -> Catalog {
        Catalog::for_language(self.active_language())
    }

    pub fn has_custom_template(&self) -> bool {
        self.settings.has_custom_template()
    }

    pub fn template_by_language(&self) -> &str {
        self.settings.template_by_language(self.active_language())
    }

    pub fn current_template(&self) -> &str {
        self.settings.effective_template(self.active_language())
    }
}
