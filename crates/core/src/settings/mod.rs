//! User settings: defaults, merging and persistence.

mod manager;
mod types;

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

pub use manager::SettingsManager;
pub use types::{AutoGenerateMode, LanguageSetting, Settings};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse settings file {0}: {1}")]
    ParseError(String, #[source] serde_json::Error),

    #[error("failed to write settings file {0}: {1}")]
    WriteError(String, #[source] std::io::Error),

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("unknown setting '{0}'")]
    UnknownKey(String),

    #[error("invalid value '{value}' for setting '{key}'")]
    InvalidValue { key: String, value: String },
}

/// Overlay `loaded` on top of `defaults`.
///
/// Keys missing from `loaded` keep their default. A key whose stored value no
/// longer parses (a removed mode, a wrong type) is dropped with a warning and
/// the default is kept. Unknown keys are ignored.
pub fn merge_with_defaults(loaded: &Value, defaults: &Settings) -> Settings {
    let Ok(Value::Object(mut base)) = serde_json::to_value(defaults) else {
        return defaults.clone();
    };

    let Value::Object(overrides) = loaded else {
        if !loaded.is_null() {
            warn!("stored settings are not an object, using defaults");
        }
        return defaults.clone();
    };

    for (key, value) in overrides {
        if value.is_null() || !base.contains_key(key) {
            continue;
        }
        let mut candidate: Map<String, Value> = base.clone();
        candidate.insert(key.clone(), value.clone());
        if serde_json::from_value::<Settings>(Value::Object(candidate.clone())).is_ok() {
            base = candidate;
        } else {
            warn!(key = %key, "ignoring invalid stored setting");
        }
    }

    serde_json::from_value(Value::Object(base)).unwrap_or_else(|_| defaults.clone())
}

/// Copy of `settings` with one stored key replaced.
///
/// `raw` is read as JSON first, so `true`, `1500` and `"daily"` all work;
/// text that is not JSON is taken as a plain string.
pub fn apply_setting(settings: &Settings, key: &str, raw: &str) -> Result<Settings, SettingsError> {
    let Value::Object(mut map) = serde_json::to_value(settings)? else {
        return Err(SettingsError::UnknownKey(key.to_string()));
    };
    if !map.contains_key(key) {
        return Err(SettingsError::UnknownKey(key.to_string()));
    }

    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    map.insert(key.to_string(), value);

    serde_json::from_value(Value::Object(map)).map_err(|_| SettingsError::InvalidValue {
        key: key.to_string(),
        value: raw.to_string(),
    })
}

/// Stored keys with their current values, sorted by key.
pub fn setting_entries(settings: &Settings) -> Vec<(String, Value)> {
    match serde_json::to_value(settings) {
        Ok(Value::Object(map)) => map.into_iter().collect(),
        _ => Vec::new(),
    }
}
