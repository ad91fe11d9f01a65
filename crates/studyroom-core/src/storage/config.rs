//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Plan input bounds and the default daily hour budget
//! - Actual-hours widget bounds and step
//! - Focus timer length, bounds and tick interval
//! - Notification preferences
//!
//! Configuration is stored at `~/.config/studyroom/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::{ConfigError, CoreError, Result};
use crate::plan::HoursInput;

/// Upper limit for `timer.max_minutes`: one day.
pub const MAX_FOCUS_MINUTES: u64 = 24 * 60;

/// Plan form configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanConfig {
    #[serde(default = "default_daily_hours")]
    pub default_daily_hours: f64,
    #[serde(default = "default_min_daily_hours")]
    pub min_daily_hours: f64,
    #[serde(default = "default_max_hours")]
    pub max_daily_hours: f64,
}

/// Actual-hours input configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default)]
    pub min_hours: f64,
    #[serde(default = "default_max_hours")]
    pub max_hours: f64,
    #[serde(default = "default_step_hours")]
    pub step_hours: f64,
}

/// Focus timer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerConfig {
    #[serde(default = "default_focus_minutes")]
    pub focus_minutes: u64,
    #[serde(default = "default_min_minutes")]
    pub min_minutes: u64,
    #[serde(default = "default_max_minutes")]
    pub max_minutes: u64,
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

/// Notification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    #[serde(default = "default_true")]
    pub celebrate: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/studyroom/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub plan: PlanConfig,
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub timer: TimerConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

// Default functions
fn default_daily_hours() -> f64 {
    4.0
}
fn default_min_daily_hours() -> f64 {
    1.0
}
fn default_max_hours() -> f64 {
    24.0
}
fn default_step_hours() -> f64 {
    0.25
}
fn default_focus_minutes() -> u64 {
    25
}
fn default_min_minutes() -> u64 {
    1
}
fn default_max_minutes() -> u64 {
    120
}
fn default_tick_interval_ms() -> u64 {
    1000
}
fn default_true() -> bool {
    true
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            default_daily_hours: default_daily_hours(),
            min_daily_hours: default_min_daily_hours(),
            max_daily_hours: default_max_hours(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            min_hours: 0.0,
            max_hours: default_max_hours(),
            step_hours: default_step_hours(),
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            focus_minutes: default_focus_minutes(),
            min_minutes: default_min_minutes(),
            max_minutes: default_max_minutes(),
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self { celebrate: true }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> std::result::Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_some() {
                current = current.get_mut(part).ok_or_else(unknown)?;
                continue;
            }

            let obj = current.as_object_mut().ok_or_else(unknown)?;
            let existing = obj.get(part).ok_or_else(unknown)?;

            let new_value = match existing {
                serde_json::Value::Bool(_) => value
                    .parse::<bool>()
                    .map(serde_json::Value::Bool)
                    .map_err(|e| invalid(e.to_string()))?,
                serde_json::Value::Number(n) if n.is_f64() => value
                    .parse::<f64>()
                    .ok()
                    .and_then(serde_json::Number::from_f64)
                    .map(serde_json::Value::Number)
                    .ok_or_else(|| invalid(format!("cannot parse '{value}' as number")))?,
                serde_json::Value::Number(_) => value
                    .parse::<u64>()
                    .map(|n| serde_json::Value::Number(n.into()))
                    .map_err(|_| invalid(format!("cannot parse '{value}' as integer")))?,
                serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                    return Err(invalid("cannot set a whole section".into()));
                }
                _ => serde_json::Value::String(value.into()),
            };

            obj.insert(part.to_string(), new_value);
            return Ok(());
        }

        Err(unknown())
    }

    fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, writing defaults on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, writing defaults there if the file is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| {
                    CoreError::from(ConfigError::LoadFailed {
                        path: path.to_path_buf(),
                        message: e.to_string(),
                    })
                })?;
                cfg.validate()?;
                Ok(cfg)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, writing defaults");
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Persist to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Load from disk, returning default on error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("falling back to default config: {e}");
            Self::default()
        })
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Object(_) => None,
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key, keeping the value's type.
    /// Does not persist; call [`save`](Self::save) afterwards.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config = serde_json::from_value(json)?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Check that every min/max pair is ordered and every bound is usable.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let invalid = |key: &str, message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let plan = &self.plan;
        if !(plan.min_daily_hours.is_finite() && plan.max_daily_hours.is_finite())
            || plan.min_daily_hours > plan.max_daily_hours
        {
            return Err(invalid(
                "plan.min_daily_hours",
                format!(
                    "must not exceed plan.max_daily_hours ({} > {})",
                    plan.min_daily_hours, plan.max_daily_hours
                ),
            ));
        }
        if !plan.default_daily_hours.is_finite() {
            return Err(invalid("plan.default_daily_hours", "must be finite".into()));
        }

        let log = &self.log;
        if !(log.min_hours.is_finite() && log.max_hours.is_finite())
            || log.min_hours > log.max_hours
        {
            return Err(invalid(
                "log.min_hours",
                format!(
                    "must not exceed log.max_hours ({} > {})",
                    log.min_hours, log.max_hours
                ),
            ));
        }
        if !log.step_hours.is_finite() || log.step_hours < 0.0 {
            return Err(invalid(
                "log.step_hours",
                format!("must be zero or positive, got {}", log.step_hours),
            ));
        }

        let timer = &self.timer;
        if timer.min_minutes > timer.max_minutes {
            return Err(invalid(
                "timer.min_minutes",
                format!(
                    "must not exceed timer.max_minutes ({} > {})",
                    timer.min_minutes, timer.max_minutes
                ),
            ));
        }
        if timer.max_minutes > MAX_FOCUS_MINUTES {
            return Err(invalid(
                "timer.max_minutes",
                format!("must be at most {MAX_FOCUS_MINUTES}, got {}", timer.max_minutes),
            ));
        }
        Ok(())
    }

    /// Widget rules for actual-hours input.
    pub fn hours_input(&self) -> HoursInput {
        HoursInput {
            min: self.log.min_hours,
            max: self.log.max_hours,
            step: self.log.step_hours,
        }
    }

    pub fn clamp_daily_hours(&self, hours: f64) -> f64 {
        if !hours.is_finite() {
            return self.plan.default_daily_hours;
        }
        // max/min instead of clamp: never panics on a hand-built inverted range.
        hours.max(self.plan.min_daily_hours).min(self.plan.max_daily_hours)
    }

    pub fn clamp_focus_minutes(&self, minutes: u64) -> u64 {
        minutes.max(self.timer.min_minutes).min(self.timer.max_minutes)
    }

    /// Default focus length in seconds.
    pub fn focus_secs(&self) -> u64 {
        self.clamp_focus_minutes(self.timer.focus_minutes).saturating_mul(60)
    }
}
