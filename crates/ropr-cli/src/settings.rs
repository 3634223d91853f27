//! Saved CLI settings.
//!
//! A flat JSON object of string values in `<config dir>/ropr/config.json`.
//! Missing keys fall back to [`SettingKey::default_value`].

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use ropr_dashboard::{ControlId, Controls};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// Default width of the terminal bar chart, in characters.
pub const DEFAULT_CHART_WIDTH: usize = 40;

/// Known setting keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    /// Default output format
    DefaultFormat,
    /// Whether to use colors
    UseColors,
    /// Width of the bar chart
    ChartWidth,
    /// Saved default for one input control
    Control(ControlId),
}

impl SettingKey {
    /// All keys, in display order.
    pub fn all() -> Vec<Self> {
        let mut keys = vec![Self::DefaultFormat, Self::UseColors, Self::ChartWidth];
        keys.extend(ControlId::ALL.into_iter().map(Self::Control));
        keys
    }

    /// Canonical name as stored in the file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DefaultFormat => "default_format",
            Self::UseColors => "use_colors",
            Self::ChartWidth => "chart_width",
            Self::Control(id) => id.alias(),
        }
    }

    /// Human description.
    pub fn description(&self) -> String {
        match self {
            Self::DefaultFormat => "Default output format (table, json, csv, minimal)".to_string(),
            Self::UseColors => "Enable colored output (true, false)".to_string(),
            Self::ChartWidth => "Width of the bar chart in characters (10-200)".to_string(),
            Self::Control(id) => format!("Default for {}", id.spec().label),
        }
    }

    /// Value used when the key is not saved.
    pub fn default_value(&self) -> String {
        match self {
            Self::DefaultFormat => "table".to_string(),
            Self::UseColors => "true".to_string(),
            Self::ChartWidth => DEFAULT_CHART_WIDTH.to_string(),
            Self::Control(id) => id.spec().default.to_string(),
        }
    }

    /// Checks a value before it is saved.
    pub fn validate(&self, value: &str) -> CliResult<()> {
        let invalid = |reason: String| CliError::InvalidSetting {
            key: self.as_str().to_string(),
            reason,
        };

        match self {
            Self::DefaultFormat => {
                value.parse::<OutputFormat>().map_err(|_| {
                    invalid(format!("'{value}' is not one of table, json, csv, minimal"))
                })?;
            }
            Self::UseColors => {
                parse_bool(value).ok_or_else(|| invalid(format!("'{value}' is not a boolean")))?;
            }
            Self::ChartWidth => {
                let width: usize = value
                    .parse()
                    .map_err(|_| invalid(format!("'{value}' is not a number")))?;
                if !(10..=200).contains(&width) {
                    return Err(invalid(format!("{width} is not between 10 and 200")));
                }
            }
            Self::Control(id) => {
                let spec = id.spec();
                let parsed: i64 = value
                    .parse()
                    .map_err(|_| invalid(format!("'{value}' is not a whole number")))?;
                if spec.clamp(parsed) != parsed {
                    let upper = spec.max.map_or_else(|| "unbounded".to_string(), |m| m.to_string());
                    return Err(invalid(format!(
                        "{parsed} is outside [{}, {}]",
                        spec.min, upper
                    )));
                }
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for SettingKey {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default_format" | "format" => Ok(Self::DefaultFormat),
            "use_colors" | "colors" => Ok(Self::UseColors),
            "chart_width" | "width" => Ok(Self::ChartWidth),
            other => other
                .parse::<ControlId>()
                .map(Self::Control)
                .map_err(|_| CliError::UnknownKey(s.to_string())),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Saved settings.
#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Settings {
    #[serde(flatten)]
    values: BTreeMap<String, String>,
}

impl Settings {
    /// Loads settings from `path`, or empty settings if the file does not exist.
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Writes settings to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> CliResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Saved value, if any.
    pub fn get(&self, key: SettingKey) -> Option<&str> {
        self.values.get(key.as_str()).map(String::as_str)
    }

    /// Saved value or the key's default.
    pub fn effective(&self, key: SettingKey) -> String {
        self.get(key)
            .map(str::to_string)
            .unwrap_or_else(|| key.default_value())
    }

    /// Validates and stores a value.
    pub fn set(&mut self, key: SettingKey, value: &str) -> CliResult<()> {
        key.validate(value)?;
        self.values.insert(key.as_str().to_string(), value.to_string());
        Ok(())
    }

    /// Removes a saved value.
    pub fn remove(&mut self, key: SettingKey) {
        self.values.remove(key.as_str());
    }

    /// Removes all saved values.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Saved output format.
    pub fn format(&self) -> Option<OutputFormat> {
        self.get(SettingKey::DefaultFormat)?.parse().ok()
    }

    /// Whether colors are enabled.
    pub fn use_colors(&self) -> bool {
        self.get(SettingKey::UseColors)
            .and_then(parse_bool)
            .unwrap_or(true)
    }

    /// Bar chart width.
    pub fn chart_width(&self) -> usize {
        self.get(SettingKey::ChartWidth)
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_CHART_WIDTH)
    }

    /// Widget defaults with saved overrides applied.
    pub fn controls(&self) -> Controls {
        let mut controls = Controls::default();
        for id in ControlId::ALL {
            if let Some(value) = self
                .get(SettingKey::Control(id))
                .and_then(|v| v.parse::<i64>().ok())
            {
                controls.set(id, value);
            }
        }
        controls
    }
}

/// Get the default config file path.
pub fn default_path() -> CliResult<PathBuf> {
    let home = dirs::config_dir()
        .or_else(dirs::home_dir)
        .ok_or_else(|| CliError::Config("Could not determine config directory".to_string()))?;
    Ok(home.join("ropr").join("config.json"))
}
