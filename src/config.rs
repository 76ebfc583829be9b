use crate::keymap::Keymap;
use crate::styles::ThemeType;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

/// Environment variable that points at an alternative config file
pub const CONFIG_PATH_ENV: &str = "AUTOMATA_CONFIG";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Color theme: "dark", "light" or "nocolor"
    pub theme: String,
    /// What happens to a sub-screen's state when it is entered again
    pub entry_policy: EntryPolicy,
    /// Spinner frame interval in milliseconds
    pub spinner_millis: u64,
    /// Key bindings (preset plus overrides)
    pub keymap: Keymap,
    /// Countdown screen settings
    pub timer: TimerConfig,
    /// Initial display options of the menu list
    pub menu: MenuConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    /// Countdown length in seconds
    pub duration_secs: u64,
    /// Tick granularity in milliseconds
    pub tick_millis: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub show_title: bool,
    pub show_status_bar: bool,
    pub show_pagination: bool,
    pub show_help: bool,
    pub show_spinner: bool,
}

/// Policy for sub-screens (Timer, Info, SubList) on re-entry.
/// The menu is re-initialized on every entry regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryPolicy {
    /// Re-initialize the screen, discarding prior progress
    #[default]
    Reset,
    /// Keep the screen's state from its last visit
    Resume,
}

fn default_duration_secs() -> u64 {
    60
}

fn default_tick_millis() -> u64 {
    1000
}

fn default_spinner_millis() -> u64 {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            entry_policy: EntryPolicy::Reset,
            spinner_millis: default_spinner_millis(),
            keymap: Keymap::default(),
            timer: TimerConfig::default(),
            menu: MenuConfig::default(),
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            duration_secs: default_duration_secs(),
            tick_millis: default_tick_millis(),
        }
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            show_title: true,
            show_status_bar: true,
            show_pagination: true,
            show_help: true,
            show_spinner: false,
        }
    }
}

impl TimerConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.duration_secs)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults when it doesn't exist.
    /// Nothing is written to disk.
    pub fn load(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

        Ok(config.sanitized())
    }

    /// Save configuration to file
    pub fn save(&self, config_path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        Ok(())
    }

    /// Replace values that would stall the app with their defaults
    fn sanitized(mut self) -> Self {
        if self.timer.tick_millis == 0 {
            warn!("timer.tick_millis must be positive, using {}", default_tick_millis());
            self.timer.tick_millis = default_tick_millis();
        }
        if self.spinner_millis == 0 {
            warn!("spinner_millis must be positive, using {}", default_spinner_millis());
            self.spinner_millis = default_spinner_millis();
        }
        for binding in &self.keymap.overrides {
            if let Err(e) = binding.parse() {
                warn!("Ignoring key override {:?}: {}", binding.key, e);
            }
        }
        self
    }

    /// Theme selected by the config, forced to no-color when `NO_COLOR` is set
    pub fn theme_type(&self) -> ThemeType {
        if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            return ThemeType::NoColor;
        }
        self.theme.parse().unwrap_or_default()
    }

    pub fn spinner_interval(&self) -> Duration {
        Duration::from_millis(self.spinner_millis)
    }
}

/// Location of the config file: `$AUTOMATA_CONFIG`, else `<config dir>/automata/config.toml`
pub fn get_config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join("automata")
        .join("config.toml")
}
