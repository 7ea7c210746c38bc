//! Module configuration, deserialized from a TOML file.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path, time::Duration};

/// Configuration for the brightness status module.
///
/// Every field has a default matching the behavior of a stock status-bar
/// brightness indicator, so an empty TOML document is a valid configuration.
/// The struct is immutable after construction; the provider takes it by value.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Device class passed to brightnessctl's `-c` flag.
    pub ctl_class: String,

    /// Device selector passed to brightnessctl's `-d` flag. Wildcards are
    /// allowed; `*` controls all devices of the class.
    pub ctl_device: String,

    /// Percentage added or removed by one scroll step.
    pub percentage_delta: u8,

    /// Percentages strictly above this render with the bright color,
    /// everything else with the dark one.
    pub dark_threshold: u8,

    /// Brightness floor, in percent.
    pub minimum_brightness: u8,

    /// When false, a reading below [minimum_brightness](Config::minimum_brightness)
    /// triggers a corrective set back up to the floor.
    pub allow_below_minimum: bool,

    /// Status line template. `{brightness}` and `{brightness_percentage}`
    /// are substituted; unknown placeholders render empty.
    pub format: String,

    /// How long the host may cache a rendered status line, in seconds.
    pub cache_timeout: u64,

    /// Button increasing brightness (4 is scroll up).
    pub button_up: u8,

    /// Button decreasing brightness (5 is scroll down).
    pub button_down: u8,

    /// Button setting brightness to the floor, if any (3 is right click).
    pub button_min: Option<u8>,

    /// Button setting brightness to 100%, if any.
    pub button_max: Option<u8>,

    /// Overrides the host theme's dark color.
    pub color_dark: Option<String>,

    /// Overrides the host theme's bright color.
    pub color_bright: Option<String>,

    /// Overrides the host theme's degraded color.
    pub color_degraded: Option<String>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            ctl_class: "backlight".to_string(),
            ctl_device: "*".to_string(),
            percentage_delta: 5,
            dark_threshold: 50,
            minimum_brightness: 20,
            allow_below_minimum: false,
            format: "💡: {brightness_percentage}".to_string(),
            cache_timeout: 300,
            button_up: 4,
            button_down: 5,
            button_min: Some(3),
            button_max: None,
            color_dark: None,
            color_bright: None,
            color_degraded: None,
        }
    }
}

impl Config {
    /// Reads and parses a configuration file.
    pub fn from_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("couldn't read {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("couldn't parse {}", path.display()))
    }

    /// The cache interval as a [Duration].
    pub fn cache_timeout(&self) -> Duration {
        Duration::from_secs(self.cache_timeout)
    }
}
