//! The status provider called by the hosting bar.

use super::{
    format::safe_format,
    reading::{classify, BrightnessReading, ParseError, Shade},
    theme::{Palette, Theme},
};
use crate::{
    config::Config,
    external::command::{CommandError, CommandRunner, NO_DEVICE_EXIT_CODE},
};
use log::{debug, warn};
use std::time::Instant;
use thiserror::Error;

/// The external tool every query and adjustment goes through.
pub const BRIGHTNESSCTL: &str = "brightnessctl";

/// Status text rendered when the tool is not on the execution path.
pub const NOT_INSTALLED_TEXT: &str = "'brightnessctl' command not installed.";

/// Placeholder rendered when the tool reports no matching device.
const UNAVAILABLE: &str = "N/A";

/// An error terminating one status cycle. Only the "no device" exit code is
/// absorbed before this point; everything else bubbles up to the host
/// unchanged.
#[derive(Debug, Error)]
pub enum StatusError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Command(#[from] CommandError),
}

/// A rendered status line, ready for the hosting bar to display and cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub full_text: String,
    pub color: String,
    pub cached_until: Instant,
}

/// A click event delivered by the hosting bar.
#[derive(Debug, Clone, Copy)]
pub struct ClickEvent {
    pub button: u8,
}

/// The values substituted into the status template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatData {
    pub brightness: String,
    pub brightness_percentage: String,
}

/// Queries, normalizes and adjusts display brightness through brightnessctl.
///
/// The provider is synchronous and non-reentrant; the host is expected to
/// serialize [get_status](BrightnessStatusProvider::get_status) and
/// [on_click](BrightnessStatusProvider::on_click) calls.
pub struct BrightnessStatusProvider<R: CommandRunner> {
    config: Config,
    runner: R,
    palette: Palette,
}

impl<R: CommandRunner> BrightnessStatusProvider<R> {
    pub fn new(config: Config, runner: R) -> BrightnessStatusProvider<R> {
        let palette = Palette::resolve(&config, &Theme::default());
        BrightnessStatusProvider {
            config,
            runner,
            palette,
        }
    }

    /// Post-initialization hook. Re-resolves the palette once the hosting
    /// bar's theme constants are known.
    pub fn post_config_hook(&mut self, theme: &Theme) {
        self.palette = Palette::resolve(&self.config, theme);
    }

    /// Teardown hook called by the host on shutdown.
    pub fn kill(&mut self) {
        // TODO: persist the last reading so a restarted bar can render
        // something before the first query completes
    }

    /// Produces the status line for one polling cycle.
    ///
    /// Querying can have a side effect: when the reading is below the
    /// configured floor, a corrective set command is issued and the floor
    /// value is displayed without re-reading the tool.
    pub fn get_status(&self) -> Result<Status, StatusError> {
        let cached_until = Instant::now() + self.config.cache_timeout();
        if self.runner.resolve(BRIGHTNESSCTL).is_none() {
            return Ok(Status {
                full_text: NOT_INSTALLED_TEXT.to_string(),
                color: self.palette.degraded.clone(),
                cached_until,
            });
        }

        let (data, color) = self.derive_format_data()?;
        let full_text = safe_format(
            &self.config.format,
            &[
                ("brightness", &data.brightness),
                ("brightness_percentage", &data.brightness_percentage),
            ],
        );
        Ok(Status {
            full_text,
            color,
            cached_until,
        })
    }

    /// Dispatches the adjustment bound to the clicked button, if any.
    ///
    /// Fire-and-forget: the command's result is neither awaited nor
    /// verified and the displayed text only catches up on the next poll.
    pub fn on_click(&self, event: &ClickEvent) {
        let button = Some(event.button);
        if event.button == self.config.button_up {
            self.set_relative(self.config.percentage_delta, true);
        } else if event.button == self.config.button_down {
            self.set_relative(self.config.percentage_delta, false);
        } else if button == self.config.button_min {
            self.set_absolute(self.config.minimum_brightness);
        } else if button == self.config.button_max {
            self.set_absolute(100);
        }
    }

    fn derive_format_data(&self) -> Result<(FormatData, String), StatusError> {
        // Unavailable readings keep this pre-set dark color rather than
        // switching to the degraded one, matching the module's observed
        // behavior.
        let mut color = self.palette.dark.clone();
        match self.runner.run(BRIGHTNESSCTL, &self.base_args()) {
            Ok(output) => {
                let reading = BrightnessReading::parse(&output)?;
                let (shown, correction) = reading
                    .floored(self.config.minimum_brightness, self.config.allow_below_minimum);
                if let Some(target) = correction {
                    debug!(
                        "Brightness {}% is below the {}% floor, raising it",
                        reading.percentage, target
                    );
                    self.set_absolute(target);
                }
                if classify(shown, self.config.dark_threshold) == Shade::Bright {
                    color = self.palette.bright.clone();
                }
                Ok((
                    FormatData {
                        brightness: reading.raw_value.to_string(),
                        brightness_percentage: format!("{}%", shown),
                    },
                    color,
                ))
            }
            Err(error) if error.code() == Some(NO_DEVICE_EXIT_CODE) => {
                debug!("No controllable device found: {}", error);
                Ok((
                    FormatData {
                        brightness: UNAVAILABLE.to_string(),
                        brightness_percentage: UNAVAILABLE.to_string(),
                    },
                    color,
                ))
            }
            Err(error) => Err(error.into()),
        }
    }

    fn set_relative(&self, delta: u8, increase: bool) {
        let sign = if increase { '+' } else { '-' };
        self.dispatch_set(format!("{}{}%", sign, delta));
    }

    fn set_absolute(&self, percentage: u8) {
        self.dispatch_set(format!("{}%", percentage));
    }

    fn dispatch_set(&self, value: String) {
        let mut args = self.base_args();
        args.push("s".to_string());
        args.push(value);
        if let Err(error) = self.runner.dispatch(BRIGHTNESSCTL, &args) {
            warn!("Brightness adjustment failed: {}", error);
        }
    }

    /// Argument vector shared by every invocation: device class, device
    /// selector and the machine-readable flag.
    fn base_args(&self) -> Vec<String> {
        vec![
            "-c".to_string(),
            self.config.ctl_class.clone(),
            "-d".to_string(),
            self.config.ctl_device.clone(),
            "-m".to_string(),
        ]
    }
}
