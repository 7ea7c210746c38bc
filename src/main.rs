#![warn(missing_docs)]

//! A status-bar brightness indicator and controller built on brightnessctl

mod config;
mod external;
mod status;

use anyhow::{Context, Result};
use clap::Parser;
use config::Config;
use external::command::SystemCommandRunner;
use status::{BrightnessStatusProvider, Theme};
use std::{path::PathBuf, thread, time::Instant};

#[derive(Parser)]
#[clap(version, about = "Show and adjust display brightness in a status bar")]
struct Args {
    /// Path to a TOML configuration file
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Print a single status line and exit instead of polling
    #[clap(long)]
    once: bool,
}

fn main() -> Result<()> {
    let _logger = flexi_logger::Logger::try_with_env_or_str("info")?
        .start()
        .context("couldn't initialize logging")?;
    log_panics::init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    let mut provider = BrightnessStatusProvider::new(config, SystemCommandRunner);
    // Standing in for the hosting bar, which would resolve its theme and
    // deliver click events. The demo loop only polls.
    provider.post_config_hook(&Theme::default());

    loop {
        let status = provider.get_status()?;
        println!("{}", status.full_text);
        log::debug!("Rendered with color {}", status.color);
        if args.once {
            return Ok(());
        }
        let now = Instant::now();
        if status.cached_until > now {
            thread::sleep(status.cached_until - now);
        }
    }
}
