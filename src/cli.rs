#![allow(clippy::missing_errors_doc)]

use std::path::PathBuf;

use clap::Parser;

use crate::data::openweather::OPENWEATHER_URL;
use crate::domain::clock::{TimezoneEntry, default_zones};
use crate::domain::weather::DEFAULT_ICON_BASE;

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Parser, Clone)]
#[command(
    name = "weather-globe",
    version,
    about = "Weather dashboard with a rotating globe and animated conditions"
)]
pub struct Cli {
    /// City to look up on startup
    pub city: Option<String>,

    /// OpenWeatherMap API key
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Weather API base URL
    #[arg(long, default_value = OPENWEATHER_URL)]
    pub api_url: String,

    /// Base URL for condition icons
    #[arg(long, default_value = DEFAULT_ICON_BASE)]
    pub icon_base: String,

    /// Target FPS (15..60)
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u8).range(15..=60))]
    pub fps: u8,

    /// Disable the weather effect and freeze the globe
    #[arg(long)]
    pub no_animation: bool,

    /// Clock entry as CITY=Area/Location (repeatable, replaces the defaults)
    #[arg(long = "clock-zone", value_name = "CITY=TZ", value_parser = TimezoneEntry::parse)]
    pub clock_zones: Vec<TimezoneEntry>,

    /// Drop responses that belong to an older search
    #[arg(long)]
    pub discard_stale: bool,

    /// Print a weather report to stdout and exit (non-interactive)
    #[arg(long)]
    pub one_shot: bool,

    /// Write tracing output to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_key.as_deref().is_none_or(|key| key.trim().is_empty()) {
            anyhow::bail!("an API key is required: pass --api-key or set OPENWEATHER_API_KEY");
        }
        if self.one_shot && self.initial_city().is_none() {
            anyhow::bail!("--one-shot needs a CITY argument");
        }
        Ok(())
    }

    #[must_use]
    pub fn initial_city(&self) -> Option<&str> {
        self.city
            .as_deref()
            .map(str::trim)
            .filter(|city| !city.is_empty())
    }

    #[must_use]
    pub fn zones(&self) -> Vec<TimezoneEntry> {
        if self.clock_zones.is_empty() {
            default_zones()
        } else {
            self.clock_zones.clone()
        }
    }

    #[must_use]
    pub fn api_key(&self) -> &str {
        self.api_key.as_deref().unwrap_or_default()
    }
}
