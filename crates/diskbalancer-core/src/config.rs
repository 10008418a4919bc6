//! Configuration: TOML file, environment overrides and defaults.
//!
//! ```toml
//! [plan]
//! threshold_percent = 10.0
//! output_root = "/var/lib/diskbalancer"
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use jiff::{tz::TimeZone, Timestamp};
use serde::{Deserialize, Serialize};

use crate::error::{DiskBalancerError, Result, ResultExt};

/// Well-known name of the default threshold setting.
pub const DEFAULT_THRESHOLD_KEY: &str = "plan.threshold_percent";

/// Threshold used when neither the user nor the config file supplies one.
pub const DEFAULT_THRESHOLD_PERCENT: f64 = 10.0;

/// Environment variable overriding [`PlanSettings::threshold_percent`].
pub const THRESHOLD_ENV: &str = "DISKBALANCER_THRESHOLD_PERCENT";

/// Environment variable overriding [`PlanSettings::output_root`].
pub const OUTPUT_ROOT_ENV: &str = "DISKBALANCER_OUTPUT_ROOT";

const APP_PREFIX: &str = "diskbalancer";
const CONFIG_FILE: &str = "config.toml";
const OUTPUT_DIR_FORMAT: &str = "%Y-%b-%d-%H-%M-%S";

/// Top-level settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Settings {
    pub plan: PlanSettings,
}

/// Settings consumed by the plan command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlanSettings {
    /// Default imbalance tolerance, in percent
    pub threshold_percent: f64,
    /// Directory under which timestamped output directories are created
    pub output_root: Option<PathBuf>,
}

impl Default for PlanSettings {
    fn default() -> Self {
        Self {
            threshold_percent: DEFAULT_THRESHOLD_PERCENT,
            output_root: None,
        }
    }
}

impl Settings {
    /// Load settings from an explicit path or the XDG config location, then
    /// apply environment overrides and validate.
    ///
    /// A missing file is only an error when the path was given explicitly.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) if !p.exists() => {
                return Err(DiskBalancerError::Configuration {
                    message: format!("Missing configuration file: {}", p.display()),
                });
            }
            Some(p) => Some(p.to_path_buf()),
            None => Self::default_path(),
        };

        let mut settings = match path {
            Some(p) => Self::from_file(&p)?,
            None => Self::default(),
        };

        settings.apply_overrides(|name| env::var(name).ok())?;
        settings.validate()?;
        Ok(settings)
    }

    /// Parses settings from TOML text without overrides or validation.
    pub fn from_toml(raw: &str) -> Result<Self> {
        toml::from_str(raw).with_context("Failed to parse configuration")
    }

    fn from_file(path: &Path) -> Result<Self> {
        let raw =
            fs::read_to_string(path).map_err(|e| DiskBalancerError::file_system(path, e))?;
        Self::from_toml(&raw)
    }

    fn default_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix(APP_PREFIX).find_config_file(CONFIG_FILE)
    }

    /// Applies overrides from a variable lookup, normally the process
    /// environment. Blank values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|raw| !raw.trim().is_empty());

        if let Some(raw) = var(THRESHOLD_ENV) {
            let value = raw.trim().parse::<f64>().map_err(|e| {
                DiskBalancerError::Configuration {
                    message: format!("{THRESHOLD_ENV}={raw:?}: {e}"),
                }
            })?;
            self.plan.threshold_percent = value;
        }
        if let Some(raw) = var(OUTPUT_ROOT_ENV) {
            self.plan.output_root = Some(PathBuf::from(raw));
        }
        Ok(())
    }

    /// The default threshold must itself be a usable percentage.
    pub fn validate(&self) -> Result<()> {
        let value = self.plan.threshold_percent;
        if !(value > 0.0 && value <= 100.0) {
            return Err(DiskBalancerError::Configuration {
                message: format!("{DEFAULT_THRESHOLD_KEY} must be in (0, 100], got {value}"),
            });
        }
        Ok(())
    }

    /// Output directory used when the caller does not name one:
    /// `<output_root>/<timestamp>`, with the XDG data directory as the
    /// fallback root.
    pub fn default_output_dir(&self, now: Timestamp) -> Result<PathBuf> {
        let name = output_dir_name(now);
        match &self.plan.output_root {
            Some(root) => Ok(root.join(name)),
            None => xdg::BaseDirectories::with_prefix(APP_PREFIX)
                .create_data_directory(&name)
                .map_err(|e| DiskBalancerError::FileSystem {
                    path: PathBuf::from(name),
                    source: e,
                }),
        }
    }
}

/// Directory name for a run started at `now` in the system time zone,
/// e.g. `2026-Oct-17-09-30-00`.
pub fn output_dir_name(now: Timestamp) -> String {
    zoned_dir_name(now, TimeZone::system())
}

fn zoned_dir_name(now: Timestamp, tz: TimeZone) -> String {
    now.to_zoned(tz).strftime(OUTPUT_DIR_FORMAT).to_string()
}
