use std::path::PathBuf;

use serde::Deserialize;
use sysglance_core::error::{Result, SysglanceError};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub paths: PathsSection,

    #[serde(default)]
    pub history: HistorySection,

    #[serde(default)]
    pub latest: LatestSection,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            server: ServerSection::default(),
            paths: PathsSection::default(),
            history: HistorySection::default(),
            latest: LatestSection::default(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(SysglanceError::UnsupportedVersion);
        }
        self.history.validate()?;
        self.latest.validate()?;
        Ok(())
    }

    /// Apply environment overrides. The collector exports `OUTPUT_PATH` for
    /// its own output directory; honoring it here keeps both processes
    /// pointed at the same files without duplicated config.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(out) = std::env::var("OUTPUT_PATH") {
            if !out.is_empty() {
                self.paths.out_dir = out;
            }
        }
        self
    }
}

fn default_version() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

fn default_listen() -> String {
    "0.0.0.0:5000".into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsSection {
    /// Directory the collector writes into.
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// Directory holding the dashboard UI.
    #[serde(default = "default_web_dir")]
    pub web_dir: String,
}

impl PathsSection {
    pub fn latest_path(&self) -> PathBuf {
        PathBuf::from(&self.out_dir).join("metrics.json")
    }

    pub fn history_path(&self) -> PathBuf {
        PathBuf::from(&self.out_dir).join("metrics.jsonl")
    }
}

impl Default for PathsSection {
    fn default() -> Self {
        Self {
            out_dir: default_out_dir(),
            web_dir: default_web_dir(),
        }
    }
}

fn default_out_dir() -> String {
    "out".into()
}
fn default_web_dir() -> String {
    "web".into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HistorySection {
    /// Records returned when the request carries no usable `n` parameter.
    #[serde(default = "default_history_items")]
    pub default_items: usize,

    /// Upper clamp for the `n` parameter.
    #[serde(default = "default_history_max")]
    pub max_items: usize,
}

impl HistorySection {
    pub fn validate(&self) -> Result<()> {
        if self.default_items < 1 {
            return Err(SysglanceError::BadRequest(
                "history.default_items must be at least 1".into(),
            ));
        }
        if self.max_items < self.default_items {
            return Err(SysglanceError::BadRequest(
                "history.max_items must be >= history.default_items".into(),
            ));
        }
        if self.max_items > 10_000 {
            return Err(SysglanceError::BadRequest(
                "history.max_items must be at most 10000".into(),
            ));
        }
        Ok(())
    }
}

impl Default for HistorySection {
    fn default() -> Self {
        Self {
            default_items: default_history_items(),
            max_items: default_history_max(),
        }
    }
}

fn default_history_items() -> usize {
    50
}
fn default_history_max() -> usize {
    500
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LatestSection {
    /// How many times to re-read `metrics.json` when a torn write is seen.
    #[serde(default = "default_read_attempts")]
    pub read_attempts: usize,
}

impl LatestSection {
    pub fn validate(&self) -> Result<()> {
        if !(1..=10).contains(&self.read_attempts) {
            return Err(SysglanceError::BadRequest(
                "latest.read_attempts must be between 1 and 10".into(),
            ));
        }
        Ok(())
    }
}

impl Default for LatestSection {
    fn default() -> Self {
        Self {
            read_attempts: default_read_attempts(),
        }
    }
}

fn default_read_attempts() -> usize {
    3
}
