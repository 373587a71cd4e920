//! Server config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use sysglance_core::error::{Result, SysglanceError};

pub use schema::{HistorySection, LatestSection, PathsSection, ServerConfig, ServerSection};

/// Load config from a YAML file. A missing file is not an error: the server
/// runs with full defaults so `sysglance` works out of the box next to the
/// collector's `out/` directory.
pub fn load_from_file(path: &str) -> Result<ServerConfig> {
    if !Path::new(path).exists() {
        let cfg = ServerConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let s = fs::read_to_string(path)
        .map_err(|e| SysglanceError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServerConfig> {
    let cfg: ServerConfig = serde_yaml::from_str(s)
        .map_err(|e| SysglanceError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
