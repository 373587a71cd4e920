//! Shared application state for the sysglance server.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServerConfig,
    latest_path: PathBuf,
    history_path: PathBuf,
    web_dir: PathBuf,
}

impl AppState {
    pub fn new(cfg: ServerConfig) -> Self {
        let latest_path = cfg.paths.latest_path();
        let history_path = cfg.paths.history_path();
        let web_dir = PathBuf::from(&cfg.paths.web_dir);
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                latest_path,
                history_path,
                web_dir,
            }),
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn latest_path(&self) -> &Path {
        &self.inner.latest_path
    }

    pub fn history_path(&self) -> &Path {
        &self.inner.history_path
    }

    pub fn web_dir(&self) -> &Path {
        &self.inner.web_dir
    }
}
