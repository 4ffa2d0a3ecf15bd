use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::checksum::BUF_SIZE;

/// Optional settings loaded from `~/.config/hashcheck/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashCheckConfig {
    /// Read chunk size in bytes for streaming digests. 0 means the built-in default.
    pub read_buffer_bytes: usize,
    /// Append logs to `~/.local/state/hashcheck/hashcheck.log` instead of stderr.
    pub log_to_file: bool,
}

impl Default for HashCheckConfig {
    fn default() -> Self {
        Self {
            read_buffer_bytes: BUF_SIZE,
            log_to_file: false,
        }
    }
}

impl HashCheckConfig {
    /// Chunk size to use, with 0 mapped to the default.
    pub fn buffer_size(&self) -> usize {
        if self.read_buffer_bytes == 0 {
            BUF_SIZE
        } else {
            self.read_buffer_bytes
        }
    }
}

/// Location of the config file, if one exists.
pub fn config_path() -> Result<Option<PathBuf>> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("hashcheck")?;
    Ok(xdg_dirs.find_config_file("config.toml"))
}

/// Load configuration from disk. A missing file yields defaults; nothing is written.
pub fn load() -> Result<HashCheckConfig> {
    match config_path()? {
        Some(path) => load_from(&path),
        None => Ok(HashCheckConfig::default()),
    }
}

/// Like [`load`], but a missing, unreadable or malformed file never stops the
/// run: defaults are used and the error is handed back for logging.
pub fn load_or_default() -> (HashCheckConfig, Option<anyhow::Error>) {
    or_default(load())
}

fn or_default(loaded: Result<HashCheckConfig>) -> (HashCheckConfig, Option<anyhow::Error>) {
    match loaded {
        Ok(cfg) => (cfg, None),
        Err(e) => (HashCheckConfig::default(), Some(e)),
    }
}

pub fn load_from(path: &Path) -> Result<HashCheckConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: HashCheckConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
