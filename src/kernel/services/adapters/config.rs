//! 配置服务：加载与修改 bridge 配置
//!
//! 配置文件为 JSON，缺省字段取默认值

use crate::kernel::services::ports::config::BridgeConfig;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "Cannot read config {}: {}", path.display(), source)
            }
            ConfigError::Parse(e) => write!(f, "Invalid config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

pub struct ConfigService {
    config: BridgeConfig,
}

impl ConfigService {
    pub fn new() -> Self {
        Self {
            config: BridgeConfig::default(),
        }
    }

    pub fn from_json_str(data: &str) -> Result<Self, ConfigError> {
        let config: BridgeConfig = serde_json::from_str(data)?;
        Ok(Self { config })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let service = Self::from_json_str(&data)?;
        tracing::info!(path = %path.display(), "bridge config loaded");
        Ok(service)
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn into_config(self) -> BridgeConfig {
        self.config
    }

    pub fn set_resize_settle_ms(&mut self, ms: u64) {
        self.config.resize_settle_ms = ms;
    }

    pub fn set_undo_reset_delay_ms(&mut self, ms: u64) {
        self.config.undo_reset_delay_ms = ms;
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/config.rs"]
mod tests;
