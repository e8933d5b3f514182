//! 日志目录解析
//!
//! 优先级：
//! 1. `EDITOR_BRIDGE_LOG_DIR`（原样使用）
//! 2. 平台数据目录下的 `editor-bridge/logs`
//!    - macOS: ~/Library/Application Support
//!    - Linux: $XDG_DATA_HOME 或 ~/.local/share
//!    - Windows: %APPDATA%

use std::path::PathBuf;

const APP_NAME: &str = "editor-bridge";
const LOG_DIR: &str = "logs";
pub const LOG_DIR_ENV: &str = "EDITOR_BRIDGE_LOG_DIR";

/// Platform data root for `os`, reading variables through `var`.
fn data_root(os: &str, var: &dyn Fn(&str) -> Option<String>) -> Option<PathBuf> {
    let home = || var("HOME").map(PathBuf::from);
    match os {
        "macos" => home().map(|h| h.join("Library/Application Support")),
        "linux" => var("XDG_DATA_HOME")
            .map(PathBuf::from)
            .or_else(|| home().map(|h| h.join(".local/share"))),
        "windows" => var("APPDATA").map(PathBuf::from),
        _ => None,
    }
}

fn resolve_log_dir(os: &str, var: &dyn Fn(&str) -> Option<String>) -> Option<PathBuf> {
    if let Some(dir) = var(LOG_DIR_ENV).filter(|d| !d.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    data_root(os, var).map(|root| root.join(APP_NAME).join(LOG_DIR))
}

/// 获取日志目录路径
pub fn get_log_dir() -> Option<PathBuf> {
    resolve_log_dir(std::env::consts::OS, &|name| std::env::var(name).ok())
}

/// 确保日志目录存在
pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    let dir = get_log_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine log directory",
        )
    })?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
