use crate::core::error::Result;
use std::path::PathBuf;

const APP_DIR: &str = "scratchpad";
const LOG_FILE: &str = "scratchpad.log";

pub fn get_config_directory() -> Result<PathBuf> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| dirs::home_dir().unwrap_or_default().join(".config")),
        "macos" => dirs::home_dir()
            .unwrap_or_default()
            .join("Library/Application Support"),
        _ => dirs::config_dir().unwrap_or_default(),
    };

    Ok(base.join(APP_DIR))
}

pub fn get_cache_directory() -> Result<PathBuf> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CACHE_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| dirs::home_dir().unwrap_or_default().join(".cache")),
        "macos" => dirs::home_dir().unwrap_or_default().join("Library/Caches"),
        _ => dirs::cache_dir().unwrap_or_default(),
    };

    Ok(base.join(APP_DIR))
}

/// Location of the config file inside [`get_config_directory`]
pub fn get_config_file() -> Result<PathBuf> {
    Ok(get_config_directory()?.join("config.json"))
}

/// Location of the append-only diagnostic log
pub fn get_log_file() -> Result<PathBuf> {
    Ok(get_cache_directory()?.join(LOG_FILE))
}
