//! Where the trigger and pattern file is looked up
//!
//! `ConfigSet::load` reads `config.yaml` from the directory below and falls
//! back to the built-in `@` mention when it is missing. The CLI's `--config`
//! flag bypasses this lookup entirely.

use std::{env, path::PathBuf};

const APP_DIR: &str = "mention-field";

/// Directory holding `config.yaml`: `$XDG_CONFIG_HOME/mention-field` or
/// `~/.config/mention-field`, and `%APPDATA%\mention-field` on Windows
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// Trigger and pattern definitions read at startup
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}
