use std::path::PathBuf;

const APP_DIR_NAME: &str = "VideoStudio";

fn user_config_base() -> PathBuf {
    std::env::var("APPDATA")
        .or_else(|_| std::env::var("XDG_CONFIG_HOME"))
        .map(PathBuf::from)
        .or_else(|_| std::env::var("HOME").map(|home| PathBuf::from(home).join(".config")))
        .unwrap_or_else(|_| std::env::temp_dir())
}

/// Per-user directory holding `config.json`.
pub fn app_config_root() -> PathBuf {
    user_config_base().join(APP_DIR_NAME)
}
