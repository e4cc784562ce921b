//! Application configuration.
//!
//! Loaded once at startup from `$VIDEO_STUDIO_CONFIG` or
//! `<config root>/config.json`. Every field has a default so partial files work.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::export::{ExportFormat, ExportQuality};
use crate::error::{EditorError, Result};

pub const CONFIG_PATH_ENV: &str = "VIDEO_STUDIO_CONFIG";

/// Global application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration.
    pub logging: LoggingConfig,
    /// Timeline and preview defaults.
    pub editor: EditorConfig,
    /// Export panel defaults.
    pub export: ExportConfig,
    /// Initial window size.
    pub window: WindowConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "video_studio=debug,warn").
    pub level: String,
    /// Whether to output structured JSON logs.
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Timeline frame rate used for snapping and timecodes.
    pub fps: f64,
    /// Nominal clip length when an asset has no known duration.
    pub default_clip_duration_seconds: f64,
    /// Initial timeline zoom in pixels per second.
    pub default_zoom: f64,
    /// How often the preview player is polled for its current time.
    pub preview_poll_interval_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Delay between simulated export steps.
    pub step_delay_ms: u64,
    pub default_format: ExportFormat,
    pub default_quality: ExportQuality,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            editor: EditorConfig::default(),
            export: ExportConfig::default(),
            window: WindowConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            fps: 30.0,
            default_clip_duration_seconds: 5.0,
            default_zoom: 50.0,
            preview_poll_interval_ms: 100,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            step_delay_ms: 1000,
            default_format: ExportFormat::Mp4,
            default_quality: ExportQuality::High,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}

impl AppConfig {
    /// Read a config file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(EditorError::FileRead {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        serde_json::from_str(&json).map_err(|source| EditorError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve the config path from the environment, falling back to the
    /// per-user config root.
    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| crate::core::paths::app_config_root().join("config.json"))
    }

    /// Load the config for this session. Errors fall back to defaults; the
    /// returned message is logged once logging is up.
    pub fn load_or_default() -> (Self, Option<String>) {
        let path = Self::default_path();
        match Self::load_from(&path) {
            Ok(config) => (config.sanitized(), None),
            Err(err) => (Self::default(), Some(err.to_string())),
        }
    }

    /// Clamp values the UI cannot work with.
    pub fn sanitized(mut self) -> Self {
        let defaults = EditorConfig::default();
        if !(self.editor.fps > 0.0) {
            self.editor.fps = defaults.fps;
        }
        if !(self.editor.default_clip_duration_seconds > 0.0) {
            self.editor.default_clip_duration_seconds = defaults.default_clip_duration_seconds;
        }
        if !(self.editor.default_zoom > 0.0) {
            self.editor.default_zoom = defaults.default_zoom;
        }
        self.editor.preview_poll_interval_ms = self.editor.preview_poll_interval_ms.max(10);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.editor.preview_poll_interval_ms, 100);
        assert_eq!(config.export.step_delay_ms, 1000);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "editor": { "fps": 24.0 }, "logging": { "json": true } }"#).unwrap();
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.editor.fps, 24.0);
        assert_eq!(config.editor.default_clip_duration_seconds, 5.0);
        assert!(config.logging.json);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.export.default_format, ExportFormat::Mp4);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, EditorError::Config { .. }));
    }

    #[test]
    fn test_sanitized_replaces_nonsense() {
        let mut config = AppConfig::default();
        config.editor.fps = 0.0;
        config.editor.default_zoom = -3.0;
        config.editor.preview_poll_interval_ms = 0;
        let config = config.sanitized();
        assert_eq!(config.editor.fps, 30.0);
        assert_eq!(config.editor.default_zoom, 50.0);
        assert_eq!(config.editor.preview_poll_interval_ms, 10);
    }
}
