use crate::config::EditorConfig;

/// Project-level settings
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectSettings {
    /// Frame rate used for snapping and timecodes
    pub fps: f64,
    /// Nominal clip length for assets without a known duration
    pub default_clip_duration_seconds: f64,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self::from_editor_config(&EditorConfig::default())
    }
}

impl ProjectSettings {
    pub fn from_editor_config(config: &EditorConfig) -> Self {
        Self {
            fps: config.fps,
            default_clip_duration_seconds: config.default_clip_duration_seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_follow_editor_config() {
        let config = EditorConfig {
            fps: 24.0,
            default_clip_duration_seconds: 3.0,
            ..EditorConfig::default()
        };
        let settings = ProjectSettings::from_editor_config(&config);
        assert_eq!(settings.fps, 24.0);
        assert_eq!(settings.default_clip_duration_seconds, 3.0);
    }
}
