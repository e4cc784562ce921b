//! Media library entries
//!
//! A `MediaAsset` is an imported file reference that lives for the session only.

use std::path::{Path, PathBuf};
use uuid::Uuid;

/// The kind of media an asset holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Video,
    Image,
    Audio,
}

impl MediaKind {
    /// Classify a MIME type such as `video/mp4`. Only the top-level type matters.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let top_level = mime.split('/').next()?.trim().to_ascii_lowercase();
        match top_level.as_str() {
            "video" => Some(MediaKind::Video),
            "image" => Some(MediaKind::Image),
            "audio" => Some(MediaKind::Audio),
            _ => None,
        }
    }

    /// Classify a file by the MIME type guessed from its extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        mime_guess::from_path(path)
            .iter()
            .find_map(|mime| Self::from_mime(mime.essence_str()))
    }

    /// Returns true for kinds that render on video tracks
    pub fn is_visual(self) -> bool {
        matches!(self, MediaKind::Video | MediaKind::Image)
    }

    /// Returns true for kinds whose duration comes from decoded metadata
    pub fn is_timed(self) -> bool {
        matches!(self, MediaKind::Video | MediaKind::Audio)
    }

    pub fn label(self) -> &'static str {
        match self {
            MediaKind::Video => "video",
            MediaKind::Image => "image",
            MediaKind::Audio => "audio",
        }
    }
}

/// An imported file in the media library
#[derive(Debug, Clone, PartialEq)]
pub struct MediaAsset {
    /// Unique identifier
    pub id: Uuid,
    /// What the file contains
    pub kind: MediaKind,
    /// User-facing display name
    pub name: String,
    /// Session-scoped object URL served to the webview
    pub url: String,
    /// Location of the source file on disk
    pub path: PathBuf,
    /// Duration in seconds, filled in once metadata has been probed
    pub duration: Option<f64>,
}

impl MediaAsset {
    /// Create an asset with a known id (the id also keys its object URL).
    pub fn new(
        id: Uuid,
        kind: MediaKind,
        name: impl Into<String>,
        url: impl Into<String>,
        path: PathBuf,
    ) -> Self {
        Self {
            id,
            kind,
            name: name.into(),
            url: url.into(),
            path,
            duration: None,
        }
    }

    /// Record a probed duration. Non-finite or negative values are dropped.
    pub fn set_duration(&mut self, duration: Option<f64>) {
        self.duration = duration.filter(|d| d.is_finite() && *d > 0.0);
    }

    /// Duration to use when placing this asset on a track.
    pub fn nominal_duration(&self, default_duration: f64) -> f64 {
        self.duration.unwrap_or(default_duration)
    }
}

/// Display name for a file path: the file name without its directory.
pub fn display_name_for_path(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| "Untitled".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_mime() {
        assert_eq!(MediaKind::from_mime("video/mp4"), Some(MediaKind::Video));
        assert_eq!(MediaKind::from_mime("Image/PNG"), Some(MediaKind::Image));
        assert_eq!(MediaKind::from_mime("audio/mpeg"), Some(MediaKind::Audio));
        assert_eq!(MediaKind::from_mime("text/plain"), None);
        assert_eq!(MediaKind::from_mime(""), None);
    }

    #[test]
    fn test_kind_from_path() {
        assert_eq!(MediaKind::from_path(Path::new("clip.mp4")), Some(MediaKind::Video));
        assert_eq!(MediaKind::from_path(Path::new("still.JPG")), Some(MediaKind::Image));
        assert_eq!(MediaKind::from_path(Path::new("voice.wav")), Some(MediaKind::Audio));
        assert_eq!(MediaKind::from_path(Path::new("readme.txt")), None);
        assert_eq!(MediaKind::from_path(Path::new("no_extension")), None);
    }

    #[test]
    fn test_nominal_duration_falls_back() {
        let mut asset = MediaAsset::new(
            Uuid::new_v4(),
            MediaKind::Video,
            "clip.mp4",
            "/media/x",
            PathBuf::from("clip.mp4"),
        );
        assert_eq!(asset.nominal_duration(5.0), 5.0);
        asset.set_duration(Some(12.5));
        assert_eq!(asset.nominal_duration(5.0), 12.5);
        asset.set_duration(Some(f64::NAN));
        assert_eq!(asset.duration, None);
    }

    #[test]
    fn test_display_name_strips_directories() {
        assert_eq!(display_name_for_path(Path::new("/tmp/media/take_2.mov")), "take_2.mov");
    }
}
