//! Error types shared across the editor.

use std::path::PathBuf;
use uuid::Uuid;

/// Errors raised by editor operations.
///
/// None of these are fatal to the session: the UI logs them and surfaces the
/// message in the status bar.
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error("unsupported media type: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    #[error("failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not read media metadata for {}: {reason}", path.display())]
    Probe { path: PathBuf, reason: String },
    #[error("media asset not found: {0}")]
    AssetNotFound(Uuid),
    #[error("track not found: {0}")]
    TrackNotFound(Uuid),
    #[error("track asset not found: {0}")]
    TrackAssetNotFound(Uuid),
    #[error("{asset} cannot be placed on a {track} track")]
    IncompatibleTrack { asset: &'static str, track: &'static str },
    #[error("an export is already running")]
    ExportInProgress,
    #[error("invalid config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, EditorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_subject() {
        let err = EditorError::UnsupportedFormat(PathBuf::from("notes.txt"));
        assert_eq!(err.to_string(), "unsupported media type: notes.txt");

        let err = EditorError::IncompatibleTrack { asset: "audio", track: "video" };
        assert_eq!(err.to_string(), "audio cannot be placed on a video track");
    }

    #[test]
    fn test_file_read_keeps_source() {
        let err = EditorError::FileRead {
            path: PathBuf::from("clip.mp4"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("failed to read clip.mp4"));
    }
}
