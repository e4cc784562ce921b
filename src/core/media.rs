use dioxus::prelude::{spawn, Signal, WritableExt};
use std::path::Path;
use std::process::Command;
use std::sync::Arc;

use crate::core::media_server::MediaUrlRegistry;
use crate::error::{EditorError, Result};
use crate::state::{display_name_for_path, MediaAsset, MediaKind};

/// File dialog filter extensions, grouped the way the import dialog shows them.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "m4v", "mkv", "webm", "avi"];
pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "ogg", "flac", "m4a", "aac"];
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// Open the native import dialog. `None` when the user cancels.
pub fn pick_media_files() -> Option<Vec<std::path::PathBuf>> {
    let all: Vec<&str> = VIDEO_EXTENSIONS
        .iter()
        .chain(AUDIO_EXTENSIONS)
        .chain(IMAGE_EXTENSIONS)
        .copied()
        .collect();
    rfd::FileDialog::new()
        .add_filter("Media Files", &all)
        .add_filter("Video", VIDEO_EXTENSIONS)
        .add_filter("Audio", AUDIO_EXTENSIONS)
        .add_filter("Images", IMAGE_EXTENSIONS)
        .set_title("Import Media")
        .pick_files()
}

/// Build a library entry for a picked file and register its object URL.
pub fn import_file(path: &Path, registry: &MediaUrlRegistry) -> Result<MediaAsset> {
    let kind = MediaKind::from_path(path)
        .ok_or_else(|| EditorError::UnsupportedFormat(path.to_path_buf()))?;
    let metadata = std::fs::metadata(path).map_err(|source| EditorError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    if !metadata.is_file() {
        return Err(EditorError::UnsupportedFormat(path.to_path_buf()));
    }

    let (id, url) = registry.register(path);
    tracing::info!(%id, kind = kind.label(), path = %path.display(), "imported media");
    Ok(MediaAsset::new(id, kind, display_name_for_path(path), url, path.to_path_buf()))
}

/// Probe media duration in seconds using ffprobe.
pub fn probe_duration_seconds(path: &Path) -> Result<f64> {
    let probe_error = |reason: String| EditorError::Probe {
        path: path.to_path_buf(),
        reason,
    };

    let output = Command::new("ffprobe")
        .arg("-v")
        .arg("error")
        .arg("-show_entries")
        .arg("format=duration")
        .arg("-of")
        .arg("default=noprint_wrappers=1:nokey=1")
        .arg(path)
        .output()
        .map_err(|err| probe_error(format!("ffprobe unavailable: {err}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(probe_error(stderr.trim().to_string()));
    }

    parse_probe_output(&String::from_utf8_lossy(&output.stdout)).ok_or_else(|| probe_error("no duration reported".to_string()))
}

/// Parse the single number ffprobe prints for `format=duration`.
pub fn parse_probe_output(stdout: &str) -> Option<f64> {
    let duration = stdout.trim().parse::<f64>().ok()?;
    (duration.is_finite() && duration > 0.0).then_some(duration)
}

/// Fill in an asset's duration in the background. Failures are non-fatal:
/// the asset keeps the default clip length and the status bar says why.
pub fn spawn_asset_duration_probe(
    mut project: Signal<crate::state::Project>,
    mut status: Signal<Option<String>>,
    asset: &MediaAsset,
) {
    if !asset.kind.is_timed() || asset.duration.is_some() {
        return;
    }
    let asset_id = asset.id;
    let path = asset.path.clone();

    spawn(async move {
        let result = tokio::task::spawn_blocking(move || probe_duration_seconds(&path)).await;
        match result {
            Ok(Ok(duration)) => {
                tracing::debug!(%asset_id, duration, "probed media duration");
                project.write().set_asset_duration(asset_id, Some(duration));
            }
            Ok(Err(err)) => {
                tracing::warn!(%asset_id, error = %err, "duration probe failed");
                status.set(Some(err.to_string()));
            }
            Err(err) => tracing::warn!(%asset_id, error = %err, "duration probe task failed"),
        }
    });
}

/// Import every picked file, reporting failures without stopping the batch.
pub fn import_files(
    mut project: Signal<crate::state::Project>,
    mut status: Signal<Option<String>>,
    registry: Arc<MediaUrlRegistry>,
    paths: Vec<std::path::PathBuf>,
) {
    let mut imported = 0usize;
    for path in paths {
        match import_file(&path, &registry) {
            Ok(asset) => {
                spawn_asset_duration_probe(project, status, &asset);
                project.write().add_media_asset(asset);
                imported += 1;
            }
            Err(err) => {
                tracing::warn!(error = %err, "import failed");
                status.set(Some(err.to_string()));
            }
        }
    }
    if imported > 0 {
        let noun = if imported == 1 { "file" } else { "files" };
        status.set(Some(format!("Imported {imported} {noun}")));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_probe_output() {
        assert_eq!(parse_probe_output("12.480000\n"), Some(12.48));
        assert_eq!(parse_probe_output("N/A\n"), None);
        assert_eq!(parse_probe_output(""), None);
        assert_eq!(parse_probe_output("0.000000"), None);
    }

    #[test]
    fn test_import_rejects_unsupported_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "hello").unwrap();
        let registry = MediaUrlRegistry::default();
        let err = import_file(&path, &registry).unwrap_err();
        assert!(matches!(err, EditorError::UnsupportedFormat(_)));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_import_missing_file_is_read_error() {
        let registry = MediaUrlRegistry::default();
        let err = import_file(Path::new("/definitely/not/here.mp4"), &registry).unwrap_err();
        assert!(matches!(err, EditorError::FileRead { .. }));
    }

    #[test]
    fn test_import_registers_object_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("beach.png");
        std::fs::write(&path, [0u8; 8]).unwrap();
        let registry = MediaUrlRegistry::default();
        let asset = import_file(&path, &registry).unwrap();
        assert_eq!(asset.kind, MediaKind::Image);
        assert_eq!(asset.name, "beach.png");
        assert_eq!(asset.duration, None);
        assert_eq!(registry.resolve(asset.id).as_deref(), Some(path.as_path()));
        assert!(asset.url.starts_with("/media/"));
    }
}
