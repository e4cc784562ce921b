//! Preview sources derived from the timeline.
//!
//! Sources are recomputed from the project whenever it changes. The player
//! only ever binds the first video source; audio sources are collected
//! alongside but nothing plays them.

use crate::state::{MediaKind, Project, TrackType};

/// One media segment the preview could show.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewSource {
    pub kind: MediaKind,
    pub url: String,
    /// Timeline offset in seconds
    pub start_time: f64,
    /// Placement duration in seconds
    pub duration: f64,
}

/// Everything the preview panel derives from the timeline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreviewSources {
    /// Video and image placements, sorted by start time
    pub visual: Vec<PreviewSource>,
    /// Audio placements, sorted by start time
    pub audio: Vec<PreviewSource>,
}

impl PreviewSources {
    /// The source the `<video>` element binds to
    pub fn primary_video(&self) -> Option<&PreviewSource> {
        self.visual.iter().find(|source| source.kind == MediaKind::Video)
    }
}

fn collect(project: &Project, track_type: TrackType) -> Vec<PreviewSource> {
    let mut sources: Vec<PreviewSource> = project
        .tracks_of(track_type)
        .flat_map(|track| track.assets.iter())
        .filter_map(|placement| {
            let asset = project.find_media_asset(placement.asset_id)?;
            track_type.accepts(asset.kind).then(|| PreviewSource {
                kind: asset.kind,
                url: asset.url.clone(),
                start_time: placement.start_time,
                duration: placement.duration,
            })
        })
        .collect();
    sources.sort_by(|a, b| a.start_time.total_cmp(&b.start_time));
    sources
}

/// Derive the preview sources for the current project.
pub fn build_preview_sources(project: &Project) -> PreviewSources {
    PreviewSources {
        visual: collect(project, TrackType::Video),
        audio: collect(project, TrackType::Audio),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MediaAsset;
    use std::path::PathBuf;
    use uuid::Uuid;

    fn add(project: &mut Project, kind: MediaKind, url: &str, duration: f64) -> Uuid {
        let mut asset = MediaAsset::new(Uuid::new_v4(), kind, url, url, PathBuf::from(url));
        asset.set_duration(Some(duration));
        project.add_media_asset(asset)
    }

    #[test]
    fn test_sources_sorted_across_tracks() {
        let mut project = Project::default();
        let second_video_track = project.add_video_track();
        let image = add(&mut project, MediaKind::Image, "/media/still", 2.0);
        let clip = add(&mut project, MediaKind::Video, "/media/clip", 3.0);
        project.add_to_timeline(image).unwrap();
        project.place_on_track(second_video_track, clip, 1.0).unwrap();

        let sources = build_preview_sources(&project);
        let urls: Vec<&str> = sources.visual.iter().map(|s| s.url.as_str()).collect();
        assert_eq!(urls, vec!["/media/still", "/media/clip"]);
        assert_eq!(sources.primary_video().map(|s| s.start_time), Some(1.0));
    }

    #[test]
    fn test_audio_is_collected_separately() {
        let mut project = Project::default();
        let song = add(&mut project, MediaKind::Audio, "/media/song", 30.0);
        project.add_to_timeline(song).unwrap();
        let sources = build_preview_sources(&project);
        assert!(sources.visual.is_empty());
        assert_eq!(sources.audio.len(), 1);
        assert!(sources.primary_video().is_none());
    }

    #[test]
    fn test_primary_video_skips_leading_images() {
        let mut project = Project::default();
        let image = add(&mut project, MediaKind::Image, "/media/still", 2.0);
        let a = add(&mut project, MediaKind::Video, "/media/a", 3.0);
        let b = add(&mut project, MediaKind::Video, "/media/b", 3.0);
        project.add_to_timeline(image).unwrap();
        project.add_to_timeline(a).unwrap();
        project.add_to_timeline(b).unwrap();
        let sources = build_preview_sources(&project);
        assert_eq!(sources.primary_video().map(|s| s.url.as_str()), Some("/media/a"));
    }
}
