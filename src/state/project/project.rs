use uuid::Uuid;

use crate::error::{EditorError, Result};
use crate::state::MediaAsset;
use super::{ProjectSettings, Track, TrackAsset, TrackType};

/// The session container: media library, tracks and the tracked total duration
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    /// Project name
    pub name: String,
    /// Project settings (fps, default clip length)
    pub settings: ProjectSettings,
    /// Imported media, in import order
    pub library: Vec<MediaAsset>,
    /// All tracks in the project (ordered top to bottom)
    pub tracks: Vec<Track>,
    /// Latest end time across all tracks
    total_duration: f64,
}

impl Default for Project {
    fn default() -> Self {
        Self::with_settings("Untitled Project", ProjectSettings::default())
    }
}

impl Project {
    /// Create a new project with one video and one audio track
    pub fn with_settings(name: impl Into<String>, settings: ProjectSettings) -> Self {
        Self {
            name: name.into(),
            settings,
            library: Vec::new(),
            tracks: vec![Track::default_video(), Track::default_audio()],
            total_duration: 0.0,
        }
    }

    /// Total project duration in seconds
    pub fn total_duration(&self) -> f64 {
        self.total_duration
    }

    fn recompute_total_duration(&mut self) {
        self.total_duration = self.tracks.iter().map(Track::end_time).fold(0.0, f64::max);
    }

    // =========================================================================
    // Media library
    // =========================================================================

    /// Add an imported asset to the library
    pub fn add_media_asset(&mut self, asset: MediaAsset) -> Uuid {
        let id = asset.id;
        self.library.push(asset);
        id
    }

    /// Find an asset by ID
    pub fn find_media_asset(&self, id: Uuid) -> Option<&MediaAsset> {
        self.library.iter().find(|a| a.id == id)
    }

    /// Record the probed duration (in seconds) for an asset
    pub fn set_asset_duration(&mut self, id: Uuid, duration: Option<f64>) -> bool {
        if let Some(asset) = self.library.iter_mut().find(|a| a.id == id) {
            asset.set_duration(duration);
            return true;
        }
        false
    }

    /// Rename an asset by ID.
    pub fn rename_media_asset(&mut self, id: Uuid, name: impl Into<String>) -> bool {
        let name = name.into();
        if let Some(asset) = self.library.iter_mut().find(|asset| asset.id == id) {
            asset.name = name;
            return true;
        }
        false
    }

    /// Remove an asset and every placement that references it
    pub fn remove_media_asset(&mut self, id: Uuid) -> Option<MediaAsset> {
        let index = self.library.iter().position(|a| a.id == id)?;
        let asset = self.library.remove(index);
        for track in self.tracks.iter_mut() {
            track.assets.retain(|placement| placement.asset_id != id);
        }
        self.recompute_total_duration();
        Some(asset)
    }

    // =========================================================================
    // Tracks
    // =========================================================================

    /// First track of the given type, top to bottom
    pub fn first_track_of(&self, track_type: TrackType) -> Option<Uuid> {
        self.tracks
            .iter()
            .find(|t| t.track_type == track_type)
            .map(|t| t.id)
    }

    /// Tracks of one type, top to bottom
    pub fn tracks_of(&self, track_type: TrackType) -> impl Iterator<Item = &Track> {
        self.tracks.iter().filter(move |t| t.track_type == track_type)
    }

    fn add_track(&mut self, track_type: TrackType) -> Uuid {
        let count = self.tracks_of(track_type).count();
        let prefix = match track_type {
            TrackType::Video => "Video",
            TrackType::Audio => "Audio",
        };
        let track = Track::new(format!("{} {}", prefix, count + 1), track_type);
        let id = track.id;
        self.tracks.push(track);
        id
    }

    /// Add a new video track
    pub fn add_video_track(&mut self) -> Uuid {
        self.add_track(TrackType::Video)
    }

    /// Add a new audio track
    pub fn add_audio_track(&mut self) -> Uuid {
        self.add_track(TrackType::Audio)
    }

    /// Remove a track and its placements
    pub fn remove_track(&mut self, id: Uuid) -> bool {
        let len = self.tracks.len();
        self.tracks.retain(|t| t.id != id);
        let removed = self.tracks.len() < len;
        if removed {
            self.recompute_total_duration();
        }
        removed
    }

    // =========================================================================
    // Placements
    // =========================================================================

    fn compatible_track_mut(&mut self, track_id: Uuid, asset: &MediaAsset) -> Result<&mut Track> {
        let track = self
            .tracks
            .iter_mut()
            .find(|t| t.id == track_id)
            .ok_or(EditorError::TrackNotFound(track_id))?;
        if !track.track_type.accepts(asset.kind) {
            return Err(EditorError::IncompatibleTrack {
                asset: asset.kind.label(),
                track: track.track_type.label(),
            });
        }
        Ok(track)
    }

    /// Append an asset after the latest end time on a track. The placement
    /// uses the asset's probed duration, or the default clip length.
    pub fn append_to_track(&mut self, track_id: Uuid, asset_id: Uuid) -> Result<Uuid> {
        let asset = self
            .find_media_asset(asset_id)
            .cloned()
            .ok_or(EditorError::AssetNotFound(asset_id))?;
        let duration = asset.nominal_duration(self.settings.default_clip_duration_seconds);
        let track = self.compatible_track_mut(track_id, &asset)?;
        let placed = track.append(asset_id, duration);
        let (id, end) = (placed.id, placed.end_time());
        self.total_duration = self.total_duration.max(end);
        tracing::debug!(%asset_id, %track_id, start = end - duration, duration, "appended asset to track");
        Ok(id)
    }

    /// Append an asset to the first track that accepts it, creating one if needed
    pub fn add_to_timeline(&mut self, asset_id: Uuid) -> Result<Uuid> {
        let kind = self
            .find_media_asset(asset_id)
            .map(|a| a.kind)
            .ok_or(EditorError::AssetNotFound(asset_id))?;
        let track_type = TrackType::for_kind(kind);
        let track_id = match self.first_track_of(track_type) {
            Some(id) => id,
            None => self.add_track(track_type),
        };
        self.append_to_track(track_id, asset_id)
    }

    /// Place an asset at an explicit time (drag and drop). No collision checks.
    pub fn place_on_track(&mut self, track_id: Uuid, asset_id: Uuid, start_time: f64) -> Result<Uuid> {
        let asset = self
            .find_media_asset(asset_id)
            .cloned()
            .ok_or(EditorError::AssetNotFound(asset_id))?;
        let duration = asset.nominal_duration(self.settings.default_clip_duration_seconds);
        let track = self.compatible_track_mut(track_id, &asset)?;
        let placed = track.place_at(asset_id, start_time, duration);
        let (id, end) = (placed.id, placed.end_time());
        self.total_duration = self.total_duration.max(end);
        Ok(id)
    }

    /// Find a placement and the track holding it
    pub fn find_track_asset(&self, id: Uuid) -> Option<(&Track, &TrackAsset)> {
        self.tracks
            .iter()
            .find_map(|track| track.find_asset(id).map(|placement| (track, placement)))
    }

    fn track_asset_mut(&mut self, id: Uuid) -> Result<&mut TrackAsset> {
        self.tracks
            .iter_mut()
            .find_map(|track| track.find_asset_mut(id))
            .ok_or(EditorError::TrackAssetNotFound(id))
    }

    /// Move a placement to a new start time. Overlaps are allowed.
    pub fn move_track_asset(&mut self, id: Uuid, new_start_time: f64) -> Result<()> {
        let placement = self.track_asset_mut(id)?;
        placement.start_time = new_start_time.max(0.0);
        self.recompute_total_duration();
        Ok(())
    }

    /// Remove a placement. Later placements are not shifted.
    pub fn remove_track_asset(&mut self, id: Uuid) -> Result<TrackAsset> {
        let removed = self
            .tracks
            .iter_mut()
            .find_map(|track| track.remove_asset(id))
            .ok_or(EditorError::TrackAssetNotFound(id))?;
        self.recompute_total_duration();
        Ok(removed)
    }

    /// Set the volume of an audio placement, clamped to 0..=1
    pub fn set_track_asset_volume(&mut self, id: Uuid, volume: f32) -> Result<()> {
        let placement = self.track_asset_mut(id)?;
        placement.volume = Some(volume.clamp(0.0, 1.0));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MediaKind;
    use proptest::prelude::*;
    use std::path::PathBuf;

    fn media(kind: MediaKind, duration: Option<f64>) -> MediaAsset {
        let mut asset = MediaAsset::new(
            Uuid::new_v4(),
            kind,
            "asset",
            "/media/test",
            PathBuf::from("asset"),
        );
        asset.set_duration(duration);
        asset
    }

    fn video_track(project: &Project) -> Uuid {
        project.first_track_of(TrackType::Video).unwrap()
    }

    #[test]
    fn test_default_project() {
        let project = Project::default();
        assert_eq!(project.tracks.len(), 2);
        assert_eq!(project.tracks[0].track_type, TrackType::Video);
        assert_eq!(project.tracks[1].track_type, TrackType::Audio);
        assert_eq!(project.total_duration(), 0.0);
    }

    #[test]
    fn test_append_uses_cumulative_start_times() {
        let mut project = Project::default();
        let track_id = video_track(&project);
        let durations = [3.0, 1.5, 4.25];
        let mut ids = Vec::new();
        for duration in durations {
            let asset_id = project.add_media_asset(media(MediaKind::Video, Some(duration)));
            ids.push(project.append_to_track(track_id, asset_id).unwrap());
        }
        let starts: Vec<f64> = ids
            .iter()
            .map(|id| project.find_track_asset(*id).unwrap().1.start_time)
            .collect();
        assert_eq!(starts, vec![0.0, 3.0, 4.5]);
        assert_eq!(project.total_duration(), 8.75);
    }

    #[test]
    fn test_unknown_duration_uses_default() {
        let mut project = Project::default();
        let image = project.add_media_asset(media(MediaKind::Image, None));
        let id = project.add_to_timeline(image).unwrap();
        let (track, placement) = project.find_track_asset(id).unwrap();
        assert_eq!(track.track_type, TrackType::Video);
        assert_eq!(placement.duration, 5.0);
    }

    #[test]
    fn test_remove_does_not_shift_later_assets() {
        let mut project = Project::default();
        let track_id = video_track(&project);
        let a = project.add_media_asset(media(MediaKind::Video, Some(2.0)));
        let b = project.add_media_asset(media(MediaKind::Video, Some(3.0)));
        let first = project.append_to_track(track_id, a).unwrap();
        let second = project.append_to_track(track_id, b).unwrap();

        project.remove_track_asset(first).unwrap();
        assert_eq!(project.find_track_asset(second).unwrap().1.start_time, 2.0);

        // The gap is not reused: the next append lands after the latest end.
        let third = project.append_to_track(track_id, a).unwrap();
        assert_eq!(project.find_track_asset(third).unwrap().1.start_time, 5.0);
    }

    #[test]
    fn test_total_duration_is_max_end_across_tracks() {
        let mut project = Project::default();
        let video = project.add_media_asset(media(MediaKind::Video, Some(4.0)));
        let audio = project.add_media_asset(media(MediaKind::Audio, Some(9.0)));
        project.add_to_timeline(video).unwrap();
        let audio_placement = project.add_to_timeline(audio).unwrap();
        assert_eq!(project.total_duration(), 9.0);

        project.remove_track_asset(audio_placement).unwrap();
        assert_eq!(project.total_duration(), 4.0);
    }

    #[test]
    fn test_incompatible_track_is_rejected() {
        let mut project = Project::default();
        let audio = project.add_media_asset(media(MediaKind::Audio, Some(1.0)));
        let err = project.append_to_track(video_track(&project), audio).unwrap_err();
        assert!(matches!(err, EditorError::IncompatibleTrack { .. }));
        assert!(matches!(
            project.append_to_track(Uuid::new_v4(), audio),
            Err(EditorError::TrackNotFound(_))
        ));
        assert!(matches!(
            project.add_to_timeline(Uuid::new_v4()),
            Err(EditorError::AssetNotFound(_))
        ));
    }

    #[test]
    fn test_add_to_timeline_recreates_missing_track() {
        let mut project = Project::default();
        let audio_track = project.first_track_of(TrackType::Audio).unwrap();
        assert!(project.remove_track(audio_track));
        let audio = project.add_media_asset(media(MediaKind::Audio, Some(2.0)));
        let id = project.add_to_timeline(audio).unwrap();
        let (track, placement) = project.find_track_asset(id).unwrap();
        assert_eq!(track.name, "Audio 1");
        assert_eq!(placement.volume, Some(1.0));
    }

    #[test]
    fn test_move_allows_overlap_and_clamps() {
        let mut project = Project::default();
        let track_id = video_track(&project);
        let a = project.add_media_asset(media(MediaKind::Video, Some(2.0)));
        let first = project.append_to_track(track_id, a).unwrap();
        let second = project.append_to_track(track_id, a).unwrap();

        project.move_track_asset(second, 1.0).unwrap();
        assert_eq!(project.find_track_asset(second).unwrap().1.start_time, 1.0);
        assert_eq!(project.total_duration(), 3.0);

        project.move_track_asset(first, -4.0).unwrap();
        assert_eq!(project.find_track_asset(first).unwrap().1.start_time, 0.0);
    }

    #[test]
    fn test_remove_media_asset_drops_placements() {
        let mut project = Project::default();
        let a = project.add_media_asset(media(MediaKind::Video, Some(6.0)));
        let b = project.add_media_asset(media(MediaKind::Video, Some(2.0)));
        project.add_to_timeline(a).unwrap();
        let kept = project.add_to_timeline(b).unwrap();
        assert!(project.remove_media_asset(a).is_some());
        assert!(project.find_media_asset(a).is_none());
        assert_eq!(project.find_track_asset(kept).unwrap().1.start_time, 6.0);
        assert_eq!(project.total_duration(), 8.0);
    }

    #[test]
    fn test_volume_is_clamped() {
        let mut project = Project::default();
        let audio = project.add_media_asset(media(MediaKind::Audio, Some(1.0)));
        let id = project.add_to_timeline(audio).unwrap();
        project.set_track_asset_volume(id, 1.7).unwrap();
        assert_eq!(project.find_track_asset(id).unwrap().1.volume, Some(1.0));
    }

    #[test]
    fn test_add_tracks() {
        let mut project = Project::default();
        project.add_video_track();
        assert_eq!(project.tracks.last().unwrap().name, "Video 2");
        project.add_audio_track();
        assert_eq!(project.tracks.last().unwrap().name, "Audio 2");
    }

    proptest! {
        #[test]
        fn prop_start_times_are_prefix_sums(durations in prop::collection::vec(0.1f64..60.0, 1..20)) {
            let mut project = Project::default();
            let track_id = video_track(&project);
            let mut expected_start = 0.0;
            for duration in durations {
                let asset_id = project.add_media_asset(media(MediaKind::Video, Some(duration)));
                let id = project.append_to_track(track_id, asset_id).unwrap();
                let start = project.find_track_asset(id).unwrap().1.start_time;
                prop_assert!((start - expected_start).abs() < 1e-9);
                expected_start += duration;
            }
            prop_assert!((project.total_duration() - expected_start).abs() < 1e-9);
        }

        #[test]
        fn prop_total_duration_tracks_max_end(
            video in prop::collection::vec(0.1f64..30.0, 0..8),
            audio in prop::collection::vec(0.1f64..30.0, 0..8),
            remove_first in any::<bool>(),
        ) {
            let mut project = Project::default();
            let mut placements = Vec::new();
            for duration in video {
                let id = project.add_media_asset(media(MediaKind::Video, Some(duration)));
                placements.push(project.add_to_timeline(id).unwrap());
            }
            for duration in audio {
                let id = project.add_media_asset(media(MediaKind::Audio, Some(duration)));
                placements.push(project.add_to_timeline(id).unwrap());
            }
            if remove_first && !placements.is_empty() {
                project.remove_track_asset(placements[0]).unwrap();
            }
            let max_end = project
                .tracks
                .iter()
                .flat_map(|t| t.assets.iter())
                .map(|a| a.end_time())
                .fold(0.0, f64::max);
            prop_assert!((project.total_duration() - max_end).abs() < 1e-9);
        }
    }
}
