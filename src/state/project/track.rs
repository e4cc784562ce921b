use uuid::Uuid;

use crate::state::MediaKind;

/// The type of track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackType {
    /// Video track - holds video and image placements
    Video,
    /// Audio track - holds audio placements
    Audio,
}

impl TrackType {
    /// Whether media of this kind may be placed on the track
    pub fn accepts(self, kind: MediaKind) -> bool {
        match self {
            TrackType::Video => kind.is_visual(),
            TrackType::Audio => kind == MediaKind::Audio,
        }
    }

    /// The track type a media kind lands on by default
    pub fn for_kind(kind: MediaKind) -> Self {
        if kind.is_visual() {
            TrackType::Video
        } else {
            TrackType::Audio
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TrackType::Video => "video",
            TrackType::Audio => "audio",
        }
    }
}

/// A placement of a media asset on a track
#[derive(Debug, Clone, PartialEq)]
pub struct TrackAsset {
    /// Unique identifier
    pub id: Uuid,
    /// Media asset this placement shows (non-owning)
    pub asset_id: Uuid,
    /// Start time in seconds
    pub start_time: f64,
    /// Duration in seconds
    pub duration: f64,
    /// Playback volume from 0.0 to 1.0, audio placements only
    pub volume: Option<f32>,
}

impl TrackAsset {
    pub fn new(asset_id: Uuid, start_time: f64, duration: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            asset_id,
            start_time,
            duration,
            volume: None,
        }
    }

    /// Get the end time of this placement
    pub fn end_time(&self) -> f64 {
        self.start_time + self.duration
    }
}

/// A lane in the timeline
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    /// Unique identifier
    pub id: Uuid,
    /// Display name (e.g., "Video 1", "Audio 1")
    pub name: String,
    /// Type of track
    pub track_type: TrackType,
    /// Placements in insertion order
    pub assets: Vec<TrackAsset>,
}

impl Track {
    /// Create a new empty track
    pub fn new(name: impl Into<String>, track_type: TrackType) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            track_type,
            assets: Vec::new(),
        }
    }

    /// Create the default video track
    pub fn default_video() -> Self {
        Self::new("Video 1", TrackType::Video)
    }

    /// Create the default audio track
    pub fn default_audio() -> Self {
        Self::new("Audio 1", TrackType::Audio)
    }

    /// Latest end time of any placement, 0 when empty
    pub fn end_time(&self) -> f64 {
        self.assets.iter().map(TrackAsset::end_time).fold(0.0, f64::max)
    }

    /// Append a placement after the latest end time. Gaps left by removals
    /// are not reused.
    pub fn append(&mut self, asset_id: Uuid, duration: f64) -> &TrackAsset {
        let start_time = self.end_time();
        self.push(TrackAsset::new(asset_id, start_time, duration))
    }

    /// Insert a placement at an explicit start time without collision checks.
    pub fn place_at(&mut self, asset_id: Uuid, start_time: f64, duration: f64) -> &TrackAsset {
        self.push(TrackAsset::new(asset_id, start_time.max(0.0), duration))
    }

    fn push(&mut self, mut placement: TrackAsset) -> &TrackAsset {
        if self.track_type == TrackType::Audio {
            placement.volume = Some(1.0);
        }
        self.assets.push(placement);
        &self.assets[self.assets.len() - 1]
    }

    pub fn find_asset(&self, id: Uuid) -> Option<&TrackAsset> {
        self.assets.iter().find(|a| a.id == id)
    }

    pub fn find_asset_mut(&mut self, id: Uuid) -> Option<&mut TrackAsset> {
        self.assets.iter_mut().find(|a| a.id == id)
    }

    /// Remove a placement; the remaining placements keep their start times.
    pub fn remove_asset(&mut self, id: Uuid) -> Option<TrackAsset> {
        let index = self.assets.iter().position(|a| a.id == id)?;
        Some(self.assets.remove(index))
    }
}
