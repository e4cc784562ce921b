//! Selection state shared across views.

use uuid::Uuid;

/// Tracks the current selection across the timeline and the media library.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    /// Selected placement in the timeline.
    pub track_asset: Option<Uuid>,
    /// Selected entry in the media library.
    pub media_asset: Option<Uuid>,
    /// Selected track label.
    pub track: Option<Uuid>,
}

impl SelectionState {
    /// Clear all selections.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Replace the selection with a single placement.
    pub fn select_track_asset(&mut self, id: Uuid) {
        self.clear();
        self.track_asset = Some(id);
    }

    /// Replace the selection with a single library entry.
    pub fn select_media_asset(&mut self, id: Uuid) {
        self.clear();
        self.media_asset = Some(id);
    }

    /// Replace the selection with a single track.
    pub fn select_track(&mut self, id: Uuid) {
        self.clear();
        self.track = Some(id);
    }

    /// Forget an id that no longer exists.
    pub fn forget(&mut self, id: Uuid) {
        for slot in [&mut self.track_asset, &mut self.media_asset, &mut self.track] {
            if *slot == Some(id) {
                *slot = None;
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.track_asset.is_none() && self.media_asset.is_none() && self.track.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_is_exclusive() {
        let mut selection = SelectionState::default();
        let clip = Uuid::new_v4();
        let media = Uuid::new_v4();
        selection.select_track_asset(clip);
        selection.select_media_asset(media);
        assert_eq!(selection.track_asset, None);
        assert_eq!(selection.media_asset, Some(media));
    }

    #[test]
    fn test_forget_clears_matching_slot() {
        let mut selection = SelectionState::default();
        let clip = Uuid::new_v4();
        selection.select_track_asset(clip);
        selection.forget(Uuid::new_v4());
        assert!(!selection.is_empty());
        selection.forget(clip);
        assert!(selection.is_empty());
    }
}
