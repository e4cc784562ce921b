//! Timeline module
//!
//! Panel header, ruler, track labels and rows, and the clips on them.

mod panel;
mod ruler;
mod playback_controls;
mod track_label;
mod track_row;
mod clip_element;

pub use panel::TimelinePanel;

use crate::constants::{ACCENT_AUDIO, ACCENT_VIDEO};
use crate::state::TrackType;

pub(crate) fn track_color(track_type: TrackType) -> &'static str {
    match track_type {
        TrackType::Video => ACCENT_VIDEO,
        TrackType::Audio => ACCENT_AUDIO,
    }
}
