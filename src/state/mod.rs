//! State management module
//!
//! This module contains the session data structures:
//! - Project: media library, tracks and total duration
//! - Track / TrackAsset: timeline lanes and the placements on them
//! - MediaAsset: imported files
//! - SelectionState: what the user has selected

mod project;
mod asset;
mod selection;

pub use project::*;
pub use asset::*;
pub use selection::*;
