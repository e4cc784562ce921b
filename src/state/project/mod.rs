//! Timeline data model
//!
//! Tracks own their placements; placements reference library assets by id.

mod project;
mod track;
mod settings;

pub use project::Project;
pub use track::{Track, TrackAsset, TrackType};
pub use settings::ProjectSettings;
