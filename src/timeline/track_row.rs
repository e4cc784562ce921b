use dioxus::prelude::*;
use uuid::Uuid;

use crate::constants::{BG_BASE, BG_HOVER, BORDER_SUBTLE, TRACK_ROW_HEIGHT};
use crate::core::layout::{px_to_time, snap_time_to_frame};
use crate::state::{MediaAsset, Track};

use super::clip_element::ClipElement;
use super::track_color;

/// Track row content area
#[component]
pub fn TrackRow(
    width: f64,
    track: Track,
    library: Vec<MediaAsset>,
    zoom: f64,
    fps: f64,
    selected_clip: Option<Uuid>,
    on_clip_select: EventHandler<Uuid>,
    on_clip_delete: EventHandler<Uuid>,
    on_clip_move: EventHandler<(Uuid, f64)>,
    on_clip_volume: EventHandler<(Uuid, f32)>,
    dragged_asset: Option<Uuid>,
    on_asset_drop: EventHandler<(Uuid, f64, Uuid)>,
    on_deselect_all: EventHandler<MouseEvent>,
) -> Element {
    let track_id = track.id;
    let clip_color = track_color(track.track_type);

    let can_drop = dragged_asset
        .and_then(|asset_id| library.iter().find(|asset| asset.id == asset_id))
        .map(|asset| track.track_type.accepts(asset.kind))
        .unwrap_or(false);
    let bg_color = if can_drop { BG_HOVER } else { BG_BASE };

    rsx! {
        div {
            style: "
                height: {TRACK_ROW_HEIGHT}px; min-width: {width}px; box-sizing: border-box;
                border-bottom: 1px solid {BORDER_SUBTLE};
                background-color: {bg_color};
                position: relative;
                transition: background-color 0.2s;
            ",
            oncontextmenu: move |e| e.prevent_default(),
            onmousedown: move |e| {
                // Click on empty track area deselects
                if let Some(btn) = e.trigger_button() {
                    if format!("{:?}", btn) == "Primary" {
                        on_deselect_all.call(e);
                    }
                }
            },
            onmouseup: move |e| {
                if let Some(asset_id) = dragged_asset {
                    if can_drop {
                        e.prevent_default();
                        let time = px_to_time(e.element_coordinates().x, zoom);
                        on_asset_drop.call((track_id, snap_time_to_frame(time, fps), asset_id));
                    }
                }
            },

            for placement in track.assets.iter() {
                ClipElement {
                    key: "{placement.id}",
                    placement: placement.clone(),
                    asset: library.iter().find(|asset| asset.id == placement.asset_id).cloned(),
                    zoom: zoom,
                    fps: fps,
                    clip_color: clip_color,
                    is_selected: selected_clip == Some(placement.id),
                    on_select: move |id| on_clip_select.call(id),
                    on_delete: move |id| on_clip_delete.call(id),
                    on_move: move |payload| on_clip_move.call(payload),
                    on_volume: move |payload| on_clip_volume.call(payload),
                }
            }
        }
    }
}
