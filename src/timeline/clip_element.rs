use dioxus::prelude::*;
use uuid::Uuid;

use crate::constants::{
    ACCENT_ERROR, BG_ELEVATED, BORDER_ACCENT, BORDER_DEFAULT, BORDER_SUBTLE, MIN_CLIP_WIDTH_PX,
    TEXT_MUTED, TEXT_PRIMARY, TRACK_ROW_HEIGHT,
};
use crate::core::layout::{px_to_time, snap_time_to_frame, time_to_px};
use crate::state::{MediaAsset, TrackAsset};

/// New start time for a clip dragged `delta_x` pixels from `start_time`.
pub(crate) fn dragged_start_time(start_time: f64, delta_x: f64, zoom: f64, fps: f64) -> f64 {
    let px = time_to_px(start_time, zoom) + delta_x;
    snap_time_to_frame(px_to_time(px, zoom), fps)
}

/// A single placement on a track row
#[component]
pub(crate) fn ClipElement(
    placement: TrackAsset,
    asset: Option<MediaAsset>,
    zoom: f64,
    fps: f64,
    clip_color: &'static str,
    is_selected: bool,
    on_select: EventHandler<Uuid>,
    on_delete: EventHandler<Uuid>,
    on_move: EventHandler<(Uuid, f64)>,
    on_volume: EventHandler<(Uuid, f32)>,
) -> Element {
    let mut show_menu = use_signal(|| false);
    let mut menu_pos = use_signal(|| (0.0, 0.0));
    let mut dragging = use_signal(|| false);
    let mut drag_start_x = use_signal(|| 0.0);
    let mut drag_start_time = use_signal(|| 0.0);

    let clip_id = placement.id;
    let start_time = placement.start_time;
    let left = time_to_px(placement.start_time, zoom);
    let width = time_to_px(placement.duration, zoom).max(MIN_CLIP_WIDTH_PX);
    let height = TRACK_ROW_HEIGHT - 8.0;
    let name = asset
        .as_ref()
        .map(|asset| asset.name.clone())
        .unwrap_or_else(|| "Missing media".to_string());
    let border = if is_selected {
        format!("1px solid {BORDER_ACCENT}")
    } else {
        format!("1px solid {clip_color}")
    };
    let cursor = if dragging() { "grabbing" } else { "grab" };
    let z_index = if dragging() { "100" } else { "1" };
    let volume = placement.volume;
    let volume_percent = volume.map(|v| (v * 100.0).round() as i32);

    rsx! {
        div {
            style: "
                position: absolute; left: {left}px; top: 4px;
                width: {width}px; height: {height}px; box-sizing: border-box;
                background-color: {BG_ELEVATED}; border: {border}; border-left: 3px solid {clip_color};
                border-radius: 4px; padding: 0 6px;
                display: flex; align-items: center; gap: 6px; overflow: hidden;
                cursor: {cursor}; user-select: none; z-index: {z_index};
            ",
            onmousedown: move |e| {
                let Some(btn) = e.trigger_button() else { return };
                if format!("{:?}", btn) == "Primary" {
                    e.prevent_default();
                    e.stop_propagation();
                    on_select.call(clip_id);
                    dragging.set(true);
                    drag_start_x.set(e.client_coordinates().x);
                    drag_start_time.set(start_time);
                }
            },
            oncontextmenu: move |e| {
                e.prevent_default();
                e.stop_propagation();
                on_select.call(clip_id);
                let coords = e.client_coordinates();
                menu_pos.set((coords.x, coords.y));
                show_menu.set(true);
            },
            span {
                style: "font-size: 11px; color: {TEXT_PRIMARY}; white-space: nowrap; overflow: hidden; text-overflow: ellipsis; pointer-events: none;",
                "{name}"
            }
            if let Some(percent) = volume_percent {
                span {
                    style: "font-size: 9px; color: {TEXT_MUTED}; pointer-events: none;",
                    "{percent}%"
                }
            }
        }

        // Drag overlay captures movement outside the clip
        if dragging() {
            div {
                style: "position: fixed; top: 0; left: 0; right: 0; bottom: 0; z-index: 9999; cursor: grabbing;",
                onmousemove: move |e| {
                    let delta_x = e.client_coordinates().x - drag_start_x();
                    let next = dragged_start_time(drag_start_time(), delta_x, zoom, fps);
                    on_move.call((clip_id, next));
                },
                onmouseup: move |_| dragging.set(false),
            }
        }

        if show_menu() {
            div {
                style: "position: fixed; top: 0; left: 0; right: 0; bottom: 0; z-index: 9998;",
                onclick: move |_| show_menu.set(false),
                oncontextmenu: move |e| {
                    e.prevent_default();
                    show_menu.set(false);
                },
            }
            div {
                style: "
                    position: fixed; left: {menu_pos().0}px; top: {menu_pos().1}px;
                    background-color: {BG_ELEVATED}; border: 1px solid {BORDER_DEFAULT};
                    border-radius: 6px; padding: 4px 0; min-width: 140px;
                    box-shadow: 0 4px 12px rgba(0,0,0,0.3);
                    z-index: 9999; font-size: 12px;
                ",
                oncontextmenu: move |e| e.prevent_default(),
                if let Some(volume) = volume {
                    div {
                        style: "padding: 6px 12px; color: {TEXT_MUTED}; display: flex; flex-direction: column; gap: 4px;",
                        span { "Volume" }
                        input {
                            r#type: "range",
                            min: "0",
                            max: "1",
                            step: "0.05",
                            value: "{volume}",
                            oninput: move |e| {
                                if let Ok(v) = e.value().parse::<f32>() {
                                    on_volume.call((clip_id, v));
                                }
                            },
                        }
                    }
                    div {
                        style: "height: 1px; background-color: {BORDER_SUBTLE}; margin: 4px 0;",
                    }
                }
                div {
                    style: "padding: 6px 12px; color: {ACCENT_ERROR}; cursor: pointer;",
                    onclick: move |_| {
                        on_delete.call(clip_id);
                        show_menu.set(false);
                    },
                    "🗑 Remove Clip"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_snaps_to_frames() {
        // 100 px/s at 10 fps: 23px is 0.23s, nearest frame 0.2s
        let next = dragged_start_time(1.0, 23.0, 100.0, 10.0);
        assert!((next - 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_drag_clamps_at_zero() {
        assert_eq!(dragged_start_time(0.5, -400.0, 100.0, 30.0), 0.0);
    }
}
