use dioxus::prelude::*;
use uuid::Uuid;

use crate::constants::{
    ACCENT_AUDIO, ACCENT_ERROR, ACCENT_VIDEO, BG_ELEVATED, BG_SURFACE, BORDER_DEFAULT,
    BORDER_SUBTLE, TEXT_DIM, TEXT_MUTED,
};
use crate::core::layout::{format_timecode, px_to_time, snap_time_to_frame, time_to_px, visible_duration};
use crate::state::{MediaAsset, Track};

use super::playback_controls::PlaybackBtn;
use super::ruler::TimeRuler;
use super::track_color;
use super::track_label::TrackLabel;
use super::track_row::TrackRow;

/// Main timeline panel component
#[component]
pub fn TimelinePanel(
    height: f64,
    collapsed: bool,
    is_resizing: bool,
    on_toggle: EventHandler<MouseEvent>,
    // Project data
    tracks: Vec<Track>,
    library: Vec<MediaAsset>,
    total_duration: f64,
    // Timeline state
    current_time: f64,
    fps: f64,
    zoom: f64,
    min_zoom: f64,
    max_zoom: f64,
    is_playing: bool,
    can_play: bool,
    // Callbacks
    on_seek: EventHandler<f64>,
    on_zoom_change: EventHandler<f64>,
    on_play_pause: EventHandler<MouseEvent>,
    // Track management
    on_add_video_track: EventHandler<MouseEvent>,
    on_add_audio_track: EventHandler<MouseEvent>,
    on_remove_track: EventHandler<Uuid>,
    selected_track: Option<Uuid>,
    on_track_select: EventHandler<Uuid>,
    // Clip operations
    selected_clip: Option<Uuid>,
    on_clip_select: EventHandler<Uuid>,
    on_clip_delete: EventHandler<Uuid>,
    on_clip_move: EventHandler<(Uuid, f64)>,
    on_clip_volume: EventHandler<(Uuid, f32)>,
    // Asset drag & drop
    dragged_asset: Option<Uuid>,
    on_asset_drop: EventHandler<(Uuid, f64, Uuid)>,
    on_deselect_all: EventHandler<MouseEvent>,
) -> Element {
    let fps = fps.max(1.0);
    let icon = if collapsed { "▲" } else { "▼" };
    let play_icon = if is_playing { "⏸" } else { "▶" };
    let play_title = if is_playing { "Pause" } else { "Play" };

    // Only animate when not resizing
    let transition = if is_resizing { "none" } else { "height 0.2s ease, min-height 0.2s ease" };
    let header_cursor = if collapsed { "pointer" } else { "default" };
    let header_class = if collapsed { "collapsed-rail" } else { "" };

    let timecode = format_timecode(current_time, fps);
    let total_label = format_timecode(total_duration, fps);
    let zoom_label = if (zoom - min_zoom).abs() <= 0.5 {
        "Fit".to_string()
    } else if (zoom - max_zoom).abs() <= 0.5 {
        "Frames".to_string()
    } else {
        format!("{:.0}px/s", zoom)
    };

    let shown_duration = visible_duration(total_duration);
    let content_width = time_to_px(shown_duration, zoom).ceil();
    let playhead_pos = time_to_px(snap_time_to_frame(current_time, fps), zoom)
        .min(content_width - 1.0)
        .max(0.0);

    let playhead_marker_left = playhead_pos - 5.0;

    let ruler_height = 24;
    let track_label_width = 150;

    rsx! {
        div {
            style: "
                display: flex; flex-direction: column;
                height: {height}px; min-height: {height}px;
                background-color: {BG_ELEVATED};
                transition: {transition};
                overflow: hidden;
            ",

            // Header
            div {
                class: "{header_class}",
                style: "
                    display: flex; align-items: center; justify-content: space-between;
                    height: 32px; padding: 0 14px;
                    background-color: {BG_SURFACE}; border-bottom: 1px solid {BORDER_DEFAULT};
                    flex-shrink: 0;
                    cursor: {header_cursor};
                ",
                onclick: move |e| {
                    if collapsed {
                        on_toggle.call(e);
                    }
                },

                div {
                    style: "display: flex; align-items: center; gap: 12px;",
                    onclick: move |e| e.stop_propagation(),
                    span { style: "font-size: 11px; font-weight: 500; color: {TEXT_MUTED}; text-transform: uppercase; letter-spacing: 0.5px;", "Timeline" }

                    div {
                        style: "display: flex; align-items: center; gap: 4px;",
                        button {
                            class: "collapse-btn",
                            style: "width: 20px; height: 20px; border: none; border-radius: 3px; background: transparent; color: {TEXT_MUTED}; font-size: 12px; cursor: pointer; display: flex; align-items: center; justify-content: center;",
                            onclick: move |_| on_zoom_change.call(zoom * 0.8),
                            "−"
                        }
                        span {
                            style: "font-size: 10px; color: {TEXT_DIM}; min-width: 40px; text-align: center;",
                            "{zoom_label}"
                        }
                        button {
                            class: "collapse-btn",
                            style: "width: 20px; height: 20px; border: none; border-radius: 3px; background: transparent; color: {TEXT_MUTED}; font-size: 12px; cursor: pointer; display: flex; align-items: center; justify-content: center;",
                            onclick: move |_| on_zoom_change.call(zoom * 1.25),
                            "+"
                        }
                        button {
                            class: "collapse-btn",
                            style: "padding: 0 6px; height: 20px; border: none; border-radius: 3px; background: transparent; color: {TEXT_MUTED}; font-size: 10px; cursor: pointer;",
                            onclick: move |_| on_zoom_change.call(min_zoom),
                            "Fit"
                        }
                        button {
                            class: "collapse-btn",
                            style: "padding: 0 6px; height: 20px; border: none; border-radius: 3px; background: transparent; color: {TEXT_MUTED}; font-size: 10px; cursor: pointer;",
                            onclick: move |_| on_zoom_change.call(max_zoom),
                            "Frames"
                        }
                    }
                }

                div {
                    style: "display: flex; align-items: center; gap: 4px;",
                    onclick: move |e| e.stop_propagation(),
                    PlaybackBtn {
                        icon: "⏮",
                        title: "Go to start",
                        disabled: !can_play,
                        on_click: move |_| on_seek.call(0.0),
                    }
                    PlaybackBtn {
                        icon: play_icon,
                        title: play_title,
                        primary: true,
                        disabled: !can_play,
                        on_click: move |e| on_play_pause.call(e),
                    }
                    PlaybackBtn {
                        icon: "⏭",
                        title: "Go to end",
                        disabled: !can_play,
                        on_click: move |_| on_seek.call(total_duration),
                    }
                }

                div {
                    style: "display: flex; align-items: center; gap: 12px;",
                    span {
                        style: "font-family: 'SF Mono', Consolas, monospace; font-size: 11px; color: {TEXT_DIM};",
                        "{timecode} / {total_label}"
                    }
                    button {
                        class: "collapse-btn",
                        style: "width: 24px; height: 24px; border: none; border-radius: 4px; background: transparent; color: {TEXT_MUTED}; font-size: 10px; cursor: pointer; display: flex; align-items: center; justify-content: center;",
                        onclick: move |e| {
                            e.stop_propagation();
                            on_toggle.call(e);
                        },
                        "{icon}"
                    }
                }
            }

            // Fixed label column on the left, one scroll host for ruler and rows on the right
            if !collapsed {
                div {
                    style: "flex: 1; display: flex; overflow: hidden;",

                    div {
                        style: "
                            width: {track_label_width}px; min-width: {track_label_width}px;
                            flex-shrink: 0; display: flex; flex-direction: column;
                            background-color: {BG_ELEVATED};
                            border-right: 1px solid {BORDER_DEFAULT};
                            z-index: 20;
                        ",

                        div {
                            style: "height: {ruler_height}px; flex-shrink: 0; border-bottom: 1px solid {BORDER_DEFAULT};",
                        }

                        div {
                            style: "flex: 1; overflow: hidden; display: flex; flex-direction: column;",

                            div {
                                style: "flex: 1;",
                                for track in tracks.iter() {
                                    TrackLabel {
                                        key: "{track.id}",
                                        name: track.name.clone(),
                                        color: track_color(track.track_type),
                                        track_id: track.id,
                                        selected: selected_track == Some(track.id),
                                        clip_count: track.assets.len(),
                                        on_select: move |id| on_track_select.call(id),
                                        on_remove: move |id| on_remove_track.call(id),
                                    }
                                }
                                if tracks.is_empty() {
                                    div {
                                        style: "padding: 12px; font-size: 11px; color: {ACCENT_ERROR};",
                                        "No tracks"
                                    }
                                }
                            }

                            div {
                                style: "display: flex; gap: 4px; padding: 8px 12px; border-top: 1px solid {BORDER_SUBTLE};",
                                button {
                                    class: "collapse-btn",
                                    style: "
                                        flex: 1; height: 24px; border: 1px dashed {BORDER_DEFAULT};
                                        border-radius: 4px; background: transparent;
                                        color: {TEXT_DIM}; font-size: 10px; cursor: pointer;
                                        display: flex; align-items: center; justify-content: center; gap: 4px;
                                    ",
                                    onclick: move |e| on_add_video_track.call(e),
                                    span { style: "color: {ACCENT_VIDEO};", "+" }
                                    "Video"
                                }
                                button {
                                    class: "collapse-btn",
                                    style: "
                                        flex: 1; height: 24px; border: 1px dashed {BORDER_DEFAULT};
                                        border-radius: 4px; background: transparent;
                                        color: {TEXT_DIM}; font-size: 10px; cursor: pointer;
                                        display: flex; align-items: center; justify-content: center; gap: 4px;
                                    ",
                                    onclick: move |e| on_add_audio_track.call(e),
                                    span { style: "color: {ACCENT_AUDIO};", "+" }
                                    "Audio"
                                }
                            }
                        }
                    }

                    div {
                        id: "timeline-scroll-host",
                        style: "flex: 1; overflow: auto; position: relative;",

                        div {
                            style: "min-width: {content_width}px; display: flex; flex-direction: column; position: relative;",

                            // Ruler: click to seek
                            div {
                                style: "
                                    height: {ruler_height}px; min-height: {ruler_height}px;
                                    position: sticky; top: 0; z-index: 15;
                                    background-color: {BG_SURFACE};
                                    border-bottom: 1px solid {BORDER_DEFAULT};
                                    cursor: pointer; overflow: hidden;
                                ",
                                onmousedown: move |e| {
                                    e.prevent_default();
                                    let t = px_to_time(e.element_coordinates().x, zoom);
                                    on_seek.call(snap_time_to_frame(t, fps));
                                },

                                TimeRuler {
                                    duration: shown_duration,
                                    zoom: zoom,
                                    fps: fps,
                                }

                                div {
                                    style: "
                                        position: absolute; left: {playhead_marker_left}px; top: 0;
                                        width: 0; height: 0;
                                        border-left: 6px solid transparent;
                                        border-right: 6px solid transparent;
                                        border-top: 8px solid {ACCENT_ERROR};
                                        pointer-events: none;
                                    ",
                                }
                            }

                            div {
                                style: "display: flex; flex-direction: column; position: relative;",

                                for track in tracks.iter() {
                                    TrackRow {
                                        key: "{track.id}",
                                        width: content_width,
                                        track: track.clone(),
                                        library: library.clone(),
                                        zoom: zoom,
                                        fps: fps,
                                        selected_clip: selected_clip,
                                        on_clip_select: move |id| on_clip_select.call(id),
                                        on_clip_delete: move |id| on_clip_delete.call(id),
                                        on_clip_move: move |payload| on_clip_move.call(payload),
                                        on_clip_volume: move |payload| on_clip_volume.call(payload),
                                        dragged_asset: dragged_asset,
                                        on_asset_drop: move |payload| on_asset_drop.call(payload),
                                        on_deselect_all: move |e| on_deselect_all.call(e),
                                    }
                                }

                                div {
                                    style: "
                                        position: absolute; left: {playhead_pos}px; top: 0;
                                        width: 1px; height: 100%;
                                        background-color: {ACCENT_ERROR};
                                        pointer-events: none; z-index: 10;
                                    ",
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
