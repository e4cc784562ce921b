use dioxus::prelude::*;
use crate::constants::{BORDER_STRONG, BORDER_SUBTLE, TEXT_DIM};
use crate::core::layout::{format_duration, major_tick_seconds, time_to_px};

/// Time ruler with tick marks and labels
/// All elements here use pointer-events: none so clicks pass through to parent
#[component]
pub(crate) fn TimeRuler(duration: f64, zoom: f64, fps: f64) -> Element {
    let fps = fps.max(1.0);
    let fps_i = fps.round().max(1.0) as i64;
    let seconds_per_major_tick = major_tick_seconds(zoom);

    // Frame ticks only once frames are at least ~4px apart
    let show_frame_ticks = zoom >= fps * 4.0;

    let num_ticks = (duration / seconds_per_major_tick).ceil() as i64 + 1;
    let content_width = time_to_px(duration, zoom);

    rsx! {
        div {
            style: "position: absolute; left: 0; top: 0; width: 100%; height: 100%; pointer-events: none;",

            if show_frame_ticks {
                {
                    let end_frame = (duration * fps).ceil() as i64;
                    rsx! {
                        for frame in 0..=end_frame {
                            {
                                let x = time_to_px(frame as f64 / fps, zoom);
                                if frame % fps_i != 0 && x <= content_width {
                                    rsx! {
                                        div {
                                            key: "frame-{frame}",
                                            style: "
                                                position: absolute; left: {x}px; bottom: 0;
                                                width: 1px; height: 4px;
                                                background-color: {BORDER_SUBTLE};
                                            ",
                                        }
                                    }
                                } else {
                                    rsx! {}
                                }
                            }
                        }
                    }
                }
            }

            for i in 0..num_ticks {
                {
                    let t = i as f64 * seconds_per_major_tick;
                    let x = time_to_px(t, zoom);
                    let label = format_duration(t);
                    let next_x = time_to_px(t + seconds_per_major_tick, zoom);
                    // Right-align the last label so it stays inside the content
                    let (label_left, shift) = if next_x > content_width {
                        (x - 4.0, "transform: translateX(-100%);")
                    } else {
                        (x + 4.0, "")
                    };

                    if x <= content_width {
                        rsx! {
                            div {
                                key: "tick-group-{i}",
                                div {
                                    style: "
                                        position: absolute; left: {x}px; bottom: 0;
                                        width: 1px; height: 10px;
                                        background-color: {BORDER_STRONG};
                                    ",
                                }
                                div {
                                    style: "position: absolute; left: {label_left}px; top: 3px; font-size: 9px; color: {TEXT_DIM}; font-family: 'SF Mono', Consolas, monospace; user-select: none; {shift}",
                                    "{label}"
                                }
                            }
                        }
                    } else {
                        rsx! {}
                    }
                }
            }
        }
    }
}
