use dioxus::prelude::*;
use uuid::Uuid;

use crate::constants::{ACCENT_ERROR, BG_HOVER, BORDER_SUBTLE, TEXT_DIM, TEXT_SECONDARY, TRACK_ROW_HEIGHT};

/// Track label in the sidebar
#[component]
pub fn TrackLabel(
    name: String,
    color: &'static str,
    track_id: Uuid,
    selected: bool,
    // placements on the track
    clip_count: usize,
    on_select: EventHandler<Uuid>,
    on_remove: EventHandler<Uuid>,
) -> Element {
    let bg = if selected { BG_HOVER } else { "transparent" };
    rsx! {
        div {
            style: "
                display: flex; align-items: center; gap: 10px; height: {TRACK_ROW_HEIGHT}px;
                box-sizing: border-box; padding: 0 8px 0 12px;
                border-bottom: 1px solid {BORDER_SUBTLE}; background-color: {bg};
                font-size: 12px; color: {TEXT_SECONDARY}; cursor: pointer;
            ",
            onclick: move |_| on_select.call(track_id),
            div { style: "width: 3px; height: 16px; border-radius: 2px; background-color: {color};" }
            span { style: "flex: 1; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;", "{name}" }
            span { style: "font-size: 10px; color: {TEXT_DIM};", "{clip_count}" }
            if selected {
                button {
                    class: "collapse-btn",
                    style: "
                        width: 18px; height: 18px; border: none; border-radius: 3px;
                        background: transparent; color: {ACCENT_ERROR}; font-size: 11px; cursor: pointer;
                    ",
                    title: "Remove track",
                    onclick: move |e| {
                        e.stop_propagation();
                        on_remove.call(track_id);
                    },
                    "×"
                }
            }
        }
    }
}
