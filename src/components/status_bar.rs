use dioxus::prelude::*;
use crate::constants::*;
use crate::core::layout::format_timecode;

#[component]
pub fn StatusBar(
    message: Option<String>,
    media_count: usize,
    fps: f64,
    current_time: f64,
    total_duration: f64,
    on_dismiss: EventHandler<MouseEvent>,
) -> Element {
    let has_message = message.is_some();
    let text = message.unwrap_or_else(|| "Ready".to_string());
    let text_color = if has_message { TEXT_SECONDARY } else { TEXT_DIM };
    let fps_label = format!("{:.0}", fps);
    let position = format!(
        "{} / {}",
        format_timecode(current_time, fps),
        format_timecode(total_duration, fps)
    );
    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: space-between; height: 22px; padding: 0 14px; background-color: {BG_SURFACE}; border-top: 1px solid {BORDER_DEFAULT}; font-size: 11px; color: {TEXT_DIM};",
            div {
                style: "display: flex; align-items: center; gap: 8px; min-width: 0;",
                span {
                    style: "color: {text_color}; white-space: nowrap; overflow: hidden; text-overflow: ellipsis;",
                    "{text}"
                }
                if has_message {
                    span {
                        style: "cursor: pointer; color: {TEXT_MUTED};",
                        onclick: move |e| on_dismiss.call(e),
                        "×"
                    }
                }
            }
            div {
                style: "display: flex; gap: 16px; font-family: 'SF Mono', Consolas, monospace;",
                span { "{media_count} media" }
                span { "{fps_label} fps" }
                span { "{position}" }
            }
        }
    }
}
