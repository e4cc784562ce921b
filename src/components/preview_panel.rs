use dioxus::prelude::*;
use crate::constants::*;
use crate::core::layout::format_timecode;
use crate::core::playback::PlaybackState;

#[component]
pub fn PreviewPanel(
    fps: f64,
    playback: PlaybackState,
    // visual plus audio placements
    source_count: usize,
    on_toggle_play: EventHandler<()>,
    on_seek: EventHandler<f64>,
) -> Element {
    let fps_label = format!("{:.0}", fps);
    let bound_url = playback.source().map(|source| source.url.clone());
    let has_source = bound_url.is_some();
    let duration = playback.duration();
    let current = playback.current_time().min(duration.max(0.0));
    let time_label = format!(
        "{} / {}",
        format_timecode(current, fps),
        format_timecode(duration, fps)
    );
    let play_icon = if playback.is_playing() { "⏸" } else { "▶" };
    let play_title = if playback.is_playing() { "Pause" } else { "Play" };
    let slider_max = duration.max(0.0);
    let placeholder = if source_count == 0 {
        "Add media to the timeline to preview"
    } else {
        "No video on the timeline"
    };
    let controls_opacity = if has_source { "1" } else { "0.4" };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; flex: 1; min-height: 0; background-color: {BG_DEEPEST};",

            div {
                style: "
                    display: grid; grid-template-columns: auto 1fr auto; align-items: center;
                    height: 32px; padding: 0 14px;
                    background-color: {BG_SURFACE}; border-bottom: 1px solid {BORDER_DEFAULT};
                ",
                span {
                    style: "grid-column: 1; font-size: 11px; font-weight: 500; color: {TEXT_MUTED}; text-transform: uppercase; letter-spacing: 0.5px;",
                    "Preview"
                }
                span {}
                div {
                    style: "grid-column: 3; justify-self: end; display: flex; align-items: center; gap: 6px; font-family: 'SF Mono', Consolas, monospace; font-size: 11px; color: {TEXT_DIM};",
                    span { "{fps_label} fps" }
                }
            }

            div {
                style: "flex: 1; display: flex; background-color: {BG_DEEPEST}; position: relative; min-height: 0; overflow: hidden;",
                div {
                    style: "position: relative; flex: 1; display: flex; align-items: center; justify-content: center; min-height: 0;",
                    if let Some(url) = bound_url {
                        video {
                            id: "preview-video",
                            src: "{url}",
                            preload: "metadata",
                            style: "max-width: 100%; max-height: 100%; width: auto; height: auto; background-color: #000;",
                        }
                    } else {
                        div {
                            style: "position: absolute; inset: 0; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 12px; color: {TEXT_DIM};",
                            div {
                                style: "width: 48px; height: 48px; border: 1px solid {BORDER_DEFAULT}; border-radius: 50%; display: flex; align-items: center; justify-content: center; font-size: 14px;",
                                "▶"
                            }
                            span { style: "font-size: 12px;", "{placeholder}" }
                        }
                    }
                }
            }

            div {
                style: "
                    display: flex; align-items: center; gap: 10px;
                    height: 36px; padding: 0 14px; flex-shrink: 0;
                    background-color: {BG_SURFACE}; border-top: 1px solid {BORDER_DEFAULT};
                    opacity: {controls_opacity};
                ",
                button {
                    class: "collapse-btn",
                    style: "
                        width: 28px; height: 24px; border: none; border-radius: 4px;
                        background: transparent; color: {TEXT_PRIMARY}; font-size: 12px;
                        cursor: pointer; display: flex; align-items: center; justify-content: center;
                    ",
                    title: "{play_title}",
                    disabled: !has_source,
                    onclick: move |_| on_toggle_play.call(()),
                    "{play_icon}"
                }
                input {
                    r#type: "range",
                    min: "0",
                    max: "{slider_max}",
                    step: "0.01",
                    value: "{current}",
                    disabled: !has_source,
                    style: "flex: 1; accent-color: {BORDER_ACCENT};",
                    oninput: move |e| {
                        if let Ok(time) = e.value().parse::<f64>() {
                            on_seek.call(time);
                        }
                    },
                }
                span {
                    style: "font-family: 'SF Mono', Consolas, monospace; font-size: 11px; color: {TEXT_SECONDARY}; white-space: nowrap;",
                    "{time_label}"
                }
            }
        }
    }
}
