use dioxus::prelude::*;
use uuid::Uuid;

use crate::constants::*;
use crate::core::layout::format_duration;
use crate::state::{MediaAsset, MediaKind};

pub(crate) fn kind_icon(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Video => "🎬",
        MediaKind::Image => "🖼️",
        MediaKind::Audio => "🔊",
    }
}

pub(crate) fn kind_accent(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Video => ACCENT_VIDEO,
        MediaKind::Image => ACCENT_IMAGE,
        MediaKind::Audio => ACCENT_AUDIO,
    }
}

#[component]
pub fn AssetItem(
    asset: MediaAsset,
    selected: bool,
    panel_width: f64,
    on_select: EventHandler<Uuid>,
    on_rename: EventHandler<(Uuid, String)>,
    on_delete: EventHandler<Uuid>,
    on_add_to_timeline: EventHandler<Uuid>,
    on_drag_start: EventHandler<Uuid>,
) -> Element {
    let mut show_menu = use_signal(|| false);
    let mut menu_pos = use_signal(|| (0.0, 0.0));
    let mut is_editing = use_signal(|| false);
    let asset_name = asset.name.clone();
    let mut draft_name = use_signal(|| asset_name.clone());

    let icon = kind_icon(asset.kind);
    let accent = kind_accent(asset.kind);
    let asset_id = asset.id;
    let duration_label = match asset.duration {
        Some(seconds) => format_duration(seconds),
        None if asset.kind.is_timed() => "--:--".to_string(),
        None => asset.kind.label().to_string(),
    };
    let path_label = asset.path.display().to_string();
    let border = if selected { BORDER_ACCENT } else { BORDER_SUBTLE };
    let menu_max_x = (panel_width - 140.0).max(0.0);

    let commit = {
        let asset_name = asset_name.clone();
        move || {
            let next = draft_name().trim().to_string();
            is_editing.set(false);
            if !next.is_empty() && next != asset_name {
                on_rename.call((asset_id, next));
            } else {
                draft_name.set(asset_name.clone());
            }
        }
    };

    rsx! {
        div {
            style: "position: relative;",

            div {
                style: "
                    display: flex; align-items: center; gap: 8px;
                    padding: 8px; margin-bottom: 4px;
                    background-color: {BG_SURFACE}; border: 1px solid {border}; border-radius: 4px;
                    cursor: grab; transition: background-color 0.1s ease;
                    user-select: none;
                ",
                oncontextmenu: move |e| {
                    e.prevent_default();
                    let coords = e.client_coordinates();
                    menu_pos.set((coords.x, coords.y));
                    show_menu.set(true);
                },
                onmousedown: move |e| {
                    // Our own drag, not the webview's
                    e.prevent_default();
                    on_select.call(asset_id);
                    on_drag_start.call(asset_id);
                },
                div {
                    style: "width: 3px; height: 24px; border-radius: 2px; background-color: {accent};",
                }
                span { style: "font-size: 12px; color: {TEXT_MUTED}; pointer-events: none;", "{icon}" }
                if is_editing() {
                    input {
                        r#type: "text",
                        value: "{draft_name()}",
                        autofocus: "true",
                        style: "
                            flex: 1; min-width: 0;
                            font-size: 12px; color: {TEXT_PRIMARY};
                            background-color: {BG_BASE};
                            border: 1px solid {BORDER_DEFAULT};
                            border-radius: 4px;
                            padding: 4px 6px;
                        ",
                        oninput: move |e| draft_name.set(e.value()),
                        onblur: {
                            let mut commit = commit.clone();
                            move |_| commit()
                        },
                        onkeydown: {
                            let mut commit = commit.clone();
                            let asset_name = asset_name.clone();
                            move |e: KeyboardEvent| {
                                // Keep typing out of the global hotkeys
                                e.stop_propagation();
                                if e.key() == Key::Enter {
                                    commit();
                                } else if e.key() == Key::Escape {
                                    is_editing.set(false);
                                    draft_name.set(asset_name.clone());
                                }
                            }
                        },
                        onmousedown: move |e| e.stop_propagation(),
                        oncontextmenu: move |e| e.stop_propagation(),
                    }
                } else {
                    span {
                        style: "flex: 1; min-width: 0; font-size: 12px; color: {TEXT_PRIMARY}; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                        title: "{path_label}",
                        ondoubleclick: {
                            let asset_name = asset_name.clone();
                            move |e: MouseEvent| {
                                e.stop_propagation();
                                draft_name.set(asset_name.clone());
                                is_editing.set(true);
                            }
                        },
                        "{asset.name}"
                    }
                }
                span {
                    style: "font-size: 10px; color: {TEXT_DIM}; font-family: 'SF Mono', Consolas, monospace; flex-shrink: 0;",
                    "{duration_label}"
                }
                button {
                    class: "collapse-btn",
                    style: "
                        width: 20px; height: 20px; border: none; border-radius: 4px;
                        background: transparent; color: {TEXT_MUTED}; font-size: 12px;
                        cursor: pointer; flex-shrink: 0;
                    ",
                    title: "Add to timeline",
                    onmousedown: move |e| e.stop_propagation(),
                    onclick: move |e| {
                        e.stop_propagation();
                        on_add_to_timeline.call(asset_id);
                    },
                    "+"
                }
            }

            if show_menu() {
                div {
                    style: "position: fixed; top: 0; left: 0; right: 0; bottom: 0; z-index: 999;",
                    onclick: move |_| show_menu.set(false),
                }
                {
                    let (x, y) = menu_pos();
                    let asset_name = asset_name.clone();
                    rsx! {
                        div {
                            style: "
                                position: fixed;
                                left: min({x}px, {menu_max_x}px);
                                top: min({y}px, calc(100vh - 50px));
                                background-color: {BG_ELEVATED}; border: 1px solid {BORDER_DEFAULT};
                                border-radius: 6px; padding: 4px 0; min-width: 120px;
                                box-shadow: 0 4px 12px rgba(0,0,0,0.3);
                                z-index: 1000; font-size: 12px;
                            ",
                            div {
                                style: "padding: 6px 12px; color: {TEXT_PRIMARY}; cursor: pointer;",
                                onclick: move |_| {
                                    on_add_to_timeline.call(asset_id);
                                    show_menu.set(false);
                                },
                                "➕ Add to Timeline"
                            }
                            div {
                                style: "padding: 6px 12px; color: {TEXT_PRIMARY}; cursor: pointer;",
                                onclick: move |_| {
                                    draft_name.set(asset_name.clone());
                                    is_editing.set(true);
                                    show_menu.set(false);
                                },
                                "✏️ Rename"
                            }
                            div {
                                style: "height: 1px; background-color: {BORDER_SUBTLE}; margin: 4px 0;",
                            }
                            div {
                                style: "padding: 6px 12px; color: {ACCENT_ERROR}; cursor: pointer;",
                                onclick: move |_| {
                                    on_delete.call(asset_id);
                                    show_menu.set(false);
                                },
                                "🗑 Remove"
                            }
                        }
                    }
                }
            }
        }
    }
}
