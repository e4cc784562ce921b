use dioxus::prelude::*;
use std::path::PathBuf;
use uuid::Uuid;

use crate::components::assets::AssetItem;
use crate::constants::*;
use crate::core::media::pick_media_files;
use crate::state::MediaAsset;

/// Media library: import button and the list of imported files.
#[component]
pub fn AssetsPanelContent(
    assets: Vec<MediaAsset>,
    selected: Option<Uuid>,
    panel_width: f64,
    on_import_files: EventHandler<Vec<PathBuf>>,
    on_select: EventHandler<Uuid>,
    on_rename: EventHandler<(Uuid, String)>,
    on_delete: EventHandler<Uuid>,
    on_add_to_timeline: EventHandler<Uuid>,
    on_drag_start: EventHandler<Uuid>,
) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; height: 100%; padding: 8px;",

            button {
                style: "
                    width: 100%; padding: 8px 12px; margin-bottom: 8px;
                    background-color: {BG_SURFACE}; border: 1px dashed {BORDER_DEFAULT};
                    border-radius: 6px; color: {TEXT_SECONDARY}; font-size: 12px;
                    cursor: pointer; transition: all 0.15s ease;
                ",
                onclick: move |_| {
                    if let Some(paths) = pick_media_files() {
                        on_import_files.call(paths);
                    }
                },
                "📁 Import Media..."
            }

            div {
                style: "flex: 1; overflow-y: auto;",

                if assets.is_empty() {
                    div {
                        style: "
                            display: flex; flex-direction: column; align-items: center; justify-content: center;
                            height: 120px; border: 1px dashed {BORDER_DEFAULT}; border-radius: 6px;
                            color: {TEXT_DIM}; font-size: 12px; text-align: center; padding: 12px;
                        ",
                        div { style: "font-size: 24px; margin-bottom: 8px;", "📂" }
                        "No media yet"
                        div { style: "font-size: 10px; color: {TEXT_DIM}; margin-top: 4px;", "Import video, audio or image files" }
                    }
                } else {
                    for asset in assets.iter() {
                        AssetItem {
                            key: "{asset.id}",
                            asset: asset.clone(),
                            selected: selected == Some(asset.id),
                            panel_width: panel_width,
                            on_select: move |id| on_select.call(id),
                            on_rename: move |payload| on_rename.call(payload),
                            on_delete: move |id| on_delete.call(id),
                            on_add_to_timeline: move |id| on_add_to_timeline.call(id),
                            on_drag_start: move |id| on_drag_start.call(id),
                        }
                    }
                }
            }
        }
    }
}
