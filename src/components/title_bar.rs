use dioxus::prelude::*;
use crate::constants::*;

#[component]
pub fn TitleBar(
    project_name: String,
    export_running: bool,
    on_import: EventHandler<MouseEvent>,
    on_export: EventHandler<MouseEvent>,
) -> Element {
    let export_label = if export_running { "Exporting..." } else { "Export" };
    rsx! {
        div {
            style: "
                display: flex; align-items: center; justify-content: space-between;
                height: 40px; padding: 0 16px;
                background-color: {BG_SURFACE}; border-bottom: 1px solid {BORDER_DEFAULT};
                user-select: none;
            ",
            div {
                style: "display: flex; align-items: center; gap: 20px;",
                span { style: "font-size: 13px; font-weight: 600; color: {TEXT_SECONDARY};", "Video Studio" }
                button {
                    class: "collapse-btn",
                    style: "
                        background: transparent; border: none; color: {TEXT_PRIMARY};
                        font-size: 12px; cursor: pointer; padding: 4px 8px; border-radius: 4px;
                    ",
                    onclick: move |e| on_import.call(e),
                    "Import"
                }
            }
            span { style: "font-size: 13px; color: {TEXT_MUTED};", "{project_name}" }
            div {
                style: "display: flex; align-items: center; justify-content: flex-end; min-width: 120px;",
                button {
                    style: "
                        background: {ACCENT_EXPORT}; border: none; color: {TEXT_PRIMARY};
                        font-size: 12px; font-weight: 500; cursor: pointer;
                        padding: 5px 14px; border-radius: 4px;
                    ",
                    onclick: move |e| on_export.call(e),
                    "{export_label}"
                }
            }
        }
    }
}
