use dioxus::prelude::*;

use crate::constants::*;
use crate::core::export::{
    ExportFormat, ExportJob, ExportQuality, ExportResolution, ExportSettings,
};

/// Export dialog: settings form, progress while running, and the
/// completion notice.
#[component]
pub fn ExportPanel(
    job: ExportJob,
    settings: ExportSettings,
    on_settings_change: EventHandler<ExportSettings>,
    on_start: EventHandler<ExportSettings>,
    on_close: EventHandler<()>,
    on_done: EventHandler<()>,
) -> Element {
    let running = job.is_running();
    let preview_name = settings.resolved_file_name();

    let label_style = format!(
        "font-size: 10px; color: {TEXT_DIM}; text-transform: uppercase; letter-spacing: 0.5px; margin-bottom: 4px;"
    );
    let field_style = format!(
        "width: 100%; box-sizing: border-box; padding: 6px 8px; font-size: 12px;
         background-color: {BG_BASE}; color: {TEXT_PRIMARY};
         border: 1px solid {BORDER_DEFAULT}; border-radius: 4px; outline: none;"
    );

    rsx! {
        div {
            style: "
                position: fixed; top: 0; left: 0; right: 0; bottom: 0;
                background-color: rgba(0, 0, 0, 0.5);
                display: flex; align-items: center; justify-content: center;
                z-index: 2000;
            ",
            onclick: move |_| {
                if !running {
                    on_close.call(());
                }
            },
            div {
                style: "
                    width: 420px; background-color: {BG_ELEVATED};
                    border: 1px solid {BORDER_DEFAULT}; border-radius: 8px;
                    padding: 24px; box-shadow: 0 10px 25px rgba(0,0,0,0.5);
                    display: flex; flex-direction: column; gap: 14px;
                ",
                onclick: move |e| e.stop_propagation(),
                onkeydown: move |e| e.stop_propagation(),

                h3 { style: "margin: 0; font-size: 16px; color: {TEXT_PRIMARY};", "Export" }

                match job {
                    ExportJob::Complete(outcome) => {
                        let (width, height) = outcome.settings.resolution.dimensions();
                        let detail = format!(
                            "{} · {}x{} · {}",
                            outcome.settings.format.label(),
                            width,
                            height,
                            outcome.settings.quality.label()
                        );
                        rsx! {
                        div {
                            style: "display: flex; flex-direction: column; gap: 8px; font-size: 12px; color: {TEXT_SECONDARY};",
                            span { style: "color: {ACCENT_VIDEO}; font-size: 13px;", "✓ Export complete" }
                            span { "{outcome.file_name}" }
                            span {
                                style: "color: {TEXT_DIM};",
                                "{detail}"
                            }
                        }
                        div {
                            style: "display: flex; justify-content: flex-end;",
                            button {
                                style: "padding: 8px 16px; background: {ACCENT_EXPORT}; border: none; border-radius: 4px; color: {TEXT_PRIMARY}; cursor: pointer;",
                                onclick: move |_| on_done.call(()),
                                "Done"
                            }
                        }
                        }
                    }
                    ExportJob::Running(progress) => {
                        let percent = progress.percent();
                        let step_label = format!("Step {} of {} · {}", progress.step + 1, progress.total, preview_name);
                        rsx! {
                        div {
                            style: "display: flex; flex-direction: column; gap: 8px;",
                            span { style: "font-size: 12px; color: {TEXT_SECONDARY};", "{progress.status}" }
                            div {
                                style: "height: 6px; border-radius: 3px; background-color: {BG_BASE}; overflow: hidden;",
                                div {
                                    style: "height: 100%; width: {percent}%; background-color: {ACCENT_EXPORT}; transition: width 0.3s ease;",
                                }
                            }
                            span {
                                style: "font-size: 10px; color: {TEXT_DIM};",
                                "{step_label}"
                            }
                        }
                        }
                    }
                    ExportJob::Idle => rsx! {
                        div {
                            div { style: "{label_style}", "File name" }
                            input {
                                r#type: "text",
                                style: "{field_style}",
                                value: "{settings.file_name}",
                                oninput: {
                                    let settings = settings.clone();
                                    move |e: FormEvent| {
                                        let mut next = settings.clone();
                                        next.file_name = e.value();
                                        on_settings_change.call(next);
                                    }
                                },
                            }
                            div { style: "font-size: 10px; color: {TEXT_DIM}; margin-top: 4px;", "Saves as {preview_name}" }
                        }
                        div {
                            style: "display: grid; grid-template-columns: 1fr 1fr 1fr; gap: 10px;",
                            div {
                                div { style: "{label_style}", "Format" }
                                select {
                                    style: "{field_style}",
                                    onchange: {
                                        let settings = settings.clone();
                                        move |e: FormEvent| {
                                            if let Some(format) = ExportFormat::from_extension(&e.value()) {
                                                let mut next = settings.clone();
                                                next.format = format;
                                                on_settings_change.call(next);
                                            }
                                        }
                                    },
                                    for format in ExportFormat::ALL {
                                        option {
                                            value: "{format.extension()}",
                                            selected: format == settings.format,
                                            "{format.label()}"
                                        }
                                    }
                                }
                            }
                            div {
                                div { style: "{label_style}", "Quality" }
                                select {
                                    style: "{field_style}",
                                    onchange: {
                                        let settings = settings.clone();
                                        move |e: FormEvent| {
                                            if let Some(quality) = ExportQuality::from_label(&e.value()) {
                                                let mut next = settings.clone();
                                                next.quality = quality;
                                                on_settings_change.call(next);
                                            }
                                        }
                                    },
                                    for quality in ExportQuality::ALL {
                                        option {
                                            value: "{quality.label()}",
                                            selected: quality == settings.quality,
                                            "{quality.label()}"
                                        }
                                    }
                                }
                            }
                            div {
                                div { style: "{label_style}", "Resolution" }
                                select {
                                    style: "{field_style}",
                                    onchange: {
                                        let settings = settings.clone();
                                        move |e: FormEvent| {
                                            if let Some(resolution) = ExportResolution::from_label(&e.value()) {
                                                let mut next = settings.clone();
                                                next.resolution = resolution;
                                                on_settings_change.call(next);
                                            }
                                        }
                                    },
                                    for resolution in ExportResolution::ALL {
                                        option {
                                            value: "{resolution.label()}",
                                            selected: resolution == settings.resolution,
                                            "{resolution.label()}"
                                        }
                                    }
                                }
                            }
                        }
                        div {
                            style: "display: flex; justify-content: flex-end; gap: 8px;",
                            button {
                                style: "padding: 8px 16px; background: transparent; border: 1px solid {BORDER_DEFAULT}; border-radius: 4px; color: {TEXT_SECONDARY}; cursor: pointer;",
                                onclick: move |_| on_close.call(()),
                                "Cancel"
                            }
                            button {
                                style: "padding: 8px 16px; background: {ACCENT_EXPORT}; border: none; border-radius: 4px; color: {TEXT_PRIMARY}; cursor: pointer;",
                                onclick: {
                                    let settings = settings.clone();
                                    move |_| on_start.call(settings.clone())
                                },
                                "Start Export"
                            }
                        }
                    },
                }
            }
        }
    }
}
