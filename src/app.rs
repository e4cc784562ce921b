//! Root application component
//!
//! This defines the main App component and the overall layout structure.

use dioxus::desktop::use_asset_handler;
use dioxus::prelude::*;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

use crate::components::assets::{kind_icon, AssetsPanelContent};
use crate::components::{ExportPanel, PreviewPanel, SidePanel, StatusBar, TitleBar};
use crate::config::AppConfig;
use crate::constants::*;
use crate::core::export::{default_file_name, run_export, ExportJob, ExportSettings};
use crate::core::layout::{timeline_zoom_bounds, visible_duration};
use crate::core::media::{import_files, pick_media_files};
use crate::core::media_server::{self, MediaUrlRegistry, MEDIA_HANDLER_NAME};
use crate::core::playback::{PlaybackState, PlayerCommand, PlayerStatus};
use crate::core::preview::build_preview_sources;
use crate::hotkeys::{handle_hotkey, HotkeyAction, HotkeyContext, HotkeyResult};
use crate::state::{Project, ProjectSettings, SelectionState};
use crate::timeline::TimelinePanel;

/// Main application component
#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let poll_interval = Duration::from_millis(config.editor.preview_poll_interval_ms);
    let export_step_delay = Duration::from_millis(config.export.step_delay_ms);

    // Session state
    let registry = use_hook(|| Arc::new(MediaUrlRegistry::default()));
    let mut project = use_signal({
        let settings = ProjectSettings::from_editor_config(&config.editor);
        move || Project::with_settings("Untitled Project", settings)
    });
    let mut selection = use_signal(SelectionState::default);
    let mut status = use_signal(|| None::<String>);
    let mut playback = use_signal(PlaybackState::default);
    // Playhead used while no video is bound
    let mut timeline_cursor = use_signal(|| 0.0_f64);

    // Layout state
    let mut left_width = use_signal(|| PANEL_DEFAULT_WIDTH);
    let mut left_collapsed = use_signal(|| false);
    let mut timeline_height = use_signal(|| TIMELINE_DEFAULT_HEIGHT);
    let mut timeline_collapsed = use_signal(|| false);
    let mut zoom = use_signal(|| config.editor.default_zoom);
    let mut timeline_viewport_width = use_signal(|| None::<f64>);

    // Drag state: which divider is being resized, and the asset being dragged
    let mut dragging = use_signal(|| None::<&'static str>);
    let mut drag_start_pos = use_signal(|| 0.0);
    let mut drag_start_size = use_signal(|| 0.0);
    let mut dragged_asset = use_signal(|| None::<Uuid>);
    let mut mouse_pos = use_signal(|| (0.0, 0.0));

    // Export state
    let mut show_export = use_signal(|| false);
    let mut export_job = use_signal(ExportJob::default);
    let mut export_settings = use_signal({
        let format = config.export.default_format;
        let quality = config.export.default_quality;
        move || ExportSettings::new(format, quality)
    });

    // Webview script channels
    let mut player_eval = use_signal(|| None::<document::Eval>);
    let mut timeline_viewport_eval = use_signal(|| None::<document::Eval>);

    // Serve imported files to the <video> element
    {
        let registry = registry.clone();
        use_asset_handler(MEDIA_HANDLER_NAME, move |request, responder| {
            let registry = registry.clone();
            let path = request.uri().path().to_string();
            let range = request
                .headers()
                .get(http::header::RANGE)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string);
            spawn(async move {
                let response = tokio::task::spawn_blocking(move || {
                    media_server::serve(&registry, &path, range.as_deref())
                })
                .await;
                match response {
                    Ok(response) => responder.respond(response),
                    Err(err) => tracing::warn!(error = %err, "media request task failed"),
                }
            });
        });
    }

    let preview_sources = use_memo(move || build_preview_sources(&project.read()));

    // Rebind the player whenever the first video source changes
    use_effect(move || {
        let sources = preview_sources();
        playback.write().bind(sources.primary_video());
    });

    use_effect(move || {
        if player_eval.peek().is_some() {
            return;
        }
        player_eval.set(Some(document::eval(PREVIEW_PLAYER_SCRIPT)));
    });

    use_effect(move || {
        if timeline_viewport_eval.peek().is_some() {
            return;
        }
        timeline_viewport_eval.set(Some(document::eval(TIMELINE_VIEWPORT_SCRIPT)));
    });

    // Poll the player for its current time
    use_future(move || async move {
        loop {
            tokio::time::sleep(poll_interval).await;
            if playback.peek().source().is_none() {
                continue;
            }
            let Some(mut eval) = player_eval.peek().clone() else {
                continue;
            };
            let poll = playback.peek().poll();
            if eval.send(poll).is_err() {
                continue;
            }
            match eval.recv::<PlayerStatus>().await {
                Ok(report) => {
                    let mut next = playback.peek().clone();
                    next.apply_status(report);
                    if next != *playback.peek() {
                        playback.set(next);
                    }
                }
                Err(err) => tracing::debug!(error = ?err, "player poll failed"),
            }
        }
    });

    use_future(move || async move {
        loop {
            let Some(mut eval) = timeline_viewport_eval.peek().clone() else {
                tokio::time::sleep(Duration::from_millis(100)).await;
                continue;
            };
            while let Ok(width) = eval.recv::<f64>().await {
                let width = width.max(0.0);
                if *timeline_viewport_width.peek() != Some(width) {
                    timeline_viewport_width.set(Some(width));
                }
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
    });

    let send_player = move |command: Option<PlayerCommand>| {
        let (Some(command), Some(eval)) = (command, player_eval.peek().clone()) else {
            return;
        };
        if let Err(err) = eval.send(command) {
            tracing::debug!(error = ?err, "player command not delivered");
        }
    };

    let mut toggle_playback = move || {
        let command = playback.write().toggle();
        send_player(command);
    };

    let mut seek_timeline = move |time: f64| {
        if playback.peek().source().is_some() {
            let command = playback.write().seek_timeline(time);
            send_player(command);
        } else {
            timeline_cursor.set(time.max(0.0));
        }
    };

    let mut add_to_timeline = move |asset_id: Uuid| {
        let result = project.write().add_to_timeline(asset_id);
        match result {
            Ok(placement_id) => selection.write().select_track_asset(placement_id),
            Err(err) => {
                tracing::warn!(error = %err, "add to timeline failed");
                status.set(Some(err.to_string()));
            }
        }
    };

    let remove_media = {
        let registry = registry.clone();
        move |asset_id: Uuid| {
            let removed = project.write().remove_media_asset(asset_id);
            if let Some(asset) = removed {
                registry.revoke(asset.id);
                tracing::info!(%asset_id, name = %asset.name, "removed media");
                let mut sel = selection.write();
                sel.forget(asset_id);
                let stale = sel
                    .track_asset
                    .map(|id| project.peek().find_track_asset(id).is_none())
                    .unwrap_or(false);
                if stale {
                    sel.track_asset = None;
                }
            }
        }
    };

    let mut remove_placement = move |placement_id: Uuid| {
        let result = project.write().remove_track_asset(placement_id);
        match result {
            Ok(_) => selection.write().forget(placement_id),
            Err(err) => status.set(Some(err.to_string())),
        }
    };

    let import = {
        let registry = registry.clone();
        move |paths: Vec<std::path::PathBuf>| {
            import_files(project, status, registry.clone(), paths);
        }
    };

    let mut open_export = move || {
        if matches!(*export_job.peek(), ExportJob::Idle) {
            let format = export_settings.peek().format;
            export_settings.write().file_name = default_file_name(chrono::Local::now(), format);
        }
        show_export.set(true);
    };

    let mut start_export = move |settings: ExportSettings| {
        let begun = export_job.write().begin();
        if let Err(err) = begun {
            tracing::warn!(error = %err, "export not started");
            status.set(Some(err.to_string()));
            return;
        }
        export_settings.set(settings.clone());
        spawn(async move {
            let outcome = run_export(settings, export_step_delay, move |progress| {
                export_job.set(ExportJob::Running(progress));
            })
            .await;
            status.set(Some(format!("Exported {}", outcome.file_name)));
            export_job.set(ExportJob::Complete(outcome));
        });
    };

    // Derived values for this render
    let project_snapshot = project.read().clone();
    let fps = project_snapshot.settings.fps;
    let total_duration = project_snapshot.total_duration();
    let (min_zoom, max_zoom) =
        timeline_zoom_bounds(visible_duration(total_duration), timeline_viewport_width(), fps);
    let playback_snapshot = playback.read().clone();
    let current_time = if playback_snapshot.source().is_some() {
        playback_snapshot.timeline_time()
    } else {
        timeline_cursor()
    };
    let source_count = {
        let sources = preview_sources.read();
        sources.visual.len() + sources.audio.len()
    };
    let can_play = playback_snapshot.source().is_some();
    let selection_snapshot = selection.read().clone();

    let left_w = if left_collapsed() { PANEL_COLLAPSED_WIDTH } else { left_width() };
    let timeline_h = if timeline_collapsed() { TIMELINE_COLLAPSED_HEIGHT } else { timeline_height() };
    let left_resizing = dragging() == Some("left");
    let timeline_resizing = dragging() == Some("timeline");
    let user_select_style = if dragging().is_some() || dragged_asset().is_some() { "none" } else { "auto" };
    let drag_cursor = match dragging() {
        Some("left") => "ew-resize",
        Some("timeline") => "ns-resize",
        _ if dragged_asset().is_some() => "grabbing",
        _ => "default",
    };
    let (ghost_x, ghost_y) = (mouse_pos().0 + 15.0, mouse_pos().1 + 15.0);
    let drag_ghost_asset = dragged_asset().and_then(|id| project_snapshot.find_media_asset(id).cloned());

    rsx! {
        style {
            r#"
            *, *::before, *::after {{ box-sizing: border-box; }}
            html, body {{ margin: 0; padding: 0; overflow: hidden; background-color: {BG_BASE}; }}
            body {{ -webkit-font-smoothing: antialiased; }}
            ::-webkit-scrollbar {{ width: 6px; height: 6px; }}
            ::-webkit-scrollbar-track {{ background: transparent; }}
            ::-webkit-scrollbar-thumb {{ background: {BORDER_DEFAULT}; border-radius: 3px; }}
            ::-webkit-scrollbar-thumb:hover {{ background: {BORDER_STRONG}; }}
            .collapse-btn {{ opacity: 0.6; transition: opacity 0.15s ease, background-color 0.15s ease; }}
            .collapse-btn:hover {{ opacity: 1; background-color: {BG_HOVER} !important; }}
            .resize-handle {{ transition: background-color 0.15s ease; }}
            .resize-handle:hover {{ background-color: {BORDER_ACCENT} !important; }}
            .resize-handle:active {{ background-color: {BORDER_ACCENT} !important; }}
            .collapsed-rail {{ transition: background-color 0.15s ease; }}
            .collapsed-rail:hover {{ background-color: {BG_HOVER} !important; }}
            "#
        }

        div {
            class: "app-container",
            style: "
                display: flex; flex-direction: column;
                width: 100vw; height: 100vh;
                background-color: {BG_BASE}; color: {TEXT_PRIMARY};
                font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, sans-serif;
                overflow: hidden; position: fixed; top: 0; left: 0;
                user-select: {user_select_style};
                cursor: {drag_cursor};
                outline: none;
            ",

            onmousemove: move |e| {
                if dragged_asset().is_some() {
                    mouse_pos.set((e.client_coordinates().x, e.client_coordinates().y));
                }
                if let Some(target) = dragging() {
                    e.prevent_default();
                    match target {
                        "left" => {
                            let delta = e.client_coordinates().x - drag_start_pos();
                            left_width.set((drag_start_size() + delta).clamp(PANEL_MIN_WIDTH, PANEL_MAX_WIDTH));
                        }
                        "timeline" => {
                            let delta = drag_start_pos() - e.client_coordinates().y;
                            timeline_height.set((drag_start_size() + delta).clamp(TIMELINE_MIN_HEIGHT, TIMELINE_MAX_HEIGHT));
                        }
                        _ => {}
                    }
                }
            },
            onmouseup: move |_| {
                dragging.set(None);
                dragged_asset.set(None);
            },
            oncontextmenu: move |e| e.prevent_default(),
            tabindex: "0",
            onkeydown: {
                let mut remove_media = remove_media.clone();
                let import = import.clone();
                move |e: KeyboardEvent| {
                    let hotkey_context = HotkeyContext {
                        timeline_visible: !timeline_collapsed(),
                        has_selection: !selection.peek().is_empty(),
                        input_focused: show_export(),
                    };
                    let modifiers = e.modifiers();
                    let result = handle_hotkey(
                        &e.key(),
                        modifiers.shift(),
                        modifiers.ctrl(),
                        modifiers.alt(),
                        modifiers.meta(),
                        &hotkey_context,
                    );
                    let HotkeyResult::Action(action) = result else {
                        return;
                    };
                    e.prevent_default();
                    tracing::debug!(?action, "hotkey");
                    match action {
                        HotkeyAction::TimelineZoomIn => zoom.set((zoom() * 1.25).clamp(min_zoom, max_zoom)),
                        HotkeyAction::TimelineZoomOut => zoom.set((zoom() * 0.8).clamp(min_zoom, max_zoom)),
                        HotkeyAction::PlayPause => toggle_playback(),
                        HotkeyAction::DeleteSelection => {
                            let current = selection.peek().clone();
                            if let Some(placement_id) = current.track_asset {
                                remove_placement(placement_id);
                            } else if let Some(asset_id) = current.media_asset {
                                remove_media(asset_id);
                            }
                        }
                        HotkeyAction::ImportMedia => {
                            if let Some(paths) = pick_media_files() {
                                import(paths);
                            }
                        }
                        HotkeyAction::OpenExport => open_export(),
                    }
                }
            },

            if let Some(asset) = drag_ghost_asset {
                div {
                    style: "
                        position: fixed; left: {ghost_x}px; top: {ghost_y}px;
                        background-color: {BG_ELEVATED}; border: 1px solid {BORDER_ACCENT};
                        border-radius: 4px; padding: 6px 10px; font-size: 12px; pointer-events: none;
                        z-index: 10000; box-shadow: 0 4px 12px rgba(0,0,0,0.3); opacity: 0.9;
                        color: {TEXT_PRIMARY}; display: flex; align-items: center; gap: 6px;
                    ",
                    span { {kind_icon(asset.kind)} }
                    "{asset.name}"
                }
            }

            TitleBar {
                project_name: project_snapshot.name.clone(),
                export_running: export_job.read().is_running(),
                on_import: {
                    let import = import.clone();
                    move |_| {
                        if let Some(paths) = pick_media_files() {
                            import(paths);
                        }
                    }
                },
                on_export: move |_| open_export(),
            }

            div {
                class: "main-content",
                style: "display: flex; flex: 1; overflow: hidden;",

                SidePanel {
                    title: "Media",
                    width: left_w,
                    collapsed: left_collapsed(),
                    is_resizing: left_resizing,
                    badge: Some(project_snapshot.library.len()),
                    on_toggle: move |_| left_collapsed.set(!left_collapsed()),
                    on_resize_start: move |e: MouseEvent| {
                        dragging.set(Some("left"));
                        drag_start_pos.set(e.client_coordinates().x);
                        drag_start_size.set(left_width());
                    },
                    AssetsPanelContent {
                        assets: project_snapshot.library.clone(),
                        selected: selection_snapshot.media_asset,
                        panel_width: left_w,
                        on_import_files: {
                            let import = import.clone();
                            move |paths| import(paths)
                        },
                        on_select: move |id| selection.write().select_media_asset(id),
                        on_rename: move |(id, name): (Uuid, String)| {
                            project.write().rename_media_asset(id, name);
                        },
                        on_delete: {
                            let mut remove_media = remove_media.clone();
                            move |id| remove_media(id)
                        },
                        on_add_to_timeline: move |id| add_to_timeline(id),
                        on_drag_start: move |id| dragged_asset.set(Some(id)),
                    }
                }

                div {
                    style: "display: flex; flex-direction: column; flex: 1; min-width: 0; overflow: hidden;",

                    PreviewPanel {
                        fps: fps,
                        playback: playback_snapshot.clone(),
                        source_count: source_count,
                        on_toggle_play: move |_| toggle_playback(),
                        on_seek: move |time: f64| {
                            let command = playback.write().seek(time);
                            send_player(command);
                        },
                    }

                    div {
                        class: "resize-handle",
                        style: "height: 4px; background-color: {BORDER_DEFAULT}; cursor: ns-resize; flex-shrink: 0;",
                        onmousedown: move |e| {
                            if !timeline_collapsed() {
                                e.prevent_default();
                                dragging.set(Some("timeline"));
                                drag_start_pos.set(e.client_coordinates().y);
                                drag_start_size.set(timeline_height());
                            }
                        },
                    }

                    TimelinePanel {
                        height: timeline_h,
                        collapsed: timeline_collapsed(),
                        is_resizing: timeline_resizing,
                        on_toggle: move |_| timeline_collapsed.set(!timeline_collapsed()),
                        tracks: project_snapshot.tracks.clone(),
                        library: project_snapshot.library.clone(),
                        total_duration: total_duration,
                        current_time: current_time,
                        fps: fps,
                        zoom: zoom().clamp(min_zoom, max_zoom),
                        min_zoom: min_zoom,
                        max_zoom: max_zoom,
                        is_playing: playback_snapshot.is_playing(),
                        can_play: can_play,
                        on_seek: move |time| seek_timeline(time),
                        on_zoom_change: move |value: f64| zoom.set(value.clamp(min_zoom, max_zoom)),
                        on_play_pause: move |_| toggle_playback(),
                        on_add_video_track: move |_| {
                            let id = project.write().add_video_track();
                            selection.write().select_track(id);
                        },
                        on_add_audio_track: move |_| {
                            let id = project.write().add_audio_track();
                            selection.write().select_track(id);
                        },
                        on_remove_track: move |id| {
                            if project.write().remove_track(id) {
                                selection.write().clear();
                            }
                        },
                        selected_track: selection_snapshot.track,
                        on_track_select: move |id| selection.write().select_track(id),
                        selected_clip: selection_snapshot.track_asset,
                        on_clip_select: move |id| selection.write().select_track_asset(id),
                        on_clip_delete: move |id| remove_placement(id),
                        on_clip_move: move |(id, start): (Uuid, f64)| {
                            if let Err(err) = project.write().move_track_asset(id, start) {
                                status.set(Some(err.to_string()));
                            }
                        },
                        on_clip_volume: move |(id, volume): (Uuid, f32)| {
                            if let Err(err) = project.write().set_track_asset_volume(id, volume) {
                                status.set(Some(err.to_string()));
                            }
                        },
                        dragged_asset: dragged_asset(),
                        on_asset_drop: move |(track_id, time, asset_id): (Uuid, f64, Uuid)| {
                            dragged_asset.set(None);
                            let result = project.write().place_on_track(track_id, asset_id, time);
                            match result {
                                Ok(placement_id) => selection.write().select_track_asset(placement_id),
                                Err(err) => status.set(Some(err.to_string())),
                            }
                        },
                        on_deselect_all: move |_| selection.write().clear(),
                    }
                }
            }

            StatusBar {
                message: status(),
                media_count: project_snapshot.library.len(),
                fps: fps,
                current_time: current_time,
                total_duration: total_duration,
                on_dismiss: move |_| status.set(None),
            }

            if show_export() {
                ExportPanel {
                    job: export_job(),
                    settings: export_settings(),
                    on_settings_change: move |next| export_settings.set(next),
                    on_start: move |settings| start_export(settings),
                    on_close: move |_| show_export.set(false),
                    on_done: move |_| {
                        let previous = export_settings.peek().clone();
                        let mut next = ExportSettings::new(previous.format, previous.quality);
                        next.resolution = previous.resolution;
                        export_settings.set(next);
                        export_job.set(ExportJob::Idle);
                        show_export.set(false);
                    },
                }
            }
        }
    }
}
