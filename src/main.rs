//! Video Studio
//!
//! A desktop timeline editor: import media, arrange it on video and audio
//! tracks, preview the first video, and run an export.

mod app;
mod components;
mod config;
mod constants;
mod core;
mod error;
mod hotkeys;
mod logging;
mod state;
mod timeline;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

use crate::config::AppConfig;

fn main() {
    let (app_config, config_warning) = AppConfig::load_or_default();
    logging::init_logging(&app_config.logging);
    if let Some(warning) = config_warning {
        tracing::warn!(%warning, "using default configuration");
    }
    tracing::info!(
        fps = app_config.editor.fps,
        path = %AppConfig::default_path().display(),
        "starting Video Studio"
    );

    // Configure the window
    let window = &app_config.window;
    let desktop_config = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title("Video Studio")
                .with_inner_size(LogicalSize::new(window.width, window.height))
                .with_resizable(true),
        )
        .with_menu(None); // Disable default menu bar

    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop_config)
        .with_context(app_config)
        .launch(app::App);
}
