//! Shared UI constants such as colors, panel sizing, and webview scripts.

pub const BG_DEEPEST: &str = "#09090b";
pub const BG_BASE: &str = "#0a0a0b";
pub const BG_ELEVATED: &str = "#141414";
pub const BG_SURFACE: &str = "#1a1a1a";
pub const BG_HOVER: &str = "#262626";

pub const BORDER_SUBTLE: &str = "#1f1f1f";
pub const BORDER_DEFAULT: &str = "#27272a";
pub const BORDER_STRONG: &str = "#3f3f46";
pub const BORDER_ACCENT: &str = "#3b82f6";

pub const TEXT_PRIMARY: &str = "#fafafa";
pub const TEXT_SECONDARY: &str = "#a1a1aa";
pub const TEXT_MUTED: &str = "#71717a";
pub const TEXT_DIM: &str = "#52525b";

pub const ACCENT_AUDIO: &str = "#3b82f6";
pub const ACCENT_VIDEO: &str = "#22c55e";
pub const ACCENT_IMAGE: &str = "#a855f7";
pub const ACCENT_EXPORT: &str = "#f97316";
pub const ACCENT_ERROR: &str = "#ef4444";

pub const PANEL_MIN_WIDTH: f64 = 180.0;
pub const PANEL_MAX_WIDTH: f64 = 400.0;
pub const PANEL_DEFAULT_WIDTH: f64 = 260.0;
pub const PANEL_COLLAPSED_WIDTH: f64 = 40.0;
pub const TIMELINE_MIN_HEIGHT: f64 = 100.0;
pub const TIMELINE_MAX_HEIGHT: f64 = 500.0;
pub const TIMELINE_DEFAULT_HEIGHT: f64 = 240.0;
pub const TIMELINE_COLLAPSED_HEIGHT: f64 = 32.0;
pub const TIMELINE_MIN_ZOOM_FLOOR: f64 = 0.1;
pub const TIMELINE_MAX_PX_PER_FRAME: f64 = 8.0;
pub const TIMELINE_MIN_VISIBLE_SECONDS: f64 = 30.0;
pub const TRACK_ROW_HEIGHT: f64 = 44.0;
pub const MIN_CLIP_WIDTH_PX: f64 = 4.0;

/// Drives the preview `<video>` element. Commands arrive as tagged JSON
/// (`PlayerCommand`); a `poll` is answered with a `PlayerStatus`.
pub const PREVIEW_PLAYER_SCRIPT: &str = r#"
function getVideo() {
    return document.getElementById("preview-video");
}

function status(video, seq) {
    if (!video) {
        return { current_time: 0, duration: null, paused: true, ended: false, seq: seq };
    }
    const duration = Number.isFinite(video.duration) ? video.duration : null;
    return {
        current_time: video.currentTime || 0,
        duration: duration,
        paused: video.paused,
        ended: video.ended,
        seq: seq
    };
}

while (true) {
    const msg = await dioxus.recv();
    if (!msg) {
        continue;
    }
    const video = getVideo();
    if (msg.kind === "poll") {
        dioxus.send(status(video, msg.seq || 0));
        continue;
    }
    if (!video) {
        continue;
    }
    try {
        if (msg.kind === "play") {
            if (msg.from !== null && msg.from !== undefined) {
                video.currentTime = msg.from;
            }
            video.play().catch(() => {});
        } else if (msg.kind === "pause") {
            video.pause();
        } else if (msg.kind === "seek") {
            video.currentTime = msg.time;
        }
    } catch (_) {
        // Element not ready yet; the next poll reports the real state.
    }
}
"#;

pub const TIMELINE_VIEWPORT_SCRIPT: &str = r#"
const hostId = "timeline-scroll-host";
let lastWidth = null;

function sendWidth() {
    const host = document.getElementById(hostId);
    if (!host) {
        return;
    }
    const width = host.clientWidth || 0;
    if (lastWidth !== null && Math.abs(lastWidth - width) < 0.5) {
        return;
    }
    lastWidth = width;
    dioxus.send(width);
}

function attach() {
    const host = document.getElementById(hostId);
    if (!host) {
        setTimeout(attach, 100);
        return;
    }
    const observer = new ResizeObserver(() => sendWidth());
    observer.observe(host);
    window.addEventListener("resize", sendWidth, { passive: true });
    sendWidth();
}

attach();
await new Promise(() => {});
"#;
