//! Timeline arithmetic: pixel/time scaling, zoom bounds, frame snapping and
//! time formatting. Everything here is pure.

use crate::constants::{TIMELINE_MAX_PX_PER_FRAME, TIMELINE_MIN_VISIBLE_SECONDS, TIMELINE_MIN_ZOOM_FLOOR};

/// Convert a time in seconds to a horizontal offset at `zoom` px/s.
pub fn time_to_px(time_seconds: f64, zoom: f64) -> f64 {
    time_seconds * zoom
}

/// Convert a horizontal offset back to seconds. Negative offsets clamp to 0.
pub fn px_to_time(px: f64, zoom: f64) -> f64 {
    if zoom <= 0.0 {
        return 0.0;
    }
    (px / zoom).max(0.0)
}

/// Round a time value to the nearest frame boundary.
pub fn snap_time_to_frame(time_seconds: f64, fps: f64) -> f64 {
    let fps = fps.max(1.0);
    (time_seconds * fps).round() / fps
}

/// Length the timeline renders: the project duration plus headroom so there
/// is always space to drop after the last clip.
pub fn visible_duration(total_duration: f64) -> f64 {
    (total_duration * 1.2).max(TIMELINE_MIN_VISIBLE_SECONDS)
}

/// Zoom range in px/s: "fit" shows the whole duration in the viewport, the
/// upper bound gives each frame a fixed pixel width.
pub fn timeline_zoom_bounds(duration: f64, viewport_width: Option<f64>, fps: f64) -> (f64, f64) {
    let duration = duration.max(0.01);
    let viewport_width = viewport_width.unwrap_or(600.0).max(1.0);
    let min_zoom = (viewport_width / duration).max(TIMELINE_MIN_ZOOM_FLOOR);
    let max_zoom = (fps.max(1.0) * TIMELINE_MAX_PX_PER_FRAME).max(min_zoom);
    (min_zoom, max_zoom)
}

/// Seconds between labelled ruler ticks, chosen so labels sit ~90px apart.
pub fn major_tick_seconds(zoom: f64) -> f64 {
    const NICE_TICKS: [f64; 10] = [0.5, 1.0, 2.0, 5.0, 10.0, 15.0, 30.0, 60.0, 120.0, 300.0];
    let target_seconds = (90.0 / zoom.max(0.1)).max(0.5);
    NICE_TICKS
        .iter()
        .copied()
        .find(|tick| *tick >= target_seconds)
        .unwrap_or(NICE_TICKS[NICE_TICKS.len() - 1])
}

/// Format as `HH:MM:SS:FF` using the project fps.
pub fn format_timecode(time_seconds: f64, fps: f64) -> String {
    let fps_i = fps.round().max(1.0) as u64;
    let total_frames = (time_seconds * fps.max(1.0)).round().max(0.0) as u64;
    let frames = total_frames % fps_i;
    let total_seconds = total_frames / fps_i;
    let seconds = total_seconds % 60;
    let total_minutes = total_seconds / 60;
    let minutes = total_minutes % 60;
    let hours = total_minutes / 60;
    format!("{:02}:{:02}:{:02}:{:02}", hours, minutes, seconds, frames)
}

/// Format as `m:ss` for library entries and the player.
pub fn format_duration(time_seconds: f64) -> String {
    let total = time_seconds.max(0.0).floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px_time_round_trip() {
        let zoom = 37.5;
        for t in [0.0, 0.04, 1.0, 12.345, 600.0] {
            assert!((px_to_time(time_to_px(t, zoom), zoom) - t).abs() < 1e-9);
        }
    }

    #[test]
    fn test_px_to_time_clamps() {
        assert_eq!(px_to_time(-20.0, 50.0), 0.0);
        assert_eq!(px_to_time(100.0, 0.0), 0.0);
        assert_eq!(px_to_time(100.0, 50.0), 2.0);
    }

    #[test]
    fn test_snap_time_to_frame() {
        assert!((snap_time_to_frame(1.01, 30.0) - 1.0).abs() < 1e-9);
        assert!((snap_time_to_frame(1.02, 30.0) - 31.0 / 30.0).abs() < 1e-9);
        assert_eq!(snap_time_to_frame(2.4, 0.0), 2.0);
    }

    #[test]
    fn test_zoom_bounds() {
        let (min, max) = timeline_zoom_bounds(60.0, Some(600.0), 30.0);
        assert_eq!(min, 10.0);
        assert_eq!(max, 240.0);
        let (min, max) = timeline_zoom_bounds(0.0, Some(600.0), 30.0);
        assert_eq!(min, max);
    }

    #[test]
    fn test_visible_duration_has_floor() {
        assert_eq!(visible_duration(0.0), TIMELINE_MIN_VISIBLE_SECONDS);
        assert_eq!(visible_duration(100.0), 120.0);
    }

    #[test]
    fn test_major_tick_seconds() {
        assert_eq!(major_tick_seconds(200.0), 0.5);
        assert_eq!(major_tick_seconds(50.0), 2.0);
        assert_eq!(major_tick_seconds(0.01), 300.0);
    }

    #[test]
    fn test_format_timecode() {
        assert_eq!(format_timecode(0.0, 30.0), "00:00:00:00");
        assert_eq!(format_timecode(61.5, 30.0), "00:01:01:15");
        assert_eq!(format_timecode(3600.0, 24.0), "01:00:00:00");
        assert_eq!(format_timecode(-3.0, 30.0), "00:00:00:00");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0.0), "0:00");
        assert_eq!(format_duration(75.9), "1:15");
    }
}
