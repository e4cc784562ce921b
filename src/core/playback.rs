//! Playback orchestration for the preview `<video>` element.
//!
//! `PlaybackState` is the Rust-side view of the element. UI actions go
//! through it and produce `PlayerCommand`s for the webview script; the
//! element's real state comes back through polled `PlayerStatus` reports.
//! Each poll carries the number of commands issued so far; the script echoes
//! it back, and reports older than the latest command are dropped.

use serde::{Deserialize, Serialize};

use crate::core::preview::PreviewSource;

/// Messages sent to the player script.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlayerCommand {
    /// Start playback, optionally jumping to a media time first.
    Play { from: Option<f64> },
    Pause,
    Seek { time: f64 },
    /// Ask the script to report a `PlayerStatus`, tagged with `seq`.
    Poll { seq: u64 },
}

/// What the `<video>` element reported on the last poll.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PlayerStatus {
    pub current_time: f64,
    /// `None` until the element has loaded metadata
    pub duration: Option<f64>,
    pub paused: bool,
    pub ended: bool,
    /// `seq` of the poll this answers
    #[serde(default)]
    pub seq: u64,
}

/// Player state for the single bound video source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaybackState {
    source: Option<PreviewSource>,
    is_playing: bool,
    /// Media time in seconds (relative to the bound file, not the timeline)
    current_time: f64,
    media_duration: Option<f64>,
    /// Commands issued so far, bumped on every play/pause/seek and rebind
    command_seq: u64,
}

impl PlaybackState {
    pub fn source(&self) -> Option<&PreviewSource> {
        self.source.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Media duration once known, else the placement duration
    pub fn duration(&self) -> f64 {
        self.media_duration
            .or_else(|| self.source.as_ref().map(|source| source.duration))
            .unwrap_or(0.0)
    }

    /// Playhead position on the timeline
    pub fn timeline_time(&self) -> f64 {
        let offset = self.source.as_ref().map(|source| source.start_time).unwrap_or(0.0);
        offset + self.current_time
    }

    /// Bind a new source. Returns true when the URL changed, in which case
    /// playback state resets (the element reloads with its new `src`).
    pub fn bind(&mut self, source: Option<&PreviewSource>) -> bool {
        let same_url = match (&self.source, source) {
            (Some(current), Some(next)) => current.url == next.url,
            (None, None) => true,
            _ => false,
        };
        if same_url {
            // Placement may have moved; keep media time.
            self.source = source.cloned();
            return false;
        }
        tracing::debug!(url = source.map(|s| s.url.as_str()), "binding preview source");
        *self = Self {
            source: source.cloned(),
            command_seq: self.command_seq + 1,
            ..Self::default()
        };
        true
    }

    /// Status request for the current command sequence.
    pub fn poll(&self) -> PlayerCommand {
        PlayerCommand::Poll { seq: self.command_seq }
    }

    fn issue(&mut self, command: PlayerCommand) -> Option<PlayerCommand> {
        self.command_seq += 1;
        Some(command)
    }

    pub fn play(&mut self) -> Option<PlayerCommand> {
        self.source.as_ref()?;
        let duration = self.duration();
        let from = if duration > 0.0 && self.current_time >= duration {
            self.current_time = 0.0;
            Some(0.0)
        } else {
            None
        };
        self.is_playing = true;
        self.issue(PlayerCommand::Play { from })
    }

    pub fn pause(&mut self) -> Option<PlayerCommand> {
        self.source.as_ref()?;
        self.is_playing = false;
        self.issue(PlayerCommand::Pause)
    }

    pub fn toggle(&mut self) -> Option<PlayerCommand> {
        if self.is_playing {
            self.pause()
        } else {
            self.play()
        }
    }

    /// Seek within the media, clamped to `[0, duration]`.
    pub fn seek(&mut self, time: f64) -> Option<PlayerCommand> {
        self.source.as_ref()?;
        let time = if time.is_finite() { time } else { 0.0 };
        let time = time.clamp(0.0, self.duration().max(0.0));
        self.current_time = time;
        self.issue(PlayerCommand::Seek { time })
    }

    /// Seek to a timeline position, mapped into the bound media.
    pub fn seek_timeline(&mut self, timeline_time: f64) -> Option<PlayerCommand> {
        let offset = self.source.as_ref()?.start_time;
        self.seek(timeline_time - offset)
    }

    /// Fold in a polled status report. Reports requested before the latest
    /// command only contribute the media duration.
    pub fn apply_status(&mut self, status: PlayerStatus) {
        if self.source.is_none() {
            return;
        }
        if let Some(duration) = status.duration.filter(|d| d.is_finite() && *d > 0.0) {
            self.media_duration = Some(duration);
        }
        if status.seq < self.command_seq {
            tracing::trace!(seq = status.seq, latest = self.command_seq, "stale player status");
            return;
        }
        if status.ended {
            self.is_playing = false;
            self.current_time = self.duration();
            return;
        }
        if status.current_time.is_finite() {
            self.current_time = status.current_time.max(0.0);
        }
        self.is_playing = !status.paused;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MediaKind;

    fn source(url: &str, start_time: f64, duration: f64) -> PreviewSource {
        PreviewSource {
            kind: MediaKind::Video,
            url: url.to_string(),
            start_time,
            duration,
        }
    }

    fn status(current_time: f64, paused: bool, ended: bool) -> PlayerStatus {
        PlayerStatus {
            current_time,
            duration: Some(8.0),
            paused,
            ended,
            seq: 0,
        }
    }

    fn current(state: &PlaybackState, report: PlayerStatus) -> PlayerStatus {
        let PlayerCommand::Poll { seq } = state.poll() else {
            unreachable!()
        };
        PlayerStatus { seq, ..report }
    }

    #[test]
    fn test_commands_need_a_source() {
        let mut state = PlaybackState::default();
        assert_eq!(state.play(), None);
        assert_eq!(state.seek(1.0), None);
        assert!(!state.is_playing());
    }

    #[test]
    fn test_toggle_alternates() {
        let mut state = PlaybackState::default();
        state.bind(Some(&source("/media/a", 0.0, 8.0)));
        assert_eq!(state.toggle(), Some(PlayerCommand::Play { from: None }));
        assert!(state.is_playing());
        assert_eq!(state.toggle(), Some(PlayerCommand::Pause));
        assert!(!state.is_playing());
    }

    #[test]
    fn test_seek_clamps_to_duration() {
        let mut state = PlaybackState::default();
        state.bind(Some(&source("/media/a", 0.0, 8.0)));
        assert_eq!(state.seek(20.0), Some(PlayerCommand::Seek { time: 8.0 }));
        assert_eq!(state.seek(-1.0), Some(PlayerCommand::Seek { time: 0.0 }));
        assert_eq!(state.seek(f64::NAN), Some(PlayerCommand::Seek { time: 0.0 }));
    }

    #[test]
    fn test_timeline_mapping() {
        let mut state = PlaybackState::default();
        state.bind(Some(&source("/media/a", 4.0, 8.0)));
        assert_eq!(state.seek_timeline(6.5), Some(PlayerCommand::Seek { time: 2.5 }));
        assert_eq!(state.timeline_time(), 6.5);
        assert_eq!(state.seek_timeline(1.0), Some(PlayerCommand::Seek { time: 0.0 }));
    }

    #[test]
    fn test_status_updates_time_and_play_state() {
        let mut state = PlaybackState::default();
        state.bind(Some(&source("/media/a", 0.0, 5.0)));
        state.play();
        state.apply_status(current(&state, status(1.3, false, false)));
        assert_eq!(state.current_time(), 1.3);
        assert!(state.is_playing());
        assert_eq!(state.duration(), 8.0);

        state.apply_status(current(&state, status(1.4, true, false)));
        assert!(!state.is_playing());
    }

    #[test]
    fn test_report_from_before_a_command_is_ignored() {
        let mut state = PlaybackState::default();
        state.bind(Some(&source("/media/a", 0.0, 5.0)));
        let in_flight = state.poll();
        state.play();
        state.seek(3.0);

        let PlayerCommand::Poll { seq } = in_flight else {
            panic!("expected a poll");
        };
        state.apply_status(PlayerStatus { seq, ..status(0.2, true, false) });
        assert!(state.is_playing());
        assert_eq!(state.current_time(), 3.0);
        assert_eq!(state.duration(), 8.0);

        state.apply_status(current(&state, status(3.1, false, false)));
        assert_eq!(state.current_time(), 3.1);
    }

    #[test]
    fn test_ended_pauses_at_end_and_play_restarts() {
        let mut state = PlaybackState::default();
        state.bind(Some(&source("/media/a", 0.0, 8.0)));
        state.play();
        state.apply_status(current(&state, status(7.9, true, true)));
        assert!(!state.is_playing());
        assert_eq!(state.current_time(), 8.0);
        assert_eq!(state.play(), Some(PlayerCommand::Play { from: Some(0.0) }));
        assert_eq!(state.current_time(), 0.0);
    }

    #[test]
    fn test_rebinding_resets_only_on_url_change() {
        let mut state = PlaybackState::default();
        state.bind(Some(&source("/media/a", 0.0, 8.0)));
        state.seek(3.0);
        assert!(!state.bind(Some(&source("/media/a", 2.0, 8.0))));
        assert_eq!(state.current_time(), 3.0);
        assert_eq!(state.timeline_time(), 5.0);

        assert!(state.bind(Some(&source("/media/b", 0.0, 4.0))));
        assert_eq!(state.current_time(), 0.0);
        assert!(state.bind(None));
        assert!(state.source().is_none());
    }

    #[test]
    fn test_command_wire_format() {
        let json = serde_json::to_value(PlayerCommand::Seek { time: 1.5 }).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "seek", "time": 1.5 }));
        let json = serde_json::to_value(PlayerCommand::Poll { seq: 4 }).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "poll", "seq": 4 }));
    }

    #[test]
    fn test_status_accepts_missing_duration() {
        let status: PlayerStatus = serde_json::from_str(
            r#"{ "current_time": 0.5, "duration": null, "paused": true, "ended": false }"#,
        )
        .unwrap();
        assert_eq!(status.duration, None);
        assert_eq!(status.seq, 0);
    }
}
