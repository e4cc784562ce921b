//! Export panel settings and the simulated export sequence.
//!
//! Export does not encode anything: it walks a fixed list of status steps
//! with a fixed delay and always succeeds. Track and asset data are never read.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{EditorError, Result};

/// Status lines shown while an export runs, in order.
pub const EXPORT_STEPS: [&str; 6] = [
    "Preparing assets...",
    "Processing video tracks...",
    "Processing audio tracks...",
    "Applying effects...",
    "Encoding output...",
    "Finalizing export...",
];

/// Container format offered in the export panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Mp4,
    Webm,
    Mov,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Mp4, ExportFormat::Webm, ExportFormat::Mov];

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Mp4 => "mp4",
            ExportFormat::Webm => "webm",
            ExportFormat::Mov => "mov",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Mp4 => "MP4 (H.264)",
            ExportFormat::Webm => "WebM (VP9)",
            ExportFormat::Mov => "MOV (ProRes)",
        }
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.extension().eq_ignore_ascii_case(ext))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportQuality {
    Low,
    Medium,
    High,
}

impl ExportQuality {
    pub const ALL: [ExportQuality; 3] = [ExportQuality::Low, ExportQuality::Medium, ExportQuality::High];

    pub fn label(self) -> &'static str {
        match self {
            ExportQuality::Low => "Low",
            ExportQuality::Medium => "Medium",
            ExportQuality::High => "High",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|quality| quality.label() == label)
    }
}

/// Output resolution presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportResolution {
    Hd720,
    Hd1080,
    Uhd4k,
}

impl ExportResolution {
    pub const ALL: [ExportResolution; 3] = [
        ExportResolution::Hd720,
        ExportResolution::Hd1080,
        ExportResolution::Uhd4k,
    ];

    pub fn dimensions(self) -> (u32, u32) {
        match self {
            ExportResolution::Hd720 => (1280, 720),
            ExportResolution::Hd1080 => (1920, 1080),
            ExportResolution::Uhd4k => (3840, 2160),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExportResolution::Hd720 => "720p",
            ExportResolution::Hd1080 => "1080p",
            ExportResolution::Uhd4k => "4K",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|resolution| resolution.label() == label)
    }
}

/// Choices made in the export panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSettings {
    pub file_name: String,
    pub format: ExportFormat,
    pub quality: ExportQuality,
    pub resolution: ExportResolution,
}

impl ExportSettings {
    pub fn new(format: ExportFormat, quality: ExportQuality) -> Self {
        Self {
            file_name: default_file_name(chrono::Local::now(), format),
            format,
            quality,
            resolution: ExportResolution::Hd1080,
        }
    }

    /// File name actually written: blank names get the timestamped default,
    /// and the extension always matches the format.
    pub fn resolved_file_name(&self) -> String {
        let trimmed = self.file_name.trim();
        if trimmed.is_empty() {
            return default_file_name(chrono::Local::now(), self.format);
        }
        normalize_extension(trimmed, self.format)
    }
}

/// `export_YYYYMMDD_HHMMSS.<ext>`
pub fn default_file_name<Tz: chrono::TimeZone>(now: chrono::DateTime<Tz>, format: ExportFormat) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("export_{}.{}", now.format("%Y%m%d_%H%M%S"), format.extension())
}

/// Replace a known export extension, or append the format's one.
pub fn normalize_extension(name: &str, format: ExportFormat) -> String {
    let stem = match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && ExportFormat::from_extension(ext).is_some() => stem,
        _ => name,
    };
    format!("{}.{}", stem, format.extension())
}

/// Progress reported after each completed step
#[derive(Debug, Clone, PartialEq)]
pub struct ExportProgress {
    /// Zero-based index of the step now running
    pub step: usize,
    pub total: usize,
    pub status: &'static str,
}

impl ExportProgress {
    pub fn new(step: usize) -> Self {
        let step = step.min(EXPORT_STEPS.len() - 1);
        Self {
            step,
            total: EXPORT_STEPS.len(),
            status: EXPORT_STEPS[step],
        }
    }

    /// Percentage of steps finished
    pub fn percent(&self) -> f64 {
        (self.step as f64 / self.total as f64) * 100.0
    }
}

/// Result of a finished export
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOutcome {
    pub file_name: String,
    pub settings: ExportSettings,
}

/// Lifecycle of the export panel
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ExportJob {
    #[default]
    Idle,
    Running(ExportProgress),
    Complete(ExportOutcome),
}

impl ExportJob {
    pub fn is_running(&self) -> bool {
        matches!(self, ExportJob::Running(_))
    }

    /// Move to the first step. Only one export runs at a time.
    pub fn begin(&mut self) -> Result<()> {
        if self.is_running() {
            return Err(EditorError::ExportInProgress);
        }
        *self = ExportJob::Running(ExportProgress::new(0));
        Ok(())
    }
}

/// Run the simulated export: one status per step with `step_delay` between
/// them. Always resolves successfully.
pub async fn run_export<F>(settings: ExportSettings, step_delay: Duration, mut on_progress: F) -> ExportOutcome
where
    F: FnMut(ExportProgress),
{
    let file_name = settings.resolved_file_name();
    tracing::info!(
        file_name = %file_name,
        format = settings.format.extension(),
        quality = settings.quality.label(),
        resolution = settings.resolution.label(),
        "export started"
    );
    for step in 0..EXPORT_STEPS.len() {
        let progress = ExportProgress::new(step);
        tracing::debug!(step, status = progress.status, "export step");
        on_progress(progress);
        tokio::time::sleep(step_delay).await;
    }
    tracing::info!(file_name = %file_name, "export finished");
    ExportOutcome { file_name, settings }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn settings(name: &str) -> ExportSettings {
        ExportSettings {
            file_name: name.to_string(),
            format: ExportFormat::Webm,
            quality: ExportQuality::Medium,
            resolution: ExportResolution::Hd720,
        }
    }

    #[test]
    fn test_default_file_name() {
        let now = chrono::Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        assert_eq!(default_file_name(now, ExportFormat::Mov), "export_20240309_140507.mov");
    }

    #[test]
    fn test_normalize_extension() {
        assert_eq!(normalize_extension("holiday", ExportFormat::Mp4), "holiday.mp4");
        assert_eq!(normalize_extension("holiday.mov", ExportFormat::Mp4), "holiday.mp4");
        assert_eq!(normalize_extension("v1.2", ExportFormat::Webm), "v1.2.webm");
        assert_eq!(normalize_extension(".mp4", ExportFormat::Webm), ".mp4.webm");
    }

    #[test]
    fn test_blank_name_gets_default() {
        let resolved = settings("   ").resolved_file_name();
        assert!(resolved.starts_with("export_"));
        assert!(resolved.ends_with(".webm"));
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(ExportProgress::new(0).percent(), 0.0);
        assert_eq!(ExportProgress::new(3).percent(), 50.0);
        assert_eq!(ExportProgress::new(99).status, EXPORT_STEPS[5]);
    }

    #[test]
    fn test_label_lookups() {
        assert_eq!(ExportQuality::from_label("High"), Some(ExportQuality::High));
        assert_eq!(ExportResolution::from_label("4K"), Some(ExportResolution::Uhd4k));
        assert_eq!(ExportFormat::from_extension("MP4"), Some(ExportFormat::Mp4));
        assert_eq!(ExportFormat::from_extension("avi"), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_export_walks_all_steps_and_succeeds() {
        let started = tokio::time::Instant::now();
        let mut seen = Vec::new();
        let outcome = run_export(settings("final cut"), Duration::from_millis(1000), |progress| {
            seen.push(progress.status)
        })
        .await;
        assert_eq!(seen, EXPORT_STEPS.to_vec());
        assert_eq!(outcome.file_name, "final cut.webm");
        assert_eq!(started.elapsed(), Duration::from_millis(6000));
    }

    #[test]
    fn test_second_export_is_rejected_while_running() {
        let mut job = ExportJob::default();
        job.begin().unwrap();
        assert_eq!(job, ExportJob::Running(ExportProgress::new(0)));

        job = ExportJob::Running(ExportProgress::new(3));
        assert!(matches!(job.begin(), Err(EditorError::ExportInProgress)));
        assert_eq!(job, ExportJob::Running(ExportProgress::new(3)));

        job = ExportJob::Complete(ExportOutcome {
            file_name: "a.webm".to_string(),
            settings: settings("a"),
        });
        assert!(job.begin().is_ok());
        assert!(job.is_running());
    }
}
