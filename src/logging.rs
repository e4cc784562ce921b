//! Tracing setup for the editor.
//!
//! Called once from `main` before the window opens. The filter comes from
//! `RUST_LOG` when set, else from `logging.level` in the config file.

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;

fn editor_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. A second call keeps the first subscriber.
pub fn init_logging(config: &LoggingConfig) {
    let builder = fmt().with_env_filter(editor_filter(config));
    let installed = if config.json {
        builder.json().with_current_span(false).try_init()
    } else {
        builder.compact().with_target(false).try_init()
    };
    if installed.is_ok() {
        tracing::debug!(level = %config.level, json = config.json, "logging ready");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_init_is_harmless() {
        let config = LoggingConfig {
            level: "video_studio=debug".to_string(),
            json: false,
        };
        init_logging(&config);
        init_logging(&LoggingConfig { json: true, ..config });
    }
}
