//! Structured JSONL logging plus human-readable stderr output.
//!
//! - **JSONL to file** (~/.ui-explorer/logs/ui-explorer.jsonl) - one JSON object per line
//! - **Pretty to stderr** - for developers watching the terminal
//!
//! # Usage
//!
//! ```rust,ignore
//! // Keep the guard alive for the duration of the program
//! let _guard = ui_explorer::logging::init();
//! tracing::info!(event_type = "app_start", "Explorer started");
//! ```

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const LOG_FILE_NAME: &str = "ui-explorer.jsonl";

/// Dropping this guard flushes and closes the log file.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize dual-output logging. Keep the returned guard alive.
///
/// If the log file cannot be opened, logging continues on stderr only.
pub fn init() -> LoggingGuard {
    if let Err(e) = fs::create_dir_all(log_dir()) {
        eprintln!("[LOGGING] Failed to create log directory: {}", e);
    }
    let log_path = log_path();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,gpui=warn"));

    let file = OpenOptions::new().create(true).append(true).open(&log_path);

    let file_guard = match file {
        Ok(file) => {
            // Non-blocking so a slow disk never stalls the UI thread
            let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file);
            let json_layer = fmt::layer()
                .json()
                .with_writer(non_blocking_file)
                .with_timer(fmt::time::UtcTime::rfc_3339())
                .with_target(true)
                .with_level(true)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_file(false)
                .with_line_number(false)
                .with_span_events(FmtSpan::NONE);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(json_layer)
                .with(pretty_layer())
                .init();
            Some(file_guard)
        }
        Err(e) => {
            eprintln!("[LOGGING] Failed to open log file: {}", e);
            tracing_subscriber::registry()
                .with(env_filter)
                .with(pretty_layer())
                .init();
            None
        }
    };

    tracing::info!(
        event_type = "app_lifecycle",
        action = "started",
        log_path = %log_path.display(),
        "Explorer logging initialized"
    );

    LoggingGuard {
        _file_guard: file_guard,
    }
}

/// Human-readable stderr layer
fn pretty_layer<S>() -> impl tracing_subscriber::Layer<S>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .compact()
}

/// ~/.ui-explorer/logs/, or a temp dir when there is no home directory
fn log_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".ui-explorer").join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("ui-explorer-logs"))
}

/// Path to the JSONL log file
fn log_path() -> PathBuf {
    log_dir().join(LOG_FILE_NAME)
}

/// Log a navigation step (event received, command issued, location changed)
pub fn log_navigation(event_type: &str, location: &str) {
    tracing::info!(
        event_type = "navigation",
        navigation = event_type,
        location = location,
        "{} {}", event_type, location
    );
}

/// Log a UI event with structured fields
pub fn log_ui_event(component: &str, action: &str, details: Option<&str>) {
    let msg = match details {
        Some(d) => format!("{} {} - {}", component, action, d),
        None => format!("{} {}", component, action),
    };

    tracing::debug!(
        event_type = "ui_event",
        component = component,
        action = action,
        details = details,
        "{}", msg
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_path_uses_jsonl_file() {
        let path = log_path();
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some(LOG_FILE_NAME));
        assert!(path.parent().is_some_and(|p| p.ends_with("logs")));
    }

    #[test]
    fn test_helpers_do_not_require_subscriber() {
        log_navigation("location_changed", "#Atoms/Button");
        log_ui_event("sidebar", "click", Some("#Atoms/Button"));
        log_ui_event("header", "click", None);
    }
}
