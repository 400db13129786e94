use std::path::PathBuf;

use thiserror::Error;
use tracing::{error, warn};

/// Errors from the explorer's fallible edges. Navigation and rendering are
/// total and never produce one of these.
#[derive(Error, Debug)]
pub enum ExplorerError {
    #[error("Failed to read config '{}': {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config '{}': {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Window operation failed: {0}")]
    Window(String),
}

pub type Result<T> = std::result::Result<T, ExplorerError>;

/// Log a recoverable failure with the caller's location and carry on.
///
/// ```ignore
/// use ui_explorer::error::ResultExt;
///
/// let config = load_config_from(&path).warn_on_err().unwrap_or_default();
/// ```
pub trait ResultExt<T> {
    /// Log as error and return None.
    fn log_err(self) -> Option<T>;
    /// Log as warning and return None. Use for expected failures.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                let caller = std::panic::Location::caller();
                error!(
                    error = %err,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation failed"
                );
                None
            }
        }
    }

    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = %err,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation had warning"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_read_message_names_path() {
        let err = ExplorerError::ConfigRead {
            path: PathBuf::from("/tmp/missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to read config '/tmp/missing.json': not found"
        );
    }

    #[test]
    fn test_result_ext_passes_values_through() {
        let ok: std::result::Result<u8, String> = Ok(7);
        assert_eq!(ok.log_err(), Some(7));
        let err: std::result::Result<u8, String> = Err("boom".into());
        assert_eq!(err.warn_on_err(), None);
    }
}
