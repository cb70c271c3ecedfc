use thiserror::Error;
use tracing::{error, warn};

use crate::shortcuts::ShortcutParseError;

/// Error severity for UI display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,     // Blue - informational
    Warning,  // Yellow - recoverable
    Error,    // Red - operation failed
    Critical, // Red + sticky - requires user action
}

/// Errors raised at the fallible edges of the crate (config, shortcut strings, stdin).
///
/// The toast queue, shortcut router and command overlay never produce these for
/// their ordinary edge cases: dismissing an absent id, a key with no binding and
/// an empty result set are all normal states.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Failed to read config '{path}': {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config '{path}': {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid shortcut '{shortcut}': {source}")]
    Shortcut {
        shortcut: String,
        #[source]
        source: ShortcutParseError,
    },

    #[error("Failed to parse command: {0}")]
    CommandParse(#[from] serde_json::Error),
}

impl DispatchError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ConfigRead { .. } => ErrorSeverity::Warning,
            Self::ConfigParse { .. } => ErrorSeverity::Warning,
            Self::Shortcut { .. } => ErrorSeverity::Warning,
            Self::CommandParse(_) => ErrorSeverity::Error,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigRead { path, .. } => format!("Could not read config from {}", path),
            Self::ConfigParse { path, .. } => format!("Config file {} is not valid JSON", path),
            Self::Shortcut { shortcut, .. } => format!("Ignoring invalid shortcut '{}'", shortcut),
            Self::CommandParse(e) => format!("Invalid command: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, DispatchError>;

/// Extension trait for silent error logging with caller location tracking.
/// Use when the operation is recoverable and the user doesn't need to know.
///
/// # Examples
///
/// ```ignore
/// use squad_dispatch::error::ResultExt;
///
/// let config = load_config_from(&path).warn_on_err().unwrap_or_default();
/// ```
pub trait ResultExt<T> {
    /// Log error with caller location and return None. Use for recoverable failures.
    fn log_err(self) -> Option<T>;
    /// Log as warning with caller location and return None. Use for expected failures.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                error!(
                    error = ?error,
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
            Err(error) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation had warning"
                );
                None
            }
        }
    }
}
