//! Severity levels for the game log.

use crate::error::config::ConfigError;

/// Severity of a game log entry.
///
/// Ordered so that `level >= min_log_level` selects what is mirrored to the debug
/// channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug = 0,
    Info = 1,
    Warning = 2,
    Error = 3,
}

impl LogLevel {
    /// Prefix written before the log text.
    ///
    /// Errors ping the bot owner so they are noticed in the debug channel.
    pub fn prefix(self, owner_id: u64) -> String {
        match self {
            LogLevel::Debug => "[DEBUG] ".to_string(),
            LogLevel::Info => "[INFO] ".to_string(),
            LogLevel::Warning => "**[WARNING]** ".to_string(),
            LogLevel::Error => format!("**[ERROR]** <@{}> ", owner_id),
        }
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, ConfigError> {
        match value {
            0 => Ok(LogLevel::Debug),
            1 => Ok(LogLevel::Info),
            2 => Ok(LogLevel::Warning),
            3 => Ok(LogLevel::Error),
            other => Err(ConfigError::InvalidValue {
                var: "MIN_LOG_LEVEL".to_string(),
                value: other.to_string(),
                reason: "log level must be between 0 and 3".to_string(),
            }),
        }
    }
}
