//! Error types for the adapter.
//!
//! `AppError` is the top-level error returned by adapter and platform operations.
//! Most failures from Discord are logged and swallowed by the adapter itself; the
//! variants here cover what is propagated to the caller.

pub mod config;

use serenity::all::ChannelId;
use thiserror::Error;

use crate::{error::config::ConfigError, model::role::GameRole};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Discord rejected the request for lack of permissions (HTTP 403).
    ///
    /// Kept apart from `DiscordErr` so callers such as `send_user` can decide
    /// whether a blocked direct message is worth surfacing.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The role was not found in the guild when the adapter initialized.
    #[error("{0} role was not found in the guild")]
    RoleNotFound(GameRole),

    /// The channel does not exist or is not a guild channel.
    #[error("Channel {0} was not found")]
    ChannelNotFound(ChannelId),

    /// An operation that needs resolved handles ran before `async_init`.
    #[error("Adapter has not been initialized")]
    NotInitialized,

    /// Writing the log file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum. Permission failures are
/// split out into `AppError::Forbidden`.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        if status_code(&err) == Some(403) {
            return AppError::Forbidden(err.to_string());
        }
        AppError::DiscordErr(Box::new(err))
    }
}

/// HTTP status code of a failed Discord request, if the error came from one.
pub fn status_code(err: &serenity::Error) -> Option<u16> {
    match err {
        serenity::Error::Http(http_err) => http_err.status_code().map(|code| code.as_u16()),
        _ => None,
    }
}
