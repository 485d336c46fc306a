//! The bot-game interface and its Discord implementation.
//!
//! The game drives the bot exclusively through [`BotAdapter`]: sending messages,
//! resolving destinations, granting and revoking the Player, Admin and Notify roles,
//! locking the lobby channel, logging and setting presence. [`DiscordAdapter`]
//! implements it by forwarding each call to a
//! [`ChatPlatform`](crate::platform::ChatPlatform), caching the role handles it
//! resolves once at start-up.
//!
//! Sends are chunked to Discord's message length limit. Lobby sends are retried;
//! see [`RetryPolicy`].

pub mod discord;
mod init;
mod logging;
mod send;

#[cfg(test)]
mod test;

use std::time::Duration;

use serenity::all::{ChannelId, UserId};
use serenity::async_trait;

use crate::{
    error::AppError,
    model::{
        destination::Destination, lobby::LobbyStatus, log_level::LogLevel, member::GuildMember,
        message::ChatMessage, role::GameRole,
    },
    platform::MessageFilter,
};

pub use discord::DiscordAdapter;

/// How lobby sends are retried when Discord rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts per chunk, including the first.
    pub attempts: u32,
    /// Fixed wait between attempts.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            delay: Duration::from_secs(5),
        }
    }
}

/// Formatting applied by [`BotAdapter::reply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyOptions {
    /// Break `@` mentions in the reply text.
    pub clean: bool,
    /// Prefix the reply with a mention of the original author.
    pub mention_author: bool,
}

impl Default for ReplyOptions {
    fn default() -> Self {
        Self {
            clean: true,
            mention_author: false,
        }
    }
}

/// Interface between the werewolf game and the chat platform.
#[async_trait]
pub trait BotAdapter: Send + Sync {
    /// Resolves handles and repairs state left over from a previous run.
    ///
    /// Must run before anything else. Safe to call again on reconnect, in which case
    /// only the presence is reset.
    async fn async_init(&self) -> Result<(), AppError>;

    /// Sends `text` to `destination`. Does nothing when the destination is absent.
    async fn send_message(
        &self,
        destination: Option<Destination>,
        text: &str,
    ) -> Result<Option<ChatMessage>, AppError>;

    /// Resolves a user to a guild member usable as a destination.
    async fn get_user_destination(
        &self,
        user_id: UserId,
    ) -> Result<Option<GuildMember>, AppError>;

    /// Resolves a channel to a destination.
    async fn get_channel_destination(
        &self,
        channel_id: ChannelId,
    ) -> Result<Option<Destination>, AppError>;

    /// Waits for a message matching `filter`, returning `None` on timeout.
    async fn wait_for_message(
        &self,
        filter: MessageFilter,
    ) -> Result<Option<ChatMessage>, AppError>;

    async fn delete_message(&self, message: &ChatMessage) -> Result<(), AppError>;

    /// Grants `role` to the user. No-op when the user is not a guild member.
    async fn add_role(&self, role: GameRole, user_id: UserId) -> Result<(), AppError>;

    /// Revokes `role` from the user. No-op when the user is not a guild member.
    async fn remove_role(&self, role: GameRole, user_id: UserId) -> Result<(), AppError>;

    /// Whether the user is a guild member holding `role`; false until the role is resolved.
    async fn has_role(&self, role: GameRole, user_id: UserId) -> Result<bool, AppError>;

    async fn add_player_role(&self, user_id: UserId) -> Result<(), AppError> {
        self.add_role(GameRole::Player, user_id).await
    }

    async fn remove_player_role(&self, user_id: UserId) -> Result<(), AppError> {
        self.remove_role(GameRole::Player, user_id).await
    }

    async fn has_player_role(&self, user_id: UserId) -> Result<bool, AppError> {
        self.has_role(GameRole::Player, user_id).await
    }

    async fn add_admin_role(&self, user_id: UserId) -> Result<(), AppError> {
        self.add_role(GameRole::Admin, user_id).await
    }

    async fn remove_admin_role(&self, user_id: UserId) -> Result<(), AppError> {
        self.remove_role(GameRole::Admin, user_id).await
    }

    async fn add_notify_role(&self, user_id: UserId) -> Result<(), AppError> {
        self.add_role(GameRole::Notify, user_id).await
    }

    async fn remove_notify_role(&self, user_id: UserId) -> Result<(), AppError> {
        self.remove_role(GameRole::Notify, user_id).await
    }

    /// Whether @everyone is barred from chatting in the lobby.
    async fn is_lobby_locked(&self) -> Result<bool, AppError>;

    /// Only members with an explicit grant (alive players) may chat.
    async fn lock_lobby(&self) -> Result<(), AppError>;

    /// Everyone may chat.
    async fn unlock_lobby(&self) -> Result<(), AppError>;

    /// Writes to the log file and, at or above the configured level, the debug channel.
    ///
    /// Never fails; problems writing the log are reported through `tracing`.
    async fn log(&self, level: LogLevel, text: &str);

    /// Posts to the lobby, retrying failed chunks and logging failures.
    ///
    /// Returns the last chunk posted, or `None` if a chunk could not be sent.
    async fn send_lobby(&self, text: &str) -> Option<ChatMessage>;

    /// Reflects the lobby status in the bot's presence.
    async fn set_lobby_status(&self, status: LobbyStatus) -> Result<(), AppError>;

    /// Direct-messages a user.
    ///
    /// A `Forbidden` failure (DMs closed, user blocked the bot) is swallowed unless
    /// `raise` is set.
    async fn send_user(
        &self,
        user_id: UserId,
        text: &str,
        raise: bool,
    ) -> Result<Option<ChatMessage>, AppError>;

    /// Replies in the channel `message` was posted in.
    async fn reply(
        &self,
        message: &ChatMessage,
        text: &str,
        options: ReplyOptions,
    ) -> Result<Option<ChatMessage>, AppError>;
}
