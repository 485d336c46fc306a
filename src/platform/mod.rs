//! Seam between the adapter and the chat client library.
//!
//! `ChatPlatform` lists the Discord operations the adapter forwards to: guild role
//! and member lookups, role grants, channel permission overwrites, sends, deletes,
//! message collection and presence. [`serenity::SerenityPlatform`] implements it
//! against a live gateway connection.

pub mod serenity;

#[cfg(test)]
pub mod mock;

use std::{fmt, sync::Arc, time::Duration};

use ::serenity::all::{ChannelId, GuildId, MessageId, OnlineStatus, RoleId, UserId};
use ::serenity::async_trait;

use crate::{
    error::AppError,
    model::{
        channel::RoleOverwrite,
        member::GuildMember,
        message::ChatMessage,
        role::GuildRole,
    },
};

/// Predicate applied to incoming messages while waiting.
pub type MessageCheck = Arc<dyn Fn(&ChatMessage) -> bool + Send + Sync>;

/// Criteria for [`ChatPlatform::wait_for_message`].
///
/// Every criterion left unset matches any message. Without a timeout the wait
/// only ends when a matching message arrives.
#[derive(Clone, Default)]
pub struct MessageFilter {
    pub author: Option<UserId>,
    pub channel: Option<ChannelId>,
    pub timeout: Option<Duration>,
    pub check: Option<MessageCheck>,
}

impl MessageFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn author(mut self, author: UserId) -> Self {
        self.author = Some(author);
        self
    }

    pub fn channel(mut self, channel: ChannelId) -> Self {
        self.channel = Some(channel);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn check<F>(mut self, check: F) -> Self
    where
        F: Fn(&ChatMessage) -> bool + Send + Sync + 'static,
    {
        self.check = Some(Arc::new(check));
        self
    }

    /// Whether `message` satisfies every criterion except the timeout.
    pub fn matches(&self, message: &ChatMessage) -> bool {
        self.author.map_or(true, |author| message.author_id == author)
            && self.channel.map_or(true, |channel| message.channel_id == channel)
            && self.check.as_ref().map_or(true, |check| check(message))
    }
}

impl fmt::Debug for MessageFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageFilter")
            .field("author", &self.author)
            .field("channel", &self.channel)
            .field("timeout", &self.timeout)
            .field("check", &self.check.is_some())
            .finish()
    }
}

/// Discord operations the adapter depends on.
#[async_trait]
pub trait ChatPlatform: Send + Sync {
    /// Display name of the bot user.
    async fn bot_name(&self) -> Result<String, AppError>;

    /// All roles of a guild.
    async fn guild_roles(&self, guild_id: GuildId) -> Result<Vec<GuildRole>, AppError>;

    /// All members of a guild.
    async fn guild_members(&self, guild_id: GuildId) -> Result<Vec<GuildMember>, AppError>;

    /// A single guild member, or `None` if the user is not in the guild.
    async fn member(
        &self,
        guild_id: GuildId,
        user_id: UserId,
    ) -> Result<Option<GuildMember>, AppError>;

    /// Whether the channel exists and is visible to the bot.
    async fn channel_exists(&self, channel_id: ChannelId) -> Result<bool, AppError>;

    async fn add_member_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), AppError>;

    async fn remove_member_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), AppError>;

    /// The permission overwrite for `role_id` on a channel; empty when none is set.
    async fn role_overwrite(
        &self,
        channel_id: ChannelId,
        role_id: RoleId,
    ) -> Result<RoleOverwrite, AppError>;

    /// Replaces the permission overwrite for `role_id` on a channel.
    async fn set_role_overwrite(
        &self,
        channel_id: ChannelId,
        role_id: RoleId,
        overwrite: RoleOverwrite,
    ) -> Result<(), AppError>;

    async fn send_channel_message(
        &self,
        channel_id: ChannelId,
        content: &str,
    ) -> Result<ChatMessage, AppError>;

    async fn send_direct_message(
        &self,
        user_id: UserId,
        content: &str,
    ) -> Result<ChatMessage, AppError>;

    async fn delete_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<(), AppError>;

    /// Waits for the next message matching `filter`, or `None` on timeout.
    async fn wait_for_message(&self, filter: MessageFilter) -> Option<ChatMessage>;

    /// Sets the bot's status and "playing" activity.
    fn set_presence(&self, status: OnlineStatus, activity: &str);
}
