//! Discord implementation of [`BotAdapter`].

use std::sync::{Arc, OnceLock};

use serenity::all::{ChannelId, RoleId, UserId};
use serenity::async_trait;

use crate::{
    adapter::{BotAdapter, ReplyOptions, RetryPolicy},
    config::Config,
    error::AppError,
    model::{
        destination::Destination, handles::Handles, lobby::LobbyStatus, log_level::LogLevel,
        member::GuildMember, message::ChatMessage, role::GameRole,
    },
    platform::{ChatPlatform, MessageFilter},
    util::message::escape_mentions,
};

/// Adapter forwarding the game's calls to Discord.
///
/// Guild and channel IDs come from [`Config`]; role IDs and the bot's name are
/// resolved by [`BotAdapter::async_init`] and cached for the lifetime of the process.
pub struct DiscordAdapter<P> {
    pub(super) platform: P,
    pub(super) config: Arc<Config>,
    pub(super) handles: OnceLock<Handles>,
    pub(super) retry: RetryPolicy,
}

impl<P: ChatPlatform> DiscordAdapter<P> {
    /// Creates an uninitialized adapter with the default retry policy.
    pub fn new(platform: P, config: Arc<Config>) -> Self {
        Self {
            platform,
            config,
            handles: OnceLock::new(),
            retry: RetryPolicy::default(),
        }
    }

    /// Replaces the retry policy used for lobby sends.
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn is_initialized(&self) -> bool {
        self.handles.get().is_some()
    }

    /// Handles resolved at initialization.
    ///
    /// # Returns
    /// - `Ok(&Handles)` - The adapter has been initialized
    /// - `Err(AppError::NotInitialized)` - `async_init` has not completed yet
    pub fn handles(&self) -> Result<&Handles, AppError> {
        self.handles.get().ok_or(AppError::NotInitialized)
    }

    /// Display name of the bot user, once initialized.
    pub fn bot_name(&self) -> Option<&str> {
        self.handles.get().map(|h| h.bot_name.as_str())
    }

    /// The @everyone role shares its ID with the guild.
    pub(super) fn everyone_role(&self) -> RoleId {
        RoleId::new(self.config.werewolf_server.get())
    }

    fn required_role(&self, role: GameRole) -> Result<RoleId, AppError> {
        self.handles()?
            .role(role)
            .ok_or(AppError::RoleNotFound(role))
    }
}

#[async_trait]
impl<P: ChatPlatform> BotAdapter for DiscordAdapter<P> {
    async fn async_init(&self) -> Result<(), AppError> {
        self.initialize().await
    }

    async fn send_message(
        &self,
        destination: Option<Destination>,
        text: &str,
    ) -> Result<Option<ChatMessage>, AppError> {
        let sent = match destination {
            None => return Ok(None),
            Some(Destination::Channel(channel_id)) => {
                self.platform.send_channel_message(channel_id, text).await?
            }
            Some(Destination::User(user_id)) => {
                self.platform.send_direct_message(user_id, text).await?
            }
        };

        Ok(Some(sent))
    }

    async fn get_user_destination(
        &self,
        user_id: UserId,
    ) -> Result<Option<GuildMember>, AppError> {
        self.platform.member(self.config.werewolf_server, user_id).await
    }

    async fn get_channel_destination(
        &self,
        channel_id: ChannelId,
    ) -> Result<Option<Destination>, AppError> {
        let exists = self.platform.channel_exists(channel_id).await?;

        Ok(exists.then_some(Destination::Channel(channel_id)))
    }

    async fn wait_for_message(
        &self,
        filter: MessageFilter,
    ) -> Result<Option<ChatMessage>, AppError> {
        Ok(self.platform.wait_for_message(filter).await)
    }

    async fn delete_message(&self, message: &ChatMessage) -> Result<(), AppError> {
        self.platform
            .delete_message(message.channel_id, message.id)
            .await
    }

    async fn add_role(&self, role: GameRole, user_id: UserId) -> Result<(), AppError> {
        let Some(member) = self.get_user_destination(user_id).await? else {
            tracing::debug!("Not granting {} role to {}: not a guild member", role, user_id);
            return Ok(());
        };

        let role_id = self.required_role(role)?;
        self.platform
            .add_member_role(self.config.werewolf_server, member.user_id, role_id)
            .await
    }

    async fn remove_role(&self, role: GameRole, user_id: UserId) -> Result<(), AppError> {
        let Some(member) = self.get_user_destination(user_id).await? else {
            tracing::debug!("Not revoking {} role from {}: not a guild member", role, user_id);
            return Ok(());
        };

        let role_id = self.required_role(role)?;
        self.platform
            .remove_member_role(self.config.werewolf_server, member.user_id, role_id)
            .await
    }

    async fn has_role(&self, role: GameRole, user_id: UserId) -> Result<bool, AppError> {
        let Some(member) = self.get_user_destination(user_id).await? else {
            return Ok(false);
        };

        let role_id = self.handles.get().and_then(|handles| handles.role(role));

        Ok(role_id.is_some_and(|role_id| member.has_role(role_id)))
    }

    async fn is_lobby_locked(&self) -> Result<bool, AppError> {
        let overwrite = self
            .platform
            .role_overwrite(self.config.game_channel, self.everyone_role())
            .await?;

        Ok(!overwrite.allows_send())
    }

    async fn lock_lobby(&self) -> Result<(), AppError> {
        let everyone = self.everyone_role();
        let overwrite = self
            .platform
            .role_overwrite(self.config.game_channel, everyone)
            .await?;

        self.platform
            .set_role_overwrite(self.config.game_channel, everyone, overwrite.with_send_denied())
            .await
    }

    async fn unlock_lobby(&self) -> Result<(), AppError> {
        let everyone = self.everyone_role();
        let overwrite = self
            .platform
            .role_overwrite(self.config.game_channel, everyone)
            .await?;

        self.platform
            .set_role_overwrite(self.config.game_channel, everyone, overwrite.with_send_allowed())
            .await
    }

    async fn log(&self, level: LogLevel, text: &str) {
        self.write_log(level, text).await;
    }

    async fn send_lobby(&self, text: &str) -> Option<ChatMessage> {
        self.send_lobby_with_retry(text).await
    }

    async fn set_lobby_status(&self, status: LobbyStatus) -> Result<(), AppError> {
        self.platform
            .set_presence(status.online_status(), &self.config.playing_message);
        Ok(())
    }

    async fn send_user(
        &self,
        user_id: UserId,
        text: &str,
        raise: bool,
    ) -> Result<Option<ChatMessage>, AppError> {
        let member = self.get_user_destination(user_id).await?;

        match self
            .send_message(member.as_ref().map(Destination::from), text)
            .await
        {
            Err(AppError::Forbidden(reason)) if !raise => {
                tracing::debug!("Could not message user {}: {}", user_id, reason);
                Ok(None)
            }
            result => result,
        }
    }

    async fn reply(
        &self,
        message: &ChatMessage,
        text: &str,
        options: ReplyOptions,
    ) -> Result<Option<ChatMessage>, AppError> {
        let mut text = if options.clean {
            escape_mentions(text)
        } else {
            text.to_string()
        };
        if options.mention_author {
            text = format!("{}, {}", message.author_mention(), text);
        }

        self.send_long_post(message.channel_id, &text).await
    }
}
