//! Serenity-backed implementation of [`ChatPlatform`].

use ::serenity::{
    all::{
        ActivityData, ChannelId, Context, CreateMessage, GuildId, Message, MessageId,
        OnlineStatus, PermissionOverwrite, PermissionOverwriteType, Ready, RoleId, UserId,
    },
    async_trait,
    collector::MessageCollector,
};

use crate::{
    error::{status_code, AppError},
    model::{
        channel::RoleOverwrite,
        member::GuildMember,
        message::ChatMessage,
        role::GuildRole,
    },
    platform::{ChatPlatform, MessageFilter},
};

/// Discord caps guild member listing at 1000 per request.
const MEMBER_PAGE_SIZE: u64 = 1000;

/// Forwards platform calls to Discord through the gateway context the bot is
/// connected on.
pub struct SerenityPlatform {
    ctx: Context,
    bot_name: String,
}

impl SerenityPlatform {
    /// Creates the platform from the gateway context of a `ready` event.
    ///
    /// # Arguments
    /// - `ctx` - Gateway context supplying the HTTP client and shard messenger
    /// - `ready` - Ready payload carrying the bot user
    pub fn new(ctx: Context, ready: &Ready) -> Self {
        let bot_name = ready
            .user
            .global_name
            .clone()
            .unwrap_or_else(|| ready.user.name.clone());

        Self { ctx, bot_name }
    }
}

#[async_trait]
impl ChatPlatform for SerenityPlatform {
    async fn bot_name(&self) -> Result<String, AppError> {
        Ok(self.bot_name.clone())
    }

    async fn guild_roles(&self, guild_id: GuildId) -> Result<Vec<GuildRole>, AppError> {
        let roles = self.ctx.http.get_guild_roles(guild_id).await?;

        Ok(roles.iter().map(GuildRole::from).collect())
    }

    async fn guild_members(&self, guild_id: GuildId) -> Result<Vec<GuildMember>, AppError> {
        let mut members = Vec::new();
        let mut after = None;

        loop {
            let page = self
                .ctx
                .http
                .get_guild_members(guild_id, Some(MEMBER_PAGE_SIZE), after)
                .await?;
            let page_len = page.len() as u64;

            after = page.last().map(|m| m.user.id.get());
            members.extend(page.iter().map(GuildMember::from));

            if page_len < MEMBER_PAGE_SIZE || after.is_none() {
                break;
            }
        }

        tracing::debug!("Fetched {} members for guild {}", members.len(), guild_id);

        Ok(members)
    }

    async fn member(
        &self,
        guild_id: GuildId,
        user_id: UserId,
    ) -> Result<Option<GuildMember>, AppError> {
        match self.ctx.http.get_member(guild_id, user_id).await {
            Ok(member) => Ok(Some(GuildMember::from(&member))),
            Err(e) if status_code(&e) == Some(404) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn channel_exists(&self, channel_id: ChannelId) -> Result<bool, AppError> {
        match self.ctx.http.get_channel(channel_id).await {
            Ok(_) => Ok(true),
            Err(e) if status_code(&e) == Some(404) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn add_member_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), AppError> {
        self.ctx
            .http
            .add_member_role(guild_id, user_id, role_id, None)
            .await?;
        Ok(())
    }

    async fn remove_member_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), AppError> {
        self.ctx
            .http
            .remove_member_role(guild_id, user_id, role_id, None)
            .await?;
        Ok(())
    }

    async fn role_overwrite(
        &self,
        channel_id: ChannelId,
        role_id: RoleId,
    ) -> Result<RoleOverwrite, AppError> {
        let channel = self.ctx.http.get_channel(channel_id).await?;
        let Some(guild_channel) = channel.guild() else {
            return Err(AppError::ChannelNotFound(channel_id));
        };

        let overwrite = guild_channel
            .permission_overwrites
            .iter()
            .find(|o| matches!(o.kind, PermissionOverwriteType::Role(id) if id == role_id))
            .map(|o| RoleOverwrite {
                allow: o.allow,
                deny: o.deny,
            })
            .unwrap_or_default();

        Ok(overwrite)
    }

    async fn set_role_overwrite(
        &self,
        channel_id: ChannelId,
        role_id: RoleId,
        overwrite: RoleOverwrite,
    ) -> Result<(), AppError> {
        let target = PermissionOverwrite {
            allow: overwrite.allow,
            deny: overwrite.deny,
            kind: PermissionOverwriteType::Role(role_id),
        };

        channel_id.create_permission(&self.ctx.http, target).await?;
        Ok(())
    }

    async fn send_channel_message(
        &self,
        channel_id: ChannelId,
        content: &str,
    ) -> Result<ChatMessage, AppError> {
        let message = CreateMessage::new().content(content);
        let sent = channel_id.send_message(&self.ctx.http, message).await?;

        Ok(ChatMessage::from(&sent))
    }

    async fn send_direct_message(
        &self,
        user_id: UserId,
        content: &str,
    ) -> Result<ChatMessage, AppError> {
        let message = CreateMessage::new().content(content);
        let sent = user_id.direct_message(&self.ctx.http, message).await?;

        Ok(ChatMessage::from(&sent))
    }

    async fn delete_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<(), AppError> {
        channel_id.delete_message(&self.ctx.http, message_id).await?;
        Ok(())
    }

    async fn wait_for_message(&self, filter: MessageFilter) -> Option<ChatMessage> {
        let mut collector = MessageCollector::new(&self.ctx);

        if let Some(author) = filter.author {
            collector = collector.author_id(author);
        }
        if let Some(channel) = filter.channel {
            collector = collector.channel_id(channel);
        }
        if let Some(timeout) = filter.timeout {
            collector = collector.timeout(timeout);
        }
        if let Some(check) = filter.check {
            collector =
                collector.filter(move |message: &Message| check(&ChatMessage::from(message)));
        }

        collector.next().await.map(|message| ChatMessage::from(&message))
    }

    fn set_presence(&self, status: OnlineStatus, activity: &str) {
        self.ctx
            .set_presence(Some(ActivityData::playing(activity)), status);
    }
}
