//! In-memory platform recording every call, for adapter tests.

use std::{
    collections::{HashMap, VecDeque},
    sync::Mutex,
};

use ::serenity::all::{ChannelId, GuildId, MessageId, OnlineStatus, RoleId, UserId};
use ::serenity::async_trait;

use crate::{
    error::AppError,
    model::{
        channel::RoleOverwrite,
        destination::Destination,
        member::GuildMember,
        message::ChatMessage,
        role::GuildRole,
    },
    platform::{ChatPlatform, MessageFilter},
};

/// User ID the mock bot sends messages as.
pub const BOT_USER_ID: u64 = 999;

#[derive(Default)]
pub struct MockState {
    pub bot_name: String,
    pub roles: Vec<GuildRole>,
    pub members: Vec<GuildMember>,
    pub channels: Vec<ChannelId>,
    pub overwrites: HashMap<(ChannelId, RoleId), RoleOverwrite>,
    /// Successful sends in order.
    pub sent: Vec<(Destination, String)>,
    /// Number of upcoming sends that fail, per channel.
    pub failing_sends: HashMap<ChannelId, usize>,
    /// Users whose direct messages are rejected with 403.
    pub blocked_dms: Vec<UserId>,
    pub role_grants: Vec<(UserId, RoleId)>,
    pub role_revokes: Vec<(UserId, RoleId)>,
    pub deleted: Vec<(ChannelId, MessageId)>,
    pub presence: Option<(OnlineStatus, String)>,
    /// Messages handed out by `wait_for_message`, oldest first.
    pub incoming: VecDeque<ChatMessage>,
    next_message_id: u64,
}

#[derive(Default)]
pub struct MockPlatform {
    pub state: Mutex<MockState>,
}

impl MockPlatform {
    pub fn new(bot_name: &str) -> Self {
        let platform = Self::default();
        platform.with_state(|state| state.bot_name = bot_name.to_string());
        platform
    }

    /// Runs `f` with the state locked.
    pub fn with_state<T>(&self, f: impl FnOnce(&mut MockState) -> T) -> T {
        let mut state = self.state.lock().unwrap();
        f(&mut state)
    }

    pub fn add_role(&self, id: u64, name: &str, position: u16) {
        self.with_state(|state| {
            state.roles.push(GuildRole {
                id: RoleId::new(id),
                name: name.to_string(),
                position,
            })
        });
    }

    pub fn add_member(&self, user_id: u64, name: &str, roles: &[u64]) {
        self.with_state(|state| {
            state.members.push(GuildMember {
                user_id: UserId::new(user_id),
                display_name: name.to_string(),
                roles: roles.iter().copied().map(RoleId::new).collect(),
            })
        });
    }

    /// Makes the next `count` sends to `channel_id` fail.
    pub fn fail_sends(&self, channel_id: ChannelId, count: usize) {
        self.with_state(|state| {
            state.failing_sends.insert(channel_id, count);
        });
    }

    pub fn set_overwrite(&self, channel_id: ChannelId, role_id: RoleId, overwrite: RoleOverwrite) {
        self.with_state(|state| {
            state.overwrites.insert((channel_id, role_id), overwrite);
        });
    }

    pub fn overwrite(&self, channel_id: ChannelId, role_id: RoleId) -> RoleOverwrite {
        self.with_state(|state| {
            state
                .overwrites
                .get(&(channel_id, role_id))
                .copied()
                .unwrap_or_default()
        })
    }

    /// Contents of every successful send to `destination`.
    pub fn sent_to(&self, destination: Destination) -> Vec<String> {
        self.with_state(|state| {
            state
                .sent
                .iter()
                .filter(|(dest, _)| *dest == destination)
                .map(|(_, content)| content.clone())
                .collect()
        })
    }

    fn record_send(
        state: &mut MockState,
        destination: Destination,
        channel_id: ChannelId,
        content: &str,
    ) -> ChatMessage {
        state.next_message_id += 1;
        state.sent.push((destination, content.to_string()));

        ChatMessage {
            id: MessageId::new(state.next_message_id),
            channel_id,
            author_id: UserId::new(BOT_USER_ID),
            content: content.to_string(),
        }
    }
}

#[async_trait]
impl ChatPlatform for MockPlatform {
    async fn bot_name(&self) -> Result<String, AppError> {
        Ok(self.with_state(|state| state.bot_name.clone()))
    }

    async fn guild_roles(&self, _guild_id: GuildId) -> Result<Vec<GuildRole>, AppError> {
        Ok(self.with_state(|state| state.roles.clone()))
    }

    async fn guild_members(&self, _guild_id: GuildId) -> Result<Vec<GuildMember>, AppError> {
        Ok(self.with_state(|state| state.members.clone()))
    }

    async fn member(
        &self,
        _guild_id: GuildId,
        user_id: UserId,
    ) -> Result<Option<GuildMember>, AppError> {
        Ok(self.with_state(|state| {
            state.members.iter().find(|m| m.user_id == user_id).cloned()
        }))
    }

    async fn channel_exists(&self, channel_id: ChannelId) -> Result<bool, AppError> {
        Ok(self.with_state(|state| state.channels.contains(&channel_id)))
    }

    async fn add_member_role(
        &self,
        _guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), AppError> {
        self.with_state(|state| {
            state.role_grants.push((user_id, role_id));
            if let Some(member) = state.members.iter_mut().find(|m| m.user_id == user_id) {
                if !member.roles.contains(&role_id) {
                    member.roles.push(role_id);
                }
            }
        });
        Ok(())
    }

    async fn remove_member_role(
        &self,
        _guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), AppError> {
        self.with_state(|state| {
            state.role_revokes.push((user_id, role_id));
            if let Some(member) = state.members.iter_mut().find(|m| m.user_id == user_id) {
                member.roles.retain(|r| *r != role_id);
            }
        });
        Ok(())
    }

    async fn role_overwrite(
        &self,
        channel_id: ChannelId,
        role_id: RoleId,
    ) -> Result<RoleOverwrite, AppError> {
        Ok(self.overwrite(channel_id, role_id))
    }

    async fn set_role_overwrite(
        &self,
        channel_id: ChannelId,
        role_id: RoleId,
        overwrite: RoleOverwrite,
    ) -> Result<(), AppError> {
        self.set_overwrite(channel_id, role_id, overwrite);
        Ok(())
    }

    async fn send_channel_message(
        &self,
        channel_id: ChannelId,
        content: &str,
    ) -> Result<ChatMessage, AppError> {
        self.with_state(|state| {
            if let Some(remaining) = state.failing_sends.get_mut(&channel_id) {
                if *remaining > 0 {
                    *remaining -= 1;
                    return Err(AppError::Forbidden("Missing Access".to_string()));
                }
            }
            Ok(Self::record_send(
                state,
                Destination::Channel(channel_id),
                channel_id,
                content,
            ))
        })
    }

    async fn send_direct_message(
        &self,
        user_id: UserId,
        content: &str,
    ) -> Result<ChatMessage, AppError> {
        self.with_state(|state| {
            if state.blocked_dms.contains(&user_id) {
                return Err(AppError::Forbidden(
                    "Cannot send messages to this user".to_string(),
                ));
            }
            let dm_channel = ChannelId::new(user_id.get());
            Ok(Self::record_send(
                state,
                Destination::User(user_id),
                dm_channel,
                content,
            ))
        })
    }

    async fn delete_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<(), AppError> {
        self.with_state(|state| state.deleted.push((channel_id, message_id)));
        Ok(())
    }

    async fn wait_for_message(&self, filter: MessageFilter) -> Option<ChatMessage> {
        self.with_state(|state| {
            let position = state.incoming.iter().position(|m| filter.matches(m))?;
            state.incoming.remove(position)
        })
    }

    fn set_presence(&self, status: OnlineStatus, activity: &str) {
        self.with_state(|state| state.presence = Some((status, activity.to_string())));
    }
}
