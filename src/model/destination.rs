use serenity::all::{ChannelId, UserId};

use crate::model::member::GuildMember;

/// Where a message should go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// A guild channel.
    Channel(ChannelId),
    /// A direct message to a user.
    User(UserId),
}

impl From<&GuildMember> for Destination {
    fn from(member: &GuildMember) -> Self {
        Destination::User(member.user_id)
    }
}
