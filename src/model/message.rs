//! Chat message domain model.

use serenity::all::{ChannelId, Message, MessageId, UserId};

/// A message seen or sent by the bot.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: MessageId,
    pub channel_id: ChannelId,
    pub author_id: UserId,
    pub content: String,
}

impl ChatMessage {
    /// Mention string for the message author.
    pub fn author_mention(&self) -> String {
        format!("<@{}>", self.author_id)
    }
}

impl From<&Message> for ChatMessage {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id,
            channel_id: message.channel_id,
            author_id: message.author.id,
            content: message.content.clone(),
        }
    }
}
