//! Chunked sends and the lobby retry loop.

use serenity::all::ChannelId;

use crate::{
    adapter::{BotAdapter, DiscordAdapter},
    error::AppError,
    model::{log_level::LogLevel, message::ChatMessage},
    platform::ChatPlatform,
    util::message::{split_message, MAX_MESSAGE_LEN},
};

impl<P: ChatPlatform> DiscordAdapter<P> {
    /// Sends `text` to a channel in as many messages as the length limit requires.
    ///
    /// # Returns
    /// - `Ok(Some(message))` - The last chunk sent
    /// - `Ok(None)` - `text` was empty, nothing sent
    /// - `Err(AppError)` - A chunk failed; earlier chunks remain posted
    pub(super) async fn send_long_post(
        &self,
        channel_id: ChannelId,
        text: &str,
    ) -> Result<Option<ChatMessage>, AppError> {
        let mut last = None;

        for chunk in split_message(text, MAX_MESSAGE_LEN) {
            last = Some(self.platform.send_channel_message(channel_id, chunk).await?);
        }

        Ok(last)
    }

    /// Posts to the lobby, retrying each chunk on its own.
    ///
    /// Retrying per chunk keeps a late failure from reposting chunks that already
    /// went through.
    pub(super) async fn send_lobby_with_retry(&self, text: &str) -> Option<ChatMessage> {
        let mut last = None;

        for chunk in split_message(text, MAX_MESSAGE_LEN) {
            match self.send_lobby_chunk(chunk, text).await {
                Ok(message) => last = Some(message),
                Err(e) => {
                    self.log(
                        LogLevel::Error,
                        &format!(
                            "Unable to send message `{}` to lobby: ```py\n{}\n```",
                            text, e
                        ),
                    )
                    .await;
                    return None;
                }
            }
        }

        last
    }

    async fn send_lobby_chunk(&self, chunk: &str, text: &str) -> Result<ChatMessage, AppError> {
        let attempts = self.retry.attempts.max(1);
        let mut attempt = 1;

        loop {
            match self
                .platform
                .send_channel_message(self.config.game_channel, chunk)
                .await
            {
                Ok(message) => return Ok(message),
                Err(e) => {
                    self.log(
                        LogLevel::Error,
                        &format!(
                            "Error in sending message `{}` to lobby: ```py\n{}\n```",
                            text, e
                        ),
                    )
                    .await;

                    if attempt >= attempts {
                        return Err(e);
                    }
                    attempt += 1;
                    tokio::time::sleep(self.retry.delay).await;
                }
            }
        }
    }
}
