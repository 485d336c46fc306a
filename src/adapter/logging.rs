//! Game log sink: a text file plus the debug channel.

use chrono::Local;
use tokio::{fs::OpenOptions, io::AsyncWriteExt};

use crate::{
    adapter::DiscordAdapter,
    error::AppError,
    model::log_level::LogLevel,
    platform::ChatPlatform,
    util::message::{split_log_message, LOG_MESSAGE_MARGIN, MAX_MESSAGE_LEN},
};

impl<P: ChatPlatform> DiscordAdapter<P> {
    pub(super) async fn write_log(&self, level: LogLevel, text: &str) {
        match level {
            LogLevel::Debug => tracing::debug!("{}", text),
            LogLevel::Info => tracing::info!("{}", text),
            LogLevel::Warning => tracing::warn!("{}", text),
            LogLevel::Error => tracing::error!("{}", text),
        }

        let entry = format!("{}{}", level.prefix(self.config.owner_id), text);

        if let Err(e) = self.append_log_file(&entry).await {
            tracing::error!(
                "Failed to write log file {}: {}",
                self.config.log_file.display(),
                e
            );
        }

        if level >= self.config.min_log_level {
            self.send_log(&entry).await;
        }
    }

    async fn append_log_file(&self, entry: &str) -> Result<(), AppError> {
        let line = format!(
            "[{}] {}\n",
            Local::now().format("%Y-%m-%d %H:%M:%S%.6f"),
            entry
        );

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.config.log_file)
            .await?;
        file.write_all(line.as_bytes()).await?;

        Ok(())
    }

    /// Mirrors an entry to the debug channel, stopping at the first failed chunk.
    ///
    /// Failures are not logged through the adapter to avoid looping back here.
    async fn send_log(&self, entry: &str) {
        for chunk in split_log_message(entry, MAX_MESSAGE_LEN - LOG_MESSAGE_MARGIN) {
            if let Err(e) = self
                .platform
                .send_channel_message(self.config.debug_channel, &chunk)
                .await
            {
                tracing::error!("Failed to send log to debug channel: {}", e);
                return;
            }
        }
    }
}
