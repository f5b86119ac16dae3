use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;

use super::NotificationSink;

/// Telegram bot-API sink: one `sendMessage` POST per alert.
pub struct TelegramNotifier {
    http: Client,
    bot_token: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(bot_token: String, chat_id: String) -> Self {
        Self {
            http: Client::new(),
            bot_token,
            chat_id,
        }
    }

    // The token is part of the URL; keep it out of logs and error messages.
    fn send_url(&self) -> String {
        format!("https://api.telegram.org/bot{}/sendMessage", self.bot_token)
    }
}

#[async_trait]
impl NotificationSink for TelegramNotifier {
    fn name(&self) -> &'static str {
        "telegram"
    }

    async fn send(&self, title: &str, message: &str) -> Result<()> {
        let text = format!("{title}\n{message}");

        let resp = self
            .http
            .post(self.send_url())
            .form(&[("chat_id", self.chat_id.as_str()), ("text", text.as_str())])
            .send()
            .await
            .context("Telegram sendMessage request failed")?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("Telegram API non-2xx: {status} body={body}");
        }

        Ok(())
    }
}
