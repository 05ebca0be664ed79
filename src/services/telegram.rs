//! Telegram Bot API notifier.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::NotifyError;
use crate::services::notifier::Notifier;

pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Posts messages to a chat or channel through `sendMessage`.
pub struct TelegramNotifier {
    api_url: String,
    bot_token: String,
    chat_id: String,
    client: reqwest::Client,
}

impl TelegramNotifier {
    pub fn new(
        api_url: impl Into<String>,
        bot_token: impl Into<String>,
        chat_id: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(api_url, bot_token, chat_id, client))
    }

    pub fn with_client(
        api_url: impl Into<String>,
        bot_token: impl Into<String>,
        chat_id: impl Into<String>,
        client: reqwest::Client,
    ) -> Self {
        Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            bot_token: bot_token.into(),
            chat_id: chat_id.into(),
            client,
        }
    }

    fn send_message_url(&self) -> String {
        format!("{}/bot{}/sendMessage", self.api_url, self.bot_token)
    }
}

#[async_trait::async_trait]
impl Notifier for TelegramNotifier {
    // The token is part of the URL, keep it out of spans.
    #[instrument(skip_all, name = "telegram::send_message", fields(chat_id = %self.chat_id))]
    async fn send(&self, message: &str) -> Result<(), NotifyError> {
        let request = SendMessageRequest {
            chat_id: &self.chat_id,
            text: message,
        };

        let response = self
            .client
            .post(self.send_message_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| NotifyError::Request(e.without_url()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| NotifyError::Request(e.without_url()))?;

        if !status.is_success() {
            return Err(NotifyError::Status {
                status: status.as_u16(),
                body,
            });
        }

        // A 2xx without a parsable envelope still counts as delivered.
        if let Ok(api) = serde_json::from_str::<ApiResponse>(&body) {
            if !api.ok {
                return Err(NotifyError::Rejected(
                    api.description.unwrap_or_else(|| "ok=false".to_string()),
                ));
            }
        }

        debug!("message delivered");
        Ok(())
    }
}
