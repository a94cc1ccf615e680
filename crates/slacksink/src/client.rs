use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::Url;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::IntegrationError;
use crate::message::{status_color, Attachment, AttachmentField, ColoredPayload, Message, PlainPayload};

/// Client for a single Slack incoming-webhook endpoint.
///
/// The endpoint URL is validated at construction and never changes. One
/// `reqwest::Client` is shared across calls; timeouts are per-request
/// deadlines, so concurrent sends with different timeouts do not interfere
/// with each other.
///
/// Delivery is best-effort by default: with `fail_fast` unset, `send` and
/// `send_colored` return `Ok(())` whatever the transport outcome, and the
/// failure is only recorded at `warn` level. Opt into `fail_fast` to have
/// failures returned as [`IntegrationError`].
pub struct SlackClient {
    webhook_url: Url,
    http: reqwest::Client,
    config: ClientConfig,
}

impl SlackClient {
    /// Creates a client with no per-client defaults.
    pub fn new(webhook_url: &str) -> Result<Self, IntegrationError> {
        Self::with_config(webhook_url, ClientConfig::default())
    }

    /// Creates a client with per-client defaults for channel, username,
    /// icon, timeout and fail-fast behavior.
    pub fn with_config(webhook_url: &str, config: ClientConfig) -> Result<Self, IntegrationError> {
        let webhook_url = Url::parse(webhook_url)?;
        Ok(Self {
            webhook_url,
            http: reqwest::Client::new(),
            config,
        })
    }

    /// Posts a plain text message.
    pub async fn send(&self, message: &Message) -> Result<(), IntegrationError> {
        let payload = PlainPayload {
            icon_url: self.effective(&message.icon_url, &self.config.icon_url),
            text: &message.text,
            channel: self.effective(&message.channel, &self.config.channel),
            username: self.effective(&message.username, &self.config.username),
        };
        self.deliver(&payload, message).await
    }

    /// Posts the message as a colorized status attachment: `valid` selects
    /// the green "good" color, otherwise the red "danger" color.
    pub async fn send_colored(&self, message: &Message, valid: bool) -> Result<(), IntegrationError> {
        let payload = ColoredPayload {
            icon_url: self.effective(&message.icon_url, &self.config.icon_url),
            channel: self.effective(&message.channel, &self.config.channel),
            username: self.effective(&message.username, &self.config.username),
            attachments: [Attachment {
                fallback: &message.text,
                color: status_color(valid),
                fields: [AttachmentField {
                    value: &message.text,
                }],
            }],
        };
        self.deliver(&payload, message).await
    }

    async fn deliver<T: Serialize>(&self, payload: &T, message: &Message) -> Result<(), IntegrationError> {
        let fail_fast = message.fail_fast.unwrap_or(self.config.fail_fast);
        match self.dispatch(payload, message).await {
            Ok(()) => {
                debug!(url = %self.webhook_url, "Slack notification delivered");
                Ok(())
            }
            Err(err) if fail_fast => Err(err),
            Err(err) => {
                warn!(url = %self.webhook_url, error = %err, "dropping failed Slack notification");
                Ok(())
            }
        }
    }

    async fn dispatch<T: Serialize>(&self, payload: &T, message: &Message) -> Result<(), IntegrationError> {
        let mut request = self
            .http
            .post(self.webhook_url.clone())
            .header(CONTENT_TYPE, "application/json; charset=utf-8")
            .json(payload);

        if let Some(deadline) = self.effective_timeout(message) {
            request = request.timeout(deadline);
        }

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(IntegrationError::from_status(status))
        }
    }

    fn effective<'a>(&self, field: &'a Option<String>, default: &'a Option<String>) -> Option<&'a str> {
        field.as_deref().or(default.as_deref())
    }

    /// Message timeout wins over the client default; zero counts as unset.
    fn effective_timeout(&self, message: &Message) -> Option<Duration> {
        message
            .timeout
            .or(self.config.timeout)
            .filter(|t| !t.is_zero())
    }
}
