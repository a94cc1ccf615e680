//! Best-effort notifier for Slack incoming webhooks.
//!
//! A [`SlackClient`] wraps one webhook URL and exposes two operations:
//! [`SlackClient::send`] for plain text and [`SlackClient::send_colored`]
//! for a status-colored attachment ("good" / "danger"). Each call is a
//! single HTTP POST with no retries; by default failures are swallowed so
//! notifying can never crash the caller, and `fail_fast` opts into
//! surfacing them as [`IntegrationError`].
//!
//! ```no_run
//! use slacksink::{Message, SlackClient};
//!
//! # async fn demo() -> Result<(), slacksink::IntegrationError> {
//! let client = SlackClient::new("https://hooks.slack.com/services/T000/B000/XXXX")?;
//! client.send(&Message::new("deploy finished").channel("#ops")).await?;
//! client.send_colored(&Message::new("health check failed").fail_fast(true), false).await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod message;

pub use client::SlackClient;
pub use config::ClientConfig;
pub use error::IntegrationError;
pub use message::Message;
