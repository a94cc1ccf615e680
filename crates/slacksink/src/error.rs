use thiserror::Error;

/// Failures raised by fail-fast sends. In the default best-effort mode
/// these never reach the caller.
#[derive(Error, Debug)]
pub enum IntegrationError {
    /// The webhook URL could not be parsed.
    #[error("invalid webhook URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Slack answered with a non-success status code.
    #[error("received invalid HTTP response from Slack API with status code {status}. Reason phrase: {reason}")]
    Response { status: u16, reason: String },

    /// The request never completed: DNS failure, refused connection,
    /// elapsed timeout or a payload serialization fault.
    #[error("error while posting to Slack webhook: {0}")]
    Transport(#[from] reqwest::Error),
}

impl IntegrationError {
    pub(crate) fn from_status(status: reqwest::StatusCode) -> Self {
        IntegrationError::Response {
            status: status.as_u16(),
            reason: status
                .canonical_reason()
                .unwrap_or("unknown")
                .to_string(),
        }
    }
}
