use std::time::Duration;

use serde::Serialize;

/// Outbound message options.
///
/// Only `text` is required; every other field is independently optional and
/// falls back to the client-level default when unset. `fail_fast` left unset
/// means "use the client default" (which itself defaults to best-effort).
#[derive(Debug, Clone, Default)]
pub struct Message {
    pub text: String,
    pub channel: Option<String>,
    pub username: Option<String>,
    pub icon_url: Option<String>,
    pub timeout: Option<Duration>,
    pub fail_fast: Option<bool>,
}

impl Message {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Channel to post into (e.g. `#alerts`), overriding the webhook default.
    pub fn channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    /// Username shown as the sender.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Icon URL used as the sender avatar.
    pub fn icon_url(mut self, icon_url: impl Into<String>) -> Self {
        self.icon_url = Some(icon_url.into());
        self
    }

    /// Deadline for this request. A zero duration is ignored.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Surface delivery failures to the caller instead of swallowing them.
    pub fn fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = Some(fail_fast);
        self
    }
}

// Wire shapes. Unset optional fields go out as explicit `null`, never
// omitted, so no skip_serializing_if here.

#[derive(Debug, Serialize)]
pub(crate) struct PlainPayload<'a> {
    pub icon_url: Option<&'a str>,
    pub text: &'a str,
    pub channel: Option<&'a str>,
    pub username: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ColoredPayload<'a> {
    pub icon_url: Option<&'a str>,
    pub channel: Option<&'a str>,
    pub username: Option<&'a str>,
    pub attachments: [Attachment<'a>; 1],
}

#[derive(Debug, Serialize)]
pub(crate) struct Attachment<'a> {
    pub fallback: &'a str,
    pub color: &'static str,
    pub fields: [AttachmentField<'a>; 1],
}

#[derive(Debug, Serialize)]
pub(crate) struct AttachmentField<'a> {
    pub value: &'a str,
}

pub(crate) fn status_color(valid: bool) -> &'static str {
    if valid {
        "good"
    } else {
        "danger"
    }
}
