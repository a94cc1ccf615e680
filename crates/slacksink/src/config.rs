use std::time::Duration;

/// Per-client defaults.
///
/// Applied to any message that leaves the corresponding field unset; the
/// message-level value always wins. `fail_fast` defaults to `false`:
/// delivery is best-effort and failures never surface to the caller unless
/// explicitly requested.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    pub channel: Option<String>,
    pub username: Option<String>,
    pub icon_url: Option<String>,
    pub timeout: Option<Duration>,
    pub fail_fast: bool,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn icon_url(mut self, icon_url: impl Into<String>) -> Self {
        self.icon_url = Some(icon_url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_best_effort() {
        let cfg = ClientConfig::new();
        assert!(!cfg.fail_fast);
        assert!(cfg.channel.is_none());
        assert!(cfg.timeout.is_none());
    }

    #[test]
    fn builder_round_trip() {
        let cfg = ClientConfig::new()
            .channel("#monitoring")
            .username("warden")
            .timeout(Duration::from_secs(10))
            .fail_fast(true);
        assert_eq!(cfg.channel.as_deref(), Some("#monitoring"));
        assert_eq!(cfg.username.as_deref(), Some("warden"));
        assert_eq!(cfg.timeout, Some(Duration::from_secs(10)));
        assert!(cfg.fail_fast);
    }
}
