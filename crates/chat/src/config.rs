use std::env;
use std::time::Duration;

/// Session tuning. Defaults match the product's pacing: a short typing
/// window before the canned reply, a slightly longer one before the search
/// offer, both measured from the same submission.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub reply_delay: Duration,
    pub offer_delay: Duration,
    /// Seed the fixed welcome message when a session opens.
    pub greeting: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            reply_delay: Duration::from_millis(1500),
            offer_delay: Duration::from_millis(2000),
            greeting: true,
        }
    }
}

impl SessionConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            reply_delay: env_millis("JAMA_REPLY_DELAY_MS").unwrap_or(defaults.reply_delay),
            offer_delay: env_millis("JAMA_OFFER_DELAY_MS").unwrap_or(defaults.offer_delay),
            greeting: defaults.greeting,
        }
    }
}

fn env_millis(key: &str) -> Option<Duration> {
    env::var(key)
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .map(Duration::from_millis)
}
