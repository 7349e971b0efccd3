// Runtime tunables for the submission flow

use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct FormConfig {
    /// Latency of the simulated backend call.
    pub submission_delay: Duration,
    /// How long a successful submission stays on screen before the form
    /// clears itself.
    pub reset_delay: Duration,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            submission_delay: Duration::from_millis(2000),
            reset_delay: Duration::from_millis(3000),
        }
    }
}

impl FormConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        // SUBMISSION_DELAY_MS - simulated network latency in milliseconds
        if let Ok(ms) = env::var("SUBMISSION_DELAY_MS") {
            if let Ok(val) = ms.parse::<u64>() {
                config.submission_delay = Duration::from_millis(val);
            }
        }

        // RESET_DELAY_MS - delay before the post-success form reset
        if let Ok(ms) = env::var("RESET_DELAY_MS") {
            if let Ok(val) = ms.parse::<u64>() {
                config.reset_delay = Duration::from_millis(val);
            }
        }

        config
    }
}
