//! Retry policy for submissions

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Bounded retry: at most `max_attempts` POSTs, with `delay_ms` between them.
///
/// Each attempt after the first is preceded by one repair prompt, so
/// `max_attempts = 2` means one fix and two submissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    #[serde(default)]
    pub delay_ms: u64,
}

fn default_max_attempts() -> u32 {
    2
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            delay_ms: 0,
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, delay_ms: u64) -> Self {
        Self {
            max_attempts,
            delay_ms,
        }
    }

    /// Submit once, never repair
    pub fn no_retry() -> Self {
        Self::new(1, 0)
    }

    /// Attempts actually made; a zero setting still submits once
    pub fn effective_attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Whether another attempt may follow attempt number `attempt` (1-based)
    pub fn allows_another(&self, attempt: u32) -> bool {
        attempt < self.effective_attempts()
    }

    pub fn delay(&self) -> Option<Duration> {
        (self.delay_ms > 0).then(|| Duration::from_millis(self.delay_ms))
    }
}
