//! Retry policy for read requests.

use std::time::Duration;

use crate::FetchError;

/// Wait between a failed attempt and the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backoff {
    /// Retry immediately.
    None,
    /// Double the wait each retry, starting at `base`, never above `max`.
    Exponential { base: Duration, max: Duration },
}

impl Backoff {
    /// Wait before retry number `retry` (0 for the first retry).
    pub fn delay(&self, retry: u32) -> Duration {
        match *self {
            Backoff::None => Duration::ZERO,
            Backoff::Exponential { base, max } => {
                base.saturating_mul(2u32.saturating_pow(retry)).min(max)
            }
        }
    }
}

impl Default for Backoff {
    fn default() -> Self {
        Backoff::Exponential {
            base: Duration::from_millis(100),
            max: Duration::from_secs(2),
        }
    }
}

/// How often, and after which failures, a read is sent again.
///
/// Transient failures are retried: 5xx statuses, timeouts and refused
/// connections. Anything else, 4xx included, is final.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt.
    pub max_retries: u32,
    /// Wait between attempts.
    pub backoff: Backoff,
}

impl RetryPolicy {
    /// Allow up to `max_retries` retries with the default backoff.
    pub fn new(max_retries: u32) -> Self {
        Self {
            max_retries,
            backoff: Backoff::default(),
        }
    }

    /// Replace the backoff.
    pub fn with_backoff(mut self, backoff: Backoff) -> Self {
        self.backoff = backoff;
        self
    }

    /// Whether a response with `status` on retry number `retry` is retried.
    pub fn should_retry_status(&self, status: u16, retry: u32) -> bool {
        retry < self.max_retries && (500..600).contains(&status)
    }

    /// Whether a transport error on retry number `retry` is retried.
    pub fn should_retry_error(&self, error: &FetchError, retry: u32) -> bool {
        retry < self.max_retries
            && matches!(error, FetchError::Timeout(_) | FetchError::Connection(_))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(1)
    }
}
