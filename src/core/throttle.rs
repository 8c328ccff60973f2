//! Request pacing and bounded retries.
//!
//! The stats API has no published rate limit but drops or stalls clients that
//! hammer it, so every network-calling component takes a [`RateLimiter`] and a
//! [`RetryPolicy`] instead of sleeping inline. Tests pass zero durations.

use std::future::Future;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{sleep, sleep_until, Instant};
use tracing::warn;

use crate::Result;

/// Minimum spacing between calls, plus a fixed pause for coarser throttling.
#[derive(Debug)]
pub struct RateLimiter {
    interval: Duration,
    last: Mutex<Option<Instant>>,
}

impl RateLimiter {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: Mutex::new(None),
        }
    }

    /// A limiter that never waits.
    pub fn disabled() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Wait until at least `interval` has passed since the previous acquire.
    pub async fn acquire(&self) {
        if self.interval.is_zero() {
            return;
        }
        let mut last = self.last.lock().await;
        if let Some(prev) = *last {
            let ready_at = prev + self.interval;
            if ready_at > Instant::now() {
                sleep_until(ready_at).await;
            }
        }
        *last = Some(Instant::now());
    }

    /// Sleep for one full interval regardless of history.
    pub async fn pause(&self) {
        if !self.interval.is_zero() {
            sleep(self.interval).await;
        }
    }
}

/// Bounded retry with a fixed delay between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts including the first; values below 1 behave as 1.
    pub max_attempts: u32,
    pub delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
        }
    }

    /// Single attempt, no retries.
    pub fn none() -> Self {
        Self::new(1, Duration::ZERO)
    }
}

/// Run `op`, retrying only errors that report [`crate::HeightsError::is_transient`].
///
/// Any other error, or the last transient one, is returned unchanged.
pub async fn retry_transient<T, F, Fut>(policy: &RetryPolicy, what: &str, mut op: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let attempts = policy.max_attempts.max(1);
    let mut attempt = 1;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if e.is_transient() && attempt < attempts => {
                warn!(
                    "Timeout on {}, retrying in {:?} ({}/{})",
                    what, policy.delay, attempt, attempts
                );
                sleep(policy.delay).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
