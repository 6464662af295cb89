//! Retrying fallible async operations with backoff.

use serde::Deserialize;
use std::fmt;
use std::future::Future;
use std::time::Duration;

/// How the wait between attempts grows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backoff {
    /// Always wait `delay_ms`.
    #[default]
    Fixed,
    /// Wait `delay_ms * n` after the n-th failure.
    Linear,
}

/// Retry policy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RetryOptions {
    /// Total number of attempts, including the first. Zero is treated as one.
    pub times: u32,
    pub delay_ms: u64,
    pub backoff: Backoff,
}

impl Default for RetryOptions {
    fn default() -> Self {
        Self {
            times: 3,
            delay_ms: 1000,
            backoff: Backoff::Fixed,
        }
    }
}

impl RetryOptions {
    /// Wait after the `failures`-th failed attempt (1-based).
    pub fn wait_after(&self, failures: u32) -> Duration {
        let ms = match self.backoff {
            Backoff::Fixed => self.delay_ms,
            Backoff::Linear => self.delay_ms.saturating_mul(u64::from(failures)),
        };
        Duration::from_millis(ms)
    }
}

/// Run `operation` until it succeeds or the attempts run out.
///
/// Each failure is logged at debug level and followed by the configured
/// wait, except the last one, whose error is returned as is.
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
/// use utilkit_async::{retry, RetryOptions};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let calls = Cell::new(0);
/// let options = RetryOptions { times: 3, delay_ms: 1, ..Default::default() };
/// let result = retry(
///     || {
///         calls.set(calls.get() + 1);
///         let n = calls.get();
///         async move { if n < 3 { Err(format!("attempt {n}")) } else { Ok(n) } }
///     },
///     &options,
/// )
/// .await;
/// assert_eq!(result, Ok(3));
/// # }
/// ```
pub async fn retry<T, E, F, Fut>(mut operation: F, options: &RetryOptions) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: fmt::Display,
{
    let attempts = options.times.max(1);
    let mut attempt = 1;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) if attempt >= attempts => {
                tracing::warn!(attempts, error = %err, "retries exhausted");
                return Err(err);
            }
            Err(err) => {
                let wait = options.wait_after(attempt);
                tracing::debug!(attempt, attempts, wait_ms = wait.as_millis() as u64, error = %err, "attempt failed, retrying");
                tokio::time::sleep(wait).await;
                attempt += 1;
            }
        }
    }
}
