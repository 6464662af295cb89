//! Sleeping and deadlines.

use crate::error::AsyncError;
use std::future::Future;
use std::time::Duration;

/// Sleep for `ms` milliseconds.
pub async fn delay(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

/// Race `fut` against a timer.
///
/// Returns the future's output when it finishes first, or
/// [`AsyncError::Timeout`] once `ms` milliseconds have passed. The losing
/// future is dropped; no other cancellation happens.
///
/// # Examples
///
/// ```
/// use utilkit_async::{delay, with_timeout, AsyncError};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// assert_eq!(with_timeout(async { 7 }, 100).await, Ok(7));
/// assert_eq!(with_timeout(delay(1_000), 10).await, Err(AsyncError::Timeout(10)));
/// # }
/// ```
pub async fn with_timeout<F>(fut: F, ms: u64) -> Result<F::Output, AsyncError>
where
    F: Future,
{
    tokio::select! {
        biased;
        out = fut => Ok(out),
        _ = tokio::time::sleep(Duration::from_millis(ms)) => {
            tracing::debug!(timeout_ms = ms, "operation timed out");
            Err(AsyncError::Timeout(ms))
        }
    }
}
