//! Leading-edge throttling.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tokio::time::Instant;

/// Leading-edge throttle: at most one call per interval.
///
/// Calls inside the interval are dropped, not queued.
#[derive(Debug)]
pub struct Throttle {
    interval: Duration,
    last_run: Mutex<Option<Instant>>,
}

impl Throttle {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval: Duration::from_millis(interval_ms),
            last_run: Mutex::new(None),
        }
    }

    /// Run `f` if the interval since the last run has passed.
    ///
    /// Returns `Some` with the result when `f` ran.
    pub fn try_call<R>(&self, f: impl FnOnce() -> R) -> Option<R> {
        let now = Instant::now();
        {
            let mut last_run = self.last_run.lock().unwrap_or_else(PoisonError::into_inner);
            if matches!(*last_run, Some(at) if now.duration_since(at) < self.interval) {
                tracing::trace!("throttled call dropped");
                return None;
            }
            *last_run = Some(now);
        }
        Some(f())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_drops_calls_inside_interval() {
        let throttle = Throttle::new(100);
        assert_eq!(throttle.try_call(|| 1), Some(1));
        assert_eq!(throttle.try_call(|| 2), None);

        tokio::time::advance(Duration::from_millis(60)).await;
        assert_eq!(throttle.try_call(|| 3), None);

        tokio::time::advance(Duration::from_millis(40)).await;
        assert_eq!(throttle.try_call(|| 4), Some(4));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_calls_do_not_extend_interval() {
        let throttle = Throttle::new(100);
        throttle.try_call(|| ());
        tokio::time::advance(Duration::from_millis(90)).await;
        assert!(throttle.try_call(|| ()).is_none());
        tokio::time::advance(Duration::from_millis(10)).await;
        assert!(throttle.try_call(|| ()).is_some());
    }
}
