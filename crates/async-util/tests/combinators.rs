use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use utilkit_async::{delay, parallel_limit, retry, with_timeout, AsyncError, Backoff, RetryOptions};

#[tokio::test(start_paused = true)]
async fn retry_recovers_from_timeouts() {
    let calls = Arc::new(AtomicU32::new(0));
    let options = RetryOptions {
        times: 3,
        delay_ms: 50,
        backoff: Backoff::Linear,
    };

    let result = retry(
        || {
            let calls = Arc::clone(&calls);
            async move {
                let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
                // The first attempt hangs past the deadline.
                let work = async move {
                    if n == 1 {
                        delay(1_000).await;
                    }
                    n
                };
                with_timeout(work, 100).await
            }
        },
        &options,
    )
    .await;

    assert_eq!(result, Ok(2));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test(start_paused = true)]
async fn retry_surfaces_timeout_after_exhausting_attempts() {
    let options = RetryOptions {
        times: 2,
        delay_ms: 10,
        backoff: Backoff::Fixed,
    };
    let result = retry(|| with_timeout(delay(500), 20), &options).await;
    assert_eq!(result, Err(AsyncError::Timeout(20)));
}

#[tokio::test(start_paused = true)]
async fn bounded_batch_of_timed_jobs() {
    let jobs = (1..=4u64).map(|n| async move {
        with_timeout(delay(n * 40), 100)
            .await
            .map(|_| n)
    });
    let results = parallel_limit(jobs, 2).await;
    assert_eq!(
        results,
        vec![Ok(1), Ok(2), Err(AsyncError::Timeout(100)), Err(AsyncError::Timeout(100))]
    );
}

#[tokio::test(start_paused = true)]
async fn delay_is_observable_through_timeout() {
    let start = tokio::time::Instant::now();
    assert!(with_timeout(delay(30), 100).await.is_ok());
    assert!(start.elapsed() >= Duration::from_millis(30));
}
