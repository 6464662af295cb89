//! Running groups of futures.

use futures_util::stream::{self, StreamExt};
use std::future::Future;

/// Run futures with at most `limit` in flight, collecting outputs in input
/// order. A `limit` of zero is treated as one.
///
/// # Examples
///
/// ```
/// use utilkit_async::parallel_limit;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let jobs = (1..=5).map(|n| async move { n * 10 });
/// assert_eq!(parallel_limit(jobs, 2).await, vec![10, 20, 30, 40, 50]);
/// # }
/// ```
pub async fn parallel_limit<I, Fut>(tasks: I, limit: usize) -> Vec<Fut::Output>
where
    I: IntoIterator<Item = Fut>,
    Fut: Future,
{
    stream::iter(tasks).buffered(limit.max(1)).collect().await
}

/// Run futures one after another, collecting outputs in order.
pub async fn sequential<I, Fut>(tasks: I) -> Vec<Fut::Output>
where
    I: IntoIterator<Item = Fut>,
    Fut: Future,
{
    let mut out = Vec::new();
    for task in tasks {
        out.push(task.await);
    }
    out
}

/// Run every fallible future concurrently and keep each outcome.
///
/// Unlike short-circuiting joins, one failure does not stop the others.
pub async fn settle_all<I, Fut, T, E>(tasks: I) -> Vec<Result<T, E>>
where
    I: IntoIterator<Item = Fut>,
    Fut: Future<Output = Result<T, E>>,
{
    let results = futures_util::future::join_all(tasks).await;
    let failed = results.iter().filter(|r| r.is_err()).count();
    if failed > 0 {
        tracing::debug!(total = results.len(), failed, "settled with failures");
    }
    results
}
