//! utilkit-async - Async helpers on tokio
//!
//! Delays, retries, timeouts, debouncing, throttling and bounded parallel
//! execution. Failures of user operations are returned unchanged; only
//! timeouts introduce an [`AsyncError`].

pub mod batch;
pub mod debounce;
pub mod error;
pub mod retry;
pub mod throttle;
pub mod timing;

pub use batch::{parallel_limit, sequential, settle_all};
pub use debounce::Debouncer;
pub use error::AsyncError;
pub use retry::{retry, Backoff, RetryOptions};
pub use throttle::Throttle;
pub use timing::{delay, with_timeout};
