//! HTTP client layer: `TickerHttp` with a client-wide retry policy.

pub mod client;
pub mod retry;

pub use client::{TickerHttp, DEFAULT_REQUEST_TIMEOUT};
pub use retry::{RetryConfig, RetryPolicy};
