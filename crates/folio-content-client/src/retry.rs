//! Retry logic with exponential backoff for content API HTTP calls.
//!
//! Retries only on transport errors (connection failures, timeouts). Status
//! codes are never retried here; the caller inspects the response. With the
//! default configuration (`max_retries = 0`) every call is single-shot.

use std::time::Duration;

/// Base delay between retries (doubles each attempt: 200ms, 400ms, 800ms, ...).
const BASE_DELAY_MS: u64 = 200;

/// Upper bound on the backoff exponent so a large retry count cannot overflow.
const MAX_BACKOFF_SHIFT: u32 = 6;

/// Send an HTTP request, retrying transport failures up to `max_retries` times.
///
/// The closure `f` is called at most `max_retries + 1` times.
pub(crate) async fn retry_send<F, Fut>(
    max_retries: u32,
    f: F,
) -> Result<reqwest::Response, reqwest::Error>
where
    F: Fn() -> Fut,
    Fut: std::future::Future<Output = Result<reqwest::Response, reqwest::Error>>,
{
    for attempt in 0..max_retries {
        match f().await {
            Ok(resp) => return Ok(resp),
            Err(e) => {
                let delay = backoff(attempt);
                tracing::warn!(
                    attempt = attempt + 1,
                    max_retries,
                    "content API request failed, retrying in {delay:?}: {e}"
                );
                tokio::time::sleep(delay).await;
            }
        }
    }
    f().await
}

fn backoff(attempt: u32) -> Duration {
    Duration::from_millis(BASE_DELAY_MS << attempt.min(MAX_BACKOFF_SHIFT))
}
