// SPDX-License-Identifier: GPL-3.0-or-later

//! Retry handling for rate-limited (HTTP 429) responses.
//!
//! The Shazam Core API is hosted behind a shared RapidAPI quota and answers
//! with 429 Too Many Requests once the quota is exceeded, optionally carrying
//! a `Retry-After` header with the number of seconds to back off.

use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::{Response, StatusCode};
use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// Retry policy applied to rate-limited requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of attempts, including the initial request. Values below
    /// 1 are treated as 1.
    pub max_retries: u32,
    /// Fallback delay used when the response carries no `Retry-After` hint.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 5,
            base_delay: Duration::from_millis(1000),
        }
    }
}

impl RetryPolicy {
    /// Create a policy with the given attempt bound and fallback delay.
    pub fn new(max_retries: u32, base_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
        }
    }

    /// Delay to wait after `attempt` rate-limited attempts (1-based).
    ///
    /// The server's `Retry-After` hint (seconds) takes precedence over the
    /// fallback delay; either is scaled linearly with the attempt count, so
    /// successive waits grow 1x, 2x, 3x, ...
    fn backoff_delay(&self, attempt: u32, retry_after: Option<u64>) -> Duration {
        let base = retry_after
            .map(Duration::from_secs)
            .unwrap_or(self.base_delay);
        base * attempt
    }
}

/// Parse the `Retry-After` header as an integer number of seconds.
///
/// Header lookup is case-insensitive. HTTP-date values (which the Shazam API
/// does not emit) and other non-numeric values yield `None`, falling back to
/// the policy's base delay.
fn retry_after_secs(headers: &HeaderMap) -> Option<u64> {
    headers.get(RETRY_AFTER)?.to_str().ok()?.trim().parse().ok()
}

/// Run `send` until it yields a non-429 outcome, sleeping between attempts.
///
/// `send` is invoked once per attempt and must produce a fresh request each
/// time. Successful responses, non-429 error statuses, and transport errors
/// are returned unmodified from the attempt that produced them. When every
/// permitted attempt comes back 429, the last 429 response is returned so
/// the caller sees the terminal rate-limit failure; no sleep is issued after
/// the final attempt.
///
/// Each call owns its attempt counter, so concurrent requests retry
/// independently. Dropping the returned future cancels the in-flight request
/// and any pending backoff sleep.
pub async fn send_with_retry<F, Fut>(
    policy: &RetryPolicy,
    mut send: F,
) -> Result<Response, reqwest::Error>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Response, reqwest::Error>>,
{
    let max_retries = policy.max_retries.max(1);
    let mut attempt = 0;

    loop {
        match send().await {
            Ok(response) if response.status() == StatusCode::TOO_MANY_REQUESTS => {
                attempt += 1;

                if attempt >= max_retries {
                    warn!(
                        target: "shazamcore",
                        attempts = attempt,
                        "rate limit retries exhausted"
                    );
                    return Ok(response);
                }

                let delay = policy.backoff_delay(attempt, retry_after_secs(response.headers()));
                warn!(
                    target: "shazamcore",
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    "rate limit exceeded, retrying"
                );
                tokio::time::sleep(delay).await;
            }
            other => return other,
        }
    }
}
