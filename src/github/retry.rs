// src/github/retry.rs
// =============================================================================
// How long to wait between attempts.
//
// Two kinds of waits:
// - Backoff after transient failures: base_delay, 2x, 4x, ...
// - Rate limit waits after 403/429: whatever GitHub asks for, via
//   Retry-After or X-RateLimit-Reset, capped so a single user can't stall
//   the run for an hour
// =============================================================================

use reqwest::header::{HeaderMap, RETRY_AFTER};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";
const RATE_LIMIT_RESET: &str = "x-ratelimit-reset";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of requests made for one username, first try included
    pub max_attempts: u32,
    /// Delay after the first transient failure; doubles on each later one
    pub base_delay: Duration,
    /// Upper bound for any rate limit wait
    pub max_rate_limit_wait: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            max_attempts: 3,
            base_delay: Duration::from_secs(2),
            max_rate_limit_wait: Duration::from_secs(60),
        }
    }
}

impl RetryPolicy {
    /// Delay after the given (1-based) failed attempt
    pub fn backoff(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(16);
        self.base_delay.saturating_mul(1 << exponent)
    }

    /// Delay after a rate-limited response
    ///
    /// Retry-After wins when present. Otherwise, if the quota is used up,
    /// wait until the reset timestamp (plus a second of slack). Anything
    /// else falls back to the normal backoff.
    pub fn rate_limit_wait(&self, headers: &HeaderMap, attempt: u32, now: SystemTime) -> Duration {
        let requested = retry_after(headers)
            .or_else(|| until_reset(headers, now))
            .unwrap_or_else(|| self.backoff(attempt));

        requested.min(self.max_rate_limit_wait)
    }
}

fn header_u64(headers: &HeaderMap, name: &str) -> Option<u64> {
    headers.get(name)?.to_str().ok()?.trim().parse().ok()
}

fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    header_u64(headers, RETRY_AFTER.as_str()).map(Duration::from_secs)
}

fn until_reset(headers: &HeaderMap, now: SystemTime) -> Option<Duration> {
    if header_u64(headers, RATE_LIMIT_REMAINING)? != 0 {
        return None;
    }
    let reset = header_u64(headers, RATE_LIMIT_RESET)?;
    let now = now.duration_since(UNIX_EPOCH).ok()?.as_secs();
    Some(Duration::from_secs(reset.saturating_sub(now) + 1))
}
