//! Retry configuration and backoff computation.
//!
//! The retry loop itself lives in [`Client::call`](crate::Client::call);
//! this module owns the configuration value each call snapshots at entry,
//! the backoff schedule, and `Retry-After` parsing.

use http::HeaderMap;
use rand::Rng;
use std::time::{Duration, SystemTime};

/// Substituted when `enable_retries` is called with zero values, matching
/// the upstream service defaults.
const DEFAULT_MAX_RETRIES: u32 = 4;
const DEFAULT_MAX_RETRY_INTERVAL: Duration = Duration::from_secs(30);

const BACKOFF_INITIAL: Duration = Duration::from_millis(500);
const BACKOFF_CAP: Duration = Duration::from_secs(30);

/// Automatic-retry configuration for a client.
///
/// Disabled by default. The configuration is a plain value: setters on the
/// client replace it wholesale, and every call reads it by value at entry,
/// so no in-flight call ever observes a concurrent change.
///
/// Disabled retries are behaviorally indistinguishable from
/// `max_retries = 0`: one attempt, no backoff.
#[derive(Debug, Clone, Copy)]
pub struct RetryConfig {
    /// Whether failed attempts are retried at all.
    pub enabled: bool,

    /// Maximum number of retries after the initial attempt, so a call
    /// makes at most `max_retries + 1` attempts.
    pub max_retries: u32,

    /// Total elapsed-time budget for retrying. Once exceeded, the last
    /// observed result is returned as-is.
    pub max_retry_interval: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            max_retries: 0,
            max_retry_interval: Duration::ZERO,
        }
    }
}

impl RetryConfig {
    /// Creates an enabled configuration. Zero values select the defaults
    /// (4 retries, 30 second budget).
    pub fn enabled(max_retries: u32, max_retry_interval: Duration) -> Self {
        Self {
            enabled: true,
            max_retries: if max_retries == 0 {
                DEFAULT_MAX_RETRIES
            } else {
                max_retries
            },
            max_retry_interval: if max_retry_interval.is_zero() {
                DEFAULT_MAX_RETRY_INTERVAL
            } else {
                max_retry_interval
            },
        }
    }

    /// Whether another attempt is allowed after `attempt` attempts have
    /// completed and `elapsed` time has passed since the call began.
    pub(crate) fn allows(&self, attempt: u32, elapsed: Duration) -> bool {
        self.enabled && attempt <= self.max_retries && elapsed < self.max_retry_interval
    }

    /// Backoff delay before the given retry (1-indexed): exponential,
    /// capped, with jitter between 50% and 100% of the base delay.
    pub(crate) fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let multiplier = 2u32.saturating_pow(attempt.saturating_sub(1));
        let base = BACKOFF_INITIAL.saturating_mul(multiplier).min(BACKOFF_CAP);
        let jitter_factor = rand::thread_rng().gen_range(0.5..=1.0);
        base.mul_f64(jitter_factor)
    }
}

/// Parses a `Retry-After` response header, in either delay-seconds or
/// HTTP-date form. A server-provided wait takes precedence over the
/// computed backoff, capped by the remaining retry budget.
pub(crate) fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    let header = headers.get("retry-after")?.to_str().ok()?;

    if let Ok(seconds) = header.parse::<u64>() {
        return Some(Duration::from_secs(seconds));
    }

    if let Ok(date) = httpdate::parse_http_date(header) {
        if let Ok(until) = date.duration_since(SystemTime::now()) {
            return Some(until);
        }
    }

    None
}
