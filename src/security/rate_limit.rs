//! Fixed-window rate limiting over a caller-owned store.
//!
//! Fixed-window, not sliding: the counter resets at window boundaries, so a
//! caller can burst up to `2 * limit` across one boundary. That is a known,
//! accepted tradeoff for the simplicity of one record per key.
//!
//! The store belongs to the caller. The `&mut` borrow makes the
//! read-modify-write race-free on one thread; callers sharing a store across
//! threads must wrap it in their own lock (or shard per worker). This module
//! provides no synchronization of its own.

use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::debug;

/// Per-key window state. Caller-owned; fields are public on purpose so
/// callers can inspect how far past the limit a key has climbed.
#[derive(Debug, Clone, Copy)]
pub struct RateLimitRecord {
    pub count: u64,
    pub reset_at: Instant,
}

pub type RateLimitStore = HashMap<String, RateLimitRecord>;

/// Record one request for `key` and report whether it is within `limit`.
///
/// The record is written back even past the limit: the count keeps climbing
/// until the window rolls over, so callers can observe the overshoot.
pub fn check_rate_limit(
    key: &str,
    limit: u64,
    window: Duration,
    store: &mut RateLimitStore,
) -> bool {
    check_rate_limit_at(key, limit, window, store, Instant::now())
}

/// Deterministic variant of [`check_rate_limit`] for callers that manage
/// their own clock (tests, replay, simulated time).
pub fn check_rate_limit_at(
    key: &str,
    limit: u64,
    window: Duration,
    store: &mut RateLimitStore,
    now: Instant,
) -> bool {
    let record = store.entry(key.to_string()).or_insert(RateLimitRecord {
        count: 0,
        reset_at: now + window,
    });

    if now > record.reset_at {
        debug!(key, "rate limit window rolled over");
        record.count = 0;
        record.reset_at = now + window;
    }

    record.count += 1;

    let allowed = record.count <= limit;
    if !allowed {
        debug!(key, count = record.count, limit, "rate limit exceeded");
    }
    allowed
}
