//! # Bulteno Security Toolkit
//!
//! `bulteno` is the input hardening and credential security layer of the
//! Bulteno bulletin platform. It collects the primitives every edge of the
//! platform needs before untrusted text reaches storage or rendering:
//! escaping, sanitization, format validation, CSRF token issuance, password
//! hashing, security headers, and request rate limiting.
//!
//! ## Security Model
//!
//! - **Defense in depth, not a parser.** `sanitize_input` and
//!   `is_safe_sql_input` are pattern-based filters. They reduce the blast
//!   radius of malformed input; they do not replace output escaping at
//!   render time or parameterized queries at the database. Callers must
//!   still do both.
//! - **Constant-time secret comparison.** CSRF tokens and password hashes
//!   are compared without early exit on the first differing byte. Length
//!   mismatches are rejected before, not instead of, the constant-time loop.
//! - **Caller-owned state.** The rate limiter mutates a store the caller
//!   supplies and nothing else. Nothing in this crate touches the network,
//!   the filesystem, or the environment.
//! - **Deliberately slow hashing.** Password hashing runs PBKDF2 at 100 000
//!   iterations. Treat it as a multi-millisecond blocking call and keep it
//!   off latency-sensitive paths.

pub mod cli;
pub mod security;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
