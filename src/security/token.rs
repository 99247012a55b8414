//! CSRF token issuance and validation.
//!
//! Tokens are per-issuance: the digest covers 32 fresh random bytes next to
//! the session id, so two tokens for one session never collide. The raw
//! token is the credential; store it server-side keyed by session and
//! compare with [`validate_csrf_token`] only.

use rand::{rngs::OsRng, RngCore};
use sha2::{Digest, Sha256};

use super::{compare::constant_time_eq, error::Error};

/// Issue a fresh CSRF token bound to `session_id`.
///
/// # Errors
/// Returns `Error::Entropy` if the system random source fails.
pub fn generate_csrf_token(session_id: &str) -> Result<String, Error> {
    let mut bytes = [0u8; 32];
    OsRng.try_fill_bytes(&mut bytes)?;

    let mut hasher = Sha256::new();
    hasher.update(session_id.as_bytes());
    hasher.update(hex::encode(bytes).as_bytes());
    Ok(hex::encode(hasher.finalize()))
}

/// Compare a presented token against the stored one in constant time.
///
/// Absent (empty) arguments fail closed. Length mismatches are rejected by
/// a length check ahead of the byte loop, never by a panic.
#[must_use]
pub fn validate_csrf_token(token: &str, stored: &str) -> bool {
    if token.is_empty() || stored.is_empty() {
        return false;
    }
    constant_time_eq(token.as_bytes(), stored.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::{generate_csrf_token, validate_csrf_token};
    use anyhow::Result;

    #[test]
    fn generated_token_is_sha256_hex() -> Result<()> {
        let token = generate_csrf_token("session123")?;
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
        Ok(())
    }

    #[test]
    fn same_session_yields_distinct_tokens() -> Result<()> {
        let first = generate_csrf_token("session123")?;
        let second = generate_csrf_token("session123")?;
        assert_ne!(first, second);
        Ok(())
    }

    #[test]
    fn round_trip_validates() -> Result<()> {
        let token = generate_csrf_token("session123")?;
        assert!(validate_csrf_token(&token, &token));
        Ok(())
    }

    #[test]
    fn independent_tokens_reject() -> Result<()> {
        let token = generate_csrf_token("session123")?;
        let other = generate_csrf_token("session123")?;
        assert!(!validate_csrf_token(&token, &other));
        Ok(())
    }

    #[test]
    fn absent_arguments_fail_closed() {
        assert!(!validate_csrf_token("", "stored"));
        assert!(!validate_csrf_token("token", ""));
        assert!(!validate_csrf_token("", ""));
    }

    #[test]
    fn length_mismatch_rejects_without_panic() -> Result<()> {
        let token = generate_csrf_token("session123")?;
        assert!(!validate_csrf_token(&token, &token[..32]));
        Ok(())
    }
}
