//! Password hashing and verification.
//!
//! PBKDF2-HMAC-SHA512 at 100 000 iterations with a 64-byte output. The
//! iteration count is the cost parameter: high enough to hurt offline
//! brute force, which also makes every call a deliberately slow, CPU-bound
//! operation. Keep it off latency-sensitive paths.

use pbkdf2::pbkdf2_hmac;
use rand::{rngs::OsRng, RngCore};
use serde::{Deserialize, Serialize};
use sha2::Sha512;

use super::{compare::constant_time_eq, error::Error};

/// PBKDF2 iteration count. Changing it changes every derived hash, so
/// stored credentials only verify against the count they were created with.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

const SALT_BYTES: usize = 32;
const HASH_BYTES: usize = 64;

/// A derived credential: hex hash plus the hex salt it was derived under.
///
/// The salt must persist unchanged for the life of the credential;
/// regenerating it invalidates every previously stored hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordCredential {
    pub hash: String,
    pub salt: String,
}

/// Derive a credential from a password, generating a fresh salt when none
/// is supplied. Deterministic for a fixed `(password, salt)` pair.
///
/// The salt is fed to the KDF as the hex text itself, matching how the
/// stored form round-trips through [`verify_password`].
///
/// # Errors
/// Returns `Error::MissingPassword` for an empty password and
/// `Error::Entropy` if salt generation fails.
pub fn hash_password(password: &str, salt: Option<&str>) -> Result<PasswordCredential, Error> {
    if password.is_empty() {
        return Err(Error::MissingPassword);
    }

    let salt = match salt {
        Some(salt) => salt.to_string(),
        None => {
            let mut bytes = [0u8; SALT_BYTES];
            OsRng.try_fill_bytes(&mut bytes)?;
            hex::encode(bytes)
        }
    };

    let mut derived = [0u8; HASH_BYTES];
    pbkdf2_hmac::<Sha512>(
        password.as_bytes(),
        salt.as_bytes(),
        PBKDF2_ITERATIONS,
        &mut derived,
    );

    Ok(PasswordCredential {
        hash: hex::encode(derived),
        salt,
    })
}

/// Recompute the hash under the stored salt and compare in constant time.
///
/// Every failure mode (absent arguments, wrong password, corrupted or
/// truncated stored hash) returns `false`, never an error.
#[must_use]
pub fn verify_password(password: &str, hash: &str, salt: &str) -> bool {
    if password.is_empty() || hash.is_empty() || salt.is_empty() {
        return false;
    }
    match hash_password(password, Some(salt)) {
        Ok(credential) => constant_time_eq(credential.hash.as_bytes(), hash.as_bytes()),
        Err(_) => false,
    }
}
