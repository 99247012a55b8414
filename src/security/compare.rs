//! Constant-time byte comparison for secrets.

use subtle::ConstantTimeEq;

/// Compare two byte slices in constant time.
///
/// The length check runs before, not instead of, the constant-time loop:
/// unequal lengths return `false` immediately, which leaks only the length,
/// never how many leading bytes matched.
#[must_use]
pub fn constant_time_eq(left: &[u8], right: &[u8]) -> bool {
    if left.len() != right.len() {
        return false;
    }
    left.ct_eq(right).unwrap_u8() == 1
}
