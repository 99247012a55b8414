//! Security primitives for untrusted input and credentials.
//!
//! Every function here is synchronous and, apart from the rate limiter's
//! caller-supplied store, side-effect free. Validators and verifiers signal
//! rejection with `false`, never with a panic; only password hashing and
//! token issuance are fallible.

pub mod compare;
pub mod error;
pub mod escape;
pub mod headers;
pub mod password;
pub mod rate_limit;
pub mod sanitize;
pub mod token;
pub mod validate;

pub use compare::constant_time_eq;
pub use error::Error;
pub use escape::{escape_html, escape_js};
pub use headers::{apply, csp_headers, security_headers};
pub use password::{hash_password, verify_password, PasswordCredential};
pub use rate_limit::{check_rate_limit, check_rate_limit_at, RateLimitRecord, RateLimitStore};
pub use sanitize::{sanitize_input, SanitizeOptions};
pub use token::{generate_csrf_token, validate_csrf_token};
pub use validate::{is_safe_sql_input, validate_email, validate_url};
