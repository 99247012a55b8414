use crate::security;
use anyhow::{Context, Result};

/// Issue one token for the session and print it.
pub fn execute(session_id: &str) -> Result<()> {
    let token =
        security::generate_csrf_token(session_id).context("failed to issue CSRF token")?;
    println!("{token}");
    Ok(())
}
