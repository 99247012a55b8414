use crate::cli::actions::{csrf_token, hash_password, headers, Action};
use anyhow::Result;

/// Execute the provided action.
// This is the single dispatch point for all CLI actions.
// To add a new action, add a new `Action::*` variant and a corresponding `*::execute` call here.
/// # Errors
/// Returns an error if the action fails.
pub fn execute(action: Action) -> Result<()> {
    match action {
        Action::HashPassword { salt } => hash_password::execute(salt.as_deref()),
        Action::CsrfToken { session_id } => csrf_token::execute(&session_id),
        Action::Headers { json } => headers::execute(json),
    }
}
