pub mod csrf_token;
pub mod hash_password;
pub mod headers;

// Internal "interpreter" for `Action`.
// We keep the match in a separate module so `mod.rs` stays small as more actions are added.
mod run;

#[derive(Debug)]
pub enum Action {
    HashPassword { salt: Option<String> },
    CsrfToken { session_id: String },
    Headers { json: bool },
}

impl Action {
    // Convenience wrapper so call sites can do `action.execute()`.
    // When adding new actions, extend the match in `run::execute`.
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub fn execute(self) -> anyhow::Result<()> {
        run::execute(self)
    }
}
