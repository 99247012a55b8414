use crate::cli::actions::Action;
use anyhow::{anyhow, Context, Result};

/// # Errors
/// Returns an error if required arguments are missing or inconsistent.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    match matches.subcommand() {
        Some(("hash-password", sub)) => Ok(Action::HashPassword {
            salt: sub.get_one::<String>("salt").cloned(),
        }),

        Some(("csrf-token", sub)) => Ok(Action::CsrfToken {
            session_id: sub
                .get_one::<String>("session-id")
                .cloned()
                .context("missing required argument: --session-id")?,
        }),

        Some(("headers", sub)) => Ok(Action::Headers {
            json: sub.get_flag("json"),
        }),

        // subcommand_required(true) makes this unreachable from real argv
        _ => Err(anyhow!("missing subcommand")),
    }
}

#[cfg(test)]
mod tests {
    use super::handler;
    use crate::cli::{actions::Action, commands};
    use anyhow::Result;

    #[test]
    fn dispatches_hash_password() -> Result<()> {
        let matches = commands::new().try_get_matches_from(vec![
            "bulteno",
            "hash-password",
            "--salt",
            "deadbeef",
        ])?;
        let action = handler(&matches)?;
        assert!(matches!(
            action,
            Action::HashPassword { salt: Some(salt) } if salt == "deadbeef"
        ));
        Ok(())
    }

    #[test]
    fn dispatches_csrf_token() -> Result<()> {
        let matches = commands::new().try_get_matches_from(vec![
            "bulteno",
            "csrf-token",
            "--session-id",
            "session123",
        ])?;
        let action = handler(&matches)?;
        assert!(matches!(
            action,
            Action::CsrfToken { session_id } if session_id == "session123"
        ));
        Ok(())
    }

    #[test]
    fn dispatches_headers() -> Result<()> {
        let matches = commands::new().try_get_matches_from(vec!["bulteno", "headers", "--json"])?;
        let action = handler(&matches)?;
        assert!(matches!(action, Action::Headers { json: true }));
        Ok(())
    }

    #[test]
    fn missing_subcommand_is_a_usage_error() {
        let result = commands::new().try_get_matches_from(vec!["bulteno"]);
        assert!(result.is_err());
    }
}
