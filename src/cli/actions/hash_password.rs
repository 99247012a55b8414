use crate::security;
use anyhow::{Context, Result};
use secrecy::{ExposeSecret, SecretString};
use std::io::{self, BufRead, Write};

/// Read the password from stdin and print the derived credential as JSON.
///
/// The password is taken from stdin, never argv, so it stays out of process
/// listings and shell history.
pub fn execute(salt: Option<&str>) -> Result<()> {
    let password = read_password(&mut io::stdin().lock())?;

    let credential = security::hash_password(password.expose_secret(), salt)
        .context("failed to derive credential")?;

    let json = serde_json::to_string_pretty(&credential)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}")?;

    Ok(())
}

fn read_password(reader: &mut impl BufRead) -> Result<SecretString> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .context("failed to read password from stdin")?;
    Ok(SecretString::from(
        line.trim_end_matches(['\r', '\n']).to_string(),
    ))
}
