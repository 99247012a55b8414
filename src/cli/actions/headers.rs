use crate::security::{csp_headers, security_headers};
use anyhow::Result;
use std::fmt::Write;

/// Print the recommended header set, one `name: value` per line, or as a
/// JSON object with `--json`.
pub fn execute(json: bool) -> Result<()> {
    let headers: Vec<_> = csp_headers().into_iter().chain(security_headers()).collect();

    if json {
        let map: serde_json::Map<String, serde_json::Value> = headers
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    serde_json::Value::String(value.to_str().unwrap_or_default().to_string()),
                )
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&map)?);
        return Ok(());
    }

    let body = headers.iter().fold(String::new(), |mut acc, (name, value)| {
        if writeln!(acc, "{}: {}", name, value.to_str().unwrap_or_default()).is_err() {
            return acc;
        }
        acc
    });
    print!("{body}");

    Ok(())
}
