use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        ValueParser,
    },
    Arg, ArgAction, ColorChoice, Command,
};

pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            // Successfully parsed as a number
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    Command::new("bulteno")
        .about("Input hardening and credential security toolkit")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("BULTENO_LOG_LEVEL")
                .global(true)
                .action(ArgAction::Count)
                .value_parser(validator_log_level()),
        )
        .subcommand(
            Command::new("hash-password")
                .about("Derive a PBKDF2 credential from a password read on stdin")
                .arg(
                    Arg::new("salt")
                        .short('s')
                        .long("salt")
                        .help("Reuse an existing hex salt instead of generating a fresh one")
                        .env("BULTENO_SALT"),
                ),
        )
        .subcommand(
            Command::new("csrf-token")
                .about("Issue a fresh CSRF token bound to a session id")
                .arg(
                    Arg::new("session-id")
                        .long("session-id")
                        .help("Session identifier the token is bound to")
                        .env("BULTENO_SESSION_ID")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("headers")
                .about("Print the recommended security headers")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Emit the headers as a JSON object")
                        .action(ArgAction::SetTrue),
                ),
        )
}
