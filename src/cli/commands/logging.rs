use clap::{builder::ValueParser, Arg, ArgAction, Command};

pub const ARG_VERBOSITY: &str = "verbosity";

/// Level names accepted by `ADMIN_PORTAL_LOG_LEVEL`, in `-v` count order.
const LEVEL_NAMES: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Turns a level name or count from the environment into a `-v` count.
fn parse_level(raw: &str) -> Result<u8, String> {
    let level = raw.trim();

    if let Ok(count) = level.parse::<u8>() {
        return if usize::from(count) < LEVEL_NAMES.len() {
            Ok(count)
        } else {
            Err(format!(
                "log level {count} out of range (0-{})",
                LEVEL_NAMES.len() - 1
            ))
        };
    }

    // "warning" is what most people type
    let level = if level.eq_ignore_ascii_case("warning") {
        "warn"
    } else {
        level
    };

    LEVEL_NAMES
        .iter()
        .position(|name| name.eq_ignore_ascii_case(level))
        .and_then(|index| u8::try_from(index).ok())
        .ok_or_else(|| {
            format!(
                "unknown log level '{raw}', expected one of: {}",
                LEVEL_NAMES.join(", ")
            )
        })
}

#[must_use]
pub fn validator_log_level() -> ValueParser {
    ValueParser::from(parse_level)
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command.arg(
        Arg::new(ARG_VERBOSITY)
            .short('v')
            .long("verbose")
            .help("Log more about API calls and session changes; repeat for more detail")
            .long_help(
                "Log more about API calls and session changes. Each -v raises the level one step from error to trace. ADMIN_PORTAL_LOG_LEVEL takes a level name or count instead.",
            )
            .env("ADMIN_PORTAL_LOG_LEVEL")
            .global(true)
            .action(ArgAction::Count)
            .value_parser(validator_log_level()),
    )
}
