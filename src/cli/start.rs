use crate::cli::{actions::Action, commands, dispatch, telemetry};
use anyhow::Result;

/// Map verbosity count to tracing level
const fn get_verbosity_level(verbosity: u8) -> Option<tracing::Level> {
    match verbosity {
        0 => None,
        1 => Some(tracing::Level::WARN),
        2 => Some(tracing::Level::INFO),
        3 => Some(tracing::Level::DEBUG),
        _ => Some(tracing::Level::TRACE),
    }
}

/// Main entry point for the CLI - builds and returns the Action
///
/// # Errors
///
/// Returns an error if argument parsing, telemetry initialization, or action dispatch fails
pub fn start() -> Result<Action> {
    let matches = commands::new().get_matches();

    // -v may be given before or after the subcommand
    let scoped = matches.subcommand().map_or(&matches, |(_, sub_m)| sub_m);
    let verbosity = scoped
        .get_one::<u8>(commands::logging::ARG_VERBOSITY)
        .or_else(|| matches.get_one::<u8>(commands::logging::ARG_VERBOSITY))
        .copied()
        .unwrap_or(0);

    telemetry::init(get_verbosity_level(verbosity))?;

    let action = dispatch::handler(&matches)?;

    Ok(action)
}
