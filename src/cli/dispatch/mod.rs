//! Maps validated CLI matches to the action to run.

use crate::cli::actions::{login, register, Action};
use crate::cli::commands::{
    self, portal, ARG_CONFIRM_PASSWORD, ARG_EMAIL, ARG_NAME, ARG_PASSWORD,
};
use crate::cli::globals::GlobalArgs;
use anyhow::{anyhow, Context, Result};
use secrecy::SecretString;

fn string_arg(matches: &clap::ArgMatches, id: &str) -> String {
    matches.get_one::<String>(id).cloned().unwrap_or_default()
}

/// Map validated CLI matches to an action.
///
/// # Errors
/// Returns an error if no subcommand was given or a required argument is missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let (name, sub_m) = matches
        .subcommand()
        .context("missing subcommand: login, register, logout or status")?;

    let globals = GlobalArgs::from_options(portal::Options::parse(sub_m)?);

    match name {
        commands::CMD_LOGIN => Ok(Action::Login(login::Args {
            globals,
            email: sub_m
                .get_one::<String>(ARG_EMAIL)
                .cloned()
                .context("missing required argument: --email")?,
            password: sub_m
                .get_one::<String>(ARG_PASSWORD)
                .cloned()
                .map(SecretString::from)
                .context("missing required argument: --password")?,
        })),
        commands::CMD_REGISTER => Ok(Action::Register(register::Args {
            globals,
            name: string_arg(sub_m, ARG_NAME),
            email: string_arg(sub_m, ARG_EMAIL),
            password: SecretString::from(string_arg(sub_m, ARG_PASSWORD)),
            confirm_password: SecretString::from(string_arg(sub_m, ARG_CONFIRM_PASSWORD)),
        })),
        commands::CMD_LOGOUT => Ok(Action::Logout(globals)),
        commands::CMD_STATUS => Ok(Action::Status(globals)),
        other => Err(anyhow!("unknown subcommand: {other}")),
    }
}
