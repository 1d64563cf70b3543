use crate::portal::config::{DEFAULT_API_BASE_URL, DEFAULT_DASHBOARD_ROUTE, DEFAULT_LOGIN_ROUTE};
use anyhow::Result;
use clap::{Arg, ArgMatches, Command};
use std::path::PathBuf;

pub const ARG_API_URL: &str = "api-url";
pub const ARG_STATE_DIR: &str = "state-dir";
pub const ARG_TIMEOUT_SECONDS: &str = "timeout-seconds";
pub const ARG_DASHBOARD_ROUTE: &str = "dashboard-route";
pub const ARG_LOGIN_ROUTE: &str = "login-route";

#[derive(Debug)]
pub struct Options {
    pub api_url: String,
    pub state_dir: Option<PathBuf>,
    pub timeout_seconds: Option<u64>,
    pub dashboard_route: String,
    pub login_route: String,
}

impl Options {
    /// # Errors
    /// Returns an error if a required argument is missing.
    pub fn parse(matches: &ArgMatches) -> Result<Self> {
        Ok(Self {
            api_url: matches
                .get_one::<String>(ARG_API_URL)
                .cloned()
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            state_dir: matches.get_one::<PathBuf>(ARG_STATE_DIR).cloned(),
            timeout_seconds: matches
                .get_one::<u64>(ARG_TIMEOUT_SECONDS)
                .copied()
                .filter(|seconds| *seconds > 0),
            dashboard_route: matches
                .get_one::<String>(ARG_DASHBOARD_ROUTE)
                .cloned()
                .unwrap_or_else(|| DEFAULT_DASHBOARD_ROUTE.to_string()),
            login_route: matches
                .get_one::<String>(ARG_LOGIN_ROUTE)
                .cloned()
                .unwrap_or_else(|| DEFAULT_LOGIN_ROUTE.to_string()),
        })
    }
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_API_URL)
                .long(ARG_API_URL)
                .help("Base URL of the admin auth API")
                .env("ADMIN_PORTAL_API_URL")
                .default_value(DEFAULT_API_BASE_URL)
                .global(true),
        )
        .arg(
            Arg::new(ARG_STATE_DIR)
                .long(ARG_STATE_DIR)
                .help("Directory holding the persistent session file")
                .long_help(
                    "Directory holding the persistent session file (storage.json). Defaults to the platform data directory.",
                )
                .env("ADMIN_PORTAL_STATE_DIR")
                .global(true)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new(ARG_TIMEOUT_SECONDS)
                .long(ARG_TIMEOUT_SECONDS)
                .help("Request timeout in seconds (0 or unset: transport default)")
                .env("ADMIN_PORTAL_TIMEOUT_SECONDS")
                .global(true)
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new(ARG_DASHBOARD_ROUTE)
                .long(ARG_DASHBOARD_ROUTE)
                .help("Route opened after a successful login")
                .env("ADMIN_PORTAL_DASHBOARD_ROUTE")
                .default_value(DEFAULT_DASHBOARD_ROUTE)
                .global(true),
        )
        .arg(
            Arg::new(ARG_LOGIN_ROUTE)
                .long(ARG_LOGIN_ROUTE)
                .help("Route of the login view")
                .env("ADMIN_PORTAL_LOGIN_ROUTE")
                .default_value(DEFAULT_LOGIN_ROUTE)
                .global(true),
        )
}
