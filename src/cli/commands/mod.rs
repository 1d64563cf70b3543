pub mod logging;
pub mod portal;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ColorChoice, Command,
};

pub const CMD_LOGIN: &str = "login";
pub const CMD_REGISTER: &str = "register";
pub const CMD_LOGOUT: &str = "logout";
pub const CMD_STATUS: &str = "status";

pub const ARG_NAME: &str = "name";
pub const ARG_EMAIL: &str = "email";
pub const ARG_PASSWORD: &str = "password";
pub const ARG_CONFIRM_PASSWORD: &str = "confirm-password";

fn login_command() -> Command {
    Command::new(CMD_LOGIN)
        .about("Sign in and store the admin session token")
        .arg(
            Arg::new(ARG_EMAIL)
                .short('e')
                .long(ARG_EMAIL)
                .help("Admin email address")
                .env("ADMIN_PORTAL_EMAIL")
                .required(true),
        )
        .arg(
            Arg::new(ARG_PASSWORD)
                .short('p')
                .long(ARG_PASSWORD)
                .help("Admin password")
                .env("ADMIN_PORTAL_PASSWORD")
                .hide_env_values(true)
                .required(true),
        )
}

fn register_command() -> Command {
    Command::new(CMD_REGISTER)
        .about("Create a new admin (requires a stored session)")
        .arg(
            Arg::new(ARG_NAME)
                .short('n')
                .long(ARG_NAME)
                .help("Full name of the new admin")
                .default_value(""),
        )
        .arg(
            Arg::new(ARG_EMAIL)
                .short('e')
                .long(ARG_EMAIL)
                .help("Email address of the new admin")
                .default_value(""),
        )
        .arg(
            Arg::new(ARG_PASSWORD)
                .short('p')
                .long(ARG_PASSWORD)
                .help("Password for the new admin (at least 6 characters)")
                .env("ADMIN_PORTAL_NEW_PASSWORD")
                .hide_env_values(true)
                .default_value(""),
        )
        .arg(
            Arg::new(ARG_CONFIRM_PASSWORD)
                .short('c')
                .long(ARG_CONFIRM_PASSWORD)
                .help("Password confirmation, must match --password")
                .env("ADMIN_PORTAL_CONFIRM_PASSWORD")
                .hide_env_values(true)
                .default_value(""),
        )
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

    let command = Command::new("admin-portal")
        .about("Admin portal: login gate and admin registration")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(login_command())
        .subcommand(register_command())
        .subcommand(Command::new(CMD_LOGOUT).about("Clear the stored admin session"))
        .subcommand(Command::new(CMD_STATUS).about("Show the signed-in admin, if any"));

    let command = portal::with_args(command);
    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "admin-portal");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some("Admin portal: login gate and admin registration".to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_login_args() {
        temp_env::with_vars(
            [
                ("ADMIN_PORTAL_EMAIL", None::<&str>),
                ("ADMIN_PORTAL_PASSWORD", None::<&str>),
            ],
            || {
                let matches = new().get_matches_from(vec![
                    "admin-portal",
                    "login",
                    "--email",
                    "a@b.com",
                    "--password",
                    "secret1",
                ]);
                let Some((name, sub)) = matches.subcommand() else {
                    panic!("expected subcommand");
                };
                assert_eq!(name, CMD_LOGIN);
                assert_eq!(
                    sub.get_one::<String>(ARG_EMAIL).cloned(),
                    Some("a@b.com".to_string())
                );
                assert_eq!(
                    sub.get_one::<String>(ARG_PASSWORD).cloned(),
                    Some("secret1".to_string())
                );
            },
        );
    }

    #[test]
    fn test_login_requires_credentials() {
        temp_env::with_vars(
            [
                ("ADMIN_PORTAL_EMAIL", None::<&str>),
                ("ADMIN_PORTAL_PASSWORD", None::<&str>),
            ],
            || {
                let result = new().try_get_matches_from(vec!["admin-portal", "login"]);
                assert!(result.is_err());
            },
        );
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("ADMIN_PORTAL_API_URL", Some("https://portal.example.com")),
                ("ADMIN_PORTAL_STATE_DIR", Some("/tmp/admin-portal")),
                ("ADMIN_PORTAL_EMAIL", Some("a@b.com")),
                ("ADMIN_PORTAL_PASSWORD", Some("secret1")),
                ("ADMIN_PORTAL_LOG_LEVEL", Some("info")),
            ],
            || {
                let matches = new().get_matches_from(vec!["admin-portal", "login"]);
                let Some((_, sub)) = matches.subcommand() else {
                    panic!("expected subcommand");
                };
                assert_eq!(
                    sub.get_one::<String>(portal::ARG_API_URL).cloned(),
                    Some("https://portal.example.com".to_string())
                );
                assert_eq!(
                    sub.get_one::<std::path::PathBuf>(portal::ARG_STATE_DIR)
                        .cloned(),
                    Some(std::path::PathBuf::from("/tmp/admin-portal"))
                );
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(2)
                );
            },
        );
    }

    #[test]
    fn test_check_log_level_env() {
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars([("ADMIN_PORTAL_LOG_LEVEL", Some(level))], || {
                let matches = new().get_matches_from(vec!["admin-portal", "status"]);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }

    #[test]
    fn test_register_defaults_to_empty_fields() {
        temp_env::with_vars(
            [
                ("ADMIN_PORTAL_NEW_PASSWORD", None::<&str>),
                ("ADMIN_PORTAL_CONFIRM_PASSWORD", None::<&str>),
            ],
            || {
                let matches =
                    new().get_matches_from(vec!["admin-portal", "register", "--email", "x@y.com"]);
                let Some((name, sub)) = matches.subcommand() else {
                    panic!("expected subcommand");
                };
                assert_eq!(name, CMD_REGISTER);
                assert_eq!(sub.get_one::<String>(ARG_NAME).cloned(), Some(String::new()));
                assert_eq!(
                    sub.get_one::<String>(ARG_CONFIRM_PASSWORD).cloned(),
                    Some(String::new())
                );
            },
        );
    }
}
