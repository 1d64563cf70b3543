use crate::cli::commands::portal::Options;
use crate::portal::{config::PortalConfig, navigation::Route};
use std::time::Duration;

/// Settings shared by every subcommand.
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub config: PortalConfig,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(api_url: String) -> Self {
        Self {
            config: PortalConfig::new(api_url),
        }
    }

    #[must_use]
    pub fn from_options(options: Options) -> Self {
        let mut config = PortalConfig::new(options.api_url)
            .with_dashboard_route(Route::new(options.dashboard_route))
            .with_login_route(Route::new(options.login_route))
            .with_request_timeout(options.timeout_seconds.map(Duration::from_secs));

        if let Some(state_dir) = options.state_dir {
            config = config.with_state_dir(state_dir);
        }

        Self { config }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_global_args() {
        let args = GlobalArgs::new("http://localhost:3000".to_string());
        assert_eq!(args.config.api_base_url, "http://localhost:3000");
        assert_eq!(args.config.login_route.as_str(), "/adminLogin");
    }

    #[test]
    fn test_from_options() {
        let args = GlobalArgs::from_options(Options {
            api_url: "https://portal.example.com".to_string(),
            state_dir: Some(PathBuf::from("/tmp/portal")),
            timeout_seconds: Some(10),
            dashboard_route: "admin/dashboard".to_string(),
            login_route: "/admin/login".to_string(),
        });

        assert_eq!(args.config.api_base_url, "https://portal.example.com");
        assert_eq!(args.config.state_dir, PathBuf::from("/tmp/portal"));
        assert_eq!(args.config.request_timeout, Some(Duration::from_secs(10)));
        assert_eq!(args.config.dashboard_route.as_str(), "/admin/dashboard");
        assert_eq!(args.config.login_route.as_str(), "/admin/login");
    }
}
