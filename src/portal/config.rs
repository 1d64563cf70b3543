//! Runtime configuration for the portal views: where the auth API lives, where the
//! persistent session file is kept, and which routes the views navigate to.
//! Values are public; do not store secrets here.

use crate::portal::navigation::Route;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_DASHBOARD_ROUTE: &str = "/skillup";
pub const DEFAULT_LOGIN_ROUTE: &str = "/adminLogin";
/// Delay between a successful registration and the redirect to the login route.
pub const DEFAULT_REDIRECT_DELAY: Duration = Duration::from_secs(2);

const STATE_DIR_NAME: &str = "admin-portal";

/// Portal configuration shared by the CLI actions and the views.
#[derive(Clone, Debug)]
pub struct PortalConfig {
    pub api_base_url: String,
    pub state_dir: PathBuf,
    pub dashboard_route: Route,
    pub login_route: Route,
    pub redirect_delay: Duration,
    pub request_timeout: Option<Duration>,
}

impl PortalConfig {
    #[must_use]
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            state_dir: default_state_dir(),
            dashboard_route: Route::new(DEFAULT_DASHBOARD_ROUTE),
            login_route: Route::new(DEFAULT_LOGIN_ROUTE),
            redirect_delay: DEFAULT_REDIRECT_DELAY,
            request_timeout: None,
        }
    }

    #[must_use]
    pub fn with_state_dir(mut self, state_dir: impl Into<PathBuf>) -> Self {
        self.state_dir = state_dir.into();
        self
    }

    #[must_use]
    pub fn with_dashboard_route(mut self, route: Route) -> Self {
        self.dashboard_route = route;
        self
    }

    #[must_use]
    pub fn with_login_route(mut self, route: Route) -> Self {
        self.login_route = route;
        self
    }

    #[must_use]
    pub const fn with_redirect_delay(mut self, delay: Duration) -> Self {
        self.redirect_delay = delay;
        self
    }

    #[must_use]
    pub const fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

/// Platform data directory, or the current directory when none is known.
#[must_use]
pub fn default_state_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join(STATE_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(format!(".{STATE_DIR_NAME}")))
}
