//! Login gate: collects credentials, exchanges them for a session token and sends
//! the admin to the dashboard. Failures stay on the form as an error banner.

use super::{
    api::ApiClient,
    errors::AppError,
    navigation::{Navigator, Route},
    session::SessionContext,
    types::{AdminData, LoginRequest},
};
use secrecy::{ExposeSecret, SecretString};
use tracing::{info, instrument, warn};

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";
pub const MISSING_CREDENTIALS_MESSAGE: &str = "Email and password are required.";

#[derive(Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Redirected(Route),
    Failed(String),
}

/// Form state of the login view.
#[derive(Debug)]
pub struct LoginGate {
    email: String,
    password: SecretString,
    error: Option<String>,
    loading: bool,
    dashboard: Route,
}

impl LoginGate {
    #[must_use]
    pub fn new(dashboard: Route) -> Self {
        Self {
            email: String::new(),
            password: SecretString::default(),
            error: None,
            loading: false,
            dashboard,
        }
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_password(&mut self, password: SecretString) {
        self.password = password;
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True while a submission is outstanding; the submit control is disabled.
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Submits the credentials once. On success the session is established and the
    /// navigator moves to the dashboard; on failure only the error banner changes.
    #[instrument(skip_all, fields(email = %self.email))]
    pub async fn submit(
        &mut self,
        api: &ApiClient,
        session: &mut SessionContext,
        navigator: &mut dyn Navigator,
    ) -> LoginOutcome {
        self.error = None;

        let email = self.email.trim().to_string();
        if email.is_empty() || self.password.expose_secret().is_empty() {
            return self.fail(MISSING_CREDENTIALS_MESSAGE.to_string());
        }

        self.loading = true;
        let result = self.exchange(api, session, email).await;
        self.loading = false;

        match result {
            Ok(name) => {
                info!(admin = %name, "admin signed in");
                navigator.navigate(&self.dashboard);
                LoginOutcome::Redirected(self.dashboard.clone())
            }
            Err(err) => {
                warn!("Login failed: {err}");
                self.fail(err.user_message(LOGIN_FAILED_MESSAGE))
            }
        }
    }

    async fn exchange(
        &self,
        api: &ApiClient,
        session: &mut SessionContext,
        email: String,
    ) -> Result<String, AppError> {
        let request = LoginRequest {
            email,
            password: self.password.clone(),
        };
        let response = api.login(&request).await?;

        let admin = AdminData {
            name: response.name,
        };
        session.establish(&SecretString::from(response.token), &admin)?;

        Ok(admin.name)
    }

    fn fail(&mut self, message: String) -> LoginOutcome {
        self.error = Some(message.clone());
        LoginOutcome::Failed(message)
    }
}
