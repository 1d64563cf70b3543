//! Admin registration view. Mounting goes through the token guard; a mounted form
//! validates locally, submits with the stored bearer token and, on success, clears
//! itself and returns to the login route after a short delay.

use super::{
    api::ApiClient,
    config::PortalConfig,
    errors::AppError,
    guard::{Gate, RequireAuth},
    navigation::{Navigator, Route},
    session::SessionContext,
    types::RegisterRequest,
    validation::{validate_registration, Field, FieldErrors, RegistrationInput},
};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::{info, instrument, warn};

pub const REGISTRATION_FAILED_MESSAGE: &str = "Registration failed";
pub const REGISTRATION_SUCCESS_MESSAGE: &str =
    "New admin created successfully! Redirecting to login...";
pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please sign in again.";
/// Scroll offset past which the scroll-to-top affordance shows.
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;

#[derive(Debug, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// Validation failed; nothing was sent.
    Invalid(FieldErrors),
    Created { redirected_to: Route },
    Failed(String),
    /// The server rejected the token or it vanished; the session was cleared.
    SessionExpired(String),
}

/// Visibility of the scroll-to-top affordance.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScrollTop {
    visible: bool,
}

impl ScrollTop {
    pub fn on_scroll(&mut self, offset_y: f64) -> bool {
        self.visible = offset_y > SCROLL_TOP_THRESHOLD;
        self.visible
    }

    pub const fn is_visible(self) -> bool {
        self.visible
    }
}

/// Mounted registration form. Only obtainable through [`AdminRegistrationForm::mount`].
#[derive(Debug)]
pub struct AdminRegistrationForm {
    input: RegistrationInput,
    field_errors: FieldErrors,
    error: Option<String>,
    success: Option<String>,
    loading: bool,
    scroll: ScrollTop,
    login_route: Route,
    redirect_delay: Duration,
}

impl AdminRegistrationForm {
    /// Mounts the form behind the token guard. Without a stored token the navigator is
    /// sent to the login route and only a placeholder comes back.
    pub fn mount(
        config: &PortalConfig,
        session: &SessionContext,
        navigator: &mut dyn Navigator,
    ) -> Gate<Self> {
        RequireAuth::token(config.login_route.clone()).mount(session, navigator, || Self {
            input: RegistrationInput::default(),
            field_errors: FieldErrors::default(),
            error: None,
            success: None,
            loading: false,
            scroll: ScrollTop::default(),
            login_route: config.login_route.clone(),
            redirect_delay: config.redirect_delay,
        })
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.input.name = name.into();
        self.field_errors.clear_field(Field::Name);
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.input.email = email.into();
        self.field_errors.clear_field(Field::Email);
    }

    pub fn set_password(&mut self, password: SecretString) {
        self.input.password = password;
        self.field_errors.clear_field(Field::Password);
    }

    pub fn set_confirm_password(&mut self, confirm: SecretString) {
        self.input.confirm_password = confirm;
        self.field_errors.clear_field(Field::ConfirmPassword);
    }

    pub fn name(&self) -> &str {
        &self.input.name
    }

    pub fn email(&self) -> &str {
        &self.input.email
    }

    pub fn password_is_empty(&self) -> bool {
        self.input.password.expose_secret().is_empty()
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn success(&self) -> Option<&str> {
        self.success.as_deref()
    }

    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn on_scroll(&mut self, offset_y: f64) -> bool {
        self.scroll.on_scroll(offset_y)
    }

    pub const fn scroll_top_visible(&self) -> bool {
        self.scroll.is_visible()
    }

    /// Validates, then submits once. No request is sent while any field is invalid.
    #[instrument(skip_all, fields(email = %self.input.email))]
    pub async fn submit(
        &mut self,
        api: &ApiClient,
        session: &mut SessionContext,
        navigator: &mut dyn Navigator,
    ) -> RegisterOutcome {
        self.error = None;
        self.success = None;

        self.field_errors = validate_registration(&self.input);
        if !self.field_errors.is_empty() {
            return RegisterOutcome::Invalid(self.field_errors.clone());
        }

        let token = match session.token() {
            Ok(Some(token)) => token,
            Ok(None) => {
                navigator.navigate(&self.login_route);
                return self.expire(SESSION_EXPIRED_MESSAGE.to_string());
            }
            Err(err) => {
                return self.fail(err.user_message(REGISTRATION_FAILED_MESSAGE));
            }
        };

        let request = RegisterRequest {
            name: self.input.name.clone(),
            // Email inputs drop surrounding whitespace, as the login form does.
            email: self.input.email.trim().to_string(),
            password: self.input.password.clone(),
        };

        self.loading = true;
        let result = api.register(&request, &token).await;
        self.loading = false;

        match result {
            Ok(()) => {
                info!("admin created");
                self.success = Some(REGISTRATION_SUCCESS_MESSAGE.to_string());
                self.input = RegistrationInput::default();

                tokio::time::sleep(self.redirect_delay).await;
                navigator.navigate(&self.login_route);

                RegisterOutcome::Created {
                    redirected_to: self.login_route.clone(),
                }
            }
            Err(err @ AppError::Http { status: 401, .. }) => {
                warn!("Registration rejected the session token: {err}");
                let message = err.user_message(REGISTRATION_FAILED_MESSAGE);
                if let Err(clear_err) = session.clear() {
                    warn!("Failed to clear expired session: {clear_err}");
                }
                self.expire(message)
            }
            Err(err) => {
                warn!("Registration failed: {err}");
                self.fail(err.user_message(REGISTRATION_FAILED_MESSAGE))
            }
        }
    }

    fn fail(&mut self, message: String) -> RegisterOutcome {
        self.error = Some(message.clone());
        RegisterOutcome::Failed(message)
    }

    fn expire(&mut self, message: String) -> RegisterOutcome {
        self.error = Some(message.clone());
        RegisterOutcome::SessionExpired(message)
    }
}
