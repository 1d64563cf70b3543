use crate::cli::globals::GlobalArgs;
use crate::portal::{
    AdminRegistrationForm, ApiClient, Gate, History, RegisterOutcome, SessionContext,
};
use anyhow::{anyhow, Context, Result};
use secrecy::SecretString;
use std::fmt::Write as _;

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub name: String,
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
}

/// Execute the register action.
/// # Errors
/// Returns an error if no session is stored, validation fails, or the API rejects the
/// request.
pub async fn execute(args: Args) -> Result<()> {
    let config = &args.globals.config;

    let mut session = SessionContext::init(config).context("Could not open session storage")?;
    let mut history = History::new();

    let mut form = match AdminRegistrationForm::mount(config, &session, &mut history) {
        Gate::Render(form) => form,
        Gate::Placeholder { redirected_to } => {
            return Err(anyhow!(
                "Not signed in. Sign in first (redirected to {redirected_to})"
            ));
        }
    };

    let api = ApiClient::new(&config.api_base_url, config.request_timeout)
        .context("Could not build the auth API client")?;

    form.set_name(args.name);
    form.set_email(args.email);
    form.set_password(args.password);
    form.set_confirm_password(args.confirm_password);

    match form.submit(&api, &mut session, &mut history).await {
        RegisterOutcome::Created { redirected_to } => {
            if let Some(message) = form.success() {
                println!("{message}");
            }
            println!("Continue at {redirected_to}");
            Ok(())
        }
        RegisterOutcome::Invalid(errors) => {
            let mut report = String::from("Invalid input:");
            for (field, message) in errors.iter() {
                let _ = write!(report, "\n  {field}: {message}");
            }
            Err(anyhow!(report))
        }
        RegisterOutcome::SessionExpired(message) => Err(anyhow!(
            "{message} (continue at {})",
            config.login_route
        )),
        RegisterOutcome::Failed(message) => Err(anyhow!(message)),
    }
}
