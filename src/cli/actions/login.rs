use crate::cli::globals::GlobalArgs;
use crate::portal::{ApiClient, History, LoginGate, LoginOutcome, SessionContext};
use anyhow::{anyhow, Context, Result};
use secrecy::SecretString;
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub email: String,
    pub password: SecretString,
}

/// Execute the login action.
/// # Errors
/// Returns an error if the session store cannot be opened or the login is rejected.
pub async fn execute(args: Args) -> Result<()> {
    let config = &args.globals.config;
    debug!("Global args: {:?}", args.globals);

    let api = ApiClient::new(&config.api_base_url, config.request_timeout)
        .context("Could not build the auth API client")?;
    let mut session = SessionContext::init(config).context("Could not open session storage")?;
    let mut history = History::new();

    let mut gate = LoginGate::new(config.dashboard_route.clone());
    gate.set_email(args.email);
    gate.set_password(args.password);

    match gate.submit(&api, &mut session, &mut history).await {
        LoginOutcome::Redirected(route) => {
            let name = session
                .admin()
                .ok()
                .flatten()
                .map(|admin| admin.name)
                .unwrap_or_default();
            println!("Signed in as {name}. Continue at {route}");
            Ok(())
        }
        LoginOutcome::Failed(message) => Err(anyhow!(message)),
    }
}
