use crate::cli::globals::GlobalArgs;
use crate::portal::SessionContext;
use anyhow::{Context, Result};
use tracing::info;

/// Clear the stored admin session.
/// # Errors
/// Returns an error if the session store cannot be opened or written.
pub fn logout(globals: &GlobalArgs) -> Result<()> {
    let mut session =
        SessionContext::init(&globals.config).context("Could not open session storage")?;
    session.clear().context("Could not clear the session")?;

    info!("session cleared");
    println!("Signed out.");
    Ok(())
}

/// Report who is signed in. Only token presence is checked, not validity.
/// # Errors
/// Returns an error if the session store cannot be opened or read.
pub fn status(globals: &GlobalArgs) -> Result<()> {
    let session =
        SessionContext::init(&globals.config).context("Could not open session storage")?;

    if session.token()?.is_some() {
        let name = session
            .admin()?
            .map_or_else(|| "unknown admin".to_string(), |admin| admin.name);
        println!("Signed in as {name}");
    } else {
        println!("Not signed in");
    }
    Ok(())
}
