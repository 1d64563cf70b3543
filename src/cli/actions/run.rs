use super::{login, register, session, Action};
use anyhow::Result;

pub(super) async fn execute(action: Action) -> Result<()> {
    match action {
        Action::Login(args) => login::execute(args).await,
        Action::Register(args) => register::execute(args).await,
        Action::Logout(globals) => session::logout(&globals),
        Action::Status(globals) => session::status(&globals),
    }
}
