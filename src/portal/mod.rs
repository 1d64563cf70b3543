//! Portal views and the session plumbing they share. Views hold form state only;
//! storage keys live in [`session`], HTTP setup in [`api`], and the redirect-if-absent
//! gate in [`guard`]. Passwords and tokens are `SecretString` throughout and must not
//! be logged.
//!
//! Flow Overview: login posts credentials, stores the token and admin name, then
//! navigates to the dashboard. Registration mounts behind the token guard, validates
//! locally, posts with a bearer token, then returns to login after a short delay.

pub mod api;
pub mod config;
pub mod errors;
pub mod guard;
pub mod login;
pub mod navigation;
pub mod register;
pub mod session;
pub mod storage;
pub mod types;
pub mod validation;

pub use self::api::ApiClient;
pub use self::config::PortalConfig;
pub use self::errors::AppError;
pub use self::guard::{Gate, RequireAuth};
pub use self::login::{LoginGate, LoginOutcome};
pub use self::navigation::{History, Navigator, Route};
pub use self::register::{AdminRegistrationForm, RegisterOutcome};
pub use self::session::SessionContext;
