//! # Admin Portal (Login Gate & Admin Registration)
//!
//! `admin-portal` is the client side of the travel-booking admin portal. It drives
//! two views against an external auth service:
//!
//! - **Login Gate:** submits credentials to `POST /api/admin/auth/login`, persists the
//!   returned opaque token and admin name, then navigates to the dashboard route.
//! - **Admin Registration:** an auth-gated form that validates a new admin's profile
//!   client-side and submits it to `POST /api/admin/auth/register` with the stored
//!   token as a bearer credential.
//!
//! ## Session Storage
//!
//! The token lives in persistent storage (a JSON file under the state directory) and
//! the admin name is mirrored in a process-scoped session store. All key access goes
//! through [`portal::session::SessionContext`]; protected views compose with
//! [`portal::guard::RequireAuth`]. The client only checks token presence; validity and
//! expiry are the server's concern.

pub mod cli;
pub mod portal;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
