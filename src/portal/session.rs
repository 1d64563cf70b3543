//! Session context for the admin portal. It is the only code that knows the storage
//! keys: views ask it for the token or admin profile, and login/logout go through
//! [`SessionContext::establish`] and [`SessionContext::clear`]. Token material is
//! returned as `SecretString` and never logged.

use super::{
    config::PortalConfig,
    errors::AppError,
    storage::{FileStorage, MemoryStorage, Storage},
    types::AdminData,
};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument, warn};

/// Persistent key holding the raw bearer token.
pub const ADMIN_TOKEN_KEY: &str = "adminToken";
/// Key holding the JSON-encoded `{name}` profile, in both stores.
pub const ADMIN_DATA_KEY: &str = "adminData";

pub struct SessionContext {
    persistent: Box<dyn Storage>,
    session: Box<dyn Storage>,
}

impl SessionContext {
    pub fn new(persistent: impl Storage + 'static, session: impl Storage + 'static) -> Self {
        Self {
            persistent: Box::new(persistent),
            session: Box::new(session),
        }
    }

    /// Opens persistent storage under the configured state directory and starts an
    /// empty session store.
    ///
    /// # Errors
    /// Returns `AppError::Storage` if persistent storage cannot be opened.
    #[instrument(skip(config), fields(state_dir = %config.state_dir.display()))]
    pub fn init(config: &PortalConfig) -> Result<Self, AppError> {
        let persistent = FileStorage::open(&config.state_dir)?;
        Ok(Self::new(persistent, MemoryStorage::new()))
    }

    /// Stored token, if present and non-empty.
    ///
    /// # Errors
    /// Returns `AppError::Storage` if persistent storage cannot be read.
    pub fn token(&self) -> Result<Option<SecretString>, AppError> {
        Ok(self
            .persistent
            .get(ADMIN_TOKEN_KEY)?
            .filter(|token| !token.trim().is_empty())
            .map(SecretString::from))
    }

    /// Presence check only; an unreadable store counts as signed out.
    pub fn is_authenticated(&self) -> bool {
        match self.token() {
            Ok(token) => token.is_some(),
            Err(err) => {
                warn!("Failed to read session token: {err}");
                false
            }
        }
    }

    /// Admin profile, preferring the session store over persistent storage.
    ///
    /// # Errors
    /// Returns `AppError::Storage` if a store cannot be read.
    pub fn admin(&self) -> Result<Option<AdminData>, AppError> {
        let raw = match self.session.get(ADMIN_DATA_KEY)? {
            Some(raw) => Some(raw),
            None => self.persistent.get(ADMIN_DATA_KEY)?,
        };

        Ok(raw.and_then(|raw| match serde_json::from_str::<AdminData>(&raw) {
            Ok(admin) => Some(admin),
            Err(err) => {
                warn!("Ignoring malformed {ADMIN_DATA_KEY}: {err}");
                None
            }
        }))
    }

    /// Records a successful login: token and profile in persistent storage, profile
    /// mirrored in the session store.
    ///
    /// # Errors
    /// Returns `AppError` if encoding or any storage write fails; earlier writes are
    /// then rolled back.
    #[instrument(skip(self, token))]
    pub fn establish(&mut self, token: &SecretString, admin: &AdminData) -> Result<(), AppError> {
        let encoded = serde_json::to_string(admin)
            .map_err(|err| AppError::Serialization(format!("Failed to encode admin data: {err}")))?;

        let written = self
            .persistent
            .set(ADMIN_TOKEN_KEY, token.expose_secret())
            .and_then(|()| self.persistent.set(ADMIN_DATA_KEY, &encoded))
            .and_then(|()| self.session.set(ADMIN_DATA_KEY, &encoded));

        if let Err(err) = written {
            // No half-written session: a token without its profile must not survive.
            if let Err(clear_err) = self.clear() {
                warn!("Failed to roll back partial session: {clear_err}");
            }
            return Err(err);
        }

        debug!("session established");
        Ok(())
    }

    /// Removes the token and profile from both stores.
    ///
    /// # Errors
    /// Returns `AppError::Storage` if a store cannot be written.
    #[instrument(skip(self))]
    pub fn clear(&mut self) -> Result<(), AppError> {
        self.persistent.remove(ADMIN_TOKEN_KEY)?;
        self.persistent.remove(ADMIN_DATA_KEY)?;
        self.session.remove(ADMIN_DATA_KEY)?;

        debug!("session cleared");
        Ok(())
    }

    pub fn persistent(&self) -> &dyn Storage {
        self.persistent.as_ref()
    }

    pub fn session(&self) -> &dyn Storage {
        self.session.as_ref()
    }
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn memory_session() -> SessionContext {
        SessionContext::new(MemoryStorage::new(), MemoryStorage::new())
    }

    fn admin(name: &str) -> AdminData {
        AdminData {
            name: name.to_string(),
        }
    }

    #[test]
    fn establish_writes_both_stores() {
        let mut session = memory_session();
        session
            .establish(&SecretString::from("t1".to_string()), &admin("Admin A"))
            .unwrap();

        assert_eq!(
            session.persistent().get(ADMIN_TOKEN_KEY).unwrap(),
            Some("t1".to_string())
        );
        assert_eq!(
            session.persistent().get(ADMIN_DATA_KEY).unwrap(),
            Some(r#"{"name":"Admin A"}"#.to_string())
        );
        assert_eq!(
            session.session().get(ADMIN_DATA_KEY).unwrap(),
            Some(r#"{"name":"Admin A"}"#.to_string())
        );
        assert_eq!(session.session().get(ADMIN_TOKEN_KEY).unwrap(), None);
        assert!(session.is_authenticated());
    }

    #[test]
    fn empty_token_is_absent() {
        let mut persistent = MemoryStorage::new();
        persistent.set(ADMIN_TOKEN_KEY, "  ").unwrap();
        let session = SessionContext::new(persistent, MemoryStorage::new());

        assert!(session.token().unwrap().is_none());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn admin_falls_back_to_persistent_store() {
        let mut persistent = MemoryStorage::new();
        persistent
            .set(ADMIN_DATA_KEY, r#"{"name":"Stored"}"#)
            .unwrap();
        let session = SessionContext::new(persistent, MemoryStorage::new());
        assert_eq!(session.admin().unwrap(), Some(admin("Stored")));

        let mut live = MemoryStorage::new();
        live.set(ADMIN_DATA_KEY, r#"{"name":"Live"}"#).unwrap();
        let mut persistent = MemoryStorage::new();
        persistent
            .set(ADMIN_DATA_KEY, r#"{"name":"Stored"}"#)
            .unwrap();
        let session = SessionContext::new(persistent, live);
        assert_eq!(session.admin().unwrap(), Some(admin("Live")));
    }

    #[test]
    fn malformed_admin_data_is_ignored() {
        let mut persistent = MemoryStorage::new();
        persistent.set(ADMIN_DATA_KEY, "{broken").unwrap();
        let session = SessionContext::new(persistent, MemoryStorage::new());
        assert_eq!(session.admin().unwrap(), None);
    }

    #[test]
    fn clear_removes_everything() {
        let mut session = memory_session();
        session
            .establish(&SecretString::from("t1".to_string()), &admin("Admin A"))
            .unwrap();
        session.clear().unwrap();

        assert!(!session.is_authenticated());
        assert_eq!(session.admin().unwrap(), None);
        assert_eq!(session.persistent().get(ADMIN_DATA_KEY).unwrap(), None);
        assert_eq!(session.session().get(ADMIN_DATA_KEY).unwrap(), None);
    }

    /// Store that refuses writes to one key.
    struct RejectingStore {
        inner: MemoryStorage,
        rejected: &'static str,
    }

    impl Storage for RejectingStore {
        fn get(&self, key: &str) -> Result<Option<String>, AppError> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
            if key == self.rejected {
                return Err(AppError::Storage("disk full".to_string()));
            }
            self.inner.set(key, value)
        }

        fn remove(&mut self, key: &str) -> Result<(), AppError> {
            self.inner.remove(key)
        }
    }

    #[test]
    fn failed_establish_leaves_no_token_behind() {
        let persistent = RejectingStore {
            inner: MemoryStorage::new(),
            rejected: ADMIN_DATA_KEY,
        };
        let mut session = SessionContext::new(persistent, MemoryStorage::new());

        let result = session.establish(&SecretString::from("t1".to_string()), &admin("Admin A"));

        assert_eq!(result, Err(AppError::Storage("disk full".to_string())));
        assert!(!session.is_authenticated());
        assert_eq!(session.persistent().get(ADMIN_TOKEN_KEY).unwrap(), None);
        assert_eq!(session.session().get(ADMIN_DATA_KEY).unwrap(), None);
    }

    #[test]
    fn failed_session_mirror_rolls_back_persistent_writes() {
        let session_store = RejectingStore {
            inner: MemoryStorage::new(),
            rejected: ADMIN_DATA_KEY,
        };
        let mut session = SessionContext::new(MemoryStorage::new(), session_store);

        let result = session.establish(&SecretString::from("t1".to_string()), &admin("Admin A"));

        assert!(result.is_err());
        assert_eq!(session.persistent().get(ADMIN_TOKEN_KEY).unwrap(), None);
        assert_eq!(session.persistent().get(ADMIN_DATA_KEY).unwrap(), None);
    }

    #[test]
    fn init_reads_token_from_state_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = PortalConfig::default().with_state_dir(dir.path());

        {
            let mut session = SessionContext::init(&config).unwrap();
            session
                .establish(&SecretString::from("t1".to_string()), &admin("Admin A"))
                .unwrap();
        }

        let session = SessionContext::init(&config).unwrap();
        assert_eq!(
            session.token().unwrap().map(|t| t.expose_secret().to_string()),
            Some("t1".to_string())
        );
        // Session store does not survive the process; the profile falls back.
        assert_eq!(session.session().get(ADMIN_DATA_KEY).unwrap(), None);
        assert_eq!(session.admin().unwrap(), Some(admin("Admin A")));
    }

    #[test]
    fn debug_hides_token() {
        let mut session = memory_session();
        session
            .establish(&SecretString::from("t1".to_string()), &admin("Admin A"))
            .unwrap();
        let debug = format!("{session:?}");
        assert!(!debug.contains("t1"));
    }
}
