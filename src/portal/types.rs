//! Wire types for the admin auth API and the stored admin profile.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize, Serializer};

fn expose<S: Serializer>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(secret.expose_secret())
}

/// Body of `POST /api/admin/auth/login`.
#[derive(Serialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    #[serde(serialize_with = "expose")]
    pub password: SecretString,
}

/// Successful login response.
#[derive(Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub name: String,
}

impl std::fmt::Debug for LoginResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginResponse")
            .field("token", &"***")
            .field("name", &self.name)
            .finish()
    }
}

/// Body of `POST /api/admin/auth/register`. The confirmation password never leaves the
/// client.
#[derive(Serialize, Debug)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    #[serde(serialize_with = "expose")]
    pub password: SecretString,
}

/// Error body returned by the auth API on non-2xx responses.
#[derive(Deserialize, Debug, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Admin profile stored under `adminData`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AdminData {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn login_request_serializes_password() {
        let request = LoginRequest {
            email: "a@b.com".to_string(),
            password: SecretString::from("secret1".to_string()),
        };
        let value = serde_json::to_value(&request).unwrap_or_default();
        assert_eq!(value, json!({ "email": "a@b.com", "password": "secret1" }));
    }

    #[test]
    fn register_request_has_no_confirmation() {
        let request = RegisterRequest {
            name: "Admin B".to_string(),
            email: "b@c.com".to_string(),
            password: SecretString::from("abcdef".to_string()),
        };
        let value = serde_json::to_value(&request).unwrap_or_default();
        assert_eq!(
            value,
            json!({ "name": "Admin B", "email": "b@c.com", "password": "abcdef" })
        );
    }

    #[test]
    fn login_response_debug_hides_token() {
        let response = LoginResponse {
            token: "t1".to_string(),
            name: "Admin A".to_string(),
        };
        let debug = format!("{response:?}");
        assert!(!debug.contains("t1"));
        assert!(debug.contains("Admin A"));
    }

    #[test]
    fn admin_data_encoding() {
        let data = AdminData {
            name: "Admin A".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&data).unwrap_or_default(),
            r#"{"name":"Admin A"}"#
        );
    }
}
