//! Client-side validation for the admin registration form. Errors are per field and
//! only block submission; they never reach the network.

use secrecy::{ExposeSecret, SecretString};
use std::collections::BTreeMap;
use std::fmt;

pub const MIN_PASSWORD_CHARS: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    pub const fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field-level error messages, at most one per field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn clear_field(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// Raw registration input as typed into the form.
#[derive(Debug, Default)]
pub struct RegistrationInput {
    pub name: String,
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
}

/// Validates registration input. An empty result means the form may be submitted.
pub fn validate_registration(input: &RegistrationInput) -> FieldErrors {
    let mut errors = FieldErrors::default();
    let password = input.password.expose_secret();
    let confirm = input.confirm_password.expose_secret();

    if input.name.trim().is_empty() {
        errors.insert(Field::Name, "Name is required");
    }
    if input.email.trim().is_empty() {
        errors.insert(Field::Email, "Email is required");
    }

    if password.is_empty() {
        errors.insert(Field::Password, "Password is required");
    } else if password.chars().count() < MIN_PASSWORD_CHARS {
        errors.insert(
            Field::Password,
            format!("Password must be at least {MIN_PASSWORD_CHARS} characters"),
        );
    }

    if password != confirm {
        errors.insert(Field::ConfirmPassword, "Passwords do not match");
    } else if confirm.is_empty() {
        errors.insert(Field::ConfirmPassword, "Please confirm your password");
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, email: &str, password: &str, confirm: &str) -> RegistrationInput {
        RegistrationInput {
            name: name.to_string(),
            email: email.to_string(),
            password: SecretString::from(password.to_string()),
            confirm_password: SecretString::from(confirm.to_string()),
        }
    }

    #[test]
    fn valid_input_has_no_errors() {
        let errors = validate_registration(&input("Admin B", "b@c.com", "abcdef", "abcdef"));
        assert!(errors.is_empty());
    }

    #[test]
    fn blank_name_is_required() {
        let errors = validate_registration(&input("   ", "x@y.com", "abcdef", "abcdef"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Name), Some("Name is required"));
    }

    #[test]
    fn blank_email_is_required() {
        let errors = validate_registration(&input("Admin", " ", "abcdef", "abcdef"));
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
    }

    #[test]
    fn short_password_is_rejected() {
        let errors = validate_registration(&input("Admin", "x@y.com", "abc", "abc"));
        assert_eq!(
            errors.get(Field::Password),
            Some("Password must be at least 6 characters")
        );
        assert_eq!(errors.get(Field::ConfirmPassword), None);
    }

    #[test]
    fn password_length_counts_characters() {
        let errors = validate_registration(&input("Admin", "x@y.com", "ñandú!", "ñandú!"));
        assert!(errors.is_empty());
    }

    #[test]
    fn mismatch_overrides_missing_confirmation() {
        let errors = validate_registration(&input("Admin", "x@y.com", "abcdef", ""));
        assert_eq!(
            errors.get(Field::ConfirmPassword),
            Some("Passwords do not match")
        );

        let errors = validate_registration(&input("Admin", "x@y.com", "abcdef", "abcdeg"));
        assert_eq!(
            errors.get(Field::ConfirmPassword),
            Some("Passwords do not match")
        );
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = validate_registration(&input("", "", "", ""));
        let fields: Vec<Field> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(
            fields,
            vec![
                Field::Name,
                Field::Email,
                Field::Password,
                Field::ConfirmPassword
            ]
        );
        assert_eq!(errors.get(Field::Password), Some("Password is required"));
        assert_eq!(
            errors.get(Field::ConfirmPassword),
            Some("Please confirm your password")
        );
    }

    #[test]
    fn field_names_match_form_keys() {
        assert_eq!(Field::ConfirmPassword.to_string(), "confirmPassword");
        assert_eq!(Field::Name.as_str(), "name");
    }
}
