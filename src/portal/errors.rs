use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: Option<String> },
    Parse(String),
    Serialization(String),
    Storage(String),
}

impl AppError {
    /// Message shown in a view's error banner.
    ///
    /// Server rejections surface the response's `message` field verbatim, whitespace
    /// included, and fall back to the view-specific `fallback` when the body carried
    /// none or an empty one. Transport and parse
    /// failures surface their own message.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AppError::Http { message, .. } => message
                .as_deref()
                .filter(|message| !message.is_empty())
                .unwrap_or(fallback)
                .to_string(),
            AppError::Config(message)
            | AppError::Network(message)
            | AppError::Timeout(message)
            | AppError::Parse(message)
            | AppError::Serialization(message)
            | AppError::Storage(message) => {
                if message.trim().is_empty() {
                    GENERIC_ERROR_MESSAGE.to_string()
                } else {
                    message.clone()
                }
            }
        }
    }

    pub const fn status(&self) -> Option<u16> {
        match self {
            AppError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Fallback for failures that carry no message of their own.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, message } => match message {
                Some(message) => write!(formatter, "Request failed ({status}): {message}"),
                None => write!(formatter, "Request failed ({status})"),
            },
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
            AppError::Storage(message) => write!(formatter, "Storage error: {message}"),
        }
    }
}

impl std::error::Error for AppError {}
