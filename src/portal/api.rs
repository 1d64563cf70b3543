//! HTTP helpers for the admin auth API. Views call [`ApiClient::login`] and
//! [`ApiClient::register`]; request setup, URL building and error mapping live here so
//! route code never touches headers. The client does not store tokens; callers pass
//! the bearer token per request.

use super::{
    errors::AppError,
    types::{ErrorBody, LoginRequest, LoginResponse, RegisterRequest},
};
use crate::APP_USER_AGENT;
use reqwest::{Client, RequestBuilder, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

pub const LOGIN_PATH: &str = "/api/admin/auth/login";
pub const REGISTER_PATH: &str = "/api/admin/auth/register";

#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Builds a client for `base_url`. Without a timeout, requests rely on the
    /// transport's defaults.
    ///
    /// # Errors
    /// Returns `AppError::Config` if the base URL is not an absolute http(s) URL or the
    /// HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, AppError> {
        let parsed = Url::parse(base_url.trim())
            .map_err(|err| AppError::Config(format!("Invalid API base URL {base_url}: {err}")))?;

        match parsed.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(AppError::Config(format!(
                    "Unsupported API URL scheme: {scheme}"
                )))
            }
        }

        let mut builder = Client::builder().user_agent(APP_USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| AppError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim().to_string(),
        })
    }

    /// Submits credentials and returns the issued token and admin name.
    ///
    /// # Errors
    /// Returns an `AppError` for transport failures, non-2xx responses or an
    /// undecodable success body.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AppError> {
        let url = build_url(&self.base_url, LOGIN_PATH);
        let builder = self.client.post(&url).json(request);
        let response = send(builder).await?;

        handle_json_response(response).await
    }

    /// Registers a new admin, authenticated by the caller's bearer token.
    ///
    /// # Errors
    /// Returns an `AppError` for transport failures or non-2xx responses.
    #[instrument(skip(self, request, token), fields(email = %request.email))]
    pub async fn register(
        &self,
        request: &RegisterRequest,
        token: &SecretString,
    ) -> Result<(), AppError> {
        let url = build_url(&self.base_url, REGISTER_PATH);
        let builder = self
            .client
            .post(&url)
            .bearer_auth(token.expose_secret())
            .json(request);
        let response = send(builder).await?;

        handle_empty_response(response).await
    }
}

/// Builds a URL from an explicit base URL and the provided path.
fn build_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Maps transport errors into user-facing `AppError` variants with timeout detection.
fn map_request_error(err: &reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else if err.is_builder() {
        AppError::Serialization(format!("Failed to build request: {err}"))
    } else {
        AppError::Network(format!("Unable to reach the server: {err}"))
    }
}

async fn send(builder: RequestBuilder) -> Result<Response, AppError> {
    let response = builder
        .send()
        .await
        .map_err(|err| map_request_error(&err))?;
    debug!(status = %response.status(), "auth API responded");
    Ok(response)
}

/// Parses JSON responses and surfaces HTTP errors with their `message` field.
async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    if response.status().is_success() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        Err(http_error(response).await)
    }
}

async fn handle_empty_response(response: Response) -> Result<(), AppError> {
    if response.status().is_success() {
        Ok(())
    } else {
        Err(http_error(response).await)
    }
}

async fn http_error(response: Response) -> AppError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    AppError::Http {
        status,
        message: extract_message(&body),
    }
}

/// Pulls the `message` field out of an error body as sent. Missing or empty means none.
fn extract_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed.message.filter(|message| !message.is_empty())
}
