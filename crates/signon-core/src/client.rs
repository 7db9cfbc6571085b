//! HTTP client for the server's form endpoints.
//!
//! The wire contract is the one the original page exposes: credentials go
//! out form-encoded via POST to the form's action path, and the response is
//! JSON with `success`, plus `redirect` on success or `message` on failure.
//! Non-2xx statuses and undecodable bodies are transport-level failures; the
//! caller renders those as the generic server error.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Credential payload built at submit time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Server verdict on a submission.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    /// Present iff `success` is true.
    #[serde(default)]
    pub redirect: Option<String>,
    /// Present iff `success` is false.
    #[serde(default)]
    pub message: Option<String>,
}

/// Failures below the login contract: the request never produced a
/// decodable verdict.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid endpoint url: {0}")]
    Url(#[from] url::ParseError),
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("malformed response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Client for submitting credential forms to one server.
#[derive(Debug, Clone)]
pub struct AuthClient {
    base_url: Url,
    http: reqwest::Client,
}

impl AuthClient {
    /// Creates a client for the given server base URL.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// The server base URL this client talks to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Submits form-encoded credentials to `action_path` and decodes the
    /// server's verdict.
    ///
    /// A response with `success: false` is an `Ok` here: the server spoke
    /// the contract, it just rejected the credentials.
    pub async fn submit(
        &self,
        action_path: &str,
        request: &LoginRequest,
    ) -> Result<LoginResponse, ClientError> {
        let url = self.base_url.join(action_path)?;
        tracing::debug!(%url, "submitting credential form");
        let response = self
            .http
            .post(url)
            .form(request)
            .send()
            .await
            .map_err(ClientError::Transport)?
            .error_for_status()
            .map_err(ClientError::Transport)?;
        response.json().await.map_err(ClientError::Decode)
    }

    /// Resolves a server-provided redirect against the base URL.
    ///
    /// Falls back to the raw value when it does not parse as a reference,
    /// so the caller always has something to show.
    pub fn resolve_redirect(&self, redirect: &str) -> String {
        self.base_url
            .join(redirect)
            .map_or_else(|_| redirect.to_string(), Into::into)
    }
}
