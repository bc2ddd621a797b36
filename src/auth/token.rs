//! Refresh-token grant against the Google OAuth2 token endpoint.
//!
//! # Example
//!
//! ```rust,ignore
//! use chrome_webstore::auth::refresh_access_token;
//!
//! let http = reqwest::Client::new();
//! let response = refresh_access_token(&http, &config).await?;
//! if let Some(token) = response.access_token() {
//!     println!("token expires at {:?}", response.expires_at());
//! }
//! ```

use crate::clients::{endpoints, WebStoreError};
use crate::config::WebStoreConfig;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Grant type for refresh token requests.
const REFRESH_TOKEN_GRANT_TYPE: &str = "refresh_token";

const LOG_TARGET: &str = "cws::token";

/// Request body for token refresh.
#[derive(Debug, Serialize)]
struct TokenRefreshRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    refresh_token: &'a str,
    grant_type: &'a str,
}

/// A short-lived OAuth2 bearer token.
///
/// The value is opaque to the client and consumed once per request. `Debug`
/// masks it; use [`AccessToken::as_ref`] when the raw value is needed.
///
/// ```rust
/// use chrome_webstore::AccessToken;
///
/// let token = AccessToken::new("ya29.token");
/// assert_eq!(token.as_ref(), "ya29.token");
/// assert_eq!(format!("{token:?}"), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wraps an already-resolved bearer token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for AccessToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for AccessToken {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// The reply of the Google token endpoint.
///
/// Every field is optional: the endpoint's answer is passed through as-is
/// and callers decide what a missing field means.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    /// The freshly minted bearer token.
    #[serde(default)]
    pub access_token: Option<String>,
    /// Token type, normally `Bearer`.
    #[serde(default)]
    pub token_type: Option<String>,
    /// Lifetime of the access token in seconds.
    #[serde(default)]
    pub expires_in: Option<i64>,
    /// A rotated refresh token, when Google issues one.
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(skip)]
    received_at: Option<DateTime<Utc>>,
}

impl TokenResponse {
    /// Returns the access token, if the endpoint returned one.
    #[must_use]
    pub fn access_token(&self) -> Option<AccessToken> {
        self.access_token.as_deref().map(AccessToken::from)
    }

    /// Returns when the access token expires, computed from `expires_in`
    /// relative to the moment the response was received.
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let received_at = self.received_at?;
        self.expires_in
            .and_then(Duration::try_seconds)
            .and_then(|lifetime| received_at.checked_add_signed(lifetime))
    }
}

impl fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mask = |value: &Option<String>| value.as_ref().map(|_| "*****");
        f.debug_struct("TokenResponse")
            .field("access_token", &mask(&self.access_token))
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("refresh_token", &mask(&self.refresh_token))
            .finish()
    }
}

/// Exchanges the configured refresh token for a new access token.
///
/// Sends a single `POST` to `{api_host}/oauth2/v4/token` with a JSON body
/// holding `client_id`, `client_secret`, `refresh_token` and
/// `grant_type: "refresh_token"`. The status code is not inspected; any JSON
/// reply is returned.
///
/// # Errors
///
/// - [`WebStoreError::Network`] if the request cannot be sent or read
/// - [`WebStoreError::Decode`] if the reply is not JSON
pub async fn refresh_access_token(
    http: &reqwest::Client,
    config: &WebStoreConfig,
) -> Result<TokenResponse, WebStoreError> {
    let url = endpoints::token_url(config.api_host());
    let request_body = TokenRefreshRequest {
        client_id: config.client_id().as_ref(),
        client_secret: config.client_secret().as_ref(),
        refresh_token: config.refresh_token().as_ref(),
        grant_type: REFRESH_TOKEN_GRANT_TYPE,
    };

    tracing::debug!(
        target: LOG_TARGET,
        host = config.api_host().host_name(),
        "fetching access token from google"
    );
    let response = http.post(&url).json(&request_body).send().await?;
    tracing::debug!(target: LOG_TARGET, status = %response.status(), "got token response from google");

    let mut token_response: TokenResponse = WebStoreError::decode_json(response).await?;
    token_response.received_at = Some(Utc::now());
    tracing::debug!(target: LOG_TARGET, response = ?token_response, "token response");

    Ok(token_response)
}
