//! The Chrome Web Store API client.
//!
//! # Token Sourcing
//!
//! Every authenticated operation takes an `Option<&AccessToken>`. With
//! `Some(token)` the token is used as-is; with `None` the operation first
//! fetches a fresh token through [`WebStoreClient::fetch_token`]. Tokens are
//! never cached, so two calls with `None` mint two tokens. To reuse one:
//!
//! ```rust,ignore
//! let token = client.fetch_token().await?;
//! client.upload_existing(Some(Package::open("ext.zip").await?), Some(&token)).await?;
//! client.publish(None, Some(&token)).await?;
//! ```

use std::borrow::Cow;
use std::collections::HashMap;

use crate::auth::{refresh_access_token, AccessToken, TokenResponse};
use crate::clients::endpoints;
use crate::clients::errors::WebStoreError;
use crate::clients::package::Package;
use crate::config::{ClientOptions, WebStoreConfig};
use crate::error::ConfigError;
use crate::items::{PublishResponse, PublishTarget, UploadResponse};

/// Value of the `x-goog-api-version` header sent with every call.
pub const GOOG_API_VERSION: &str = "2";

const UPLOAD_TARGET: &str = "cws::upload";
const PUBLISH_TARGET: &str = "cws::publish";
const CHECK_TARGET: &str = "cws::check";

/// Builds the headers for an authenticated store call.
///
/// Returns exactly `Authorization: Bearer <token>` and
/// `x-goog-api-version: 2`.
///
/// ```rust
/// use chrome_webstore::{build_headers, AccessToken};
///
/// let headers = build_headers(&AccessToken::new("xyz"));
/// assert_eq!(headers.len(), 2);
/// assert_eq!(headers["Authorization"], "Bearer xyz");
/// assert_eq!(headers["x-goog-api-version"], "2");
/// ```
#[must_use]
pub fn build_headers(token: &AccessToken) -> HashMap<String, String> {
    HashMap::from([
        (
            "Authorization".to_string(),
            format!("Bearer {}", token.as_ref()),
        ),
        (
            "x-goog-api-version".to_string(),
            GOOG_API_VERSION.to_string(),
        ),
    ])
}

fn log_package(package: &Package) {
    if package.is_empty() {
        tracing::warn!(target: UPLOAD_TARGET, "uploading an empty package");
    }
}

/// Client for one Chrome Web Store item.
///
/// The client is bound to the credentials of a [`WebStoreConfig`] and holds
/// no other state. It is cheap to clone and safe to share across tasks;
/// concurrent operations are independent requests.
///
/// # Example
///
/// ```rust,ignore
/// use chrome_webstore::{ClientOptions, Package, PublishTarget, WebStoreClient};
///
/// let client = WebStoreClient::from_options(options)?;
///
/// let item = client
///     .upload_existing(Some(Package::open("extension.zip").await?), None)
///     .await?;
/// println!("upload state: {:?}", item.upload_state);
///
/// let published = client.publish(Some(PublishTarget::TrustedUsers), None).await?;
/// println!("published: {}", published.is_success());
/// ```
#[derive(Clone, Debug)]
pub struct WebStoreClient {
    config: WebStoreConfig,
    http: reqwest::Client,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WebStoreClient>();
};

impl WebStoreClient {
    /// Creates a client bound to `config`.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: WebStoreConfig) -> Self {
        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");
        Self::with_http_client(config, http)
    }

    /// Creates a client that sends requests through `http`.
    ///
    /// Timeouts, proxies and other transport policy belong on `http`; the
    /// store client adds none of its own.
    #[must_use]
    pub const fn with_http_client(config: WebStoreConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    /// Validates raw credentials and creates a client.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first absent or empty credential.
    pub fn from_options(options: ClientOptions) -> Result<Self, ConfigError> {
        WebStoreConfig::try_from(options).map(Self::new)
    }

    /// Returns the credentials this client is bound to.
    #[must_use]
    pub const fn config(&self) -> &WebStoreConfig {
        &self.config
    }

    /// Exchanges the refresh token and returns the token endpoint's reply
    /// without interpreting it.
    ///
    /// # Errors
    ///
    /// Returns [`WebStoreError::Network`] or [`WebStoreError::Decode`].
    pub async fn fetch_token_response(&self) -> Result<TokenResponse, WebStoreError> {
        refresh_access_token(&self.http, &self.config).await
    }

    /// Gets an OAuth2 access token.
    ///
    /// # Errors
    ///
    /// Returns [`WebStoreError::MissingAccessToken`] if the reply has no
    /// `access_token`, plus the errors of
    /// [`fetch_token_response`](Self::fetch_token_response).
    pub async fn fetch_token(&self) -> Result<AccessToken, WebStoreError> {
        self.fetch_token_response()
            .await?
            .access_token()
            .ok_or(WebStoreError::MissingAccessToken)
    }

    /// Uploads a package as a new store item.
    ///
    /// Sends `POST /upload/chromewebstore/v1.1/items` with the package as
    /// body.
    ///
    /// # Errors
    ///
    /// Returns [`WebStoreError::NothingToUpload`] for `None` before any
    /// request is made, otherwise any transport or decode error.
    pub async fn upload_new(
        &self,
        package: Option<Package>,
        token: Option<&AccessToken>,
    ) -> Result<UploadResponse, WebStoreError> {
        let package = package.ok_or(WebStoreError::NothingToUpload)?;
        let token = self.resolve_token(token).await?;

        log_package(&package);
        tracing::debug!(
            target: UPLOAD_TARGET,
            bytes = package.len(),
            "uploading new package to chrome store"
        );
        let request = self
            .http
            .post(endpoints::upload_new_url(self.config.api_host()))
            .body(package.into_body());
        let response: UploadResponse = Self::send(request, &token).await?;
        tracing::debug!(target: UPLOAD_TARGET, ?response, "finished uploading new package");

        Ok(response)
    }

    /// Uploads a package to update the bound store item.
    ///
    /// Sends `PUT /upload/chromewebstore/v1.1/items/{itemId}` with the
    /// package as body.
    ///
    /// # Errors
    ///
    /// Returns [`WebStoreError::NothingToUpload`] for `None` before any
    /// request is made, otherwise any transport or decode error.
    pub async fn upload_existing(
        &self,
        package: Option<Package>,
        token: Option<&AccessToken>,
    ) -> Result<UploadResponse, WebStoreError> {
        let package = package.ok_or(WebStoreError::NothingToUpload)?;
        let token = self.resolve_token(token).await?;

        log_package(&package);
        tracing::debug!(
            target: UPLOAD_TARGET,
            item_id = %self.config.item_id(),
            bytes = package.len(),
            "uploading existing package to chrome store"
        );
        let request = self
            .http
            .put(endpoints::upload_existing_url(
                self.config.api_host(),
                self.config.item_id(),
            ))
            .body(package.into_body());
        let response: UploadResponse = Self::send(request, &token).await?;
        tracing::debug!(target: UPLOAD_TARGET, ?response, "finished uploading existing package");

        Ok(response)
    }

    /// Publishes the bound item to `target` (default: everyone).
    ///
    /// Sends `POST /chromewebstore/v1.1/items/{itemId}/publish` with no body.
    /// A rejected publish comes back as [`PublishResponse::Failure`], not as
    /// an `Err`.
    ///
    /// # Errors
    ///
    /// Returns any transport or decode error.
    pub async fn publish(
        &self,
        target: Option<PublishTarget>,
        token: Option<&AccessToken>,
    ) -> Result<PublishResponse, WebStoreError> {
        let target = target.unwrap_or_default();
        let token = self.resolve_token(token).await?;

        tracing::debug!(
            target: PUBLISH_TARGET,
            publish_target = %target,
            "publishing package on chrome store"
        );
        let request = self.http.post(endpoints::publish_url(
            self.config.api_host(),
            self.config.item_id(),
            target,
        ));
        let response: PublishResponse = Self::send(request, &token).await?;
        tracing::debug!(target: PUBLISH_TARGET, ?response, "done publishing package");

        Ok(response)
    }

    /// Fetches the draft upload state of the bound item.
    ///
    /// Sends `GET /chromewebstore/v1.1/items/{itemId}?projection=draft`.
    ///
    /// # Errors
    ///
    /// Returns any transport or decode error.
    pub async fn check_upload_status(
        &self,
        token: Option<&AccessToken>,
    ) -> Result<UploadResponse, WebStoreError> {
        let token = self.resolve_token(token).await?;

        tracing::debug!(target: CHECK_TARGET, "checking package upload status on chrome store");
        let request = self.http.get(endpoints::check_status_url(
            self.config.api_host(),
            self.config.item_id(),
        ));
        let response: UploadResponse = Self::send(request, &token).await?;
        tracing::debug!(target: CHECK_TARGET, ?response, "done checking upload status");

        Ok(response)
    }

    /// Uses the given token, or fetches a fresh one.
    async fn resolve_token<'a>(
        &self,
        token: Option<&'a AccessToken>,
    ) -> Result<Cow<'a, AccessToken>, WebStoreError> {
        match token {
            Some(token) => Ok(Cow::Borrowed(token)),
            None => self.fetch_token().await.map(Cow::Owned),
        }
    }

    /// Attaches the auth headers, sends once, and decodes the JSON reply.
    async fn send<T: serde::de::DeserializeOwned>(
        request: reqwest::RequestBuilder,
        token: &AccessToken,
    ) -> Result<T, WebStoreError> {
        let request = build_headers(token)
            .into_iter()
            .fold(request, |request, (name, value)| request.header(name, value));
        let response = request.send().await?;
        WebStoreError::decode_json(response).await
    }
}

/// Creates a [`WebStoreClient`]; equivalent to [`WebStoreClient::new`].
#[must_use]
pub fn api_client(config: WebStoreConfig) -> WebStoreClient {
    WebStoreClient::new(config)
}
