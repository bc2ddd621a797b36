//! Configuration types for the Chrome Web Store API client.
//!
//! # Overview
//!
//! - [`WebStoreConfig`]: the immutable credential bundle a client is bound to
//! - [`WebStoreConfigBuilder`]: a builder for constructing [`WebStoreConfig`]
//! - [`ClientOptions`]: the raw, deserializable record of the four credentials
//! - Validated newtypes: [`ItemId`], [`ClientId`], [`ClientSecret`],
//!   [`RefreshToken`] and [`HostUrl`]
//!
//! # Example
//!
//! ```rust
//! use chrome_webstore::{ClientId, ClientSecret, ItemId, RefreshToken, WebStoreConfig};
//!
//! let config = WebStoreConfig::builder()
//!     .item_id(ItemId::new("my-extension-id").unwrap())
//!     .client_id(ClientId::new("my-client-id").unwrap())
//!     .client_secret(ClientSecret::new("my-secret").unwrap())
//!     .refresh_token(RefreshToken::new("my-refresh-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.item_id().as_ref(), "my-extension-id");
//! ```

mod newtypes;

pub use newtypes::{ClientId, ClientSecret, HostUrl, ItemId, RefreshToken};

use crate::error::ConfigError;
use serde::Deserialize;
use std::fmt;

/// The credentials a [`WebStoreClient`](crate::WebStoreClient) is bound to.
///
/// All four credentials are guaranteed non-empty. The API host defaults to
/// `https://www.googleapis.com` and only needs overriding when talking to a
/// proxy or a mock server.
///
/// # Thread Safety
///
/// `WebStoreConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WebStoreConfig {
    item_id: ItemId,
    client_id: ClientId,
    client_secret: ClientSecret,
    refresh_token: RefreshToken,
    api_host: HostUrl,
}

impl WebStoreConfig {
    /// Creates a new builder for constructing a `WebStoreConfig`.
    #[must_use]
    pub fn builder() -> WebStoreConfigBuilder {
        WebStoreConfigBuilder::new()
    }

    /// Returns the ID of the store item this config acts on.
    #[must_use]
    pub const fn item_id(&self) -> &ItemId {
        &self.item_id
    }

    /// Returns the OAuth2 client ID.
    #[must_use]
    pub const fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Returns the OAuth2 client secret.
    #[must_use]
    pub const fn client_secret(&self) -> &ClientSecret {
        &self.client_secret
    }

    /// Returns the refresh token.
    #[must_use]
    pub const fn refresh_token(&self) -> &RefreshToken {
        &self.refresh_token
    }

    /// Returns the base URL every endpoint is resolved against.
    #[must_use]
    pub const fn api_host(&self) -> &HostUrl {
        &self.api_host
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WebStoreConfig>();
};

impl TryFrom<ClientOptions> for WebStoreConfig {
    type Error = ConfigError;

    fn try_from(options: ClientOptions) -> Result<Self, Self::Error> {
        let missing = |field| ConfigError::MissingRequiredField { field };

        let item_id = ItemId::new(options.id.ok_or_else(|| missing("id"))?)?;
        let client_id = ClientId::new(options.client_id.ok_or_else(|| missing("clientId"))?)?;
        let client_secret = ClientSecret::new(
            options
                .client_secret
                .ok_or_else(|| missing("clientSecret"))?,
        )?;
        let refresh_token = RefreshToken::new(
            options
                .refresh_token
                .ok_or_else(|| missing("refreshToken"))?,
        )?;

        Self::builder()
            .item_id(item_id)
            .client_id(client_id)
            .client_secret(client_secret)
            .refresh_token(refresh_token)
            .build()
    }
}

/// The four credentials as plain strings.
///
/// This is the shape credentials usually arrive in from a JSON file or a CI
/// secret store. Field names follow the camelCase keys used by the Chrome Web
/// Store documentation. Convert with [`WebStoreConfig::try_from`].
///
/// Fields are validated in order: `id`, `clientId`, `clientSecret`,
/// `refreshToken`. The first absent or empty one is reported.
///
/// ```rust
/// use chrome_webstore::{ClientOptions, ConfigError, WebStoreConfig};
///
/// let options: ClientOptions = serde_json::from_str(
///     r#"{"id": "item", "clientId": "cid", "clientSecret": "", "refreshToken": "rt"}"#,
/// ).unwrap();
///
/// assert_eq!(
///     WebStoreConfig::try_from(options),
///     Err(ConfigError::EmptyField { field: "clientSecret" }),
/// );
/// ```
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientOptions {
    /// ID of the Chrome Web Store item.
    pub id: Option<String>,
    /// Client ID from the Google API Console.
    pub client_id: Option<String>,
    /// Client secret from the Google API Console.
    pub client_secret: Option<String>,
    /// Refresh token from the Google API.
    pub refresh_token: Option<String>,
}

impl fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mask = |value: &Option<String>| value.as_ref().map(|_| "*****");
        f.debug_struct("ClientOptions")
            .field("id", &self.id)
            .field("client_id", &self.client_id)
            .field("client_secret", &mask(&self.client_secret))
            .field("refresh_token", &mask(&self.refresh_token))
            .finish()
    }
}

/// Builder for constructing [`WebStoreConfig`] instances.
///
/// All four credentials are required. `api_host` defaults to
/// [`HostUrl::GOOGLE_APIS`].
#[derive(Debug, Default)]
pub struct WebStoreConfigBuilder {
    item_id: Option<ItemId>,
    client_id: Option<ClientId>,
    client_secret: Option<ClientSecret>,
    refresh_token: Option<RefreshToken>,
    api_host: Option<HostUrl>,
}

impl WebStoreConfigBuilder {
    /// Creates a new builder with no fields set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the store item ID (required).
    #[must_use]
    pub fn item_id(mut self, item_id: ItemId) -> Self {
        self.item_id = Some(item_id);
        self
    }

    /// Sets the OAuth2 client ID (required).
    #[must_use]
    pub fn client_id(mut self, client_id: ClientId) -> Self {
        self.client_id = Some(client_id);
        self
    }

    /// Sets the OAuth2 client secret (required).
    #[must_use]
    pub fn client_secret(mut self, client_secret: ClientSecret) -> Self {
        self.client_secret = Some(client_secret);
        self
    }

    /// Sets the refresh token (required).
    #[must_use]
    pub fn refresh_token(mut self, refresh_token: RefreshToken) -> Self {
        self.refresh_token = Some(refresh_token);
        self
    }

    /// Overrides the API host, e.g. to point at a mock server.
    #[must_use]
    pub fn api_host(mut self, api_host: HostUrl) -> Self {
        self.api_host = Some(api_host);
        self
    }

    /// Builds the [`WebStoreConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] naming the first
    /// credential that was not set.
    pub fn build(self) -> Result<WebStoreConfig, ConfigError> {
        let item_id = self
            .item_id
            .ok_or(ConfigError::MissingRequiredField { field: "id" })?;
        let client_id = self
            .client_id
            .ok_or(ConfigError::MissingRequiredField { field: "clientId" })?;
        let client_secret = self
            .client_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "clientSecret",
            })?;
        let refresh_token = self
            .refresh_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "refreshToken",
            })?;

        Ok(WebStoreConfig {
            item_id,
            client_id,
            client_secret,
            refresh_token,
            api_host: self.api_host.unwrap_or_default(),
        })
    }
}
