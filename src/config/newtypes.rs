//! Validated newtype wrappers for configuration values.
//!
//! Each credential is checked for emptiness on construction. Secrets mask
//! their value in `Debug` output so a logged config never leaks them.

use crate::error::ConfigError;
use std::fmt;

fn non_empty(value: impl Into<String>, field: &'static str) -> Result<String, ConfigError> {
    let value = value.into();
    if value.is_empty() {
        return Err(ConfigError::EmptyField { field });
    }
    Ok(value)
}

/// The identifier of a Chrome Web Store item (extension or app ID).
///
/// # Example
///
/// ```rust
/// use chrome_webstore::ItemId;
///
/// let id = ItemId::new("abcdefghijklmnopabcdefghijklmnop").unwrap();
/// assert_eq!(id.as_ref(), "abcdefghijklmnopabcdefghijklmnop");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemId(String);

impl ItemId {
    /// Creates a new validated item ID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyField`] if the ID is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        non_empty(id, "id").map(Self)
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An OAuth2 client ID from the Google API Console.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientId(String);

impl ClientId {
    /// Creates a new validated client ID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyField`] if the ID is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        non_empty(id, "clientId").map(Self)
    }
}

impl AsRef<str> for ClientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// An OAuth2 client secret from the Google API Console.
///
/// The `Debug` implementation masks the value.
///
/// ```rust
/// use chrome_webstore::ClientSecret;
///
/// let secret = ClientSecret::new("shh").unwrap();
/// assert_eq!(format!("{:?}", secret), "ClientSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ClientSecret(String);

impl ClientSecret {
    /// Creates a new validated client secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyField`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        non_empty(secret, "clientSecret").map(Self)
    }
}

impl AsRef<str> for ClientSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ClientSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClientSecret(*****)")
    }
}

/// A long-lived OAuth2 refresh token used to mint access tokens.
///
/// The `Debug` implementation masks the value.
#[derive(Clone, PartialEq, Eq)]
pub struct RefreshToken(String);

impl RefreshToken {
    /// Creates a new validated refresh token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyField`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        non_empty(token, "refreshToken").map(Self)
    }
}

impl AsRef<str> for RefreshToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RefreshToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RefreshToken(*****)")
    }
}

/// A validated base URL for the Google APIs host.
///
/// Only the scheme and host are checked; a trailing slash is dropped so
/// endpoint paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use chrome_webstore::HostUrl;
///
/// let url = HostUrl::new("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(url.host_name(), "127.0.0.1");
/// assert_eq!(url.as_ref(), "http://127.0.0.1:8080");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl {
    url: String,
    host_start: usize,
    host_end: usize,
}

impl HostUrl {
    /// The production Google APIs host.
    pub const GOOGLE_APIS: &'static str = "https://www.googleapis.com";

    /// Creates a new validated host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL has no scheme or host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidHostUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);
        if host_end == host_start {
            return Err(invalid());
        }

        Ok(Self {
            url,
            host_start,
            host_end,
        })
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl Default for HostUrl {
    fn default() -> Self {
        Self {
            url: Self::GOOGLE_APIS.to_string(),
            host_start: 8,
            host_end: Self::GOOGLE_APIS.len(),
        }
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_reject_empty_strings() {
        assert_eq!(
            ItemId::new(""),
            Err(ConfigError::EmptyField { field: "id" })
        );
        assert_eq!(
            ClientId::new(""),
            Err(ConfigError::EmptyField { field: "clientId" })
        );
        assert_eq!(
            ClientSecret::new(""),
            Err(ConfigError::EmptyField {
                field: "clientSecret"
            })
        );
        assert_eq!(
            RefreshToken::new(""),
            Err(ConfigError::EmptyField {
                field: "refreshToken"
            })
        );
    }

    #[test]
    fn test_secrets_are_masked_in_debug() {
        let secret = ClientSecret::new("super-secret").unwrap();
        let token = RefreshToken::new("1//refresh").unwrap();

        assert_eq!(format!("{secret:?}"), "ClientSecret(*****)");
        assert_eq!(format!("{token:?}"), "RefreshToken(*****)");
        assert!(!format!("{secret:?}{token:?}").contains("super-secret"));
    }

    #[test]
    fn test_item_id_is_not_masked() {
        let id = ItemId::new("my-item").unwrap();
        assert!(format!("{id:?}").contains("my-item"));
        assert_eq!(id.to_string(), "my-item");
    }

    #[test]
    fn test_default_host_url_is_google_apis() {
        let url = HostUrl::default();
        assert_eq!(url.as_ref(), "https://www.googleapis.com");
        assert_eq!(url.host_name(), "www.googleapis.com");
        assert_eq!(url, HostUrl::new("https://www.googleapis.com").unwrap());
    }

    #[test]
    fn test_host_url_strips_trailing_slash() {
        let url = HostUrl::new("http://localhost:3000/").unwrap();
        assert_eq!(url.as_ref(), "http://localhost:3000");
        assert_eq!(url.host_name(), "localhost");
    }

    #[test]
    fn test_host_url_rejects_invalid() {
        assert!(HostUrl::new("www.googleapis.com").is_err());
        assert!(HostUrl::new("https://").is_err());
        assert!(HostUrl::new("://example.com").is_err());
        assert!(HostUrl::new("https://:8080").is_err());
    }
}
