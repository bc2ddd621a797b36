//! Error types for the Chrome Web Store API client.
//!
//! This module contains the configuration errors raised while building a
//! [`WebStoreConfig`](crate::WebStoreConfig). Runtime failures of API calls
//! live in [`crate::clients::WebStoreError`].
//!
//! # Example
//!
//! ```rust
//! use chrome_webstore::{ClientId, ConfigError};
//!
//! let result = ClientId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyField { field: "clientId" })));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client.
///
/// Every variant that concerns a credential names the offending field using
/// the same key as [`ClientOptions`](crate::ClientOptions) (`id`, `clientId`,
/// `clientSecret`, `refreshToken`).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required field was never set.
    #[error("'{field}' is missing!")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A required field was set to an empty string.
    #[error("'{field}' is missing! An empty value was provided.")]
    EmptyField {
        /// The name of the empty field.
        field: &'static str,
    },

    /// The API host override is not a usable URL.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://www.googleapis.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}
