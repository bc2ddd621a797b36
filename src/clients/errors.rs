//! Error types for Chrome Web Store API calls.
//!
//! # Example
//!
//! ```rust,ignore
//! use chrome_webstore::WebStoreError;
//!
//! match client.upload_existing(Some(package), None).await {
//!     Ok(item) => println!("upload state: {:?}", item.upload_state),
//!     Err(WebStoreError::NothingToUpload) => eprintln!("no package given"),
//!     Err(WebStoreError::Network(e)) => eprintln!("transport failed: {e}"),
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

use crate::error::ConfigError;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors returned by [`WebStoreClient`](crate::WebStoreClient) operations.
///
/// Non-2xx statuses are not errors: the store's JSON body is deserialized
/// and handed back like any other reply.
#[derive(Debug, Error)]
pub enum WebStoreError {
    /// An upload was requested without a package.
    #[error("Nothing to upload!")]
    NothingToUpload,

    /// The token endpoint replied without an `access_token` field.
    #[error("Token response did not contain an access token")]
    MissingAccessToken,

    /// The reply body could not be read as the expected JSON.
    #[error("Failed to decode response (status {status}): {message}")]
    Decode {
        /// HTTP status code of the response.
        status: u16,
        /// The deserializer's message.
        message: String,
        /// The raw response body.
        body: String,
    },

    /// The request could not be sent or its body could not be read.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The client could not be configured.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl WebStoreError {
    /// Reads a response body and deserializes it as JSON, whatever the status.
    pub(crate) async fn decode_json<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, Self> {
        let status = response.status().as_u16();
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| Self::Decode {
            status,
            message: e.to_string(),
            body,
        })
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WebStoreError>();
};
