//! OAuth2 token handling for the Chrome Web Store API.
//!
//! The store accepts short-lived bearer tokens minted from a long-lived
//! refresh token. This module provides:
//!
//! - [`AccessToken`]: an opaque bearer token with masked `Debug` output
//! - [`TokenResponse`]: the raw reply of the Google token endpoint
//! - [`refresh_access_token`]: the refresh-token grant itself
//!
//! Tokens are never cached. Callers that want to reuse one across several
//! operations fetch it once with
//! [`WebStoreClient::fetch_token`](crate::WebStoreClient::fetch_token) and
//! pass it explicitly.

mod token;

pub use token::{refresh_access_token, AccessToken, TokenResponse};
