//! HTTP client layer for the Chrome Web Store API.
//!
//! # Overview
//!
//! - [`WebStoreClient`]: the client bound to one store item
//! - [`api_client`]: factory function equivalent to [`WebStoreClient::new`]
//! - [`build_headers`]: the authorization-header contract
//! - [`Package`]: an upload body
//! - [`WebStoreError`]: runtime errors of API calls
//! - [`endpoints`]: URL builders for every store endpoint
//!
//! # Behavior
//!
//! Each operation makes exactly one request (plus one token request when no
//! token is supplied). There are no retries, no rate limiting, and no
//! internal timeouts; configure those on the `reqwest::Client` passed to
//! [`WebStoreClient::with_http_client`] if needed.

mod client;
pub mod endpoints;
mod errors;
mod package;

pub use client::{api_client, build_headers, WebStoreClient, GOOG_API_VERSION};
pub use errors::WebStoreError;
pub use package::Package;
