//! # Chrome Web Store API Rust client
//!
//! A client for the Chrome Web Store publishing API: upload a packaged
//! extension, publish it, and check its upload state.
//!
//! ## Overview
//!
//! - Validated credentials via [`WebStoreConfig`] and [`ClientOptions`]
//! - OAuth2 refresh-token grant via [`WebStoreClient::fetch_token`]
//! - Uploads of new and existing items via [`WebStoreClient::upload_new`]
//!   and [`WebStoreClient::upload_existing`]
//! - Publishing via [`WebStoreClient::publish`]
//! - Draft status checks via [`WebStoreClient::check_upload_status`]
//!
//! ## Quick Start
//!
//! ```rust
//! use chrome_webstore::{ClientOptions, WebStoreClient};
//!
//! let options = ClientOptions {
//!     id: Some("abcdefghijklmnopabcdefghijklmnop".to_string()),
//!     client_id: Some("my-client-id.apps.googleusercontent.com".to_string()),
//!     client_secret: Some("my-client-secret".to_string()),
//!     refresh_token: Some("my-refresh-token".to_string()),
//! };
//!
//! let client = WebStoreClient::from_options(options).unwrap();
//! assert_eq!(client.config().item_id().as_ref(), "abcdefghijklmnopabcdefghijklmnop");
//! ```
//!
//! ## Uploading and Publishing
//!
//! ```rust,ignore
//! use chrome_webstore::{Package, PublishResponse, PublishTarget};
//!
//! // Mint one token and reuse it for both calls
//! let token = client.fetch_token().await?;
//!
//! let item = client
//!     .upload_existing(Some(Package::open("extension.zip").await?), Some(&token))
//!     .await?;
//!
//! match client.publish(Some(PublishTarget::Default), Some(&token)).await? {
//!     PublishResponse::Success(success) => println!("{:?}", success.status),
//!     PublishResponse::Failure(failure) => eprintln!("{:?}", failure.error.message),
//! }
//! ```
//!
//! ## Logging
//!
//! Operations emit `tracing` events at debug level under the targets
//! `cws::token`, `cws::upload`, `cws::publish` and `cws::check`. Secrets are
//! masked in every `Debug` implementation.
//!
//! ## Design Principles
//!
//! - **No global state**: the client holds only its credentials
//! - **Fail-fast validation**: credentials are validated on construction
//! - **No token caching**: a token is fetched per call unless one is passed in
//! - **Raw responses**: store replies are returned as sent, including errors

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod items;

pub use auth::{AccessToken, TokenResponse};
pub use clients::{api_client, build_headers, Package, WebStoreClient, WebStoreError};
pub use config::{
    ClientId, ClientOptions, ClientSecret, HostUrl, ItemId, RefreshToken, WebStoreConfig,
    WebStoreConfigBuilder,
};
pub use error::ConfigError;
pub use items::{
    ItemError, PublishError, PublishErrorDetail, PublishFailure, PublishResponse, PublishStatus,
    PublishSuccess, PublishTarget, UploadResponse, UploadState,
};
