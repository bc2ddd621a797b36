//! URL construction for the Chrome Web Store API.
//!
//! Every builder takes the configured API host so the same paths work
//! against production and against a mock server.

use crate::config::{HostUrl, ItemId};
use crate::items::PublishTarget;

const TOKEN_PATH: &str = "/oauth2/v4/token";
const UPLOAD_PATH: &str = "/upload/chromewebstore/v1.1/items";
const ITEMS_PATH: &str = "/chromewebstore/v1.1/items";

/// `POST` target for the refresh-token grant.
#[must_use]
pub fn token_url(host: &HostUrl) -> String {
    format!("{}{TOKEN_PATH}", host.as_ref())
}

/// `POST` target for uploading a package as a new item.
#[must_use]
pub fn upload_new_url(host: &HostUrl) -> String {
    format!("{}{UPLOAD_PATH}", host.as_ref())
}

/// `PUT` target for uploading a package to an existing item.
#[must_use]
pub fn upload_existing_url(host: &HostUrl, item_id: &ItemId) -> String {
    format!(
        "{}{UPLOAD_PATH}/{}",
        host.as_ref(),
        urlencoding::encode(item_id.as_ref())
    )
}

/// `POST` target for publishing an item to `target`.
#[must_use]
pub fn publish_url(host: &HostUrl, item_id: &ItemId, target: PublishTarget) -> String {
    format!(
        "{}{ITEMS_PATH}/{}/publish?publishTarget={}",
        host.as_ref(),
        urlencoding::encode(item_id.as_ref()),
        target.as_str()
    )
}

/// `GET` target for the draft state of an item.
#[must_use]
pub fn check_status_url(host: &HostUrl, item_id: &ItemId) -> String {
    format!(
        "{}{ITEMS_PATH}/{}?projection=draft",
        host.as_ref(),
        urlencoding::encode(item_id.as_ref())
    )
}
