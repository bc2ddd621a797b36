//! Item upload state, as returned by uploads and draft status checks.

use serde::{Deserialize, Serialize};

/// Processing state of an uploaded package.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UploadState {
    /// The upload was rejected; see [`UploadResponse::item_error`].
    Failure,
    /// The package is still being processed.
    InProgress,
    /// The item does not exist.
    NotFound,
    /// The package was accepted.
    Success,
    /// A state this client does not know about.
    #[serde(other)]
    Unknown,
}

/// One entry of the `itemError` list.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ItemError {
    /// Machine-readable error code, e.g. `PKG_INVALID_VERSION_NUMBER`.
    #[serde(default)]
    pub error_code: Option<String>,
    /// Human-readable description.
    #[serde(default)]
    pub error_detail: Option<String>,
}

/// A Chrome Web Store item as returned by the upload and get endpoints.
///
/// ```rust
/// use chrome_webstore::{UploadResponse, UploadState};
///
/// let item: UploadResponse = serde_json::from_str(r#"{
///     "kind": "chromewebstore#item",
///     "id": "abcdefghijklmnopabcdefghijklmnop",
///     "uploadState": "SUCCESS"
/// }"#).unwrap();
///
/// assert_eq!(item.upload_state, Some(UploadState::Success));
/// assert!(item.is_success());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// Resource kind, `chromewebstore#item`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Extension or app ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Public key of the item, present only for some projections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,

    /// Processing state of the latest upload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_state: Option<UploadState>,

    /// Reasons the upload failed, in the order the store reported them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_error: Option<Vec<ItemError>>,
}

impl UploadResponse {
    /// Returns `true` if the store reported `uploadState: SUCCESS`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.upload_state == Some(UploadState::Success)
    }

    /// Returns the reported errors, or an empty slice.
    #[must_use]
    pub fn errors(&self) -> &[ItemError] {
        self.item_error.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_response_keeps_error_order() {
        let item: UploadResponse = serde_json::from_value(serde_json::json!({
            "kind": "chromewebstore#item",
            "id": "item-id",
            "uploadState": "FAILURE",
            "itemError": [
                {"error_code": "PKG_INVALID_VERSION_NUMBER", "error_detail": "bad version"},
                {"error_code": "PKG_MANIFEST_PARSE_ERROR", "error_detail": "bad manifest"}
            ]
        }))
        .unwrap();

        assert_eq!(item.upload_state, Some(UploadState::Failure));
        assert!(!item.is_success());
        let codes: Vec<_> = item
            .errors()
            .iter()
            .filter_map(|e| e.error_code.as_deref())
            .collect();
        assert_eq!(
            codes,
            ["PKG_INVALID_VERSION_NUMBER", "PKG_MANIFEST_PARSE_ERROR"]
        );
    }

    #[test]
    fn test_all_upload_states_deserialize() {
        let states: Vec<UploadState> = serde_json::from_str(
            r#"["FAILURE", "IN_PROGRESS", "NOT_FOUND", "SUCCESS", "SOMETHING_NEW"]"#,
        )
        .unwrap();
        assert_eq!(
            states,
            [
                UploadState::Failure,
                UploadState::InProgress,
                UploadState::NotFound,
                UploadState::Success,
                UploadState::Unknown,
            ]
        );
    }

    #[test]
    fn test_unexpected_body_still_deserializes() {
        let item: UploadResponse = serde_json::from_str(r#"{"ok": true}"#).unwrap();
        assert_eq!(item, UploadResponse::default());
        assert!(item.errors().is_empty());
    }
}
