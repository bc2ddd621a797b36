//! Publish targets and publish responses.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The audience a publish action targets.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum PublishTarget {
    /// Publish to everyone.
    #[default]
    Default,
    /// Publish to trusted testers only.
    TrustedUsers,
}

impl PublishTarget {
    /// Returns the value sent in the `publishTarget` query parameter.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::TrustedUsers => "trustedUsers",
        }
    }
}

impl fmt::Display for PublishTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status codes reported by a successful publish call.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PublishStatus {
    /// The item was published.
    Ok,
    /// The caller may not publish this item.
    NotAuthorized,
    /// The developer account is not valid.
    InvalidDeveloper,
    /// The developer does not own the item.
    DeveloperNoOwnership,
    /// The developer account is suspended.
    DeveloperSuspended,
    /// No item with this ID exists.
    ItemNotFound,
    /// The item is waiting for review.
    ItemPendingReview,
    /// The item was taken down.
    ItemTakenDown,
    /// The publisher account is suspended.
    PublisherSuspended,
    /// A status this client does not know about.
    #[serde(other)]
    Unknown,
}

/// The body of a publish call the store accepted for processing.
///
/// Note that an accepted call can still carry non-`OK` statuses such as
/// `ITEM_PENDING_REVIEW`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PublishSuccess {
    /// Resource kind, `chromewebstore#item`.
    #[serde(default)]
    pub kind: Option<String>,
    /// Extension or app ID.
    #[serde(default, rename = "item_id")]
    pub item_id: Option<String>,
    /// Status codes, in the order reported.
    #[serde(default)]
    pub status: Vec<PublishStatus>,
    /// Human-readable details, parallel to `status`.
    #[serde(default)]
    pub status_detail: Vec<String>,
}

/// One entry of a Google API error's `errors` list.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PublishErrorDetail {
    /// Human-readable description.
    #[serde(default, deserialize_with = "lenient")]
    pub message: Option<String>,
    /// Error domain, such as `global`.
    #[serde(default, deserialize_with = "lenient")]
    pub domain: Option<String>,
    /// Machine-readable reason, such as `forbidden`.
    #[serde(default, deserialize_with = "lenient")]
    pub reason: Option<String>,
}

/// The `error` object of a Google API error envelope.
///
/// Every field tolerates a missing, `null` or mistyped value, so any
/// `error` the store sends decodes.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PublishError {
    /// HTTP status code echoed by the API.
    #[serde(default, deserialize_with = "lenient")]
    pub code: Option<u16>,
    /// Human-readable summary.
    #[serde(default, deserialize_with = "lenient")]
    pub message: Option<String>,
    /// Individual errors behind the summary.
    #[serde(default, deserialize_with = "lenient_vec")]
    pub errors: Vec<PublishErrorDetail>,
}

/// The body of a rejected publish call.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct PublishFailure {
    /// The decoded error object.
    pub error: PublishError,
    /// The `error` value as sent, for replies that do not follow the usual
    /// envelope (for example a bare string).
    #[serde(skip)]
    pub raw: Value,
}

/// Reads an optional value, mapping anything of the wrong shape to `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: de::DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Reads a list, dropping it when it is `null` or of the wrong shape.
fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: de::DeserializeOwned,
{
    Ok(lenient(deserializer)?.unwrap_or_default())
}

/// The result of a publish call, exactly as the store returned it.
///
/// A body with an `error` field is a [`PublishResponse::Failure`], whatever
/// the shape of that field; anything else is read as a
/// [`PublishResponse::Success`]. The client never inspects the variant, so a
/// rejected publish is still an `Ok` return value.
///
/// ```rust
/// use chrome_webstore::{PublishResponse, PublishStatus};
///
/// let body = r#"{
///     "kind": "chromewebstore#item",
///     "item_id": "abcdefghijklmnopabcdefghijklmnop",
///     "status": ["OK"],
///     "statusDetail": ["Published"]
/// }"#;
///
/// match serde_json::from_str::<PublishResponse>(body).unwrap() {
///     PublishResponse::Success(success) => assert_eq!(success.status, [PublishStatus::Ok]),
///     PublishResponse::Failure(failure) => panic!("{:?}", failure.error.message),
/// }
/// ```
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum PublishResponse {
    /// The store rejected the call.
    Failure(PublishFailure),
    /// The store accepted the call.
    Success(PublishSuccess),
}

impl<'de> Deserialize<'de> for PublishResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut value = Value::deserialize(deserializer)?;
        let raw = value.as_object_mut().and_then(|obj| obj.remove("error"));

        if let Some(raw) = raw {
            let error = serde_json::from_value(raw.clone()).unwrap_or_default();
            return Ok(Self::Failure(PublishFailure { error, raw }));
        }

        serde_json::from_value(value)
            .map(Self::Success)
            .map_err(de::Error::custom)
    }
}

impl PublishResponse {
    /// Returns `true` for a success record that reports at least one status,
    /// all of them `OK`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        match self {
            Self::Success(success) => {
                !success.status.is_empty()
                    && success.status.iter().all(|s| *s == PublishStatus::Ok)
            }
            Self::Failure(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_target_defaults_to_default() {
        assert_eq!(PublishTarget::default(), PublishTarget::Default);
        assert_eq!(PublishTarget::default().as_str(), "default");
        assert_eq!(PublishTarget::TrustedUsers.to_string(), "trustedUsers");
    }

    #[test]
    fn test_publish_target_serde_matches_query_values() {
        let json = serde_json::to_string(&PublishTarget::TrustedUsers).unwrap();
        assert_eq!(json, r#""trustedUsers""#);
        let target: PublishTarget = serde_json::from_str(r#""default""#).unwrap();
        assert_eq!(target, PublishTarget::Default);
    }

    #[test]
    fn test_error_envelope_is_a_failure() {
        let response: PublishResponse = serde_json::from_value(serde_json::json!({
            "error": {
                "code": 403,
                "message": "The caller does not have permission",
                "errors": [{
                    "message": "The caller does not have permission",
                    "domain": "global",
                    "reason": "forbidden"
                }]
            }
        }))
        .unwrap();

        match &response {
            PublishResponse::Failure(failure) => {
                assert_eq!(failure.error.code, Some(403));
                assert_eq!(failure.error.errors.len(), 1);
                assert_eq!(failure.error.errors[0].reason.as_deref(), Some("forbidden"));
            }
            PublishResponse::Success(_) => panic!("expected failure"),
        }
        assert!(!response.is_success());
    }

    #[test]
    fn test_pending_review_is_not_a_clean_success() {
        let response: PublishResponse = serde_json::from_value(serde_json::json!({
            "kind": "chromewebstore#item",
            "item_id": "item-id",
            "status": ["OK", "ITEM_PENDING_REVIEW"],
            "statusDetail": ["ok", "pending review"]
        }))
        .unwrap();

        let PublishResponse::Success(success) = &response else {
            panic!("expected success");
        };
        assert_eq!(success.item_id.as_deref(), Some("item-id"));
        assert_eq!(
            success.status,
            [PublishStatus::Ok, PublishStatus::ItemPendingReview]
        );
        assert_eq!(success.status_detail, ["ok", "pending review"]);
        assert!(!response.is_success());
    }

    #[test]
    fn test_string_error_is_a_failure() {
        let response: PublishResponse =
            serde_json::from_str(r#"{"error": "unauthorized"}"#).unwrap();

        let PublishResponse::Failure(failure) = &response else {
            panic!("expected failure, got {response:?}");
        };
        assert_eq!(failure.error, PublishError::default());
        assert_eq!(failure.raw, serde_json::json!("unauthorized"));
        assert!(!response.is_success());
    }

    #[test]
    fn test_error_with_null_list_is_a_failure() {
        let response: PublishResponse = serde_json::from_str(
            r#"{"error": {"code": 401, "message": "Invalid Credentials", "errors": null}}"#,
        )
        .unwrap();

        let PublishResponse::Failure(failure) = &response else {
            panic!("expected failure, got {response:?}");
        };
        assert_eq!(failure.error.code, Some(401));
        assert_eq!(failure.error.message.as_deref(), Some("Invalid Credentials"));
        assert!(failure.error.errors.is_empty());
        assert!(!response.is_success());
    }

    #[test]
    fn test_out_of_range_code_is_still_a_failure() {
        let response: PublishResponse =
            serde_json::from_str(r#"{"error": {"code": 700000, "message": "odd"}}"#).unwrap();

        let PublishResponse::Failure(failure) = &response else {
            panic!("expected failure, got {response:?}");
        };
        assert_eq!(failure.error.code, None);
        assert_eq!(failure.error.message.as_deref(), Some("odd"));
    }

    #[test]
    fn test_empty_body_is_not_a_clean_success() {
        let response: PublishResponse = serde_json::from_str("{}").unwrap();

        assert_eq!(response, PublishResponse::Success(PublishSuccess::default()));
        assert!(!response.is_success());
    }

    #[test]
    fn test_all_ok_statuses_are_a_clean_success() {
        let response: PublishResponse =
            serde_json::from_str(r#"{"status": ["OK"], "statusDetail": ["done"]}"#).unwrap();
        assert!(response.is_success());
    }

    #[test]
    fn test_unknown_status_codes_are_kept() {
        let response: PublishResponse =
            serde_json::from_str(r#"{"status": ["BRAND_NEW_STATUS"]}"#).unwrap();
        let PublishResponse::Success(success) = response else {
            panic!("expected success");
        };
        assert_eq!(success.status, [PublishStatus::Unknown]);
    }
}
