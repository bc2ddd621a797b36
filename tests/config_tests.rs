//! Integration tests for client construction.
//!
//! These tests cover credential validation and the equivalence of the
//! different ways of building a client.

use chrome_webstore::{
    api_client, ClientOptions, ConfigError, HostUrl, WebStoreClient, WebStoreConfig,
};

fn client_options() -> ClientOptions {
    ClientOptions {
        id: Some("abcdefghijklmnopabcdefghijklmnop".to_string()),
        client_id: Some("client-id".to_string()),
        client_secret: Some("client-secret".to_string()),
        refresh_token: Some("refresh-token".to_string()),
    }
}

/// Applies `edit` to a valid set of options and tries to build a client.
fn build_with(edit: impl FnOnce(&mut ClientOptions)) -> Result<WebStoreClient, ConfigError> {
    let mut options = client_options();
    edit(&mut options);
    WebStoreClient::from_options(options)
}

#[test]
fn test_valid_options_build_a_client() {
    let client = build_with(|_| {}).unwrap();
    let config = client.config();

    assert_eq!(config.item_id().as_ref(), "abcdefghijklmnopabcdefghijklmnop");
    assert_eq!(config.client_id().as_ref(), "client-id");
    assert_eq!(config.client_secret().as_ref(), "client-secret");
    assert_eq!(config.refresh_token().as_ref(), "refresh-token");
    assert_eq!(config.api_host(), &HostUrl::default());
}

#[test]
fn test_each_missing_field_is_reported_by_name() {
    let cases: [(fn(&mut ClientOptions), &str); 4] = [
        (|o| o.id = None, "id"),
        (|o| o.client_id = None, "clientId"),
        (|o| o.client_secret = None, "clientSecret"),
        (|o| o.refresh_token = None, "refreshToken"),
    ];

    for (edit, field) in cases {
        let error = build_with(edit).unwrap_err();
        assert_eq!(error, ConfigError::MissingRequiredField { field });
        assert_eq!(error.to_string(), format!("'{field}' is missing!"));
    }
}

#[test]
fn test_each_empty_field_is_reported_by_name() {
    let cases: [(fn(&mut ClientOptions), &str); 4] = [
        (|o| o.id = Some(String::new()), "id"),
        (|o| o.client_id = Some(String::new()), "clientId"),
        (|o| o.client_secret = Some(String::new()), "clientSecret"),
        (|o| o.refresh_token = Some(String::new()), "refreshToken"),
    ];

    for (edit, field) in cases {
        let error = build_with(edit).unwrap_err();
        assert_eq!(error, ConfigError::EmptyField { field });
    }
}

#[test]
fn test_options_load_from_json() {
    let options: ClientOptions = serde_json::from_str(
        r#"{
            "id": "abcdefghijklmnopabcdefghijklmnop",
            "clientId": "client-id",
            "clientSecret": "client-secret",
            "refreshToken": "refresh-token"
        }"#,
    )
    .unwrap();

    assert_eq!(options, client_options());
}

#[test]
fn test_options_with_missing_json_keys_fail_on_conversion() {
    let options: ClientOptions = serde_json::from_str(r#"{"id": "item"}"#).unwrap();

    assert_eq!(
        WebStoreConfig::try_from(options),
        Err(ConfigError::MissingRequiredField { field: "clientId" })
    );
}

#[test]
fn test_factory_function_is_equivalent_to_constructor() {
    let config = WebStoreConfig::try_from(client_options()).unwrap();

    let client = WebStoreClient::new(config.clone());
    let factory_client = api_client(config);

    assert_eq!(client.config(), factory_client.config());
    assert_eq!(
        WebStoreClient::from_options(client_options()).unwrap().config(),
        client.config()
    );
}
