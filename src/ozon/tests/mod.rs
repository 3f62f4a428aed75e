//! Unit tests for the Ozon API client.


use std::time::Duration;

use super::OzonApi;

pub(super) fn api_with_mock(mock_uri: &str) -> OzonApi {
    OzonApi::new(
        "test_client".to_string(),
        "test_key".to_string(),
        Duration::from_secs(5),
    )
    .unwrap()
    .with_base_url(mock_uri)
}

#[test]
fn base_url_trailing_slash_is_trimmed() {
    let api = api_with_mock("http://localhost:1234/");
    assert_eq!(api.base_url(), "http://localhost:1234");
}

#[test]
fn defaults_to_production_host() {
    let api = OzonApi::new("id".to_string(), "key".to_string(), Duration::from_secs(1)).unwrap();
    assert_eq!(api.base_url(), super::DEFAULT_BASE_URL);
}
