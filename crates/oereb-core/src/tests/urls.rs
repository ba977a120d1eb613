use crate::error::Error;
use crate::urls::{add_url_params, uri_validator};

#[test]
fn uri_validator_accepts_absolute_http_urls() {
    assert!(uri_validator("https://example.com/wms?SERVICE=WMS"));
    assert!(uri_validator("http://wms.geo.example.ch/"));
}

#[test]
fn uri_validator_rejects_garbage_and_relative_paths() {
    assert!(!uri_validator("not a url"));
    assert!(!uri_validator("/wms?SERVICE=WMS"));
    assert!(!uri_validator("ftp://example.com/file"));
    assert!(!uri_validator(""));
}

fn query_pairs(merged: &str) -> Vec<(String, String)> {
    url::Url::parse(merged)
        .unwrap()
        .query_pairs()
        .map(|(name, value)| (name.into_owned(), value.into_owned()))
        .collect()
}

#[test]
fn add_url_params_keeps_unrelated_parameters() {
    let merged = add_url_params(
        "https://example.com/wms?SERVICE=WMS&VERSION=1.1.1",
        &[("BBOX", "0,0,1,1")],
    )
    .unwrap();
    assert_eq!(
        query_pairs(&merged),
        vec![
            ("SERVICE".to_string(), "WMS".to_string()),
            ("VERSION".to_string(), "1.1.1".to_string()),
            ("BBOX".to_string(), "0,0,1,1".to_string()),
        ]
    );
}

#[test]
fn add_url_params_replaces_an_existing_parameter() {
    let merged = add_url_params(
        "https://example.com/wms?BBOX=9,9,9,9&SERVICE=WMS",
        &[("BBOX", "0,0,1,1")],
    )
    .unwrap();
    assert_eq!(
        query_pairs(&merged),
        vec![
            ("SERVICE".to_string(), "WMS".to_string()),
            ("BBOX".to_string(), "0,0,1,1".to_string()),
        ]
    );
}

#[test]
fn add_url_params_rejects_an_invalid_url() {
    let result = add_url_params("not a url", &[("BBOX", "0,0,1,1")]);
    assert!(matches!(result, Err(Error::InvalidUrl { url }) if url == "not a url"));
}
