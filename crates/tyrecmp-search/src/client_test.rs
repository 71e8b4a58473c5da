use rust_decimal::Decimal;
use tyrecmp_core::TyreSizeDescriptor;

use crate::error::SearchError;

use super::*;

fn request(brand: &str, keys: &[&str]) -> SearchRequest {
    SearchRequest::new(TyreSizeDescriptor::default(), brand, keys.iter().copied()).unwrap()
}

fn test_source(base_url: &str) -> RemoteSource {
    RemoteSource::new(base_url, 5, "tyrecmp-test/0.1").unwrap()
}

#[test]
fn search_url_carries_all_query_fields() {
    let url = test_source("http://localhost:8080")
        .search_url(&request("Michelin", &["lastikpark", "mollaoglu"]))
        .unwrap();
    assert_eq!(
        url.as_str(),
        "http://localhost:8080/offers/search?width=205&height=55&rim=16&loadIndex=91&speedIndex=V&brand=Michelin&sites=lastikpark%2Cmollaoglu"
    );
}

#[test]
fn search_url_keeps_base_path() {
    let url = test_source("https://api.example.com/tyres/")
        .search_url(&request("", &["haskar"]))
        .unwrap();
    assert_eq!(url.path(), "/tyres/offers/search");
}

#[test]
fn search_url_encodes_free_text() {
    let url = test_source("http://localhost")
        .search_url(&request("Bridge stone&co", &["haskar"]))
        .unwrap();
    let brand = url
        .query_pairs()
        .find(|(k, _)| k == "brand")
        .map(|(_, v)| v.into_owned());
    assert_eq!(brand.as_deref(), Some("Bridge stone&co"));
}

#[test]
fn new_rejects_invalid_base_url() {
    let result = RemoteSource::new("not a url", 5, "tyrecmp-test/0.1");
    assert!(
        matches!(result, Err(SourceError::InvalidBaseUrl { .. })),
        "expected InvalidBaseUrl"
    );
}

#[test]
fn extract_host_strips_scheme_and_path() {
    assert_eq!(extract_host("https://offers.example.com/offers/search"), "offers.example.com");
}

#[test]
fn extract_host_falls_back_to_input() {
    assert_eq!(extract_host("offers.example.com"), "offers.example.com");
}

#[test]
fn parse_offers_reads_array() {
    let body = r#"[{"site":"b2b.haskar.com.tr","brand":"Michelin","pattern":"Primacy 4+","size":"205/55 R16 91V","stock":5,"price":3920.5,"currency":"TRY","url":"https://b2b.haskar.com.tr"}]"#;
    let offers = parse_offers(body, "test").unwrap();
    assert_eq!(offers.len(), 1);
    assert_eq!(offers[0].stock, 5);
    assert_eq!(offers[0].price, Decimal::new(39_205, 1));
}

#[test]
fn parse_offers_accepts_empty_array() {
    assert!(parse_offers("[]", "test").unwrap().is_empty());
}

#[test]
fn parse_offers_rejects_object_body() {
    let result = parse_offers(r#"{"offers":[]}"#, "test");
    assert!(matches!(result, Err(SourceError::Deserialize { .. })));
}

#[test]
fn parse_offers_rejects_negative_stock() {
    let body = r#"[{"site":"a","brand":"b","pattern":"c","size":"d","stock":-1,"price":1,"currency":"TRY","url":"u"}]"#;
    assert!(matches!(
        parse_offers(body, "test"),
        Err(SourceError::Deserialize { .. })
    ));
}

#[test]
fn parse_offers_rejects_whole_payload_on_fractional_stock() {
    let body = r#"[
        {"site":"a","brand":"b","pattern":"c","size":"d","stock":4,"price":1,"currency":"TRY","url":"u"},
        {"site":"a","brand":"b","pattern":"c","size":"d","stock":5.0,"price":1,"currency":"TRY","url":"u"}
    ]"#;
    let err = parse_offers(body, "test").unwrap_err();
    assert!(matches!(err, SourceError::Deserialize { .. }), "got: {err:?}");
    assert_eq!(SearchError::from(err), SearchError::MalformedResponse);
}

#[test]
fn parse_offers_rejects_negative_price() {
    let body = r#"[{"site":"a","brand":"b","pattern":"c","size":"d","stock":1,"price":-10,"currency":"TRY","url":"u"}]"#;
    assert!(matches!(
        parse_offers(body, "test"),
        Err(SourceError::InvalidOffer { .. })
    ));
}
