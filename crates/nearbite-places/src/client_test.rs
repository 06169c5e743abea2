use std::num::NonZeroU32;

use nearbite_core::{LatLng, PriceLevel};

use super::*;

fn test_client(base_url: &str) -> GooglePlacesClient {
    GooglePlacesClient::with_base_url("test-key", 30, "nearbite-test/0.1", base_url)
        .expect("client construction should not fail")
}

fn criteria(radius: Option<u32>) -> SearchCriteria {
    SearchCriteria::new(
        LatLng::new(40.7, -74.0).unwrap(),
        PriceLevel::try_from(2).unwrap(),
        radius.and_then(NonZeroU32::new),
    )
}

#[test]
fn default_client_targets_production_host() {
    let client = GooglePlacesClient::new("test-key", 30).expect("client");
    assert_eq!(
        client.nearby_url.as_str(),
        "https://maps.googleapis.com/maps/api/place/nearbysearch/json"
    );
}

#[test]
fn endpoint_urls_join_under_base_path() {
    let client = test_client("http://localhost:9999/maps/api");
    assert_eq!(
        client.geocode_url.as_str(),
        "http://localhost:9999/maps/api/geocode/json"
    );
    assert_eq!(
        client.photo_url.as_str(),
        "http://localhost:9999/maps/api/place/photo"
    );
}

#[test]
fn invalid_base_url_is_rejected() {
    let result = GooglePlacesClient::with_base_url("k", 30, "ua", "not a url");
    assert!(matches!(result, Err(PlacesError::InvalidBaseUrl { .. })));
}

#[test]
fn nearby_url_without_radius_ranks_by_distance_with_exact_price() {
    let client = test_client("https://maps.googleapis.com/maps/api/");
    let url = client.nearby_search_url(&criteria(None), None);
    assert_eq!(
        url.as_str(),
        "https://maps.googleapis.com/maps/api/place/nearbysearch/json\
         ?key=test-key&location=40.7%2C-74&rankby=distance&type=restaurant%7Ccafe%7Cbar\
         &minprice=2&maxprice=2"
    );
}

#[test]
fn nearby_url_with_radius_omits_rankby() {
    let client = test_client("https://maps.googleapis.com/maps/api/");
    let url = client.nearby_search_url(&criteria(Some(1500)), None);
    let query = url.query().unwrap_or_default();
    assert!(query.contains("radius=1500"), "{query}");
    assert!(!query.contains("rankby"), "{query}");
}

#[test]
fn nearby_url_minimum_price_bound_omits_maxprice() {
    let client =
        test_client("https://maps.googleapis.com/maps/api/").with_price_bound(PriceBound::Minimum);
    let url = client.nearby_search_url(&criteria(None), None);
    let query = url.query().unwrap_or_default();
    assert!(query.contains("minprice=2"), "{query}");
    assert!(!query.contains("maxprice"), "{query}");
}

#[test]
fn nearby_url_appends_page_token() {
    let client = test_client("https://maps.googleapis.com/maps/api/");
    let token = ContinuationToken::new("tok/en+1");
    let url = client.nearby_search_url(&criteria(None), Some(&token));
    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    assert!(pairs.contains(&("pagetoken".to_string(), "tok/en+1".to_string())));
}

#[test]
fn build_url_encodes_special_characters() {
    let client = test_client("https://maps.googleapis.com/maps/api/");
    let url = client.build_url(&client.geocode_url, &[("address", "10001 & co")]);
    assert!(
        url.as_str().contains("10001+%26+co") || url.as_str().contains("10001%20%26%20co"),
        "address should be percent-encoded: {url}"
    );
}
