//! Provider wire types and the domain records built from them.
//!
//! The `Wire*` types mirror the Google Maps Platform JSON responses for the
//! nearby-search and geocoding endpoints. Only the fields this service reads
//! are modelled; everything else in the payload is ignored by serde.
//!
//! ### `status`
//! Every JSON response carries a top-level `status`. `OK` and `ZERO_RESULTS`
//! are successes; anything else (`INVALID_REQUEST`, `OVER_QUERY_LIMIT`,
//! `REQUEST_DENIED`, `UNKNOWN_ERROR`) is a provider-level failure, usually
//! with a human-readable `error_message`.
//!
//! ### `html_attributions`
//! Photo attributions are HTML anchor snippets, e.g.
//! `<a href="https://maps.google.com/maps/contrib/1">A Google User</a>`.
//! They are kept verbatim; photo selection only does substring matching.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Top-level response from `place/nearbysearch/json`.
#[derive(Debug, Deserialize)]
pub struct WireNearbySearchResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub results: Vec<WirePlace>,
    /// Present when another page exists. Not usable for roughly two seconds.
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WirePlace {
    /// Missing names decode as empty and are dropped by the filter.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    /// Short street address.
    #[serde(default)]
    pub vicinity: Option<String>,
    #[serde(default)]
    pub photos: Vec<WirePhoto>,
}

#[derive(Debug, Deserialize)]
pub struct WirePhoto {
    pub photo_reference: String,
    #[serde(default)]
    pub html_attributions: Vec<String>,
}

/// Top-level response from `geocode/json`.
#[derive(Debug, Deserialize)]
pub struct WireGeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub results: Vec<WireGeocodeResult>,
}

#[derive(Debug, Deserialize)]
pub struct WireGeocodeResult {
    pub geometry: WireGeometry,
}

#[derive(Debug, Deserialize)]
pub struct WireGeometry {
    pub location: WireLocation,
}

#[derive(Debug, Deserialize)]
pub struct WireLocation {
    pub lat: f64,
    pub lng: f64,
}

/// Opaque provider cursor for the next page of nearby-search results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContinuationToken(String);

impl ContinuationToken {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One photo attached to a place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoRef {
    pub reference: String,
    pub attributions: Vec<String>,
}

/// A place as returned by the provider, before filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceRecord {
    pub name: String,
    pub types: BTreeSet<String>,
    pub rating: Option<f64>,
    pub address: Option<String>,
    pub photos: Vec<PhotoRef>,
}

impl PlaceRecord {
    /// Convenience constructor for a record with no rating, address, or photos.
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            types: types.into_iter().map(Into::into).collect(),
            rating: None,
            address: None,
            photos: Vec::new(),
        }
    }
}

impl From<WirePlace> for PlaceRecord {
    fn from(place: WirePlace) -> Self {
        Self {
            name: place.name,
            types: place.types.into_iter().collect(),
            rating: place.rating,
            address: place.vicinity,
            photos: place
                .photos
                .into_iter()
                .map(|p| PhotoRef {
                    reference: p.photo_reference,
                    attributions: p.html_attributions,
                })
                .collect(),
        }
    }
}

/// One page of nearby-search results.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub records: Vec<PlaceRecord>,
    pub next_token: Option<ContinuationToken>,
}

/// A place that passed filtering, reduced to a single chosen photo.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilteredResult {
    pub name: String,
    pub types: BTreeSet<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(rename = "vicinity", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_reference: Option<String>,
}

/// Result of one aggregated search.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOutcome {
    pub results: Vec<FilteredResult>,
    /// Records received across all pages, before filtering.
    pub total_fetched: usize,
    /// Records kept after filtering; always `results.len()`.
    pub total_filtered: usize,
}

/// Raw image bytes from the photo endpoint.
#[derive(Debug, Clone)]
pub struct Photo {
    /// `Content-Type` as sent by the provider, if any.
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_place_tolerates_missing_optional_fields() {
        let place: WirePlace =
            serde_json::from_value(serde_json::json!({ "name": "Corner Cafe" })).unwrap();
        let record = PlaceRecord::from(place);
        assert_eq!(record.name, "Corner Cafe");
        assert!(record.types.is_empty());
        assert!(record.photos.is_empty());
        assert!(record.rating.is_none());
    }

    #[test]
    fn wire_place_without_name_decodes_as_blank() {
        let place: WirePlace =
            serde_json::from_value(serde_json::json!({ "types": ["restaurant"] })).unwrap();
        assert!(place.name.is_empty());
    }

    #[test]
    fn wire_place_maps_vicinity_and_photos() {
        let place: WirePlace = serde_json::from_value(serde_json::json!({
            "name": "Noodle Bar",
            "types": ["restaurant", "food", "restaurant"],
            "rating": 4.4,
            "vicinity": "12 Canal St",
            "photos": [
                { "photo_reference": "ref-1", "html_attributions": ["<a>Someone</a>"], "width": 800 }
            ]
        }))
        .unwrap();

        let record = PlaceRecord::from(place);
        assert_eq!(record.types.len(), 2, "types collapse into a set");
        assert_eq!(record.address.as_deref(), Some("12 Canal St"));
        assert_eq!(record.photos[0].reference, "ref-1");
        assert_eq!(record.photos[0].attributions, vec!["<a>Someone</a>"]);
    }

    #[test]
    fn search_outcome_uses_camel_case_counters() {
        let outcome = SearchOutcome {
            results: vec![FilteredResult {
                name: "A".to_string(),
                types: BTreeSet::from(["restaurant".to_string()]),
                rating: None,
                address: Some("1 Main St".to_string()),
                photo_reference: None,
            }],
            total_fetched: 3,
            total_filtered: 1,
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["totalFetched"], 3);
        assert_eq!(json["totalFiltered"], 1);
        assert_eq!(json["results"][0]["vicinity"], "1 Main St");
        assert!(json["results"][0].get("rating").is_none());
        assert!(json["results"][0].get("photo_reference").is_none());
    }
}
