//! HTTP client for the Google Maps Platform web services.
//!
//! Wraps `reqwest` with API key management, URL construction, and the
//! provider's `status` envelope. Covers the three endpoints this service
//! proxies: nearby search, geocoding, and place photos.

use std::time::Duration;

use async_trait::async_trait;
use nearbite_core::{AppConfig, LatLng, PriceBound, SearchCriteria};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::PlacesError;
use crate::provider::{Geocoder, PhotoFetcher, PlaceSearchProvider};
use crate::types::{
    ContinuationToken, Page, Photo, PlaceRecord, WireGeocodeResponse, WireNearbySearchResponse,
};

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/";
const DEFAULT_USER_AGENT: &str = "nearbite/0.1 (places-proxy)";
const DEFAULT_PHOTO_MAX_WIDTH: u32 = 400;

const NEARBY_SEARCH_PATH: &str = "place/nearbysearch/json";
const GEOCODE_PATH: &str = "geocode/json";
const PHOTO_PATH: &str = "place/photo";

/// Category filter sent with every nearby search.
const SEARCH_TYPES: &str = "restaurant|cafe|bar";

/// Client for the Google Maps Platform web services.
///
/// Use [`GooglePlacesClient::new`] for production or
/// [`GooglePlacesClient::with_base_url`] to point at a mock server in tests.
pub struct GooglePlacesClient {
    client: Client,
    api_key: String,
    nearby_url: Url,
    geocode_url: Url,
    photo_url: Url,
    price_bound: PriceBound,
    photo_max_width: u32,
}

impl GooglePlacesClient {
    /// Creates a new client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_USER_AGENT, DEFAULT_BASE_URL)
    }

    /// Builds a client from application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::InvalidBaseUrl`] if `places_base_url` does not
    /// parse, or [`PlacesError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, PlacesError> {
        Ok(Self::with_base_url(
            &config.google_places_api_key,
            config.request_timeout_secs,
            &config.user_agent,
            &config.places_base_url,
        )?
        .with_price_bound(config.price_bound)
        .with_photo_max_width(config.photo_max_width))
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()
            .map_err(PlacesError::http)?;

        // Exactly one trailing slash so `join` appends endpoint paths instead
        // of replacing the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let invalid = |reason: String| PlacesError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason,
        };
        let base = Url::parse(&normalised).map_err(|e| invalid(e.to_string()))?;
        let endpoint = |path: &str| base.join(path).map_err(|e| invalid(e.to_string()));

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            nearby_url: endpoint(NEARBY_SEARCH_PATH)?,
            geocode_url: endpoint(GEOCODE_PATH)?,
            photo_url: endpoint(PHOTO_PATH)?,
            price_bound: PriceBound::default(),
            photo_max_width: DEFAULT_PHOTO_MAX_WIDTH,
        })
    }

    #[must_use]
    pub fn with_price_bound(mut self, price_bound: PriceBound) -> Self {
        self.price_bound = price_bound;
        self
    }

    #[must_use]
    pub fn with_photo_max_width(mut self, photo_max_width: u32) -> Self {
        self.photo_max_width = photo_max_width;
        self
    }

    /// Fetches one page of nearby eateries.
    ///
    /// `ZERO_RESULTS` is treated as an empty page, not an error.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::ApiStatus`] if the provider returns any other non-`OK` status.
    /// - [`PlacesError::Http`] / [`PlacesError::UnexpectedStatus`] on network failure
    ///   or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the body does not match the expected shape.
    pub async fn nearby_search(
        &self,
        criteria: &SearchCriteria,
        page_token: Option<&ContinuationToken>,
    ) -> Result<Page, PlacesError> {
        let url = self.nearby_search_url(criteria, page_token);
        let response: WireNearbySearchResponse =
            self.request_json(url, "nearbysearch").await?;

        match response.status.as_str() {
            "OK" | "ZERO_RESULTS" => {}
            _ => {
                tracing::warn!(
                    status = %response.status,
                    message = response.error_message.as_deref().unwrap_or(""),
                    paginated = page_token.is_some(),
                    "nearby search rejected by provider"
                );
                return Err(PlacesError::ApiStatus {
                    status: response.status,
                    message: response.error_message,
                });
            }
        }

        Ok(Page {
            records: response.results.into_iter().map(PlaceRecord::from).collect(),
            next_token: response
                .next_page_token
                .filter(|t| !t.is_empty())
                .map(ContinuationToken::new),
        })
    }

    /// Resolves an address or postal code to the first matching coordinate pair.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::ApiStatus`] for any non-`OK` status, including `ZERO_RESULTS`.
    /// - [`PlacesError::NoResults`] if the status is `OK` but the result list is empty.
    /// - [`PlacesError::Http`] / [`PlacesError::UnexpectedStatus`] /
    ///   [`PlacesError::Deserialize`] as for [`Self::nearby_search`].
    pub async fn geocode_address(&self, address: &str) -> Result<LatLng, PlacesError> {
        let url = self.build_url(&self.geocode_url, &[("address", address)]);
        let response: WireGeocodeResponse = self.request_json(url, "geocode").await?;

        if response.status != "OK" {
            tracing::warn!(status = %response.status, "geocode rejected by provider");
            return Err(PlacesError::ApiStatus {
                status: response.status,
                message: response.error_message,
            });
        }

        let location = response
            .results
            .into_iter()
            .next()
            .map(|r| r.geometry.location)
            .ok_or_else(|| PlacesError::NoResults {
                context: format!("geocode(address={address})"),
            })?;

        Ok(LatLng {
            lat: location.lat,
            lng: location.lng,
        })
    }

    /// Downloads a place photo, following the provider's redirect to the image host.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] on network failure or
    /// [`PlacesError::UnexpectedStatus`] on a non-2xx response.
    pub async fn photo(&self, photo_reference: &str) -> Result<Photo, PlacesError> {
        let max_width = self.photo_max_width.to_string();
        let url = self.build_url(
            &self.photo_url,
            &[("maxwidth", max_width.as_str()), ("photoreference", photo_reference)],
        );

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(PlacesError::http)?;
        let status = response.status();
        if !status.is_success() {
            return Err(PlacesError::UnexpectedStatus {
                status: status.as_u16(),
                endpoint: "photo",
            });
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let bytes = response.bytes().await.map_err(PlacesError::http)?;

        Ok(Photo {
            content_type,
            bytes: bytes.to_vec(),
        })
    }

    fn nearby_search_url(
        &self,
        criteria: &SearchCriteria,
        page_token: Option<&ContinuationToken>,
    ) -> Url {
        let location = criteria.location.to_string();
        let price = criteria.price_level.to_string();
        let radius = criteria.radius_meters.map(|r| r.to_string());

        let mut params: Vec<(&str, &str)> = vec![("location", location.as_str())];
        // The provider rejects `radius` together with `rankby=distance`.
        match &radius {
            Some(radius) => params.push(("radius", radius.as_str())),
            None => params.push(("rankby", "distance")),
        }
        params.push(("type", SEARCH_TYPES));
        params.push(("minprice", price.as_str()));
        if self.price_bound == PriceBound::Exact {
            params.push(("maxprice", price.as_str()));
        }
        if let Some(token) = page_token {
            params.push(("pagetoken", token.as_str()));
        }

        self.build_url(&self.nearby_url, &params)
    }

    /// Appends `key` and the given parameters, percent-encoded, to `endpoint`.
    fn build_url(&self, endpoint: &Url, extra: &[(&str, &str)]) -> Url {
        let mut url = endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("key", &self.api_key);
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
        }
        url
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the body as JSON.
    async fn request_json<T: DeserializeOwned>(
        &self,
        url: Url,
        endpoint: &'static str,
    ) -> Result<T, PlacesError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(PlacesError::http)?;
        let status = response.status();
        if !status.is_success() {
            tracing::error!(status = status.as_u16(), endpoint, "provider HTTP failure");
            return Err(PlacesError::UnexpectedStatus {
                status: status.as_u16(),
                endpoint,
            });
        }

        let body = response.text().await.map_err(PlacesError::http)?;
        serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
            context: endpoint.to_owned(),
            source: e,
        })
    }
}

#[async_trait]
impl PlaceSearchProvider for GooglePlacesClient {
    async fn fetch_page(
        &self,
        criteria: &SearchCriteria,
        page_token: Option<&ContinuationToken>,
    ) -> Result<Page, PlacesError> {
        self.nearby_search(criteria, page_token).await
    }
}

#[async_trait]
impl Geocoder for GooglePlacesClient {
    async fn geocode(&self, address: &str) -> Result<LatLng, PlacesError> {
        self.geocode_address(address).await
    }
}

#[async_trait]
impl PhotoFetcher for GooglePlacesClient {
    async fn fetch_photo(&self, photo_reference: &str) -> Result<Photo, PlacesError> {
        self.photo(photo_reference).await
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
