//! Collaborator seams for the provider.
//!
//! [`crate::GooglePlacesClient`] implements all three traits. Handlers and the
//! aggregator hold them as trait objects so tests can substitute in-memory fakes.

use async_trait::async_trait;
use nearbite_core::{LatLng, SearchCriteria};

use crate::error::PlacesError;
use crate::types::{ContinuationToken, Page, Photo};

#[async_trait]
pub trait PlaceSearchProvider: Send + Sync {
    /// Fetches one page of nearby places.
    ///
    /// `page_token` is `None` for the first page and the previous page's
    /// [`Page::next_token`] for the follow-up.
    async fn fetch_page(
        &self,
        criteria: &SearchCriteria,
        page_token: Option<&ContinuationToken>,
    ) -> Result<Page, PlacesError>;
}

#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolves a postal code (or any free-form address) to coordinates.
    async fn geocode(&self, address: &str) -> Result<LatLng, PlacesError>;
}

#[async_trait]
pub trait PhotoFetcher: Send + Sync {
    async fn fetch_photo(&self, photo_reference: &str) -> Result<Photo, PlacesError>;
}
