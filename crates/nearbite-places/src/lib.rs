pub mod aggregator;
pub mod client;
pub mod delay;
pub mod error;
pub mod filter;
pub mod provider;
pub mod types;

pub use aggregator::PlacesAggregator;
pub use client::GooglePlacesClient;
pub use delay::{Delay, TokioDelay};
pub use error::{PlacesError, SearchError};
pub use provider::{Geocoder, PhotoFetcher, PlaceSearchProvider};
pub use types::{
    ContinuationToken, FilteredResult, Page, Photo, PhotoRef, PlaceRecord, SearchOutcome,
};
