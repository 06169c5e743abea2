mod geo;
mod photo;
mod places;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use nearbite_places::{
    Geocoder, GooglePlacesClient, PhotoFetcher, PlaceSearchProvider, PlacesAggregator, TokioDelay,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{request_id, REQUEST_ID_HEADER};

#[derive(Clone)]
pub struct AppState {
    pub places: Arc<PlacesAggregator>,
    pub geocoder: Arc<dyn Geocoder>,
    pub photos: Arc<dyn PhotoFetcher>,
}

impl AppState {
    /// Wires every handler to one shared Google client.
    pub fn from_client(client: Arc<GooglePlacesClient>, page_token_delay: Duration) -> Self {
        let provider: Arc<dyn PlaceSearchProvider> = client.clone();
        Self {
            places: Arc::new(PlacesAggregator::new(
                provider,
                Arc::new(TokioDelay),
                page_token_delay,
            )),
            geocoder: client.clone(),
            photos: client,
        }
    }
}

/// JSON error body: `{ "error": ..., "status"?: ... }`.
///
/// `status` echoes the provider's status string when the failure carried one.
#[derive(Debug, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    pub code: StatusCode,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: StatusCode::BAD_REQUEST,
            error: message.into(),
            status: None,
        }
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self {
            code: StatusCode::INTERNAL_SERVER_ERROR,
            error: message.into(),
            status: None,
        }
    }

    #[must_use]
    pub fn with_provider_status(mut self, status: Option<&str>) -> Self {
        self.status = status.map(str::to_owned);
        self
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.code, Json(self)).into_response()
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    service: &'static str,
    version: &'static str,
}

/// Treats absent and whitespace-only query values alike.
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers([HeaderName::from_static(REQUEST_ID_HEADER)])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/places", get(places::search_places))
        .route("/api/geo", get(geo::geocode_zipcode))
        .route("/api/photo", get(photo::proxy_photo))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(HealthData {
        status: "ok",
        service: "nearbite",
        version: env!("CARGO_PKG_VERSION"),
    })
}
