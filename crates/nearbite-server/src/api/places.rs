//! GET /api/places: filtered nearby eateries.

use axum::{
    extract::{Query, State},
    Extension, Json,
};
use nearbite_core::ValidationError;
use nearbite_places::{SearchError, SearchOutcome};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{ApiError, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct PlacesQuery {
    location: Option<String>,
    price: Option<String>,
    radius: Option<String>,
}

pub(super) async fn search_places(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<PlacesQuery>,
) -> Result<Json<SearchOutcome>, ApiError> {
    state
        .places
        .search_params(
            query.location.as_deref(),
            query.price.as_deref(),
            query.radius.as_deref(),
        )
        .await
        .map(Json)
        .map_err(|e| map_search_error(&req_id.0, &e))
}

fn map_search_error(request_id: &str, error: &SearchError) -> ApiError {
    match error {
        SearchError::Validation(ValidationError::MissingParameter(param)) => {
            tracing::debug!(request_id, param, "places request missing parameter");
            ApiError::bad_request("Missing required parameters")
        }
        SearchError::Validation(e) => {
            tracing::debug!(request_id, error = %e, "places request rejected");
            ApiError::bad_request(e.to_string())
        }
        SearchError::Upstream(e) => {
            tracing::error!(request_id, error = %e, "places search failed");
            ApiError::upstream("Error fetching data from Google Places API")
                .with_provider_status(e.provider_status())
        }
    }
}
