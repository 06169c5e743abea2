//! GET /api/geo: postal code to coordinates.

use axum::{
    extract::{Query, State},
    Extension, Json,
};
use nearbite_core::LatLng;
use nearbite_places::PlacesError;
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{non_blank, ApiError, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct GeoQuery {
    zipcode: Option<String>,
}

pub(super) async fn geocode_zipcode(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<GeoQuery>,
) -> Result<Json<LatLng>, ApiError> {
    let zipcode = non_blank(query.zipcode.as_deref())
        .ok_or_else(|| ApiError::bad_request("Missing zipcode parameter"))?;

    match state.geocoder.geocode(zipcode).await {
        Ok(point) => Ok(Json(point)),
        Err(e @ (PlacesError::ApiStatus { .. } | PlacesError::NoResults { .. })) => {
            tracing::warn!(request_id = %req_id.0, zipcode, error = %e, "geocode found no match");
            Err(ApiError::bad_request("Invalid zipcode or no results found")
                .with_provider_status(e.provider_status()))
        }
        Err(e) => {
            tracing::error!(request_id = %req_id.0, error = %e, "geocode request failed");
            Err(ApiError::upstream(
                "Error fetching data from Google Geocoding API",
            ))
        }
    }
}
