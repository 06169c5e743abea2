//! GET /api/photo: image passthrough by photo reference.

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Extension,
};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{non_blank, AppState};

/// Used when the provider omits `Content-Type`.
const DEFAULT_PHOTO_CONTENT_TYPE: &str = "image/jpeg";

#[derive(Debug, Deserialize)]
pub(super) struct PhotoQuery {
    photo_reference: Option<String>,
}

/// Errors here are plain text, not JSON: the caller is an `<img>` tag.
pub(super) async fn proxy_photo(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<PhotoQuery>,
) -> Response {
    let Some(reference) = non_blank(query.photo_reference.as_deref()) else {
        return (StatusCode::BAD_REQUEST, "Photo reference required").into_response();
    };

    match state.photos.fetch_photo(reference).await {
        Ok(photo) => {
            let content_type = photo
                .content_type
                .unwrap_or_else(|| DEFAULT_PHOTO_CONTENT_TYPE.to_owned());
            ([(header::CONTENT_TYPE, content_type)], photo.bytes).into_response()
        }
        Err(e) => {
            tracing::error!(request_id = %req_id.0, error = %e, "photo fetch failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Error fetching image").into_response()
        }
    }
}
