use nearbite_core::ValidationError;
use thiserror::Error;

/// Errors returned by the Google Maps Platform client.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Network or TLS failure from the underlying HTTP client.
    ///
    /// Always constructed through [`PlacesError::http`] so the request URL,
    /// which carries the API key, never reaches logs or responses.
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// The provider answered with a non-`OK` `status` field.
    #[error("provider returned status {status}{}", message_suffix(.message.as_deref()))]
    ApiStatus {
        status: String,
        message: Option<String>,
    },

    /// The provider reported success but returned nothing usable.
    #[error("no results for {context}")]
    NoResults { context: String },

    #[error("unexpected HTTP status {status} from {endpoint}")]
    UnexpectedStatus { status: u16, endpoint: &'static str },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

fn message_suffix(message: Option<&str>) -> String {
    message
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}

impl PlacesError {
    pub(crate) fn http(err: reqwest::Error) -> Self {
        Self::Http(err.without_url())
    }

    /// The provider's own status string, when the failure carried one.
    #[must_use]
    pub fn provider_status(&self) -> Option<&str> {
        match self {
            Self::ApiStatus { status, .. } => Some(status),
            _ => None,
        }
    }
}

/// Failure of a single [`crate::PlacesAggregator`] search.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Input was rejected before any provider call was made.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A provider page request failed; any records already fetched are discarded.
    #[error("upstream search failed: {0}")]
    Upstream(#[from] PlacesError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_status_display_includes_message_when_present() {
        let err = PlacesError::ApiStatus {
            status: "REQUEST_DENIED".to_string(),
            message: Some("bad key".to_string()),
        };
        assert_eq!(err.to_string(), "provider returned status REQUEST_DENIED: bad key");
    }

    #[test]
    fn api_status_display_without_message() {
        let err = PlacesError::ApiStatus {
            status: "ZERO_RESULTS".to_string(),
            message: None,
        };
        assert_eq!(err.to_string(), "provider returned status ZERO_RESULTS");
        assert_eq!(err.provider_status(), Some("ZERO_RESULTS"));
    }
}
