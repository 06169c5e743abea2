//! Two-page nearby search with relevance filtering.

use std::sync::Arc;
use std::time::Duration;

use nearbite_core::{SearchCriteria, MIN_PAGE_TOKEN_DELAY_MS};

use crate::delay::Delay;
use crate::error::{PlacesError, SearchError};
use crate::filter::filter_records;
use crate::provider::PlaceSearchProvider;
use crate::types::{PlaceRecord, SearchOutcome};

/// Searches nearby eateries and returns a deduplicated, filtered list.
///
/// Fetches at most two pages: the first, and if it carries a continuation
/// token, exactly one follow-up after waiting `page_token_delay`. A token on
/// the second page is ignored.
///
/// **All-or-nothing semantics**: if the follow-up page fails, records from
/// the first page are discarded and the error is returned.
pub struct PlacesAggregator {
    provider: Arc<dyn PlaceSearchProvider>,
    delay: Arc<dyn Delay>,
    page_token_delay: Duration,
}

impl PlacesAggregator {
    /// `page_token_delay` is raised to the provider minimum (2 s) if shorter.
    #[must_use]
    pub fn new(
        provider: Arc<dyn PlaceSearchProvider>,
        delay: Arc<dyn Delay>,
        page_token_delay: Duration,
    ) -> Self {
        let minimum = Duration::from_millis(MIN_PAGE_TOKEN_DELAY_MS);
        if page_token_delay < minimum {
            tracing::warn!(
                requested_ms = u64::try_from(page_token_delay.as_millis()).unwrap_or(u64::MAX),
                minimum_ms = MIN_PAGE_TOKEN_DELAY_MS,
                "page token delay below provider minimum; using minimum"
            );
        }
        Self {
            provider,
            delay,
            page_token_delay: page_token_delay.max(minimum),
        }
    }

    #[must_use]
    pub fn page_token_delay(&self) -> Duration {
        self.page_token_delay
    }

    /// Validates raw query values, then runs [`Self::search`].
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Validation`] without contacting the provider if
    /// `location` or `price` is missing or malformed, otherwise any error
    /// from [`Self::search`].
    pub async fn search_params(
        &self,
        location: Option<&str>,
        price: Option<&str>,
        radius: Option<&str>,
    ) -> Result<SearchOutcome, SearchError> {
        let criteria = SearchCriteria::from_params(location, price, radius)?;
        self.search(&criteria).await
    }

    /// Runs one search.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Upstream`] if either page request fails.
    pub async fn search(&self, criteria: &SearchCriteria) -> Result<SearchOutcome, SearchError> {
        let records = self.fetch_records(criteria).await?;
        let total_fetched = records.len();

        let results = filter_records(records);
        let total_filtered = results.len();

        tracing::info!(
            location = %criteria.location,
            price_level = %criteria.price_level,
            total_fetched,
            total_filtered,
            "places search complete"
        );

        Ok(SearchOutcome {
            results,
            total_fetched,
            total_filtered,
        })
    }

    async fn fetch_records(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<Vec<PlaceRecord>, PlacesError> {
        let first = self.provider.fetch_page(criteria, None).await?;
        tracing::debug!(
            page = 1,
            count = first.records.len(),
            has_next = first.next_token.is_some(),
            "fetched places page"
        );

        let mut records = first.records;
        let Some(token) = first.next_token else {
            return Ok(records);
        };

        self.delay.sleep(self.page_token_delay).await;

        let second = self.provider.fetch_page(criteria, Some(&token)).await?;
        tracing::debug!(
            page = 2,
            count = second.records.len(),
            ignored_next = second.next_token.is_some(),
            "fetched places page"
        );

        records.extend(second.records);
        Ok(records)
    }
}
