//! Runs searches against an [`OfferSource`] and owns the current result set.
//!
//! At most one search runs at a time: a call made while another is in
//! flight is rejected with [`SearchError::InFlight`] rather than queued.
//! The stored [`ResultSet`] is swapped as a whole, never edited in place.
//! There is no cancellation, so a slow search that finishes after the
//! caller moved on still replaces the stored set.

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::RwLock;
use tyrecmp_core::{toggle_sort_direction, ResultSet, SearchRequest};

use crate::error::SearchError;
use crate::normalize::filter_to_selected;
use crate::source::OfferSource;

#[derive(Debug, Default)]
pub struct SearchOrchestrator {
    in_flight: AtomicBool,
    current: RwLock<ResultSet>,
}

/// Clears the in-flight flag when dropped, including when the search
/// future itself is dropped mid-fetch.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl SearchOrchestrator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Snapshot of the stored result set.
    pub async fn current(&self) -> ResultSet {
        self.current.read().await.clone()
    }

    /// Flips the stored sort direction without re-querying and returns the
    /// new direction (`true` = ascending).
    pub async fn toggle_sort(&self) -> bool {
        let mut current = self.current.write().await;
        current.sort_ascending = toggle_sort_direction(current.sort_ascending);
        current.sort_ascending
    }

    /// Runs `request` against `source` and stores the filtered outcome.
    ///
    /// On success the stored set holds every offer from a selected vendor,
    /// in source order, with the previous sort direction. On failure the
    /// stored offers are cleared.
    ///
    /// # Errors
    ///
    /// - [`SearchError::InFlight`] if another search has not finished; the
    ///   stored set is left untouched.
    /// - Any source failure, converted to a user-facing [`SearchError`].
    pub async fn search(
        &self,
        request: &SearchRequest,
        source: &dyn OfferSource,
    ) -> Result<ResultSet, SearchError> {
        let Some(_guard) = self.try_begin() else {
            tracing::warn!(source = source.name(), "search rejected: another search is in flight");
            return Err(SearchError::InFlight);
        };

        tracing::info!(
            source = source.name(),
            size = %request.size(),
            brand = request.brand(),
            sites = %request.sites_param(),
            "searching offers"
        );

        match source.fetch(request).await {
            Ok(raw) => {
                let offers = filter_to_selected(raw, request);
                let mut current = self.current.write().await;
                let next = ResultSet::new(offers, current.sort_ascending);
                *current = next.clone();
                tracing::info!(
                    source = source.name(),
                    offers = next.len(),
                    "search completed"
                );
                Ok(next)
            }
            Err(e) => {
                tracing::warn!(source = source.name(), error = %e, "search failed");
                let mut current = self.current.write().await;
                *current = ResultSet::new(Vec::new(), current.sort_ascending);
                Err(SearchError::from(e))
            }
        }
    }

    fn try_begin(&self) -> Option<InFlightGuard<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightGuard(&self.in_flight))
    }
}

#[cfg(test)]
#[path = "orchestrator_test.rs"]
mod tests;
