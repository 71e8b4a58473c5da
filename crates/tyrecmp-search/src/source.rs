use async_trait::async_trait;
use tyrecmp_core::{Offer, SearchRequest};

use crate::error::SourceError;

/// A backend that can answer a [`SearchRequest`] with candidate offers.
///
/// Sources return raw candidates; filtering against the selected vendors is
/// done by the caller. New vendor integrations plug in by implementing this
/// trait.
#[async_trait]
pub trait OfferSource: Send + Sync {
    /// Short name used in logs, e.g. `"fixture"`.
    fn name(&self) -> &'static str;

    /// Fetches candidate offers for `request`.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] when the backend cannot be reached or its
    /// answer cannot be read.
    async fn fetch(&self, request: &SearchRequest) -> Result<Vec<Offer>, SourceError>;
}
