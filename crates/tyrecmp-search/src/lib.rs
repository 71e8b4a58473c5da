//! Offer search for tyre comparison.
//!
//! Defines the [`OfferSource`] seam with two backends, a built-in
//! [`FixtureSource`] and the HTTP [`RemoteSource`], plus the
//! [`SearchOrchestrator`] that runs one search at a time, filters results
//! to the selected vendors and keeps the current result set.

pub mod client;
pub mod error;
pub mod fixture;
pub mod normalize;
pub mod orchestrator;
pub mod source;

pub use client::RemoteSource;
pub use error::{SearchError, SourceError};
pub use fixture::FixtureSource;
pub use normalize::filter_to_selected;
pub use orchestrator::SearchOrchestrator;
pub use source::OfferSource;
