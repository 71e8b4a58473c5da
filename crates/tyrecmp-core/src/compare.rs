//! Price comparison over a result set.
//!
//! Everything here is recomputed from the offers passed in; nothing is
//! cached between searches because the vendor selection changes the pool.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::offers::{Offer, ResultSet};

/// Currency shown for the cheapest price when the set carries none.
const FALLBACK_CURRENCY: &str = "TRY";

/// Lowest price across `offers`, or `None` for an empty slice.
#[must_use]
pub fn cheapest_price(offers: &[Offer]) -> Option<Decimal> {
    offers.iter().map(|o| o.price).min()
}

/// Whether `offer` is at the minimum price. Every offer tied at the minimum
/// counts, not just the first one.
#[must_use]
pub fn is_cheapest(offer: &Offer, cheapest: Option<Decimal>) -> bool {
    cheapest == Some(offer.price)
}

/// Returns `offers` ordered by price. Equal prices keep their input order
/// in both directions.
#[must_use]
pub fn sorted(offers: &[Offer], ascending: bool) -> Vec<Offer> {
    let mut list = offers.to_vec();
    if ascending {
        list.sort_by(|a, b| a.price.cmp(&b.price));
    } else {
        list.sort_by(|a, b| b.price.cmp(&a.price));
    }
    list
}

#[must_use]
pub fn toggle_sort_direction(ascending: bool) -> bool {
    !ascending
}

/// Two-decimal price with its currency code, e.g. `3795.00 TRY`.
#[must_use]
pub fn format_price(price: Decimal, currency: &str) -> String {
    format!("{:.2} {currency}", price.round_dp(2))
}

/// Headline numbers for a result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub selected_vendors: usize,
    pub offer_count: usize,
    pub cheapest_price: Option<Decimal>,
    /// Currency of the first offer in the set, used to label the cheapest
    /// price.
    pub currency: String,
}

impl Summary {
    /// Cheapest price formatted for display, or `-` when there is none.
    #[must_use]
    pub fn cheapest_display(&self) -> String {
        self.cheapest_price
            .map_or_else(|| "-".to_owned(), |p| format_price(p, &self.currency))
    }
}

#[must_use]
pub fn summarize(result: &ResultSet, selected_vendors: usize) -> Summary {
    Summary {
        selected_vendors,
        offer_count: result.offers.len(),
        cheapest_price: cheapest_price(&result.offers),
        currency: result
            .offers
            .first()
            .map_or_else(|| FALLBACK_CURRENCY.to_owned(), |o| o.currency.clone()),
    }
}
