use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single vendor's priced listing for a tyre, in the shape every source
/// is normalized into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    /// Origin host; matches the `host` of a registered vendor.
    pub site: String,
    pub brand: String,
    pub pattern: String,
    /// Size text as the vendor reports it, e.g. `"205/55 R16 91V"`. May
    /// differ textually from the searched descriptor.
    pub size: String,
    pub stock: u32,
    pub price: Decimal,
    /// Three-letter currency code, e.g. `"TRY"`.
    pub currency: String,
    /// Product page on the vendor portal.
    pub url: String,
}

/// The offers returned by the last completed search, plus the direction
/// they are currently sorted in.
///
/// A result set is only ever replaced as a whole. Use
/// [`ResultSet::sorted_offers`] for the display/export order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultSet {
    pub offers: Vec<Offer>,
    pub sort_ascending: bool,
}

impl ResultSet {
    #[must_use]
    pub fn new(offers: Vec<Offer>, sort_ascending: bool) -> Self {
        Self {
            offers,
            sort_ascending,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.offers.len()
    }

    /// Offers ordered by price in the current direction.
    #[must_use]
    pub fn sorted_offers(&self) -> Vec<Offer> {
        crate::compare::sorted(&self.offers, self.sort_ascending)
    }

    #[must_use]
    pub fn cheapest_price(&self) -> Option<Decimal> {
        crate::compare::cheapest_price(&self.offers)
    }
}

impl Default for ResultSet {
    fn default() -> Self {
        Self::new(Vec::new(), true)
    }
}
