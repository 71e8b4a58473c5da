use rust_decimal::Decimal;
use tyrecmp_core::Offer;

use crate::error::SourceError;

/// Parses a search service response body into offers.
///
/// The body must be a JSON array of offer objects. The whole payload is
/// rejected if any element is unreadable (including a `stock` that is not a
/// non-negative integer, such as `5.0`) or carries a negative price; no
/// partial result is returned.
///
/// # Errors
///
/// - [`SourceError::Deserialize`] if the body is not an offer array.
/// - [`SourceError::InvalidOffer`] if an offer has a negative price.
pub fn parse_offers(body: &str, context: &str) -> Result<Vec<Offer>, SourceError> {
    let offers: Vec<Offer> =
        serde_json::from_str(body).map_err(|e| SourceError::Deserialize {
            context: format!("offers from {context}"),
            source: e,
        })?;

    if let Some(bad) = offers.iter().find(|o| o.price < Decimal::ZERO) {
        return Err(SourceError::InvalidOffer {
            reason: format!("negative price {} from {}", bad.price, bad.site),
        });
    }

    Ok(offers)
}
