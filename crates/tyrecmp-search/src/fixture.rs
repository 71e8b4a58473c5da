//! Built-in sample offers for demos and tests.

use std::time::Duration;

use async_trait::async_trait;
use rust_decimal::Decimal;
use tyrecmp_core::{Offer, SearchRequest};

use crate::error::SourceError;
use crate::source::OfferSource;

/// Returns four fixed Michelin Primacy 4+ offers regardless of the
/// requested size or brand. Only the vendor filter applied downstream
/// narrows them.
#[derive(Debug, Clone, Default)]
pub struct FixtureSource {
    delay: Duration,
}

impl FixtureSource {
    /// A fixture source that answers immediately.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A fixture source that waits `delay` before answering, to mimic a
    /// network round trip.
    #[must_use]
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl OfferSource for FixtureSource {
    fn name(&self) -> &'static str {
        "fixture"
    }

    async fn fetch(&self, request: &SearchRequest) -> Result<Vec<Offer>, SourceError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let offers = sample_offers();
        tracing::debug!(
            size = %request.size(),
            count = offers.len(),
            "serving sample offers"
        );
        Ok(offers)
    }
}

/// The fixed sample set, in vendor registry order.
#[must_use]
pub fn sample_offers() -> Vec<Offer> {
    vec![
        sample(
            "bayiportal.lastikpark.com",
            24,
            3850,
            "https://bayiportal.lastikpark.com/#PortalMain",
        ),
        sample(
            "bayi.mollaoglu.com.tr",
            8,
            3795,
            "https://bayi.mollaoglu.com.tr/tr/urunler",
        ),
        sample("b2b.haskar.com.tr", 5, 3920, "https://b2b.haskar.com.tr"),
        sample(
            "b2b.cakirogluotomotiv.com",
            12,
            3810,
            "https://b2b.cakirogluotomotiv.com/B2B_Stoklar.asp",
        ),
    ]
}

fn sample(site: &str, stock: u32, price: i64, url: &str) -> Offer {
    Offer {
        site: site.to_owned(),
        brand: "Michelin".to_owned(),
        pattern: "Primacy 4+".to_owned(),
        size: "205/55 R16 91V".to_owned(),
        stock,
        price: Decimal::from(price),
        currency: "TRY".to_owned(),
        url: url.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use tyrecmp_core::{list_vendors, TyreSizeDescriptor};

    use super::*;

    #[test]
    fn sample_offers_come_from_registered_hosts() {
        for offer in sample_offers() {
            assert!(
                list_vendors().iter().any(|v| v.host == offer.site),
                "{} is not a registered host",
                offer.site
            );
        }
    }

    #[tokio::test]
    async fn fetch_ignores_size_and_brand() {
        let request = SearchRequest::new(
            TyreSizeDescriptor::new("315", "35", "21", "111", "Y"),
            "Bridgestone",
            ["lasmax"],
        )
        .unwrap();
        let offers = FixtureSource::new().fetch(&request).await.unwrap();
        assert_eq!(offers, sample_offers());
    }

    #[tokio::test(start_paused = true)]
    async fn fetch_waits_for_configured_delay() {
        let request = SearchRequest::new(TyreSizeDescriptor::default(), "", ["haskar"]).unwrap();
        let source = FixtureSource::with_delay(Duration::from_millis(500));
        let started = tokio::time::Instant::now();
        let offers = source.fetch(&request).await.unwrap();
        assert_eq!(offers.len(), 4);
        assert!(started.elapsed() >= Duration::from_millis(500));
    }
}
