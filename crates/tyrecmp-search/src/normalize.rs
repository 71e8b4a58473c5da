//! Filtering of raw source results against the selected vendor set.

use std::collections::HashSet;

use tyrecmp_core::{hosts_for, Offer, SearchRequest};

/// Whether `offer` originates from one of `allowed_hosts`.
#[must_use]
pub fn accepts(offer: &Offer, allowed_hosts: &HashSet<&str>) -> bool {
    allowed_hosts.contains(offer.site.as_str())
}

/// Keeps only the offers whose `site` is the host of a vendor selected in
/// `request`, preserving source order.
///
/// Unknown vendor keys in the request resolve to no host and so select
/// nothing.
#[must_use]
pub fn filter_to_selected(offers: Vec<Offer>, request: &SearchRequest) -> Vec<Offer> {
    let allowed = hosts_for(request.selected_vendor_keys());
    let total = offers.len();

    let kept: Vec<Offer> = offers
        .into_iter()
        .filter(|offer| {
            let keep = accepts(offer, &allowed);
            if !keep {
                tracing::debug!(site = %offer.site, "dropping offer from unselected vendor");
            }
            keep
        })
        .collect();

    if kept.len() < total {
        tracing::debug!(
            kept = kept.len(),
            dropped = total - kept.len(),
            "filtered offers to selected vendors"
        );
    }
    kept
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
