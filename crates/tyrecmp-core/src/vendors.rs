//! Fixed catalogue of vendor portals that can be queried for offers.
//!
//! The registry is compiled in. Its keys are the complete universe of
//! selectable vendors, and its order is the canonical display order.

use std::collections::HashSet;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct VendorSite {
    /// Stable identifier sent to the search service, e.g. `"mollaoglu"`.
    pub key: &'static str,
    /// Display name for the vendor.
    pub label: &'static str,
    /// Network host that offers from this vendor report as their `site`.
    pub host: &'static str,
}

const VENDORS: &[VendorSite] = &[
    VendorSite {
        key: "lastikpark",
        label: "bayiportal.lastikpark.com",
        host: "bayiportal.lastikpark.com",
    },
    VendorSite {
        key: "mollaoglu",
        label: "bayi.mollaoglu.com.tr",
        host: "bayi.mollaoglu.com.tr",
    },
    VendorSite {
        key: "haskar",
        label: "b2b.haskar.com.tr",
        host: "b2b.haskar.com.tr",
    },
    VendorSite {
        key: "cakiroglu",
        label: "b2b.cakirogluotomotiv.com",
        host: "b2b.cakirogluotomotiv.com",
    },
    VendorSite {
        key: "mutaflar",
        label: "bayi.mutaflarotomotiv.com",
        host: "bayi.mutaflarotomotiv.com",
    },
    VendorSite {
        key: "lasmax",
        label: "www.lasmaxbayi.com",
        host: "www.lasmaxbayi.com",
    },
];

/// All registered vendors in display order.
#[must_use]
pub fn list_vendors() -> &'static [VendorSite] {
    VENDORS
}

/// Every registered key, in display order. This is the default selection.
#[must_use]
pub fn all_vendor_keys() -> Vec<String> {
    VENDORS.iter().map(|v| v.key.to_owned()).collect()
}

#[must_use]
pub fn find_vendor(key: &str) -> Option<&'static VendorSite> {
    VENDORS.iter().find(|v| v.key == key)
}

/// Resolves selected vendor keys to the hosts their offers originate from.
///
/// Unknown keys are skipped without error.
pub fn hosts_for<I, S>(selected_keys: I) -> HashSet<&'static str>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    selected_keys
        .into_iter()
        .filter_map(|key| find_vendor(key.as_ref()))
        .map(|v| v.host)
        .collect()
}

#[cfg(test)]
#[path = "vendors_test.rs"]
mod tests;
