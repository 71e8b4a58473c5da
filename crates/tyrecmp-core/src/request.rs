use serde::Serialize;

use crate::descriptor::TyreSizeDescriptor;
use crate::error::RequestError;

/// Default brand filter used when the caller does not supply one.
pub const DEFAULT_BRAND: &str = "Michelin";

/// A validated search: size, optional brand filter and the vendors to query.
///
/// Built once per search and not modified afterwards. Construction is the
/// only place an empty vendor selection is caught.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    size: TyreSizeDescriptor,
    brand: String,
    selected_vendor_keys: Vec<String>,
}

impl SearchRequest {
    /// Builds a request from raw input.
    ///
    /// Duplicate vendor keys are collapsed, keeping first-seen order. Keys
    /// are not checked against the registry; unknown ones are dropped later
    /// during host resolution.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::NoVendorsSelected`] if `selected_vendor_keys`
    /// is empty.
    pub fn new<I, S>(
        size: TyreSizeDescriptor,
        brand: impl Into<String>,
        selected_vendor_keys: I,
    ) -> Result<Self, RequestError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut keys: Vec<String> = Vec::new();
        for key in selected_vendor_keys {
            let key = key.into();
            if !keys.contains(&key) {
                keys.push(key);
            }
        }

        if keys.is_empty() {
            return Err(RequestError::NoVendorsSelected);
        }

        Ok(Self {
            size,
            brand: brand.into(),
            selected_vendor_keys: keys,
        })
    }

    #[must_use]
    pub fn size(&self) -> &TyreSizeDescriptor {
        &self.size
    }

    /// Brand filter; empty means any brand.
    #[must_use]
    pub fn brand(&self) -> &str {
        &self.brand
    }

    #[must_use]
    pub fn selected_vendor_keys(&self) -> &[String] {
        &self.selected_vendor_keys
    }

    /// Vendor keys joined with `,` as the search service expects them.
    #[must_use]
    pub fn sites_param(&self) -> String {
        self.selected_vendor_keys.join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_empty_selection() {
        let result = SearchRequest::new(TyreSizeDescriptor::default(), "", Vec::<String>::new());
        assert_eq!(result, Err(RequestError::NoVendorsSelected));
    }

    #[test]
    fn new_collapses_duplicate_keys_in_first_seen_order() {
        let request = SearchRequest::new(
            TyreSizeDescriptor::default(),
            DEFAULT_BRAND,
            ["haskar", "lasmax", "haskar"],
        )
        .unwrap();
        assert_eq!(request.selected_vendor_keys(), ["haskar", "lasmax"]);
        assert_eq!(request.sites_param(), "haskar,lasmax");
    }

    #[test]
    fn new_keeps_unknown_keys() {
        let request = SearchRequest::new(TyreSizeDescriptor::default(), "", ["ghost"]).unwrap();
        assert_eq!(request.selected_vendor_keys(), ["ghost"]);
    }
}
