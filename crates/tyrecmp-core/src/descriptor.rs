use std::fmt;

use serde::{Deserialize, Serialize};

/// A tyre size as typed by the user, e.g. `205/55 R16 91V`.
///
/// Components are kept as free-form text. Vendors accept differing formats
/// (`"91"` vs `"91/89"` load indices, `"R16"` vs `"16"` rims), so the
/// descriptor is advisory text handed to the search service rather than a
/// validated physical size. Empty components are accepted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TyreSizeDescriptor {
    pub width: String,
    pub aspect_height: String,
    pub rim_diameter: String,
    pub load_index: String,
    pub speed_symbol: String,
}

impl TyreSizeDescriptor {
    #[must_use]
    pub fn new(
        width: impl Into<String>,
        aspect_height: impl Into<String>,
        rim_diameter: impl Into<String>,
        load_index: impl Into<String>,
        speed_symbol: impl Into<String>,
    ) -> Self {
        Self {
            width: width.into(),
            aspect_height: aspect_height.into(),
            rim_diameter: rim_diameter.into(),
            load_index: load_index.into(),
            speed_symbol: speed_symbol.into(),
        }
    }

    /// Canonical display form: `{width}/{aspect_height} R{rim_diameter} {load_index}{speed_symbol}`.
    #[must_use]
    pub fn format(&self) -> String {
        self.to_string()
    }
}

impl Default for TyreSizeDescriptor {
    fn default() -> Self {
        Self::new("205", "55", "16", "91", "V")
    }
}

impl fmt::Display for TyreSizeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} R{} {}{}",
            self.width, self.aspect_height, self.rim_diameter, self.load_index, self.speed_symbol
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_produces_canonical_size_text() {
        let size = TyreSizeDescriptor::new("225", "45", "17", "94", "W");
        assert_eq!(size.format(), "225/45 R17 94W");
    }

    #[test]
    fn default_matches_common_passenger_size() {
        assert_eq!(TyreSizeDescriptor::default().format(), "205/55 R16 91V");
    }

    #[test]
    fn empty_components_are_kept_verbatim() {
        let size = TyreSizeDescriptor::new("205", "", "16", "", "");
        assert_eq!(size.format(), "205/ R16 ");
    }

    #[test]
    fn malformed_components_are_not_rejected() {
        let size = TyreSizeDescriptor::new("two-o-five", "55", "R16", "91/89", "v");
        assert_eq!(size.to_string(), "two-o-five/55 RR16 91/89v");
    }
}
