//! Core domain types for tyre offer comparison.
//!
//! Holds the size descriptor, the fixed vendor registry, the canonical
//! [`Offer`] shape, the comparison helpers that rank a result set, and the
//! CSV exporter. Nothing in this crate performs network I/O.

pub mod app_config;
pub mod compare;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod export;
pub mod offers;
pub mod request;
pub mod vendors;

pub use app_config::AppConfig;
pub use compare::{
    cheapest_price, format_price, is_cheapest, sorted, summarize, toggle_sort_direction, Summary,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use descriptor::TyreSizeDescriptor;
pub use error::{ConfigError, ExportError, RequestError};
pub use export::{export_file_name, serialize, write_export};
pub use offers::{Offer, ResultSet};
pub use request::SearchRequest;
pub use vendors::{all_vendor_keys, find_vendor, hosts_for, list_vendors, VendorSite};
