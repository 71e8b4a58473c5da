use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// Origin of the offer search service; `/offers/search` is appended.
    pub search_base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Whether searches default to the built-in sample offers.
    pub use_fixture: bool,
    /// Simulated latency for the sample-offer source.
    pub fixture_delay_ms: u64,
    pub export_dir: PathBuf,
}
