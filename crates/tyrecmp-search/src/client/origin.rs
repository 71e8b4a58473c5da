/// Extracts the hostname from a URL for use in log fields.
///
/// Falls back to the full string if parsing fails.
#[must_use]
pub fn extract_host(url: &str) -> String {
    reqwest::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_owned))
        .unwrap_or_else(|| url.to_owned())
}
