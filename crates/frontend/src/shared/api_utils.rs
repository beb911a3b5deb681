//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing backend URLs.

/// Build a backend URL from the configured base path and a relative path
///
/// # Arguments
/// * `base_path` - Backend prefix from `ConsoleConfig`, e.g. "backend"
/// * `path` - Endpoint path, e.g. "jvm/heap-dump-defaults"
///
/// # Example
/// ```ignore
/// let url = api_url("backend", "jvm/dump-heap");
/// assert_eq!(url, "backend/jvm/dump-heap");
/// ```
pub fn api_url(base_path: &str, path: &str) -> String {
    let base = base_path.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if base.is_empty() {
        return path.to_string();
    }
    format!("{}/{}", base, path)
}

/// URL of the tab-bar-data endpoint of a transaction service
pub fn tab_bar_data_url(base_path: &str, service: &str, query_string: &str) -> String {
    format!(
        "{}{}",
        api_url(base_path, &format!("{}/tab-bar-data", service)),
        query_string
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_joins_single_slash() {
        assert_eq!(api_url("backend", "jvm/dump-heap"), "backend/jvm/dump-heap");
        assert_eq!(api_url("backend/", "/jvm/dump-heap"), "backend/jvm/dump-heap");
        assert_eq!(api_url("", "jvm/dump-heap"), "jvm/dump-heap");
    }

    #[test]
    fn test_tab_bar_data_url() {
        assert_eq!(
            tab_bar_data_url("backend", "transaction", "?from=1&to=2"),
            "backend/transaction/tab-bar-data?from=1&to=2"
        );
        assert_eq!(
            tab_bar_data_url("backend", "transaction", ""),
            "backend/transaction/tab-bar-data"
        );
    }
}
