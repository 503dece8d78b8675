#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_level: String,
    /// Landing page the browser driver opens before submitting a query.
    pub maps_base_url: String,
    pub search_timeout_ms: u64,
    pub search_poll_interval_ms: u64,
    pub search_max_retries: u32,
    pub search_retry_delay_ms: u64,
}
