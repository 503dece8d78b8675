//! Browser driver seam and search orchestration.
//!
//! Driving a real browser lives outside this crate. Implementors of
//! [`BrowserDriver`] hand back raw HTML; [`search_places`] sequences the
//! calls, polls for result cards instead of sleeping a fixed delay, retries
//! transient failures and resolves anything else to an empty result.

use std::future::Future;
use std::time::Duration;

use placestew_core::{AppConfig, PlaceRecord};
use tokio::time::Instant;

use crate::listing::parse_card_fragment;

/// Failures reported by a [`BrowserDriver`].
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("failed to launch browser session: {0}")]
    Launch(String),

    #[error("navigation failed: {0}")]
    Navigation(String),

    #[error("element not found: {selector}")]
    ElementNotFound { selector: String },

    #[error("timed out after {waited_ms}ms waiting for {selector}")]
    Timeout { selector: String, waited_ms: u64 },

    #[error("browser session closed")]
    SessionClosed,
}

impl DriverError {
    /// Returns `true` for failures worth another attempt.
    ///
    /// **Transient:** navigation failures, missing elements and wait
    /// timeouts; the page is asynchronous and often just slow.
    ///
    /// **Fatal:** launch failures and a closed session; retrying cannot
    /// succeed without a new driver.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            DriverError::Navigation(_)
            | DriverError::ElementNotFound { .. }
            | DriverError::Timeout { .. } => true,
            DriverError::Launch(_) | DriverError::SessionClosed => false,
        }
    }
}

/// A live browser session that can run one search at a time.
pub trait BrowserDriver {
    /// Navigate to `url`.
    fn open(&mut self, url: &str) -> impl Future<Output = Result<(), DriverError>> + Send;

    /// Type `query` into the search box and submit it.
    fn submit_query(&mut self, query: &str)
        -> impl Future<Output = Result<(), DriverError>> + Send;

    /// Outer HTML of every element currently matching `selector`.
    ///
    /// An empty vector means nothing matches yet.
    fn result_fragments(
        &mut self,
        selector: &str,
    ) -> impl Future<Output = Result<Vec<String>, DriverError>> + Send;

    /// End the session.
    fn close(&mut self) -> impl Future<Output = Result<(), DriverError>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    pub base_url: String,
    /// Selector for one result card.
    pub results_selector: String,
    /// How long to wait for result cards to appear.
    pub timeout: Duration,
    pub poll_interval: Duration,
    /// Extra attempts after a transient failure.
    pub max_retries: u32,
    pub retry_delay: Duration,
}

impl SearchOptions {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            base_url: config.maps_base_url.clone(),
            results_selector: DEFAULT_RESULTS_SELECTOR.to_string(),
            timeout: Duration::from_millis(config.search_timeout_ms),
            poll_interval: Duration::from_millis(config.search_poll_interval_ms),
            max_retries: config.search_max_retries,
            retry_delay: Duration::from_millis(config.search_retry_delay_ms),
        }
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            base_url: "https://www.google.com/maps".to_string(),
            results_selector: DEFAULT_RESULTS_SELECTOR.to_string(),
            timeout: Duration::from_secs(10),
            poll_interval: Duration::from_millis(250),
            max_retries: 2,
            retry_delay: Duration::from_secs(1),
        }
    }
}

pub const DEFAULT_RESULTS_SELECTOR: &str = "div[role='article']";

/// Poll `selector` until at least one element matches or `timeout` elapses.
///
/// `ElementNotFound` while polling counts as "not there yet".
///
/// # Errors
///
/// Returns [`DriverError::Timeout`] when nothing matched in time, or the
/// driver's own error for any other failure.
pub async fn wait_for_results<D: BrowserDriver>(
    driver: &mut D,
    selector: &str,
    timeout: Duration,
    poll_interval: Duration,
) -> Result<Vec<String>, DriverError> {
    let started = Instant::now();
    loop {
        match driver.result_fragments(selector).await {
            Ok(fragments) if !fragments.is_empty() => return Ok(fragments),
            Ok(_) | Err(DriverError::ElementNotFound { .. }) => {}
            Err(e) => return Err(e),
        }

        let elapsed = started.elapsed();
        if elapsed >= timeout {
            return Err(DriverError::Timeout {
                selector: selector.to_string(),
                waited_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            });
        }
        tokio::time::sleep(poll_interval.min(timeout - elapsed)).await;
    }
}

/// Run `query` and parse every result card.
///
/// Never fails: transient errors are retried up to `options.max_retries`
/// times, and whatever error remains is logged and turned into an empty
/// result. The session is always closed before returning.
pub async fn search_places<D: BrowserDriver>(
    driver: &mut D,
    query: &str,
    options: &SearchOptions,
) -> Vec<PlaceRecord> {
    let mut attempt = 0u32;
    let outcome = loop {
        match search_attempt(driver, query, options).await {
            Ok(records) => break Ok(records),
            Err(err) if err.is_transient() && attempt < options.max_retries => {
                attempt += 1;
                tracing::warn!(
                    query,
                    attempt,
                    max_retries = options.max_retries,
                    error = %err,
                    "transient browser failure, retrying"
                );
                tokio::time::sleep(options.retry_delay).await;
            }
            Err(err) => break Err(err),
        }
    };

    if let Err(err) = driver.close().await {
        tracing::warn!(error = %err, "failed to close browser session");
    }

    match outcome {
        Ok(records) => {
            tracing::info!(query, results = records.len(), "search complete");
            records
        }
        Err(err) => {
            tracing::warn!(
                query,
                transient = err.is_transient(),
                error = %err,
                "search failed, returning no results"
            );
            Vec::new()
        }
    }
}

/// Names of the places [`search_places`] finds, in result order.
pub async fn search_place_names<D: BrowserDriver>(
    driver: &mut D,
    query: &str,
    options: &SearchOptions,
) -> Vec<String> {
    search_places(driver, query, options)
        .await
        .into_iter()
        .filter_map(|record| record.name)
        .collect()
}

async fn search_attempt<D: BrowserDriver>(
    driver: &mut D,
    query: &str,
    options: &SearchOptions,
) -> Result<Vec<PlaceRecord>, DriverError> {
    driver.open(&options.base_url).await?;
    driver.submit_query(query).await?;
    let fragments = wait_for_results(
        driver,
        &options.results_selector,
        options.timeout,
        options.poll_interval,
    )
    .await?;

    let records: Vec<PlaceRecord> = fragments
        .iter()
        .map(|fragment| parse_card_fragment(fragment))
        .filter(|record| !record.is_empty())
        .collect();
    tracing::debug!(
        query,
        cards = fragments.len(),
        records = records.len(),
        "parsed result cards"
    );
    Ok(records)
}
