//! High-level client: `TickerClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::config::Endpoints;
use crate::domain::balance::client::Balances;
use crate::domain::collection::client::Collections;
use crate::domain::payment::client::Payments;
use crate::domain::portfolio::client::Portfolios;
use crate::error::TickerError;
use crate::http::{RetryPolicy, TickerHttp, DEFAULT_REQUEST_TIMEOUT};

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::balance::client::Balances as BalancesClient;
pub use crate::domain::collection::client::Collections as CollectionsClient;
pub use crate::domain::payment::client::Payments as PaymentsClient;
pub use crate::domain::portfolio::client::Portfolios as PortfoliosClient;

/// Entry point for all remote lookups.
///
/// Provides nested sub-client accessors for each source:
/// `client.balances()`, `client.portfolios()`, etc.
#[derive(Debug, Clone)]
pub struct TickerClient {
    pub(crate) http: TickerHttp,
}

impl TickerClient {
    pub fn builder() -> TickerClientBuilder {
        TickerClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn balances(&self) -> Balances<'_> {
        Balances { client: self }
    }

    pub fn portfolios(&self) -> Portfolios<'_> {
        Portfolios { client: self }
    }

    pub fn collections(&self) -> Collections<'_> {
        Collections { client: self }
    }

    pub fn payments(&self) -> Payments<'_> {
        Payments { client: self }
    }

    pub fn endpoints(&self) -> &Endpoints {
        self.http.endpoints()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct TickerClientBuilder {
    endpoints: Endpoints,
    request_timeout: Duration,
    retry: RetryPolicy,
}

impl Default for TickerClientBuilder {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            retry: RetryPolicy::None,
        }
    }
}

impl TickerClientBuilder {
    pub fn endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn account_info_url(mut self, url: &str) -> Self {
        self.endpoints.account_info_url = url.to_string();
        self
    }

    pub fn portfolio_url(mut self, url: &str) -> Self {
        self.endpoints.portfolio_url = url.to_string();
        self
    }

    pub fn policy_detail_url(mut self, url: &str) -> Self {
        self.endpoints.policy_detail_url = url.to_string();
        self
    }

    pub fn address_utxos_url(mut self, url: &str) -> Self {
        self.endpoints.address_utxos_url = url.to_string();
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn build(self) -> Result<TickerClient, TickerError> {
        Ok(TickerClient {
            http: TickerHttp::new(self.endpoints, self.request_timeout, self.retry)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides_single_endpoint() {
        let client = TickerClient::builder()
            .policy_detail_url("http://localhost:1234/detail")
            .build()
            .unwrap();
        assert_eq!(client.endpoints().policy_detail_url, "http://localhost:1234/detail");
        assert_eq!(
            client.endpoints().portfolio_url,
            crate::network::DEFAULT_MINSWAP_PORTFOLIO_URL
        );
    }
}
