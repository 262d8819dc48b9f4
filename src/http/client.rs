//! Low-level HTTP client: `TickerHttp`.
//!
//! One method per remote endpoint. Returns wire types; conversion to domain
//! types happens in the domain sub-clients.

use crate::config::Endpoints;
use crate::domain::balance::wire::{AccountInfoRequest, AccountInfoResponse};
use crate::domain::collection::wire::PolicyDetailResponse;
use crate::domain::payment::wire::{AddressUtxosRequest, AddressUtxosResponse};
use crate::domain::portfolio::wire::{PortfolioQuery, PortfolioResponse};
use crate::error::HttpError;
use crate::http::retry::{RetryConfig, RetryPolicy};
use crate::shared::{PolicyId, StakeAddress, WalletAddress};

use reqwest::header::RETRY_AFTER;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Low-level HTTP client for the indexer endpoints.
#[derive(Debug, Clone)]
pub struct TickerHttp {
    client: Client,
    endpoints: Endpoints,
    retry: RetryPolicy,
}

impl TickerHttp {
    pub fn new(
        endpoints: Endpoints,
        timeout: Duration,
        retry: RetryPolicy,
    ) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(4)
            .build()?;

        Ok(Self {
            client,
            endpoints,
            retry,
        })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    // ── Balance ──────────────────────────────────────────────────────────

    pub async fn get_account_info(
        &self,
        stake_address: &StakeAddress,
    ) -> Result<AccountInfoResponse, HttpError> {
        let body = AccountInfoRequest::single(stake_address);
        self.post(&self.endpoints.account_info_url, &body).await
    }

    // ── Portfolio ────────────────────────────────────────────────────────

    pub async fn get_portfolio(
        &self,
        address: &WalletAddress,
        query: PortfolioQuery,
    ) -> Result<PortfolioResponse, HttpError> {
        let url = format!(
            "{}?address={}&only_minswap={}&filter_small_value={}",
            self.endpoints.portfolio_url,
            urlencoding::encode(address.as_str()),
            query.only_minswap,
            query.filter_small_value
        );
        self.get(&url).await
    }

    // ── Collections ──────────────────────────────────────────────────────

    pub async fn get_policy_detail(
        &self,
        policy_id: &PolicyId,
    ) -> Result<PolicyDetailResponse, HttpError> {
        let url = format!(
            "{}?id={}",
            self.endpoints.policy_detail_url,
            urlencoding::encode(policy_id.as_str())
        );
        self.get(&url).await
    }

    // ── Payments ─────────────────────────────────────────────────────────

    pub async fn get_address_utxos(
        &self,
        address: &WalletAddress,
        lovelace: u64,
    ) -> Result<AddressUtxosResponse, HttpError> {
        let url = format!("{}?value=eq.{}", self.endpoints.address_utxos_url, lovelace);
        let body = AddressUtxosRequest::single(address);
        self.post(&url, &body).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        self.request_with_retry(reqwest::Method::GET, url, None::<&()>)
            .await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        self.request_with_retry(reqwest::Method::POST, url, Some(body))
            .await
    }

    async fn request_with_retry<T: DeserializeOwned, B: Serialize>(
        &self,
        method: reqwest::Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<T, HttpError> {
        let config = match &self.retry {
            RetryPolicy::None => {
                return self.do_request(&method, url, body).await;
            }
            RetryPolicy::Idempotent => RetryConfig::idempotent(),
            RetryPolicy::Custom(c) => c.clone(),
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_request::<T, B>(&method, url, body).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    let should_retry = match &e {
                        HttpError::ServerError { status, .. } => {
                            config.retryable_statuses.contains(status)
                        }
                        HttpError::RateLimited { retry_after_ms } => {
                            if let Some(ms) = retry_after_ms {
                                let delay = Duration::from_millis(*ms).min(config.max_delay);
                                futures_timer::Delay::new(delay).await;
                            }
                            config.retryable_statuses.contains(&429)
                        }
                        HttpError::Timeout => true,
                        HttpError::Reqwest(re) => re.is_connect() || re.is_request(),
                        _ => false,
                    };

                    if should_retry && attempt < config.max_retries {
                        let delay = config.delay_for_attempt(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            "Retrying request to {}",
                            url
                        );
                        futures_timer::Delay::new(delay).await;
                        last_error = Some(e);
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: &reqwest::Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<T, HttpError> {
        let mut req = self
            .client
            .request(method.clone(), url)
            .header(reqwest::header::ACCEPT, "application/json");

        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await.map_err(map_transport_error)?;
        let status = resp.status();
        let status_code = status.as_u16();

        if status.is_success() {
            let text = resp.text().await.map_err(map_transport_error)?;
            tracing::debug!(status = status_code, bytes = text.len(), "Response from {}", url);
            return serde_json::from_str::<T>(&text)
                .map_err(|e| HttpError::MalformedBody(e.to_string()));
        }

        let retry_after_ms = resp
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_retry_after_ms);
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            401 => Err(HttpError::Unauthorized),
            404 => Err(HttpError::NotFound(body_text)),
            429 => Err(HttpError::RateLimited { retry_after_ms }),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}

fn map_transport_error(e: reqwest::Error) -> HttpError {
    if e.is_timeout() {
        HttpError::Timeout
    } else {
        HttpError::Reqwest(e)
    }
}

/// `Retry-After` in delta-seconds form. HTTP dates are ignored.
fn parse_retry_after_ms(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok().map(|s| s.saturating_mul(1000))
}
