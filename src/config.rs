//! Refresh configuration: wallet identities, intervals, list capacities and
//! endpoint URLs.
//!
//! Every struct deserializes with defaults for missing fields, so a config
//! file only needs the wallet identities.

use crate::domain::portfolio::wire::PortfolioQuery;
use crate::network;
use crate::shared::{StakeAddress, WalletAddress};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What to track and how often.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerConfig {
    /// Account queried for the balance.
    pub stake_address: StakeAddress,
    /// Address queried for token and NFT positions.
    pub wallet_address: WalletAddress,
    /// Shop address watched for point-of-sale payments.
    #[serde(default)]
    pub payment_address: Option<WalletAddress>,
    #[serde(default)]
    pub portfolio_query: PortfolioQuery,
    #[serde(default)]
    pub intervals: RefreshIntervals,
    #[serde(default)]
    pub capacities: Capacities,
}

impl TickerConfig {
    pub fn new(stake_address: StakeAddress, wallet_address: WalletAddress) -> Self {
        Self {
            stake_address,
            wallet_address,
            payment_address: None,
            portfolio_query: PortfolioQuery::default(),
            intervals: RefreshIntervals::default(),
            capacities: Capacities::default(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, crate::error::TickerError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Refresh periods, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshIntervals {
    pub balance_secs: u64,
    pub portfolio_secs: u64,
    pub payment_check_secs: u64,
}

impl Default for RefreshIntervals {
    fn default() -> Self {
        Self {
            balance_secs: 60,
            portfolio_secs: 600,
            payment_check_secs: 10,
        }
    }
}

impl RefreshIntervals {
    pub fn balance(&self) -> Duration {
        Duration::from_secs(self.balance_secs)
    }

    pub fn portfolio(&self) -> Duration {
        Duration::from_secs(self.portfolio_secs)
    }

    pub fn payment_check(&self) -> Duration {
        Duration::from_secs(self.payment_check_secs)
    }
}

/// Fixed capacities of the store's lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Capacities {
    pub tokens: usize,
    pub nft_collections: usize,
    pub pending_enrichment: usize,
}

impl Default for Capacities {
    fn default() -> Self {
        Self {
            tokens: 20,
            nft_collections: 20,
            pending_enrichment: 10,
        }
    }
}

/// Full URLs of the four remote endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub account_info_url: String,
    pub portfolio_url: String,
    pub policy_detail_url: String,
    pub address_utxos_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            account_info_url: network::DEFAULT_KOIOS_ACCOUNT_INFO_URL.to_string(),
            portfolio_url: network::DEFAULT_MINSWAP_PORTFOLIO_URL.to_string(),
            policy_detail_url: network::DEFAULT_CEXPLORER_POLICY_URL.to_string(),
            address_utxos_url: network::DEFAULT_KOIOS_ADDRESS_UTXOS_URL.to_string(),
        }
    }
}

impl Endpoints {
    /// All four endpoints under one base URL, using the indexers' paths.
    /// Mostly useful against a local mock server.
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            account_info_url: format!("{base}/api/v1/account_info"),
            portfolio_url: format!("{base}/v1/portfolio/tokens"),
            policy_detail_url: format!("{base}/v1/policy/detail"),
            address_utxos_url: format!("{base}/api/v1/address_utxos"),
        }
    }
}
