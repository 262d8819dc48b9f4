//! Wire types for the Minswap portfolio endpoint.
//!
//! Every field is optional: the parser falls back per field instead of
//! rejecting the document.

use crate::shared::serde_util::lenient_decimal;
use crate::shared::PolicyId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fixed query flags sent alongside the address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioQuery {
    pub only_minswap: bool,
    pub filter_small_value: bool,
}

impl Default for PortfolioQuery {
    fn default() -> Self {
        Self {
            only_minswap: true,
            filter_small_value: false,
        }
    }
}

/// Top-level response: `{"positions": {...}}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PortfolioResponse {
    #[serde(default)]
    pub positions: Option<Positions>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Positions {
    #[serde(default)]
    pub asset_positions: Option<Vec<AssetPosition>>,
    #[serde(default)]
    pub nft_positions: Option<Vec<NftPosition>>,
}

/// A fungible position.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AssetPosition {
    #[serde(default)]
    pub asset: Option<AssetInfo>,
    #[serde(default, deserialize_with = "lenient_decimal::deserialize")]
    pub price_usd: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal::deserialize")]
    pub amount: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal::deserialize")]
    pub pnl_24h_percent: Option<Decimal>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AssetInfo {
    #[serde(default)]
    pub currency_symbol: Option<PolicyId>,
    #[serde(default)]
    pub metadata: Option<AssetMetadata>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AssetMetadata {
    #[serde(default)]
    pub ticker: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// One owned NFT unit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NftPosition {
    /// Policy id of the collection; entries without it are skipped.
    #[serde(default)]
    pub currency_symbol: Option<PolicyId>,
    #[serde(default)]
    pub asset: Option<AssetInfo>,
}

impl AssetInfo {
    pub fn metadata_name(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|m| m.name.as_deref())
            .filter(|n| !n.is_empty())
    }

    pub fn metadata_ticker(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|m| m.ticker.as_deref())
            .filter(|t| !t.is_empty())
    }
}
