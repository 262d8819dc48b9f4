//! Portfolio domain: fungible token positions and NFT collections held by an
//! address.
//!
//! A portfolio fetch is phase 1 of the NFT pipeline: it discovers distinct
//! collections and queues their policy ids for floor-price enrichment
//! (phase 2, see [`crate::domain::collection`]).

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

pub use convert::scan_collections;

use crate::shared::{BoundedList, PolicyId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Ticker used when a fungible position carries no metadata ticker.
pub const UNKNOWN_TICKER: &str = "UNKNOWN";

/// Name used when a fungible position has no metadata name.
pub const UNKNOWN_TOKEN_NAME: &str = "Unknown Token";

/// Name used when an NFT collection has no metadata name.
pub const UNKNOWN_NAME: &str = "Unknown";

/// A fungible token position.
///
/// `Default` is the empty sentinel returned for out-of-range lookups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenHolding {
    pub ticker: String,
    pub name: String,
    pub quantity: Decimal,
    pub price_usd: Decimal,
    /// `price_usd * quantity`, computed locally rather than trusted from the source.
    pub total_value_usd: Decimal,
    pub change_24h_percent: Decimal,
}

/// All units of one NFT collection (one policy id) held by the address.
///
/// `Default` is the empty sentinel returned for out-of-range lookups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NftCollectionHolding {
    pub display_name: String,
    pub units_held: u32,
    /// Floor price in ADA; zero means not yet known.
    pub floor_price_ada: Decimal,
    pub policy_id: PolicyId,
}

impl NftCollectionHolding {
    pub fn new(policy_id: PolicyId, display_name: String) -> Self {
        Self {
            display_name,
            units_held: 1,
            floor_price_ada: Decimal::ZERO,
            policy_id,
        }
    }

    pub fn has_floor_price(&self) -> bool {
        self.floor_price_ada > Decimal::ZERO
    }
}

/// NFT collections discovered in one pass, plus the policy ids still to be
/// enriched with floor prices, in discovery order.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionScan {
    pub holdings: BoundedList<NftCollectionHolding>,
    pub pending: BoundedList<PolicyId>,
}

/// Parsed result of one portfolio fetch.
///
/// A list is `None` when its array was missing from the response; the store
/// then keeps its previous contents for that list.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioSnapshot {
    pub tokens: Option<BoundedList<TokenHolding>>,
    pub collections: Option<CollectionScan>,
}

impl PortfolioSnapshot {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_none() && self.collections.is_none()
    }
}
