//! Collection domain: NFT collection name and floor price by policy id
//! (phase 2 of the NFT pipeline).

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::PolicyId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Name and market stats of one collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionStats {
    pub policy_id: PolicyId,
    pub name: String,
    /// Floor price in ADA; zero when the source had none.
    pub floor_price_ada: Decimal,
    pub owners: u64,
}
