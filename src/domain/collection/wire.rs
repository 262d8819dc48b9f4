//! Wire types for the Cexplorer policy detail endpoint.

use crate::shared::serde_util::{lenient_decimal, lenient_u64};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// `{"data": {"collection": {"name": ..., "stats": {"floor": ..., "owners": ...}}}}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PolicyDetailResponse {
    #[serde(default)]
    pub data: Option<PolicyDetailData>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PolicyDetailData {
    #[serde(default)]
    pub collection: Option<CollectionWire>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CollectionWire {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub stats: Option<CollectionStatsWire>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CollectionStatsWire {
    /// Floor price in lovelace.
    #[serde(default, deserialize_with = "lenient_decimal::deserialize")]
    pub floor: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_u64::deserialize")]
    pub owners: Option<u64>,
}
