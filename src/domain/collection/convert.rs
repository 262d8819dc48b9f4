//! Conversions from wire types to domain types for collections.

use super::wire::PolicyDetailResponse;
use super::CollectionStats;
use crate::domain::portfolio::UNKNOWN_NAME;
use crate::shared::units::base_units_to_ada;
use crate::shared::PolicyId;
use rust_decimal::Decimal;

impl CollectionStats {
    /// `None` when the response has no `data.collection` object.
    ///
    /// A missing name becomes [`UNKNOWN_NAME`]; missing or negative stats
    /// become zero.
    pub fn from_response(policy_id: &PolicyId, response: PolicyDetailResponse) -> Option<Self> {
        let collection = response.data?.collection?;
        let stats = collection.stats.unwrap_or_default();

        let floor_lovelace = stats
            .floor
            .filter(|f| *f > Decimal::ZERO)
            .unwrap_or(Decimal::ZERO);

        Some(Self {
            policy_id: policy_id.clone(),
            name: collection
                .name
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| UNKNOWN_NAME.to_string()),
            floor_price_ada: base_units_to_ada(floor_lovelace),
            owners: stats.owners.unwrap_or(0),
        })
    }
}
