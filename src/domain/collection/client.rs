//! Collections sub-client: floor price enrichment by policy id.

use crate::client::TickerClient;
use crate::domain::collection::CollectionStats;
use crate::error::TickerError;
use crate::shared::PolicyId;

pub struct Collections<'a> {
    pub(crate) client: &'a TickerClient,
}

impl<'a> Collections<'a> {
    /// Look up one collection. `Ok(None)` when the indexer knows no
    /// collection for this policy id.
    pub async fn get(&self, policy_id: &PolicyId) -> Result<Option<CollectionStats>, TickerError> {
        let response = self.client.http.get_policy_detail(policy_id).await?;
        let stats = CollectionStats::from_response(policy_id, response);
        if stats.is_none() {
            tracing::warn!(policy_id = %policy_id, "No collection data in policy detail response");
        }
        Ok(stats)
    }
}
