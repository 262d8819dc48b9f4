//! Conversions from wire types to domain types for the portfolio, including
//! phase 1 of the NFT pipeline (collection discovery).

use super::wire::{AssetPosition, NftPosition, PortfolioResponse};
use super::{
    CollectionScan, NftCollectionHolding, PortfolioSnapshot, TokenHolding, UNKNOWN_NAME,
    UNKNOWN_TICKER, UNKNOWN_TOKEN_NAME,
};
use crate::config::Capacities;
use crate::shared::BoundedList;
use rust_decimal::Decimal;

impl From<AssetPosition> for TokenHolding {
    fn from(p: AssetPosition) -> Self {
        let info = p.asset.unwrap_or_default();
        let quantity = p.amount.unwrap_or_default();
        let price_usd = p.price_usd.unwrap_or_default();

        Self {
            ticker: info.metadata_ticker().unwrap_or(UNKNOWN_TICKER).to_string(),
            name: info.metadata_name().unwrap_or(UNKNOWN_TOKEN_NAME).to_string(),
            quantity,
            price_usd,
            total_value_usd: price_usd
                .checked_mul(quantity)
                .unwrap_or(Decimal::ZERO),
            change_24h_percent: p.pnl_24h_percent.unwrap_or_default(),
        }
    }
}

/// Collapse owned NFT units into one record per policy id.
///
/// Only the first `max_collections` positions are scanned, whether or not
/// they carry a policy id. Positions without one are skipped. A new
/// collection's policy id is queued for enrichment only while the pending
/// queue has room.
pub fn scan_collections(
    positions: impl IntoIterator<Item = NftPosition>,
    max_collections: usize,
    max_pending: usize,
) -> CollectionScan {
    let mut holdings: BoundedList<NftCollectionHolding> = BoundedList::new(max_collections);
    let mut pending = BoundedList::new(max_pending);

    for position in positions.into_iter().take(max_collections) {
        let Some(policy_id) = position.currency_symbol.filter(|id| !id.is_empty()) else {
            tracing::debug!("Skipping NFT position without currency_symbol");
            continue;
        };

        if let Some(existing) = holdings.iter_mut().find(|h| h.policy_id == policy_id) {
            existing.units_held = existing.units_held.saturating_add(1);
            continue;
        }

        let name = position
            .asset
            .as_ref()
            .and_then(|a| a.metadata_name())
            .unwrap_or(UNKNOWN_NAME)
            .to_string();

        holdings.push(NftCollectionHolding::new(policy_id.clone(), name));
        if !pending.push(policy_id.clone()) {
            tracing::debug!(policy_id = %policy_id, "Enrichment queue full, floor price will stay unknown");
        }
    }

    CollectionScan { holdings, pending }
}

impl PortfolioSnapshot {
    /// Build a snapshot from a portfolio response, truncating to capacity.
    pub fn from_response(response: PortfolioResponse, caps: &Capacities) -> Self {
        let Some(positions) = response.positions else {
            return Self {
                tokens: None,
                collections: None,
            };
        };

        let tokens = positions.asset_positions.map(|assets| {
            BoundedList::from_iter_truncated(caps.tokens, assets.into_iter().map(TokenHolding::from))
        });

        let collections = positions
            .nft_positions
            .map(|nfts| scan_collections(nfts, caps.nft_collections, caps.pending_enrichment));

        Self {
            tokens,
            collections,
        }
    }
}
