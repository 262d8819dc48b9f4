//! The data store: last known balance, token list, NFT collection list and
//! the queue of collections awaiting enrichment.
//!
//! Only the refresh adapters write to it, and only with fully parsed data, so
//! a failed fetch never leaves a partial update behind. Readers get owned
//! copies; lookups past the end return the `Default` sentinel record.

use crate::config::Capacities;
use crate::domain::balance::{AccountBalance, WalletBalance};
use crate::domain::collection::CollectionStats;
use crate::domain::portfolio::{NftCollectionHolding, PortfolioSnapshot, TokenHolding};
use crate::shared::{BoundedList, PolicyId};
use rust_decimal::Decimal;

/// Which lists a portfolio snapshot replaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PortfolioApplied {
    pub tokens: bool,
    pub nfts: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DataStore {
    balance: WalletBalance,
    tokens: BoundedList<TokenHolding>,
    nfts: BoundedList<NftCollectionHolding>,
    pending: BoundedList<PolicyId>,
}

impl Default for DataStore {
    fn default() -> Self {
        Self::new(&Capacities::default())
    }
}

impl DataStore {
    pub fn new(caps: &Capacities) -> Self {
        Self {
            balance: WalletBalance::default(),
            tokens: BoundedList::new(caps.tokens),
            nfts: BoundedList::new(caps.nft_collections),
            pending: BoundedList::new(caps.pending_enrichment),
        }
    }

    // ── Writers ──────────────────────────────────────────────────────────

    pub fn apply_balance(&mut self, account: &AccountBalance, now_ms: u64) {
        self.balance = WalletBalance::from_account(account, now_ms);
    }

    /// Replace each list present in `snapshot`, truncating to this store's
    /// capacities. Lists absent from the snapshot keep their contents.
    ///
    /// The NFT list is rebuilt from scratch: floor prices start unknown and
    /// are filled in by the enrichment pass that follows.
    pub fn apply_portfolio(&mut self, snapshot: PortfolioSnapshot) -> PortfolioApplied {
        let mut applied = PortfolioApplied::default();

        if let Some(tokens) = snapshot.tokens {
            self.tokens.replace(tokens);
            applied.tokens = true;
        }
        if let Some(scan) = snapshot.collections {
            self.nfts.replace(scan.holdings);
            self.pending.replace(scan.pending);
            applied.nfts = true;
        }
        applied
    }

    /// Merge enrichment results into the matching collection record.
    ///
    /// The name is always overwritten; the floor price only when the new
    /// value is positive, so a zero answer never erases a floor set earlier
    /// in the same cycle.
    /// Returns `false` when no record holds `stats.policy_id`.
    pub fn apply_collection_stats(&mut self, stats: &CollectionStats) -> bool {
        let Some(record) = self
            .nfts
            .iter_mut()
            .find(|n| n.policy_id == stats.policy_id)
        else {
            return false;
        };

        record.display_name = stats.name.clone();
        if stats.floor_price_ada > Decimal::ZERO {
            record.floor_price_ada = stats.floor_price_ada;
        }
        true
    }

    // ── Readers ──────────────────────────────────────────────────────────

    /// Balance in ADA; zero until the first successful fetch.
    pub fn balance(&self) -> Decimal {
        self.balance.ada
    }

    pub fn wallet_balance(&self) -> WalletBalance {
        self.balance.clone()
    }

    /// Monotonic ms of the last successful balance fetch, 0 if never.
    pub fn last_balance_fetch_time(&self) -> u64 {
        self.balance.fetched_at.unwrap_or(0)
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn token(&self, index: usize) -> TokenHolding {
        self.tokens.get(index).cloned().unwrap_or_default()
    }

    pub fn tokens(&self) -> Vec<TokenHolding> {
        self.tokens.as_slice().to_vec()
    }

    pub fn nft_count(&self) -> usize {
        self.nfts.len()
    }

    pub fn nft(&self, index: usize) -> NftCollectionHolding {
        self.nfts.get(index).cloned().unwrap_or_default()
    }

    pub fn nfts(&self) -> Vec<NftCollectionHolding> {
        self.nfts.as_slice().to_vec()
    }

    /// Policy ids awaiting floor-price enrichment, in discovery order.
    pub fn pending_enrichment(&self) -> Vec<PolicyId> {
        self.pending.as_slice().to_vec()
    }

    /// Sum of all token values in USD.
    pub fn tokens_value_usd(&self) -> Decimal {
        self.tokens.iter().map(|t| t.total_value_usd).sum()
    }

    /// Sum of `units_held * floor_price_ada` over collections with a known floor.
    pub fn nfts_floor_value_ada(&self) -> Decimal {
        self.nfts
            .iter()
            .filter(|n| n.has_floor_price())
            .map(|n| n.floor_price_ada * Decimal::from(n.units_held))
            .sum()
    }
}
