//! Refresh loop: drives the balance and portfolio schedules and writes
//! results into the [`DataStore`].
//!
//! Every fetch is awaited inline. A `tick` does not resolve until all due
//! requests, including the sequential floor-price lookups, have finished.
//! Failures are logged and reported in the [`TickReport`]; they never
//! propagate, and the store keeps its previous contents.

use crate::client::TickerClient;
use crate::config::TickerConfig;
use crate::connectivity::{Clock, Connectivity};
use crate::schedule::RefreshSchedule;
use crate::store::DataStore;

use std::time::Duration;

/// Result of one data class within a tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Not due yet.
    Skipped,
    /// Due, but the link was down. The schedule was not stamped.
    Offline,
    Updated,
    /// Fetched, but the response held nothing to apply. The store was left as is.
    Unchanged,
    Failed(String),
}

impl FetchOutcome {
    pub fn attempted(&self) -> bool {
        matches!(
            self,
            FetchOutcome::Updated | FetchOutcome::Unchanged | FetchOutcome::Failed(_)
        )
    }
}

/// Floor-price lookups performed after a portfolio fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrichmentSummary {
    pub attempted: usize,
    pub updated: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    pub balance: FetchOutcome,
    pub portfolio: FetchOutcome,
    pub enrichment: EnrichmentSummary,
}

impl TickReport {
    /// Whether anything in the store may have changed.
    pub fn store_changed(&self) -> bool {
        self.balance == FetchOutcome::Updated
            || self.portfolio == FetchOutcome::Updated
            || self.enrichment.updated > 0
    }
}

/// Owns the store and both schedules for one wallet.
pub struct Refresher<C> {
    client: TickerClient,
    config: TickerConfig,
    store: DataStore,
    balance_schedule: RefreshSchedule,
    portfolio_schedule: RefreshSchedule,
    connectivity: C,
}

impl<C: Connectivity> Refresher<C> {
    pub fn new(client: TickerClient, config: TickerConfig, connectivity: C) -> Self {
        let store = DataStore::new(&config.capacities);
        let balance_schedule = RefreshSchedule::new(config.intervals.balance());
        let portfolio_schedule = RefreshSchedule::new(config.intervals.portfolio());
        Self {
            client,
            config,
            store,
            balance_schedule,
            portfolio_schedule,
            connectivity,
        }
    }

    pub fn store(&self) -> &DataStore {
        &self.store
    }

    pub fn config(&self) -> &TickerConfig {
        &self.config
    }

    pub fn client(&self) -> &TickerClient {
        &self.client
    }

    pub fn connectivity(&self) -> &C {
        &self.connectivity
    }

    /// Start time of the last balance attempt, successful or not; 0 if none.
    pub fn last_balance_attempt_ms(&self) -> u64 {
        self.balance_schedule.last_attempt_ms()
    }

    pub fn last_portfolio_attempt_ms(&self) -> u64 {
        self.portfolio_schedule.last_attempt_ms()
    }

    /// Make both data classes due on the next tick.
    pub fn force_refresh(&mut self) {
        self.balance_schedule.reset();
        self.portfolio_schedule.reset();
    }

    /// Run every refresh that is due at `now_ms`.
    pub async fn tick(&mut self, now_ms: u64) -> TickReport {
        let balance = self.refresh_balance(now_ms).await;
        let (portfolio, enrichment) = self.refresh_portfolio(now_ms).await;
        TickReport {
            balance,
            portfolio,
            enrichment,
        }
    }

    /// Balance refresh, gated by its schedule and the link.
    pub async fn refresh_balance(&mut self, now_ms: u64) -> FetchOutcome {
        if !self.balance_schedule.is_due(now_ms) {
            return FetchOutcome::Skipped;
        }
        if !self.connectivity.is_connected() {
            tracing::debug!("offline, balance refresh deferred");
            return FetchOutcome::Offline;
        }
        self.balance_schedule.try_begin(now_ms);

        let stake_address = &self.config.stake_address;
        match self.client.balances().get(stake_address).await {
            Ok(account) => {
                self.store.apply_balance(&account, now_ms);
                tracing::info!(
                    stake_address = %account.stake_address,
                    lovelace = account.lovelace,
                    ada = %account.ada(),
                    "balance updated"
                );
                FetchOutcome::Updated
            }
            Err(e) => {
                tracing::warn!(
                    stake_address = %stake_address,
                    status = ?e.http_status(),
                    error = %e,
                    "balance fetch failed"
                );
                FetchOutcome::Failed(e.to_string())
            }
        }
    }

    /// Portfolio fetch followed by floor-price enrichment of every queued
    /// collection, one request at a time.
    ///
    /// Enrichment runs over the current queue even when the portfolio fetch
    /// failed, so collections found in an earlier window still get prices.
    pub async fn refresh_portfolio(&mut self, now_ms: u64) -> (FetchOutcome, EnrichmentSummary) {
        if !self.portfolio_schedule.is_due(now_ms) {
            return (FetchOutcome::Skipped, EnrichmentSummary::default());
        }
        if !self.connectivity.is_connected() {
            tracing::debug!("offline, portfolio refresh deferred");
            return (FetchOutcome::Offline, EnrichmentSummary::default());
        }
        self.portfolio_schedule.try_begin(now_ms);

        let outcome = self.fetch_portfolio().await;
        let enrichment = self.enrich_collections().await;
        (outcome, enrichment)
    }

    async fn fetch_portfolio(&mut self) -> FetchOutcome {
        let address = &self.config.wallet_address;
        let snapshot = match self
            .client
            .portfolios()
            .get(address, self.config.portfolio_query, &self.config.capacities)
            .await
        {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(
                    address = %address,
                    status = ?e.http_status(),
                    error = %e,
                    "portfolio fetch failed"
                );
                return FetchOutcome::Failed(e.to_string());
            }
        };

        if snapshot.is_empty() {
            tracing::info!(address = %address, "portfolio response has no positions, lists kept");
            return FetchOutcome::Unchanged;
        }

        let applied = self.store.apply_portfolio(snapshot);
        tracing::info!(
            address = %address,
            tokens = self.store.token_count(),
            nft_collections = self.store.nft_count(),
            pending_enrichment = self.store.pending_enrichment().len(),
            tokens_replaced = applied.tokens,
            nfts_replaced = applied.nfts,
            "portfolio updated"
        );
        FetchOutcome::Updated
    }

    async fn enrich_collections(&mut self) -> EnrichmentSummary {
        let mut summary = EnrichmentSummary::default();

        for policy_id in self.store.pending_enrichment() {
            summary.attempted += 1;
            match self.client.collections().get(&policy_id).await {
                Ok(Some(stats)) => {
                    tracing::debug!(
                        policy_id = %policy_id,
                        name = %stats.name,
                        floor_ada = %stats.floor_price_ada,
                        "collection enriched"
                    );
                    if self.store.apply_collection_stats(&stats) {
                        summary.updated += 1;
                    }
                }
                Ok(None) => summary.failed += 1,
                Err(e) => {
                    tracing::warn!(
                        policy_id = %policy_id,
                        status = ?e.http_status(),
                        error = %e,
                        "floor price fetch failed"
                    );
                    summary.failed += 1;
                }
            }
        }

        if summary.attempted > 0 {
            tracing::info!(
                attempted = summary.attempted,
                updated = summary.updated,
                failed = summary.failed,
                "floor prices refreshed"
            );
        }
        summary
    }

    /// Tick every `period` until `stop` returns `true`. Returns the number
    /// of ticks run.
    pub async fn run_until<K, S>(&mut self, period: Duration, clock: &K, mut stop: S) -> u64
    where
        K: Clock,
        S: FnMut(&TickReport) -> bool,
    {
        let mut ticks = 0;
        loop {
            let report = self.tick(clock.now_ms()).await;
            ticks += 1;
            if stop(&report) {
                return ticks;
            }
            futures_timer::Delay::new(period).await;
        }
    }
}
