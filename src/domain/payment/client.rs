//! Payments sub-client: UTXO lookup by exact amount.

use super::convert::first_tx_hash;
use super::{PaymentEvent, PaymentWatcher};
use crate::client::TickerClient;
use crate::connectivity::Connectivity;
use crate::error::TickerError;
use crate::shared::WalletAddress;

pub struct Payments<'a> {
    pub(crate) client: &'a TickerClient,
}

impl<'a> Payments<'a> {
    /// Hash of a transaction that paid exactly `unique_lovelace` to `address`.
    pub async fn find(
        &self,
        address: &WalletAddress,
        unique_lovelace: u64,
    ) -> Result<Option<String>, TickerError> {
        let response = self
            .client
            .http
            .get_address_utxos(address, unique_lovelace)
            .await?;
        Ok(first_tx_hash(response))
    }

    /// Advance `watcher` by one step.
    ///
    /// Does nothing while offline or before the next check is due. A failed
    /// lookup is logged and the watcher keeps waiting for the next interval.
    pub async fn poll(
        &self,
        watcher: &mut PaymentWatcher,
        connectivity: &impl Connectivity,
        now_ms: u64,
    ) -> Option<PaymentEvent> {
        if !watcher.is_waiting() {
            return None;
        }
        if !connectivity.is_connected() {
            tracing::debug!("offline, skipping payment check");
            return None;
        }
        let request = watcher.check_due(now_ms)?;

        tracing::debug!(
            transaction_id = request.transaction_id,
            waited_secs = watcher.waited_secs(now_ms),
            "checking for payment"
        );
        let address = watcher.address().clone();
        match self.find(&address, request.unique_lovelace()).await {
            Ok(Some(tx_hash)) => watcher.confirm(tx_hash, chrono::Utc::now()),
            Ok(None) => {
                tracing::debug!(transaction_id = request.transaction_id, "payment not found yet");
                None
            }
            Err(e) => {
                tracing::warn!(
                    transaction_id = request.transaction_id,
                    error = %e,
                    "payment check failed"
                );
                None
            }
        }
    }
}
