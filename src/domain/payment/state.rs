//! Payment watcher state: app-owned, advanced by the caller's clock.

use super::{PaymentEvent, PaymentReceipt, PaymentRequest};
use crate::shared::WalletAddress;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Default spacing between two on-chain checks.
pub const DEFAULT_CHECK_INTERVAL: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WatchState {
    #[default]
    Idle,
    Waiting {
        request: PaymentRequest,
        started_at_ms: u64,
        last_check_ms: u64,
    },
    Received(PaymentReceipt),
}

/// Tracks one outstanding payment request at a time.
///
/// The watcher does no I/O. Callers ask [`check_due`](Self::check_due)
/// whether a lookup should be issued and report the result back with
/// [`confirm`](Self::confirm).
#[derive(Debug, Clone)]
pub struct PaymentWatcher {
    address: WalletAddress,
    check_interval_ms: u64,
    state: WatchState,
}

impl PaymentWatcher {
    pub fn new(address: WalletAddress, check_interval: Duration) -> Self {
        Self {
            address,
            check_interval_ms: check_interval.as_millis() as u64,
            state: WatchState::Idle,
        }
    }

    pub fn address(&self) -> &WalletAddress {
        &self.address
    }

    pub fn state(&self) -> &WatchState {
        &self.state
    }

    pub fn is_waiting(&self) -> bool {
        matches!(self.state, WatchState::Waiting { .. })
    }

    pub fn pending_request(&self) -> Option<PaymentRequest> {
        match self.state {
            WatchState::Waiting { request, .. } => Some(request),
            _ => None,
        }
    }

    /// Start waiting for `request`, replacing whatever was in progress.
    ///
    /// The first check happens one interval after `now_ms`.
    pub fn begin(&mut self, request: PaymentRequest, now_ms: u64) {
        tracing::info!(
            transaction_id = request.transaction_id,
            unique_lovelace = request.unique_lovelace(),
            address = %self.address,
            "waiting for payment"
        );
        self.state = WatchState::Waiting {
            request,
            started_at_ms: now_ms,
            last_check_ms: now_ms,
        };
    }

    /// Returns the request to look up when a check is due, stamping the
    /// check time before the caller issues the request.
    pub fn check_due(&mut self, now_ms: u64) -> Option<PaymentRequest> {
        let interval = self.check_interval_ms;
        match &mut self.state {
            WatchState::Waiting {
                request,
                last_check_ms,
                ..
            } if now_ms.saturating_sub(*last_check_ms) >= interval => {
                *last_check_ms = now_ms;
                Some(*request)
            }
            _ => None,
        }
    }

    /// Record a found transaction. Ignored unless a request is outstanding.
    pub fn confirm(
        &mut self,
        tx_hash: impl Into<String>,
        received_at: DateTime<Utc>,
    ) -> Option<PaymentEvent> {
        let WatchState::Waiting { request, .. } = self.state else {
            return None;
        };
        let receipt = PaymentReceipt {
            request,
            tx_hash: tx_hash.into(),
            received_at,
        };
        tracing::info!(
            transaction_id = request.transaction_id,
            tx_hash = %receipt.tx_hash,
            "payment confirmed"
        );
        self.state = WatchState::Received(receipt.clone());
        Some(PaymentEvent::Received(receipt))
    }

    /// Stop waiting and return to idle.
    pub fn cancel(&mut self) {
        if let WatchState::Waiting { request, .. } = self.state {
            tracing::info!(transaction_id = request.transaction_id, "payment wait cancelled");
        }
        self.state = WatchState::Idle;
    }

    /// Whole seconds since the current request began; 0 when not waiting.
    pub fn waited_secs(&self, now_ms: u64) -> u64 {
        match self.state {
            WatchState::Waiting { started_at_ms, .. } => now_ms.saturating_sub(started_at_ms) / 1000,
            _ => 0,
        }
    }
}
