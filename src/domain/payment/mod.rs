//! Payment domain: point-of-sale payment requests and detection of the
//! matching on-chain UTXO.
//!
//! Each request is made unique on chain by adding its transaction id to the
//! requested lovelace amount, so the watcher can find the payment by exact
//! value at the shop's address.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod state;
pub mod wire;

pub use state::{PaymentWatcher, WatchState};

use crate::shared::units::lovelace_to_ada;
use crate::shared::WalletAddress;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// URI scheme understood by Cardano wallets when scanning a QR code.
pub const PAYMENT_URI_SCHEME: &str = "web+cardano:";

/// A payment the device is asking a customer to make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub transaction_id: u32,
    /// Price before the id is added.
    pub base_lovelace: u64,
}

impl PaymentRequest {
    pub fn new(transaction_id: u32, base_lovelace: u64) -> Self {
        Self {
            transaction_id,
            base_lovelace,
        }
    }

    /// The exact amount the customer pays: price plus transaction id.
    pub fn unique_lovelace(&self) -> u64 {
        self.base_lovelace
            .saturating_add(u64::from(self.transaction_id))
    }

    /// Price in ADA, shown on screen.
    pub fn display_ada(&self) -> Decimal {
        lovelace_to_ada(self.base_lovelace)
    }

    /// QR payload: `web+cardano:<address>?amount=<unique ADA, 6 decimals>`.
    pub fn payment_uri(&self, address: &WalletAddress) -> String {
        format!(
            "{}{}?amount={:.6}",
            PAYMENT_URI_SCHEME,
            address,
            lovelace_to_ada(self.unique_lovelace())
        )
    }
}

/// Proof that a request was paid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub request: PaymentRequest,
    pub tx_hash: String,
    pub received_at: DateTime<Utc>,
}

/// Emitted by [`PaymentWatcher`] transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentEvent {
    Received(PaymentReceipt),
}
