//! Balance domain: native-currency balance of a stake account.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::{lovelace_to_ada, StakeAddress};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One successful balance lookup, as returned by the balance adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountBalance {
    /// Stake address echoed back by the indexer.
    pub stake_address: StakeAddress,
    pub lovelace: u64,
}

impl AccountBalance {
    pub fn ada(&self) -> Decimal {
        lovelace_to_ada(self.lovelace)
    }
}

/// Latest stored wallet balance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WalletBalance {
    pub ada: Decimal,
    pub lovelace: u64,
    /// Monotonic ms of the last successful fetch; `None` if never fetched.
    pub fetched_at: Option<u64>,
}

impl WalletBalance {
    pub fn from_account(account: &AccountBalance, fetched_at: u64) -> Self {
        Self {
            ada: account.ada(),
            lovelace: account.lovelace,
            fetched_at: Some(fetched_at),
        }
    }

    pub fn is_fetched(&self) -> bool {
        self.fetched_at.is_some()
    }
}
