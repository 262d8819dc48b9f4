//! Conversions from wire types to domain types for balances.

use super::wire::{AccountInfoEntry, AccountInfoResponse};
use super::AccountBalance;
use crate::error::TickerError;
use crate::shared::{parse_lovelace, StakeAddress};

impl TryFrom<AccountInfoEntry> for AccountBalance {
    type Error = TickerError;

    /// A missing `total_balance` reads as 0; text that is not a whole
    /// lovelace amount is rejected.
    fn try_from(entry: AccountInfoEntry) -> Result<Self, Self::Error> {
        let lovelace = match entry.total_balance {
            Some(raw) => parse_lovelace(&raw)
                .map_err(|e| TickerError::Validation(format!("total_balance: {}", e)))?,
            None => {
                tracing::debug!("account_info entry has no total_balance, using 0");
                0
            }
        };

        Ok(Self {
            stake_address: entry.stake_address.unwrap_or_default(),
            lovelace,
        })
    }
}

impl AccountBalance {
    /// Take the first element of the response array.
    pub fn from_response(
        requested: &StakeAddress,
        response: AccountInfoResponse,
    ) -> Result<Self, TickerError> {
        let first = response.into_iter().next().ok_or_else(|| {
            TickerError::Validation(format!("empty account_info response for {}", requested))
        })?;
        let mut balance = AccountBalance::try_from(first)?;
        if balance.stake_address.is_empty() {
            balance.stake_address = requested.clone();
        }
        Ok(balance)
    }
}
