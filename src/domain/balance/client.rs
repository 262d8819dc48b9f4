//! Balances sub-client: wallet balance by stake address.

use crate::client::TickerClient;
use crate::domain::balance::AccountBalance;
use crate::error::TickerError;
use crate::shared::StakeAddress;

pub struct Balances<'a> {
    pub(crate) client: &'a TickerClient,
}

impl<'a> Balances<'a> {
    /// Fetch the total balance of one stake account.
    ///
    /// Blocks the calling task for one round trip. Non-success status,
    /// malformed JSON, an empty array or an unparsable amount are all errors.
    pub async fn get(&self, stake_address: &StakeAddress) -> Result<AccountBalance, TickerError> {
        let response = self.client.http.get_account_info(stake_address).await?;
        AccountBalance::from_response(stake_address, response)
    }
}
