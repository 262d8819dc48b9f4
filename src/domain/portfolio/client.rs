//! Portfolios sub-client: token and NFT positions by address.

use crate::client::TickerClient;
use crate::config::Capacities;
use crate::domain::portfolio::wire::PortfolioQuery;
use crate::domain::portfolio::PortfolioSnapshot;
use crate::error::TickerError;
use crate::shared::WalletAddress;

pub struct Portfolios<'a> {
    pub(crate) client: &'a TickerClient,
}

impl<'a> Portfolios<'a> {
    /// Fetch and parse the portfolio of one address (phase 1 of the NFT
    /// pipeline). Lists are truncated to `caps`.
    pub async fn get(
        &self,
        address: &WalletAddress,
        query: PortfolioQuery,
        caps: &Capacities,
    ) -> Result<PortfolioSnapshot, TickerError> {
        let response = self.client.http.get_portfolio(address, query).await?;
        if response.positions.is_none() {
            tracing::warn!(address = %address, "No positions found in portfolio response");
        }
        Ok(PortfolioSnapshot::from_response(response, caps))
    }
}
