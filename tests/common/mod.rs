//! Shared fixtures for the mock-server integration tests.

#![allow(dead_code)]

use cardano_ticker::prelude::*;
use serde_json::{json, Value};
use wiremock::MockServer;

pub const STAKE: &str = "stake1u9ylzsgxaa6xctf4juup682ar3juj85n8tx3hthnljg47zctvm3rc";
pub const WALLET: &str = "addr1q9xyzwallet";
pub const SHOP: &str = "addr_test1qzshop";

pub const ACCOUNT_INFO_PATH: &str = "/api/v1/account_info";
pub const PORTFOLIO_PATH: &str = "/v1/portfolio/tokens";
pub const POLICY_PATH: &str = "/v1/policy/detail";
pub const UTXOS_PATH: &str = "/api/v1/address_utxos";

pub const MINUTE_MS: u64 = 60_000;
pub const TEN_MINUTES_MS: u64 = 600_000;

pub fn client_for(server: &MockServer) -> TickerClient {
    TickerClient::builder()
        .endpoints(Endpoints::with_base(&server.uri()))
        .build()
        .unwrap()
}

pub fn config() -> TickerConfig {
    let mut cfg = TickerConfig::new(StakeAddress::from(STAKE), WalletAddress::from(WALLET));
    cfg.payment_address = Some(WalletAddress::from(SHOP));
    cfg
}

pub fn refresher(server: &MockServer) -> Refresher<AlwaysConnected> {
    Refresher::new(client_for(server), config(), AlwaysConnected)
}

pub fn account_info(total_balance: &str) -> Value {
    json!([{ "stake_address": STAKE, "total_balance": total_balance, "utxo": "1" }])
}

pub fn token(ticker: &str, price: f64, amount: &str) -> Value {
    json!({
        "asset": {
            "currency_symbol": format!("{}policy", ticker.to_lowercase()),
            "metadata": { "ticker": ticker, "name": format!("{} Token", ticker) }
        },
        "price_usd": price,
        "amount": amount,
        "pnl_24h_percent": -1.25
    })
}

pub fn nft(policy: &str, name: &str) -> Value {
    json!({
        "currency_symbol": policy,
        "asset": { "metadata": { "name": name } }
    })
}

pub fn portfolio(tokens: Vec<Value>, nfts: Vec<Value>) -> Value {
    json!({ "positions": { "asset_positions": tokens, "nft_positions": nfts } })
}

pub fn policy_detail(name: &str, floor: u64) -> Value {
    json!({
        "code": 200,
        "data": { "collection": { "name": name, "stats": { "floor": floor, "owners": 42 } } }
    })
}

/// Number of requests the server saw on `path`.
pub async fn hits(server: &MockServer, path: &str) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|r| r.url.path() == path)
        .count()
}
