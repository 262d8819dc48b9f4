//! Live smoke test against the public indexers.
//!
//! Run with:
//!
//! ```text
//! TICKER_STAKE_ADDRESS=stake1... TICKER_WALLET_ADDRESS=addr1... \
//!     cargo test --features native --test live_smoke -- --ignored
//! ```
//!
//! Variables may also come from a `.env` file.

#![cfg(feature = "native")]

use cardano_ticker::prelude::*;

fn env_config() -> Option<TickerConfig> {
    dotenvy::dotenv().ok();
    let stake = std::env::var("TICKER_STAKE_ADDRESS").ok()?;
    let wallet = std::env::var("TICKER_WALLET_ADDRESS").ok()?;
    Some(TickerConfig::new(stake.into(), wallet.into()))
}

#[tokio::test]
#[ignore]
async fn test_live_tick() {
    let Some(config) = env_config() else {
        eprintln!("TICKER_STAKE_ADDRESS / TICKER_WALLET_ADDRESS not set, skipping");
        return;
    };

    let client = TickerClient::builder().build().unwrap();
    let mut refresher = Refresher::new(client, config, AlwaysConnected);
    let clock = MonotonicClock::new();
    let report = refresher.tick(clock.now_ms()).await;

    println!("{:?}", report);
    println!("balance: {} ADA", format_fixed(refresher.store().balance(), 2));
    for token in refresher.store().tokens() {
        println!(
            "  {:<10} {} ({})",
            token.ticker,
            format_fixed(token.total_value_usd, 2),
            format_change_percent(token.change_24h_percent)
        );
    }
    for nft in refresher.store().nfts() {
        println!(
            "  {} x{} floor {}",
            truncate_end(&nft.display_name, 18),
            nft.units_held,
            format_floor_price(nft.floor_price_ada)
        );
    }
    assert!(report.balance.attempted());
}
