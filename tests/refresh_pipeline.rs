//! Integration tests for the refresh pipeline against mock indexers.
//!
//! Each test spins up a `wiremock` server standing in for Koios, Minswap and
//! Cexplorer, and drives a `Refresher` through one or more ticks.

mod common;

use cardano_ticker::prelude::*;
use common::*;
use rust_decimal::Decimal;
use serde_json::json;
use std::str::FromStr;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_balance(server: &MockServer, total_balance: &str) {
    Mock::given(method("POST"))
        .and(path(ACCOUNT_INFO_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(account_info(total_balance)))
        .mount(server)
        .await;
}

async fn mount_portfolio(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(PORTFOLIO_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_floor(server: &MockServer, policy: &str, name: &str, floor: u64) {
    Mock::given(method("GET"))
        .and(path(POLICY_PATH))
        .and(query_param("id", policy))
        .respond_with(ResponseTemplate::new(200).set_body_json(policy_detail(name, floor)))
        .mount(server)
        .await;
}

// =============================================================================
// Scheduling
// =============================================================================

mod scheduling {
    use super::*;

    #[tokio::test]
    async fn test_fetch_iff_interval_elapsed() {
        let server = MockServer::start().await;
        mount_balance(&server, "5000000").await;
        mount_portfolio(&server, portfolio(vec![], vec![])).await;
        let mut refresher = refresher(&server);

        let first = refresher.tick(1_000).await;
        assert_eq!(first.balance, FetchOutcome::Updated);
        assert_eq!(first.portfolio, FetchOutcome::Updated);
        assert_eq!(refresher.last_balance_attempt_ms(), 1_000);

        let early = refresher.tick(1_000 + MINUTE_MS - 1).await;
        assert_eq!(early.balance, FetchOutcome::Skipped);
        assert_eq!(early.portfolio, FetchOutcome::Skipped);

        let due = refresher.tick(1_000 + MINUTE_MS).await;
        assert_eq!(due.balance, FetchOutcome::Updated);
        assert_eq!(due.portfolio, FetchOutcome::Skipped);
        assert_eq!(refresher.last_balance_attempt_ms(), 1_000 + MINUTE_MS);

        let long = refresher.tick(1_000 + TEN_MINUTES_MS).await;
        assert_eq!(long.portfolio, FetchOutcome::Updated);

        assert_eq!(hits(&server, ACCOUNT_INFO_PATH).await, 3);
        assert_eq!(hits(&server, PORTFOLIO_PATH).await, 2);
    }

    #[tokio::test]
    async fn test_failed_attempt_waits_full_interval() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ACCOUNT_INFO_PATH))
            .respond_with(ResponseTemplate::new(503).set_body_string("down"))
            .mount(&server)
            .await;
        mount_portfolio(&server, portfolio(vec![], vec![])).await;
        let mut refresher = refresher(&server);

        let report = refresher.tick(5_000).await;
        assert!(matches!(report.balance, FetchOutcome::Failed(_)));
        assert_eq!(refresher.last_balance_attempt_ms(), 5_000);
        assert_eq!(refresher.store().last_balance_fetch_time(), 0);

        let retry = refresher.tick(5_000 + MINUTE_MS / 2).await;
        assert_eq!(retry.balance, FetchOutcome::Skipped);
        assert_eq!(hits(&server, ACCOUNT_INFO_PATH).await, 1);
    }

    #[tokio::test]
    async fn test_force_refresh() {
        let server = MockServer::start().await;
        mount_balance(&server, "1").await;
        mount_portfolio(&server, portfolio(vec![], vec![])).await;
        let mut refresher = refresher(&server);

        refresher.tick(10).await;
        refresher.force_refresh();
        let report = refresher.tick(20).await;
        assert_eq!(report.balance, FetchOutcome::Updated);
        assert_eq!(report.portfolio, FetchOutcome::Updated);
    }
}

// =============================================================================
// Connectivity gate
// =============================================================================

mod connectivity_gate {
    use super::*;

    #[tokio::test]
    async fn test_offline_is_noop_and_leaves_schedule() {
        let server = MockServer::start().await;
        mount_balance(&server, "5000000").await;
        mount_portfolio(&server, portfolio(vec![], vec![])).await;

        let link = LinkState::new(false);
        let mut refresher = Refresher::new(client_for(&server), config(), link.clone());

        let report = refresher.tick(1_000).await;
        assert_eq!(report.balance, FetchOutcome::Offline);
        assert_eq!(report.portfolio, FetchOutcome::Offline);
        assert_eq!(refresher.last_balance_attempt_ms(), 0);
        assert_eq!(hits(&server, ACCOUNT_INFO_PATH).await, 0);
        assert_eq!(hits(&server, PORTFOLIO_PATH).await, 0);

        link.set_connected(true);
        let report = refresher.tick(2_000).await;
        assert_eq!(report.balance, FetchOutcome::Updated);
        assert_eq!(refresher.store().balance(), Decimal::from(5));
    }

    #[tokio::test]
    async fn test_closure_gate() {
        let server = MockServer::start().await;
        let mut refresher = Refresher::new(client_for(&server), config(), || false);
        let report = refresher.tick(0).await;
        assert_eq!(report.balance, FetchOutcome::Offline);
        assert!(!report.store_changed());
    }
}

// =============================================================================
// Balance adapter
// =============================================================================

mod balance {
    use super::*;

    #[tokio::test]
    async fn test_base_units_converted() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ACCOUNT_INFO_PATH))
            .and(body_json(json!({ "_stake_addresses": [STAKE] })))
            .respond_with(ResponseTemplate::new(200).set_body_json(account_info("5000000")))
            .expect(1)
            .mount(&server)
            .await;

        let account = client_for(&server)
            .balances()
            .get(&StakeAddress::from(STAKE))
            .await
            .unwrap();
        assert_eq!(account.lovelace, 5_000_000);
        assert_eq!(account.ada(), Decimal::from(5));
    }

    #[tokio::test]
    async fn test_large_balance_exact() {
        let server = MockServer::start().await;
        mount_balance(&server, "45000000000123456").await;
        mount_portfolio(&server, portfolio(vec![], vec![])).await;
        let mut refresher = refresher(&server);

        refresher.tick(7).await;
        assert_eq!(
            refresher.store().balance(),
            Decimal::from_str("45000000000.123456").unwrap()
        );
        assert_eq!(refresher.store().last_balance_fetch_time(), 7);
    }

    #[tokio::test]
    async fn test_empty_array_retains_previous() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ACCOUNT_INFO_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(account_info("2000000")))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path(ACCOUNT_INFO_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;
        mount_portfolio(&server, portfolio(vec![], vec![])).await;
        let mut refresher = refresher(&server);

        refresher.tick(1_000).await;
        let report = refresher.tick(1_000 + MINUTE_MS).await;
        assert!(matches!(report.balance, FetchOutcome::Failed(_)));
        assert_eq!(refresher.store().balance(), Decimal::from(2));
        assert_eq!(refresher.store().last_balance_fetch_time(), 1_000);
        assert_eq!(refresher.last_balance_attempt_ms(), 1_000 + MINUTE_MS);
    }

    #[tokio::test]
    async fn test_missing_total_balance_stored_as_zero() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ACCOUNT_INFO_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(account_info("2000000")))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path(ACCOUNT_INFO_PATH))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([{ "stake_address": STAKE }])),
            )
            .mount(&server)
            .await;
        mount_portfolio(&server, portfolio(vec![], vec![])).await;
        let mut refresher = refresher(&server);

        refresher.tick(1_000).await;
        assert_eq!(refresher.store().balance(), Decimal::from(2));

        let report = refresher.tick(1_000 + MINUTE_MS).await;
        assert_eq!(report.balance, FetchOutcome::Updated);
        assert_eq!(refresher.store().balance(), Decimal::ZERO);
        assert_eq!(refresher.store().last_balance_fetch_time(), 1_000 + MINUTE_MS);
    }
}

// =============================================================================
// Portfolio adapter (phase 1)
// =============================================================================

mod portfolio_phase {
    use super::*;

    #[tokio::test]
    async fn test_query_parameters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(PORTFOLIO_PATH))
            .and(query_param("address", WALLET))
            .and(query_param("only_minswap", "true"))
            .and(query_param("filter_small_value", "false"))
            .respond_with(ResponseTemplate::new(200).set_body_json(portfolio(vec![], vec![])))
            .expect(1)
            .mount(&server)
            .await;

        let snapshot = client_for(&server)
            .portfolios()
            .get(
                &WalletAddress::from(WALLET),
                Default::default(),
                &Capacities::default(),
            )
            .await
            .unwrap();
        assert_eq!(snapshot.tokens.map(|t| t.len()), Some(0));
    }

    #[tokio::test]
    async fn test_tokens_parsed_with_total_value() {
        let server = MockServer::start().await;
        mount_balance(&server, "0").await;
        mount_portfolio(
            &server,
            portfolio(vec![token("MIN", 0.5, "100"), json!({})], vec![]),
        )
        .await;
        let mut refresher = refresher(&server);

        refresher.tick(0).await;
        let store = refresher.store();
        assert_eq!(store.token_count(), 2);

        let min = store.token(0);
        assert_eq!(min.ticker, "MIN");
        assert_eq!(min.name, "MIN Token");
        assert_eq!(min.total_value_usd, Decimal::from(50));
        assert_eq!(min.change_24h_percent, Decimal::from_str("-1.25").unwrap());

        let blank = store.token(1);
        assert_eq!(blank.ticker, "UNKNOWN");
        assert_eq!(blank.name, "Unknown Token");
        assert_eq!(blank.total_value_usd, Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_tokens_truncated_to_capacity() {
        let server = MockServer::start().await;
        mount_balance(&server, "0").await;
        let tokens = (0..25).map(|i| token(&format!("T{i}"), 1.0, "1")).collect();
        mount_portfolio(&server, portfolio(tokens, vec![])).await;
        let mut refresher = refresher(&server);

        refresher.tick(0).await;
        assert_eq!(refresher.store().token_count(), 20);
        assert_eq!(refresher.store().token(19).ticker, "T19");
        assert_eq!(refresher.store().token(20), TokenHolding::default());
    }

    #[tokio::test]
    async fn test_nft_units_grouped_by_policy() {
        let server = MockServer::start().await;
        mount_balance(&server, "0").await;
        mount_portfolio(
            &server,
            portfolio(
                vec![],
                vec![
                    nft("p1", "Budz #1"),
                    nft("p1", "Budz #2"),
                    json!({ "asset": { "metadata": { "name": "orphan" } } }),
                    nft("p2", "Clay #9"),
                ],
            ),
        )
        .await;
        mount_floor(&server, "p1", "SpaceBudz", 0).await;
        mount_floor(&server, "p2", "Clay Nation", 0).await;
        let mut refresher = refresher(&server);

        refresher.tick(0).await;
        let store = refresher.store();
        assert_eq!(store.nft_count(), 2);
        assert_eq!(store.nft(0).policy_id.as_str(), "p1");
        assert_eq!(store.nft(0).units_held, 2);
        assert_eq!(store.nft(1).units_held, 1);
        assert_eq!(
            store.pending_enrichment(),
            vec![PolicyId::from("p1"), PolicyId::from("p2")]
        );
    }

    #[tokio::test]
    async fn test_missing_positions_keeps_lists() {
        let server = MockServer::start().await;
        mount_balance(&server, "0").await;
        Mock::given(method("GET"))
            .and(path(PORTFOLIO_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(portfolio(vec![token("MIN", 1.0, "3")], vec![])),
            )
            .up_to_n_times(1)
            .mount(&server)
            .await;
        mount_portfolio(&server, json!({ "error": "busy" })).await;
        let mut refresher = refresher(&server);

        refresher.tick(0).await;
        let before = refresher.store().clone();
        let report = refresher.tick(TEN_MINUTES_MS).await;
        assert_eq!(report.portfolio, FetchOutcome::Unchanged);
        assert!(!report.store_changed());
        assert_eq!(refresher.store(), &before);
        assert_eq!(refresher.store().token_count(), 1);
    }
}

// =============================================================================
// Floor-price enrichment (phase 2)
// =============================================================================

mod enrichment {
    use super::*;

    #[tokio::test]
    async fn test_floor_converted_and_name_overwritten() {
        let server = MockServer::start().await;
        mount_balance(&server, "0").await;
        mount_portfolio(&server, portfolio(vec![], vec![nft("p1", "Budz #1")])).await;
        mount_floor(&server, "p1", "SpaceBudz", 25_000_000).await;
        let mut refresher = refresher(&server);

        let report = refresher.tick(0).await;
        assert_eq!(report.enrichment.attempted, 1);
        assert_eq!(report.enrichment.updated, 1);

        let nft = refresher.store().nft(0);
        assert_eq!(nft.display_name, "SpaceBudz");
        assert_eq!(nft.floor_price_ada, Decimal::from(25));
    }

    #[tokio::test]
    async fn test_zero_floor_leaves_unknown_floor_alone() {
        let server = MockServer::start().await;
        mount_balance(&server, "0").await;
        mount_portfolio(&server, portfolio(vec![], vec![nft("p1", "Budz #1")])).await;
        mount_floor(&server, "p1", "SpaceBudz", 0).await;
        let mut refresher = refresher(&server);

        let report = refresher.tick(0).await;
        assert_eq!(report.enrichment.attempted, 1);
        let nft = refresher.store().nft(0);
        assert_eq!(nft.display_name, "SpaceBudz");
        assert_eq!(nft.floor_price_ada, Decimal::ZERO);
        assert_eq!(format_floor_price(nft.floor_price_ada), "N/A");
    }

    #[tokio::test]
    async fn test_rebuild_drops_floor_from_previous_cycle() {
        let server = MockServer::start().await;
        mount_balance(&server, "0").await;
        mount_portfolio(&server, portfolio(vec![], vec![nft("p1", "Budz #1")])).await;
        Mock::given(method("GET"))
            .and(path(POLICY_PATH))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(policy_detail("SpaceBudz", 25_000_000)),
            )
            .up_to_n_times(1)
            .mount(&server)
            .await;
        mount_floor(&server, "p1", "SpaceBudz", 0).await;
        let mut refresher = refresher(&server);

        refresher.tick(0).await;
        assert_eq!(refresher.store().nft(0).floor_price_ada, Decimal::from(25));

        let report = refresher.tick(TEN_MINUTES_MS).await;
        assert_eq!(report.portfolio, FetchOutcome::Updated);
        assert_eq!(report.enrichment.attempted, 1);
        assert_eq!(refresher.store().nft(0).floor_price_ada, Decimal::ZERO);
        assert_eq!(hits(&server, POLICY_PATH).await, 2);
    }

    #[tokio::test]
    async fn test_enrichment_runs_after_failed_portfolio() {
        let server = MockServer::start().await;
        mount_balance(&server, "0").await;
        Mock::given(method("GET"))
            .and(path(PORTFOLIO_PATH))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(portfolio(vec![], vec![nft("p1", "x")])),
            )
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(PORTFOLIO_PATH))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        mount_floor(&server, "p1", "SpaceBudz", 10_000_000).await;
        let mut refresher = refresher(&server);

        refresher.tick(0).await;
        let report = refresher.tick(TEN_MINUTES_MS).await;
        assert!(matches!(report.portfolio, FetchOutcome::Failed(_)));
        assert_eq!(report.enrichment.attempted, 1);
        assert_eq!(refresher.store().nft(0).floor_price_ada, Decimal::from(10));
        assert_eq!(hits(&server, POLICY_PATH).await, 2);
    }

    #[tokio::test]
    async fn test_failed_lookup_counts_and_continues() {
        let server = MockServer::start().await;
        mount_balance(&server, "0").await;
        mount_portfolio(
            &server,
            portfolio(vec![], vec![nft("p1", "a"), nft("p2", "b")]),
        )
        .await;
        Mock::given(method("GET"))
            .and(path(POLICY_PATH))
            .and(query_param("id", "p1"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        mount_floor(&server, "p2", "Clay", 3_000_000).await;
        let mut refresher = refresher(&server);

        let report = refresher.tick(0).await;
        assert_eq!(report.enrichment.attempted, 2);
        assert_eq!(report.enrichment.failed, 1);
        assert_eq!(report.enrichment.updated, 1);
        assert_eq!(refresher.store().nft(0).display_name, "a");
        assert_eq!(refresher.store().nft(1).floor_price_ada, Decimal::from(3));
    }
}

// =============================================================================
// Malformed responses
// =============================================================================

mod malformed {
    use super::*;

    #[tokio::test]
    async fn test_malformed_bodies_leave_store_unchanged() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ACCOUNT_INFO_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(account_info("3000000")))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(PORTFOLIO_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(portfolio(
                vec![token("MIN", 2.0, "5")],
                vec![nft("p1", "Budz")],
            )))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(POLICY_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(policy_detail("SpaceBudz", 7_000_000)))
            .up_to_n_times(1)
            .mount(&server)
            .await;

        for p in [ACCOUNT_INFO_PATH, PORTFOLIO_PATH, POLICY_PATH] {
            Mock::given(path(p))
                .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
                .mount(&server)
                .await;
        }

        let mut refresher = refresher(&server);
        refresher.tick(0).await;
        let before = refresher.store().clone();
        assert_eq!(before.nft(0).floor_price_ada, Decimal::from(7));

        refresher.force_refresh();
        let report = refresher.tick(1).await;
        assert!(matches!(report.balance, FetchOutcome::Failed(_)));
        assert!(matches!(report.portfolio, FetchOutcome::Failed(_)));
        assert_eq!(report.enrichment.failed, 1);
        assert_eq!(refresher.store(), &before);
    }

    #[tokio::test]
    async fn test_malformed_reported_as_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(path(ACCOUNT_INFO_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .balances()
            .get(&StakeAddress::from(STAKE))
            .await
            .unwrap_err();
        assert!(matches!(err, TickerError::Http(HttpError::MalformedBody(_))));
    }
}

// =============================================================================
// Retry policy and driver loop
// =============================================================================

mod driver {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_custom_retry_recovers_from_503() {
        let server = MockServer::start().await;
        Mock::given(path(ACCOUNT_INFO_PATH))
            .respond_with(ResponseTemplate::new(503))
            .up_to_n_times(2)
            .mount(&server)
            .await;
        mount_balance(&server, "9000000").await;

        let client = TickerClient::builder()
            .endpoints(Endpoints::with_base(&server.uri()))
            .retry(RetryPolicy::Custom(RetryConfig {
                max_retries: 3,
                initial_delay: Duration::from_millis(1),
                max_delay: Duration::from_millis(5),
                backoff_factor: 1.0,
                jitter: false,
                retryable_statuses: vec![503],
            }))
            .build()
            .unwrap();

        let account = client.balances().get(&StakeAddress::from(STAKE)).await.unwrap();
        assert_eq!(account.ada(), Decimal::from(9));
        assert_eq!(hits(&server, ACCOUNT_INFO_PATH).await, 3);
    }

    #[tokio::test]
    async fn test_default_policy_single_attempt() {
        let server = MockServer::start().await;
        Mock::given(path(ACCOUNT_INFO_PATH))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .balances()
            .get(&StakeAddress::from(STAKE))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            TickerError::Http(HttpError::ServerError { status: 503, .. })
        ));
        assert_eq!(hits(&server, ACCOUNT_INFO_PATH).await, 1);
    }

    #[tokio::test]
    async fn test_run_until_stops() {
        let server = MockServer::start().await;
        mount_balance(&server, "1000000").await;
        mount_portfolio(&server, portfolio(vec![], vec![])).await;
        let mut refresher = refresher(&server);

        let clock = ManualClock::new(0);
        let ticker = clock.clone();
        let ticks = refresher
            .run_until(Duration::from_millis(1), &clock, |_| {
                ticker.advance(MINUTE_MS);
                ticker.now_ms() > 3 * MINUTE_MS
            })
            .await;

        assert_eq!(ticks, 4);
        assert_eq!(hits(&server, ACCOUNT_INFO_PATH).await, 4);
        assert_eq!(hits(&server, PORTFOLIO_PATH).await, 1);
        assert_eq!(refresher.store().balance(), Decimal::ONE);
    }
}
