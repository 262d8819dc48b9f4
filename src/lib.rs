//! # Cardano Ticker
//!
//! Rate-limited refresh pipeline for a Cardano wallet: ADA balance, token
//! positions and NFT collections with floor prices, plus point-of-sale
//! payment detection.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core**: newtypes, domain models, wire types, the data store, schedules
//!    and configuration (always available, no I/O)
//! 2. **HTTP**: `TickerHttp` with one method per indexer endpoint
//! 3. **High-Level Client**: `TickerClient` with nested sub-clients, and
//!    `Refresher`, which owns the store and drives the periodic refresh
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cardano_ticker::prelude::*;
//!
//! let client = TickerClient::builder().build()?;
//! let config = TickerConfig::new("stake1u9...".into(), "addr1q9...".into());
//! let mut refresher = Refresher::new(client, config, AlwaysConnected);
//!
//! let clock = MonotonicClock::new();
//! let report = refresher.tick(clock.now_ms()).await;
//! println!("{}", format_fixed(refresher.store().balance(), 2));
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and utilities used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Last known wallet data, read by the presentation layer.
pub mod store;

/// Interval gate per data class.
pub mod schedule;

/// Link status and clocks.
pub mod connectivity;

/// Wallet identities, intervals, capacities, endpoints.
pub mod config;

/// Unified error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `TickerClient`: the entry point for remote lookups.
#[cfg(feature = "http")]
pub mod client;

/// `Refresher`: scheduled refresh into the data store.
#[cfg(feature = "http")]
pub mod refresh;

/// Crate version, shown on the device's status screen.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{BoundedList, PolicyId, StakeAddress, WalletAddress};

    // Units + display formatting
    pub use crate::shared::fmt::{
        format_ada, format_change_percent, format_fixed, format_floor_price, format_uptime,
        truncate_end, truncate_middle,
    };
    pub use crate::shared::units::{ada_to_lovelace, lovelace_to_ada, parse_lovelace};

    // Domain types
    pub use crate::domain::balance::{AccountBalance, WalletBalance};
    pub use crate::domain::collection::CollectionStats;
    pub use crate::domain::payment::{
        PaymentEvent, PaymentReceipt, PaymentRequest, PaymentWatcher, WatchState,
    };
    pub use crate::domain::portfolio::{NftCollectionHolding, PortfolioSnapshot, TokenHolding};

    // Store, schedules, configuration
    pub use crate::config::{Capacities, Endpoints, RefreshIntervals, TickerConfig};
    pub use crate::connectivity::{
        AlwaysConnected, Clock, Connectivity, LinkState, ManualClock, MonotonicClock,
    };
    pub use crate::schedule::RefreshSchedule;
    pub use crate::store::DataStore;

    // Errors
    pub use crate::error::{HttpError, TickerError};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        BalancesClient, CollectionsClient, PaymentsClient, PortfoliosClient, TickerClient,
        TickerClientBuilder,
    };
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
    #[cfg(feature = "http")]
    pub use crate::refresh::{EnrichmentSummary, FetchOutcome, Refresher, TickReport};
}
