//! Domain modules organized as vertical slices, one per remote source.
//!
//! Each sub-module contains:
//! - `mod.rs`: Domain types handed to the store and the presentation layer
//! - `wire.rs`: Raw serde structs matching the indexer's request/response bodies
//! - `convert.rs`: Wire → domain conversions with per-field fallbacks
//! - `client.rs`: Sub-client issuing the request (feature `http`)
//!
//! `payment` additionally has `state.rs`, the app-owned watcher state machine.

pub mod balance;
pub mod collection;
pub mod payment;
pub mod portfolio;
