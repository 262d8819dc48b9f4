//! Shared newtypes and utilities used across all domain modules.
//!
//! Identifier newtypes are serialization-transparent: they serialize and
//! deserialize as the plain strings the indexers send, so they can be used
//! directly in wire types.

pub mod bounded;
pub mod fmt;
pub mod serde_util;
pub mod units;

pub use bounded::BoundedList;
pub use units::{lovelace_to_ada, parse_lovelace, UnitError, LOVELACE_PER_ADA};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

macro_rules! string_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Ok($name(s))
            }
        }
    };
}

// ─── Identifiers ─────────────────────────────────────────────────────────────

string_newtype!(
    /// Bech32 stake address (`stake1...`), keys the wallet balance lookup.
    StakeAddress
);

string_newtype!(
    /// Bech32 payment address (`addr1...` / `addr_test1...`).
    WalletAddress
);

string_newtype!(
    /// Minting policy id (hex). Groups NFTs into one collection.
    PolicyId
);
