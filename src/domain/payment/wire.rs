//! Wire types for the Koios `address_utxos` endpoint.

use crate::shared::WalletAddress;
use serde::{Deserialize, Serialize};

/// POST body: `{"_addresses": ["addr..."]}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddressUtxosRequest {
    #[serde(rename = "_addresses")]
    pub addresses: Vec<WalletAddress>,
}

impl AddressUtxosRequest {
    pub fn single(address: &WalletAddress) -> Self {
        Self {
            addresses: vec![address.clone()],
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UtxoEntry {
    #[serde(default)]
    pub tx_hash: Option<String>,
    #[serde(default)]
    pub tx_index: Option<u32>,
    /// Lovelace as a decimal string.
    #[serde(default)]
    pub value: Option<String>,
}

pub type AddressUtxosResponse = Vec<UtxoEntry>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let body = AddressUtxosRequest::single(&WalletAddress::from("addr_test1qz"));
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"_addresses": ["addr_test1qz"]})
        );
    }

    #[test]
    fn test_utxo_deserialize() {
        let json = r#"[{"tx_hash": "ab12", "tx_index": 0, "value": "5000007", "address": "addr_test1qz"}]"#;
        let resp: AddressUtxosResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp[0].tx_hash.as_deref(), Some("ab12"));
        assert_eq!(resp[0].value.as_deref(), Some("5000007"));
    }
}
