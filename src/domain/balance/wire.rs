//! Wire types for the Koios `account_info` endpoint.

use crate::shared::StakeAddress;
use serde::{Deserialize, Serialize};

/// POST body: `{"_stake_addresses": ["stake1..."]}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountInfoRequest {
    #[serde(rename = "_stake_addresses")]
    pub stake_addresses: Vec<StakeAddress>,
}

impl AccountInfoRequest {
    pub fn single(stake_address: &StakeAddress) -> Self {
        Self {
            stake_addresses: vec![stake_address.clone()],
        }
    }
}

/// One element of the response array. Only the fields the ticker reads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountInfoEntry {
    #[serde(default)]
    pub stake_address: Option<StakeAddress>,
    /// Lovelace as an arbitrary-precision decimal string.
    #[serde(default)]
    pub total_balance: Option<String>,
}

/// The endpoint answers with a bare JSON array.
pub type AccountInfoResponse = Vec<AccountInfoEntry>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let body = AccountInfoRequest::single(&StakeAddress::from("stake1uxyz"));
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"_stake_addresses": ["stake1uxyz"]}));
    }

    #[test]
    fn test_response_ignores_unknown_fields() {
        let json = r#"[{
            "stake_address": "stake1uxyz",
            "status": "registered",
            "total_balance": "5000000",
            "utxo": "5000000",
            "rewards_available": "0"
        }]"#;
        let resp: AccountInfoResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.len(), 1);
        assert_eq!(resp[0].total_balance.as_deref(), Some("5000000"));
    }
}
