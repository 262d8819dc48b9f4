//! Default endpoint URLs for the remote indexers.

/// Koios account info (wallet balance by stake address). Mainnet.
pub const DEFAULT_KOIOS_ACCOUNT_INFO_URL: &str = "https://api.koios.rest/api/v1/account_info";

/// Koios address UTXOs, used to detect incoming payments. Preprod.
pub const DEFAULT_KOIOS_ADDRESS_UTXOS_URL: &str =
    "https://preprod.koios.rest/api/v1/address_utxos";

/// Minswap portfolio (fungible + NFT positions by address).
pub const DEFAULT_MINSWAP_PORTFOLIO_URL: &str =
    "https://monorepo-mainnet-prod.minswap.org/v1/portfolio/tokens";

/// Cexplorer policy detail (collection name + floor price).
pub const DEFAULT_CEXPLORER_POLICY_URL: &str =
    "https://api-mainnet-stage.cexplorer.io/v1/policy/detail";
