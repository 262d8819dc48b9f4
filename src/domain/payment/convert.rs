//! Extraction of the paying transaction from a UTXO listing.

use super::wire::AddressUtxosResponse;

/// Hash of the first UTXO in the listing, if any carries one.
///
/// The listing is already filtered server-side to the exact unique amount,
/// so any entry is the payment.
pub(crate) fn first_tx_hash(response: AddressUtxosResponse) -> Option<String> {
    response
        .into_iter()
        .next()
        .and_then(|utxo| utxo.tx_hash)
        .filter(|hash| !hash.is_empty())
}
