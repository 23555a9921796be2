use serde::Deserialize;

/// One token-transfer record as returned by the ARC-200 indexer. Amounts are
/// decimal strings in smallest units; they stay strings until derivation.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    pub amount: String,
    pub sender: String,
    pub receiver: String,
    #[serde(default)]
    pub timestamp: i64,
}

/// Holder balance for a single contract, smallest units as a decimal string.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    pub account_id: String,
    pub balance: String,
}

/// One trading-pool quote from the DEX price listing. The listing is searched
/// by `contract_id`; at most one record per contract is assumed, first match
/// wins.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PricePool {
    pub pool_id: String,
    pub contract_id: u64,
    #[serde(default)]
    pub symbol_a: String,
    #[serde(default)]
    pub symbol_b: String,
    pub price: f64,
}

#[derive(Debug, Deserialize)]
pub struct TransfersResponse {
    pub transfers: Vec<Transfer>,
}

#[derive(Debug, Deserialize)]
pub struct BalancesResponse {
    pub balances: Vec<Balance>,
}

#[derive(Debug, Deserialize)]
pub struct PricesResponse {
    pub prices: Vec<PricePool>,
}
