use hashbrown::HashSet;

use crate::constants::{
    DISTRIBUTION_SCALE, EXCLUDED_SUPPLY_ACCOUNTS, RECIPROCAL_POOL_CONTRACT_ID, SUPPLY_SCALE,
    TREASURY_SCALE, USD_POOL_CONTRACT_ID,
};
use crate::models::PricePool;
use crate::slots::StatSlots;

/// Parse a smallest-unit decimal string. Anything unparseable counts as zero
/// rather than failing the whole derivation.
fn parse_units(raw: &str) -> f64 {
    raw.parse::<f64>().unwrap_or(0.0)
}

/// First pool matching the contract id, or zero when the listing has none.
fn pool_price(prices: &[PricePool], contract_id: u64) -> f64 {
    prices
        .iter()
        .find(|p| p.contract_id == contract_id)
        .map(|p| p.price)
        .unwrap_or(0.0)
}

/// The derived display figures. A pure function of the four slots; safe to
/// recompute on every slot change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardStats {
    /// Sum of distribution transfer amounts, in whole tokens.
    pub total_distributed: f64,
    /// Distinct receiving addresses across the distribution transfers.
    pub unique_contributors: usize,
    /// Holder balances on the supply contract, issuer and reserve excluded.
    pub circulating_supply: f64,
    /// Treasury balance priced through the USD pool. Zero until both the
    /// balance and the rate have arrived.
    pub treasury_usd: f64,
    /// Inverse of the reciprocal pool's quote. Carried as derived state but
    /// not rendered anywhere yet.
    pub voi_per_token: f64,
}

impl DashboardStats {
    pub fn derive(slots: &StatSlots) -> Self {
        let total_distributed = slots
            .transfers
            .iter()
            .map(|t| parse_units(&t.amount) / DISTRIBUTION_SCALE)
            .sum();

        // Set semantics: a receiver counts once no matter how many transfers
        // it appears in.
        let unique_contributors = slots
            .transfers
            .iter()
            .map(|t| t.receiver.as_str())
            .collect::<HashSet<_>>()
            .len();

        let circulating_supply = slots
            .balances
            .iter()
            .filter(|b| !EXCLUDED_SUPPLY_ACCOUNTS.contains(&b.account_id.as_str()))
            .map(|b| parse_units(&b.balance) / SUPPLY_SCALE)
            .sum();

        // Product of two independently-fetched quantities; either one missing
        // makes the product zero, never an error.
        let treasury_units = slots
            .treasury
            .as_ref()
            .map(|b| parse_units(&b.balance) / TREASURY_SCALE)
            .unwrap_or(0.0);
        let treasury_usd = treasury_units * pool_price(&slots.prices, USD_POOL_CONTRACT_ID);

        let reciprocal = pool_price(&slots.prices, RECIPROCAL_POOL_CONTRACT_ID);
        let voi_per_token = if reciprocal > 0.0 { 1.0 / reciprocal } else { 0.0 };

        Self {
            total_distributed,
            unique_contributors,
            circulating_supply,
            treasury_usd,
            voi_per_token,
        }
    }
}
