use crate::models::{Balance, PricePool, Transfer};

/// The four independent result slots behind the dashboard. Each slot is
/// written by exactly one source; a failed fetch leaves its slot at the
/// default, which derives to zero everywhere downstream.
#[derive(Debug, Clone, Default)]
pub struct StatSlots {
    pub transfers: Vec<Transfer>,
    pub balances: Vec<Balance>,
    pub treasury: Option<Balance>,
    pub prices: Vec<PricePool>,
}

/// A completed fetch, ready to be folded into the slots. Failures never
/// produce an update.
#[derive(Debug, Clone)]
pub enum SourceUpdate {
    Transfers(Vec<Transfer>),
    Balances(Vec<Balance>),
    Treasury(Option<Balance>),
    Prices(Vec<PricePool>),
}

impl SourceUpdate {
    pub fn source(&self) -> &'static str {
        match self {
            SourceUpdate::Transfers(_) => "transfers",
            SourceUpdate::Balances(_) => "balances",
            SourceUpdate::Treasury(_) => "treasury",
            SourceUpdate::Prices(_) => "prices",
        }
    }
}

impl StatSlots {
    /// Pure reducer: fold one completed fetch into its slot. The other three
    /// slots are never touched.
    pub fn apply(&mut self, update: SourceUpdate) {
        match update {
            SourceUpdate::Transfers(transfers) => self.transfers = transfers,
            SourceUpdate::Balances(balances) => self.balances = balances,
            SourceUpdate::Treasury(treasury) => self.treasury = treasury,
            SourceUpdate::Prices(prices) => self.prices = prices,
        }
    }
}
