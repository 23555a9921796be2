use std::sync::Arc;

use log::{debug, error};
use metrics::counter;
use tokio::task::JoinSet;

use crate::client::{FetchError, StatsSource};
use crate::slots::{SourceUpdate, StatSlots};
use crate::stats::DashboardStats;

const METRIC_FETCHES: &str = "dashboard_fetches_total";
const METRIC_FETCH_FAILURES: &str = "dashboard_fetch_failures_total";

/// Runs one fetch-and-derive cycle over the four sources. The sources are
/// fired together with no ordering dependency; each settles into its own slot
/// and a failed source leaves its slot at the default.
pub struct Aggregator<S> {
    source: Arc<S>,
}

impl<S: StatsSource + 'static> Aggregator<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Fire all four fetches, fold results in as they settle, and re-derive
    /// the stats after every settle. Never fails: a source that errors is
    /// logged and its figures stay at zero.
    pub async fn run_cycle(&self) -> (StatSlots, DashboardStats) {
        let mut set: JoinSet<Result<SourceUpdate, (&'static str, FetchError)>> = JoinSet::new();

        set.spawn({
            let src = self.source.clone();
            async move {
                src.fetch_transfers()
                    .await
                    .map(SourceUpdate::Transfers)
                    .map_err(|e| ("transfers", e))
            }
        });
        set.spawn({
            let src = self.source.clone();
            async move {
                src.fetch_balances()
                    .await
                    .map(SourceUpdate::Balances)
                    .map_err(|e| ("balances", e))
            }
        });
        set.spawn({
            let src = self.source.clone();
            async move {
                src.fetch_treasury_balance()
                    .await
                    .map(SourceUpdate::Treasury)
                    .map_err(|e| ("treasury", e))
            }
        });
        set.spawn({
            let src = self.source.clone();
            async move {
                src.fetch_prices()
                    .await
                    .map(SourceUpdate::Prices)
                    .map_err(|e| ("prices", e))
            }
        });

        let mut slots = StatSlots::default();
        let mut stats = DashboardStats::derive(&slots);

        while let Some(joined) = set.join_next().await {
            match joined {
                Ok(Ok(update)) => {
                    counter!(METRIC_FETCHES, 1, "source" => update.source());
                    slots.apply(update);
                    stats = DashboardStats::derive(&slots);
                    debug!("derived after settle: {:?}", stats);
                }
                Ok(Err((source, e))) => {
                    counter!(METRIC_FETCH_FAILURES, 1, "source" => source);
                    error!("{source} fetch failed, figures stay at defaults: {e}");
                }
                Err(e) => {
                    error!("fetch task join failed: {e}");
                }
            }
        }

        (slots, stats)
    }
}
