use arc200_dashboard::constants::{EXCLUDED_SUPPLY_ACCOUNTS, RECIPROCAL_POOL_CONTRACT_ID, USD_POOL_CONTRACT_ID};
use arc200_dashboard::models::{Balance, PricePool, Transfer};
use arc200_dashboard::slots::{SourceUpdate, StatSlots};
use arc200_dashboard::stats::DashboardStats;
use test_log::test;

fn transfer(amount: &str, receiver: &str) -> Transfer {
    Transfer {
        amount: amount.to_string(),
        sender: "SENDER".to_string(),
        receiver: receiver.to_string(),
        timestamp: 0,
    }
}

fn balance(account_id: &str, balance: &str) -> Balance {
    Balance {
        account_id: account_id.to_string(),
        balance: balance.to_string(),
    }
}

fn pool(contract_id: u64, price: f64) -> PricePool {
    PricePool {
        pool_id: format!("pool-{contract_id}"),
        contract_id,
        symbol_a: String::new(),
        symbol_b: String::new(),
        price,
    }
}

#[test]
fn distribution_total_and_contributors() {
    let mut slots = StatSlots::default();
    slots.apply(SourceUpdate::Transfers(vec![
        transfer("100000000", "A"),
        transfer("50000000", "A"),
        transfer("25000000", "B"),
    ]));

    let stats = DashboardStats::derive(&slots);
    assert!((stats.total_distributed - 1.75).abs() < 1e-9);
    assert_eq!(stats.unique_contributors, 2);
}

#[test]
fn duplicate_receivers_count_once() {
    let mut slots = StatSlots::default();
    slots.apply(SourceUpdate::Transfers(vec![
        transfer("1", "A"),
        transfer("2", "A"),
        transfer("3", "A"),
    ]));

    assert_eq!(DashboardStats::derive(&slots).unique_contributors, 1);
}

#[test]
fn empty_transfers_derive_to_zero() {
    let stats = DashboardStats::derive(&StatSlots::default());
    assert_eq!(stats.total_distributed, 0.0);
    assert_eq!(stats.unique_contributors, 0);
}

#[test]
fn excluded_accounts_never_count_toward_supply() {
    let mut slots = StatSlots::default();
    slots.apply(SourceUpdate::Balances(vec![
        balance("X", "1000000"),
        balance(EXCLUDED_SUPPLY_ACCOUNTS[0], "5000000"),
        balance(EXCLUDED_SUPPLY_ACCOUNTS[1], "9000000000"),
    ]));

    assert!((DashboardStats::derive(&slots).circulating_supply - 1.0).abs() < 1e-9);
}

#[test]
fn all_excluded_balances_derive_to_zero_supply() {
    let mut slots = StatSlots::default();
    slots.apply(SourceUpdate::Balances(vec![
        balance(EXCLUDED_SUPPLY_ACCOUNTS[0], "5000000"),
        balance(EXCLUDED_SUPPLY_ACCOUNTS[1], "5000000"),
    ]));

    assert_eq!(DashboardStats::derive(&slots).circulating_supply, 0.0);
}

#[test]
fn treasury_usd_is_zero_without_a_pool_match() {
    let mut slots = StatSlots::default();
    slots.apply(SourceUpdate::Treasury(Some(balance("TREASURY", "700000000"))));
    slots.apply(SourceUpdate::Prices(vec![pool(1, 3.0), pool(2, 4.0)]));

    assert_eq!(DashboardStats::derive(&slots).treasury_usd, 0.0);
}

#[test]
fn treasury_usd_multiplies_balance_by_pool_rate() {
    let mut slots = StatSlots::default();
    slots.apply(SourceUpdate::Treasury(Some(balance("TREASURY", "700000000"))));
    slots.apply(SourceUpdate::Prices(vec![pool(USD_POOL_CONTRACT_ID, 1.5)]));

    // 7 units at 1.5 USD each.
    assert!((DashboardStats::derive(&slots).treasury_usd - 10.5).abs() < 1e-9);
}

#[test]
fn missing_treasury_record_reads_as_zero() {
    let mut slots = StatSlots::default();
    slots.apply(SourceUpdate::Treasury(None));
    slots.apply(SourceUpdate::Prices(vec![pool(USD_POOL_CONTRACT_ID, 1.5)]));

    assert_eq!(DashboardStats::derive(&slots).treasury_usd, 0.0);
}

#[test]
fn reciprocal_pool_price_two_derives_half() {
    let mut slots = StatSlots::default();
    slots.apply(SourceUpdate::Prices(vec![pool(RECIPROCAL_POOL_CONTRACT_ID, 2.0)]));

    assert_eq!(DashboardStats::derive(&slots).voi_per_token, 0.5);
}
