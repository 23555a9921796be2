use std::env;

// ARC-200 contract the community distribution flows through. Amounts on this
// contract are 8-decimal smallest units.
pub const DISTRIBUTION_CONTRACT_ID: u64 = 23214349;
pub const DISTRIBUTION_SENDER: &str =
    "RTKWX3FTDNNIHMAWHK5SDPKN3LRUT24JGJPV5WXK3LRQ4E5Q6ZBQXKDMBA";
pub const DISTRIBUTION_SCALE: f64 = 1e8;

// Token contract whose holder balances make up circulating supply. This
// contract uses 6-decimal smallest units, unlike the distribution contract.
pub const SUPPLY_CONTRACT_ID: u64 = 6779767;
pub const SUPPLY_SCALE: f64 = 1e6;

// The issuing contract's own holding account and the team reserve never count
// toward circulating supply.
pub const SUPPLY_ISSUER_ACCOUNT: &str =
    "H7MUXF3K6BCDQ5XVQH4PZ2AJ3ZHC3EWFYB7KQRUOMJ5LDSX36WKCRT4AEQ";
pub const SUPPLY_RESERVE_ACCOUNT: &str =
    "VGH5DM2HPKXGFNQ2PTOJ7SLZTK5IWGE3TFIYBW4Y6FJQZ27NC35F2Q4JOU";
pub const EXCLUDED_SUPPLY_ACCOUNTS: [&str; 2] =
    [SUPPLY_ISSUER_ACCOUNT, SUPPLY_RESERVE_ACCOUNT];

// Treasury reserve tracked on the distribution contract (8-decimal units).
pub const TREASURY_CONTRACT_ID: u64 = 23214349;
pub const TREASURY_ACCOUNT: &str =
    "TWN7PKWZH3NQD4CZSYY5ZLPN2UGC7XHQEJ3B6RKMA5SFI4YU2DWBVJQE5E";
pub const TREASURY_SCALE: f64 = 1e8;

// DEX pools the price listing is searched for. The USD pool prices the
// treasury token in USD; the reciprocal pool is quoted token-per-VOI and is
// inverted before use.
pub const USD_POOL_CONTRACT_ID: u64 = 395553;
pub const RECIPROCAL_POOL_CONTRACT_ID: u64 = 395510;

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Runtime environment. Only the API hosts are configurable; every contract
/// and account identifier above is fixed.
#[derive(Debug, Clone)]
pub struct Env {
    pub indexer_url: String,
    pub dex_url: String,
}

impl Env {
    pub fn new() -> Self {
        Self {
            indexer_url: env_or("INDEXER_API_URL", "https://arc200-idx.nautilus.sh/v1"),
            dex_url: env_or("DEX_API_URL", "https://arc200-idx.nautilus.sh/v1"),
        }
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}
