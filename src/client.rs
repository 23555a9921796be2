use async_trait::async_trait;
use log::debug;
use reqwest::{Client, RequestBuilder, StatusCode};
use thiserror::Error;
use url::Url;

use crate::constants::{self, Env};
use crate::models::{
    Balance, BalancesResponse, PricePool, PricesResponse, Transfer, TransfersResponse,
};

#[cfg(test)]
use mockall::automock;

/// Everything that can go wrong at the fetch boundary. The aggregator treats
/// all variants identically (log and keep the slot default); the split exists
/// so the diagnostic says which kind of failure it was.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(StatusCode),
    #[error("malformed response body: {0}")]
    Decode(String),
    #[error("invalid api url: {0}")]
    Url(#[from] url::ParseError),
}

/// The four independent data sources behind the dashboard. Mocked in tests so
/// the aggregator can be exercised without a live indexer.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait StatsSource: Send + Sync {
    /// Community distribution transfers for the fixed (contract, sender) pair.
    async fn fetch_transfers(&self) -> Result<Vec<Transfer>, FetchError>;

    /// All holder balances on the supply contract.
    async fn fetch_balances(&self) -> Result<Vec<Balance>, FetchError>;

    /// The treasury account's balance on the treasury contract, if the
    /// indexer knows one.
    async fn fetch_treasury_balance(&self) -> Result<Option<Balance>, FetchError>;

    /// The full DEX pool price listing.
    async fn fetch_prices(&self) -> Result<Vec<PricePool>, FetchError>;
}

pub struct IndexerClient {
    http: Client,
    indexer_url: String,
    dex_url: String,
}

impl IndexerClient {
    pub fn new(env: &Env) -> Result<Self, FetchError> {
        // Validate once up front so a bad override fails at startup, not on
        // every request.
        Url::parse(&env.indexer_url)?;
        Url::parse(&env.dex_url)?;
        Ok(Self {
            http: Client::new(),
            indexer_url: env.indexer_url.trim_end_matches('/').to_string(),
            dex_url: env.dex_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T>(&self, req: RequestBuilder) -> Result<T, FetchError>
    where
        T: serde::de::DeserializeOwned,
    {
        let resp = req.send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        // Decode from text rather than resp.json() so shape mismatches
        // surface as Decode, not as a transport error.
        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[async_trait]
impl StatsSource for IndexerClient {
    async fn fetch_transfers(&self) -> Result<Vec<Transfer>, FetchError> {
        let req = self
            .http
            .get(format!("{}/arc200/transfers", self.indexer_url))
            .query(&[
                ("contractId", constants::DISTRIBUTION_CONTRACT_ID.to_string()),
                ("from", constants::DISTRIBUTION_SENDER.to_string()),
            ]);
        let resp: TransfersResponse = self.get_json(req).await?;
        debug!("fetched {} distribution transfers", resp.transfers.len());
        Ok(resp.transfers)
    }

    async fn fetch_balances(&self) -> Result<Vec<Balance>, FetchError> {
        let req = self
            .http
            .get(format!("{}/arc200/balances", self.indexer_url))
            .query(&[("contractId", constants::SUPPLY_CONTRACT_ID.to_string())]);
        let resp: BalancesResponse = self.get_json(req).await?;
        debug!("fetched {} holder balances", resp.balances.len());
        Ok(resp.balances)
    }

    async fn fetch_treasury_balance(&self) -> Result<Option<Balance>, FetchError> {
        let req = self
            .http
            .get(format!("{}/arc200/balances", self.indexer_url))
            .query(&[
                ("contractId", constants::TREASURY_CONTRACT_ID.to_string()),
                ("accountId", constants::TREASURY_ACCOUNT.to_string()),
            ]);
        let resp: BalancesResponse = self.get_json(req).await?;
        // Zero or one record; anything past the first is ignored.
        Ok(resp.balances.into_iter().next())
    }

    async fn fetch_prices(&self) -> Result<Vec<PricePool>, FetchError> {
        let req = self.http.get(format!("{}/dex/prices", self.dex_url));
        let resp: PricesResponse = self.get_json(req).await?;
        debug!("fetched {} pool prices", resp.prices.len());
        Ok(resp.prices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_base_url() {
        let env = Env {
            indexer_url: "not a url".to_string(),
            dex_url: "https://example.com".to_string(),
        };
        assert!(matches!(IndexerClient::new(&env), Err(FetchError::Url(_))));
    }

    #[test]
    fn trims_trailing_slash_from_bases() {
        let env = Env {
            indexer_url: "https://example.com/v1/".to_string(),
            dex_url: "https://example.com/v1".to_string(),
        };
        let client = IndexerClient::new(&env).unwrap();
        assert_eq!(client.indexer_url, "https://example.com/v1");
        assert_eq!(client.dex_url, "https://example.com/v1");
    }
}
