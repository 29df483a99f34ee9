use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::{
    config::ResolverConfig,
    constants::{
        DEFAULT_NOT_FOUND_MESSAGE, RESOLVER_GAS_PATH, RESOLVER_HEALTH_PATH,
        RESOLVER_HEALTH_TIMEOUT_SECS,
    },
    models::RawWallet,
};

#[derive(Error, Debug)]
pub enum ResolverError {
    #[error("resolver request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("resolver returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("invalid resolver URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Profile metadata and raw wallets for one user.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedUser {
    pub username: String,
    pub fid: Option<u64>,
    pub display_name: Option<String>,
    pub pfp_url: Option<String>,
    pub wallets: Vec<RawWallet>,
    pub primary_wallet: Option<String>,
}

/// A reachable resolver either found the user or reported why not.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolverReply {
    Found(ResolvedUser),
    Rejected { message: String },
}

/// Wire shape of the resolver's lookup response.
#[derive(Debug, Deserialize)]
pub struct ResolverPayload {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub fid: Option<u64>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub pfp_url: Option<String>,
    #[serde(default)]
    pub wallets: Vec<RawWallet>,
    #[serde(default)]
    pub primary_wallet: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ResolverPayload {
    /// Anything but an explicit `success: true` is a rejection.
    pub fn into_reply(self, requested: &str) -> ResolverReply {
        if self.success != Some(true) {
            let message = self
                .error
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_NOT_FOUND_MESSAGE.to_string());
            return ResolverReply::Rejected { message };
        }

        ResolverReply::Found(ResolvedUser {
            username: self
                .username
                .filter(|u| !u.trim().is_empty())
                .unwrap_or_else(|| requested.to_string()),
            fid: self.fid,
            display_name: self.display_name,
            pfp_url: self.pfp_url,
            wallets: self.wallets,
            primary_wallet: self.primary_wallet,
        })
    }
}

#[async_trait::async_trait]
pub trait WalletResolver: Send + Sync {
    async fn resolve(&self, username: &str) -> Result<ResolverReply, ResolverError>;

    async fn is_reachable(&self) -> bool;
}

#[derive(Clone, Debug)]
pub struct HttpWalletResolver {
    base_url: String,
    client: Client,
    health_timeout: Duration,
}

impl HttpWalletResolver {
    pub fn new(config: &ResolverConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            health_timeout: Duration::from_secs(RESOLVER_HEALTH_TIMEOUT_SECS),
        }
    }

    /// Bounds the health check only; lookups stay unbounded.
    #[cfg(test)]
    pub fn with_health_timeout(mut self, timeout: Duration) -> Self {
        self.health_timeout = timeout;
        self
    }

    fn endpoint(&self, path: &str) -> Result<url::Url, ResolverError> {
        Ok(url::Url::parse(&format!("{}{}", self.base_url, path))?)
    }
}

#[async_trait::async_trait]
impl WalletResolver for HttpWalletResolver {
    async fn resolve(&self, username: &str) -> Result<ResolverReply, ResolverError> {
        let mut url = self.endpoint(RESOLVER_GAS_PATH)?;
        url.query_pairs_mut().append_pair("username", username);

        tracing::debug!("Resolving {} via {}", username, self.base_url);
        let resp = self.client.get(url).send().await?;
        if !resp.status().is_success() {
            return Err(ResolverError::Status(resp.status()));
        }

        let payload: ResolverPayload = resp.json().await?;
        Ok(payload.into_reply(username))
    }

    async fn is_reachable(&self) -> bool {
        let url = match self.endpoint(RESOLVER_HEALTH_PATH) {
            Ok(url) => url,
            Err(_) => return false,
        };
        match self
            .client
            .get(url)
            .timeout(self.health_timeout)
            .send()
            .await
        {
            Ok(resp) => resp.status().is_success(),
            Err(e) => {
                tracing::debug!("Resolver health check failed: {}", e);
                false
            }
        }
    }
}
