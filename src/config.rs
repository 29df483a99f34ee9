use serde::Deserialize;
use std::env;

use crate::constants::DEFAULT_BACKEND_URL;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub request_timeout_secs: u64,

    // Resolver
    pub backend_url: String,

    // CORS
    pub cors_allowed_origins: String,
}

/// The only setting the gas check orchestrator needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()?,
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()?,

            backend_url: env::var("BACKEND_URL")
                .unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string()),

            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "*".to_string()),
        })
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.backend_url.trim().is_empty() {
            anyhow::bail!("BACKEND_URL is empty");
        }
        let parsed = url::Url::parse(self.backend_url.trim())
            .map_err(|e| anyhow::anyhow!("BACKEND_URL is not a valid URL: {}", e))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            anyhow::bail!("BACKEND_URL must use http or https");
        }
        if self.request_timeout_secs == 0 {
            anyhow::bail!("REQUEST_TIMEOUT_SECS must be > 0");
        }

        if self.cors_allowed_origins.trim().is_empty() {
            tracing::warn!("CORS_ALLOWED_ORIGINS is empty; requests may be blocked");
        }

        Ok(())
    }

    pub fn resolver(&self) -> ResolverConfig {
        ResolverConfig {
            base_url: self.backend_url.trim().trim_end_matches('/').to_string(),
        }
    }
}
