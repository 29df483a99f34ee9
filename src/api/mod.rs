// src/api/mod.rs
pub mod gas;
pub mod health;
pub mod quick;

use axum::extract::{rejection::QueryRejection, Query};
use serde::Deserialize;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::services::GasCheckService;

#[derive(Clone)]
pub struct AppState {
    pub gas_check: GasCheckService,
    pub config: Config,
}

#[derive(Debug, Deserialize)]
pub struct UsernameQuery {
    #[serde(default)]
    pub username: String,
}

/// Unwraps `?username=`, turning a malformed query string into a
/// validation failure so the caller still gets the JSON error body.
pub fn username_from_query(
    query: std::result::Result<Query<UsernameQuery>, QueryRejection>,
) -> Result<String> {
    match query {
        Ok(Query(query)) => Ok(query.username),
        Err(rejection) => Err(AppError::Validation {
            username: String::new(),
            message: format!("Invalid query string: {}", rejection.body_text()),
        }),
    }
}
