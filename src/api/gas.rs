use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};

use crate::{error::Result, models::GasCheckResponse};

use super::{username_from_query, AppState, UsernameQuery};

/// GET /api/gas?username=<name>
pub async fn check_gas(
    State(state): State<AppState>,
    query: std::result::Result<Query<UsernameQuery>, QueryRejection>,
) -> Result<Json<GasCheckResponse>> {
    let username = username_from_query(query)?;
    let report = state.gas_check.check(&username).await?;
    Ok(Json(GasCheckResponse::from(report)))
}
