use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};

use crate::{error::Result, models::QuickCheckResponse};

use super::{username_from_query, AppState, UsernameQuery};

/// GET /api/quick?username=<name>
pub async fn quick_check(
    State(state): State<AppState>,
    query: std::result::Result<Query<UsernameQuery>, QueryRejection>,
) -> Result<Json<QuickCheckResponse>> {
    let username = username_from_query(query)?;
    let report = state.gas_check.quick_check(&username).await?;
    Ok(Json(QuickCheckResponse::from(report)))
}
