use axum::{extract::State, Json};
use serde::Serialize;
use super::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub resolver: String,
}

fn connection_label(connected: bool) -> String {
    if connected {
        "connected".to_string()
    } else {
        "disconnected".to_string()
    }
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let resolver_up = state.gas_check.resolver().is_reachable().await;

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        resolver: connection_label(resolver_up),
    })
}
