use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::constants::BACKEND_UNAVAILABLE_MESSAGE;

/// Terminal failure outcomes of a gas lookup.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {message}")]
    Validation { username: String, message: String },

    #[error("Not found: {message}")]
    NotFound { username: String, message: String },

    #[error("Upstream unavailable: {reason}")]
    UpstreamUnavailable { username: String, reason: String },
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::UpstreamUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Message shown to the user. Transport details stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation { message, .. } => message.clone(),
            AppError::NotFound { message, .. } => message.clone(),
            AppError::UpstreamUnavailable { .. } => BACKEND_UNAVAILABLE_MESSAGE.to_string(),
        }
    }

    pub fn username(&self) -> &str {
        match self {
            AppError::Validation { username, .. } => username,
            AppError::NotFound { username, .. } => username,
            AppError::UpstreamUnavailable { username, .. } => username,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub username: String,
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        let body = Json(ErrorResponse {
            success: false,
            username: self.username().to_string(),
            error: self.user_message(),
        });

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
