//! Gateway 에러 타입
//!
//! 응답 본문은 평평한 `{"error": "..."}` 한 가지 형태입니다.
//! 세션 부재는 [`GatewayError::Unauthorized`]라는 정상 분기로 다루며,
//! 백엔드의 거절은 재시도 없이 그대로 올립니다.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use moshim_rest::RestError;
use serde_json::json;

/// Gateway 에러
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("bad request: {message}")]
    BadRequest { message: String },

    #[error("unauthorized")]
    Unauthorized,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("not found: {message}")]
    NotFound { message: String },

    #[error("internal error: {message}")]
    Internal { message: String },

    #[error("backend error: {0}")]
    Backend(#[from] RestError),

    #[error("core error: {0}")]
    Core(#[from] moshim_core::Error),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            GatewayError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            GatewayError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, "Unauthorized".to_string())
            }
            GatewayError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Invalid credentials".to_string())
            }
            GatewayError::NotFound { message } => (StatusCode::NOT_FOUND, message.clone()),
            GatewayError::Internal { message } => {
                tracing::error!("internal error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            GatewayError::Backend(e) => backend_response(e),
            GatewayError::Core(e) => {
                tracing::error!(code = e.code(), "core error: {}", e);
                let status = StatusCode::from_u16(e.status_code())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                (status, "Internal server error".to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// 백엔드 거절을 Gateway 응답으로 번역
///
/// Gateway가 방금 발급한 토큰이 거절되는 것은 클라이언트 잘못이 아니라
/// 설정 불일치이므로 502로 분류합니다.
fn backend_response(error: &RestError) -> (StatusCode, String) {
    match error {
        RestError::NotFound { .. } => (StatusCode::NOT_FOUND, "Not found".to_string()),
        RestError::Conflict { message } => (StatusCode::CONFLICT, message.clone()),
        RestError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
        RestError::Unauthorized { .. } | RestError::Forbidden { .. } => {
            tracing::warn!("backend rejected scoped credentials: {}", error);
            (
                StatusCode::BAD_GATEWAY,
                "Backend rejected the request".to_string(),
            )
        }
        RestError::Transport(_) => {
            tracing::warn!("backend unreachable: {}", error);
            (StatusCode::BAD_GATEWAY, "Backend unreachable".to_string())
        }
        _ => {
            tracing::error!(status = error.status_code(), "unexpected backend error: {}", error);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
