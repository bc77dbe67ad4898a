//! 백엔드 응답 에러 타입
//!
//! 백엔드의 거절은 그대로 표면화합니다. 이 계층은 재시도·토큰 갱신·재발급을
//! 하지 않으며, 호출자가 다음 요청에서 세션을 다시 해석해야 합니다.

use serde_json::Value;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RestError>;

/// 스코프 데이터 클라이언트 에러
#[derive(Debug, Error)]
pub enum RestError {
    #[error("bad request: {message}")]
    BadRequest { message: String },

    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    #[error("forbidden: {message}")]
    Forbidden { message: String },

    #[error("not found: {message}")]
    NotFound { message: String },

    #[error("conflict: {message}")]
    Conflict { message: String },

    #[error("backend error ({status}): {message}")]
    Backend { status: u16, message: String },

    #[error("{operation} requires at least one filter")]
    MissingFilter { operation: &'static str },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl RestError {
    /// 이 에러가 나타내는 백엔드 HTTP 상태 코드
    pub fn status_code(&self) -> u16 {
        match self {
            RestError::BadRequest { .. } | RestError::MissingFilter { .. } => 400,
            RestError::Unauthorized { .. } => 401,
            RestError::Forbidden { .. } => 403,
            RestError::NotFound { .. } => 404,
            RestError::Conflict { .. } => 409,
            RestError::Backend { status, .. } => *status,
            RestError::Transport(_) => 502,
        }
    }

    /// 실패 응답을 에러로 변환
    ///
    /// PostgREST 에러 본문(`{"message": ...}`)에서 메시지를 최대한 추출합니다.
    /// 단건 조회(`single`)의 406은 "해당 행 없음"으로 취급합니다.
    pub(crate) async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status().as_u16();
        let message = match response.json::<Value>().await {
            Ok(body) => body
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or("request rejected")
                .to_string(),
            Err(_) => "request rejected".to_string(),
        };

        match status {
            400 => RestError::BadRequest { message },
            401 => RestError::Unauthorized { message },
            403 => RestError::Forbidden { message },
            404 | 406 => RestError::NotFound { message },
            409 => RestError::Conflict { message },
            _ => RestError::Backend { status, message },
        }
    }
}
