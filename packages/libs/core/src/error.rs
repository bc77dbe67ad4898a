//! 공통 에러 타입
//!
//! moshim 전체에서 사용되는 에러 타입을 정의합니다.
//! 세션 부재는 에러가 아니라 `Option`으로 표현하므로 여기에 변형이 없습니다.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// moshim 공통 에러
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────────────────────
    #[error("missing configuration: {name}")]
    MissingConfig { name: String },

    #[error("configuration value is empty: {name}")]
    EmptyConfig { name: String },

    #[error("invalid configuration value for {name}: {message}")]
    InvalidConfig { name: String, message: String },

    // ─────────────────────────────────────────────────────────────────────────────
    // Token Errors
    // ─────────────────────────────────────────────────────────────────────────────
    #[error("cannot mint a token for an empty user id")]
    EmptySubject,

    #[error("token encode error: {0}")]
    TokenEncode(#[from] jsonwebtoken::errors::Error),
}

impl Error {
    /// HTTP 상태 코드로 변환
    pub fn status_code(&self) -> u16 {
        match self {
            // 500 Internal Server Error (설정/발급 오류는 전부 서버 오류)
            Error::MissingConfig { .. }
            | Error::EmptyConfig { .. }
            | Error::InvalidConfig { .. }
            | Error::EmptySubject
            | Error::TokenEncode(_) => 500,
        }
    }

    /// 에러 코드 (로그/클라이언트용)
    pub fn code(&self) -> &'static str {
        match self {
            Error::MissingConfig { .. } => "MISSING_CONFIG",
            Error::EmptyConfig { .. } => "EMPTY_CONFIG",
            Error::InvalidConfig { .. } => "INVALID_CONFIG",
            Error::EmptySubject => "EMPTY_SUBJECT",
            Error::TokenEncode(_) => "TOKEN_ENCODE_ERROR",
        }
    }
}
