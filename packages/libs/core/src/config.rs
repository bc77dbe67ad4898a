//! 백엔드 연결 설정
//!
//! 프로세스 시작 시 한 번 로드되어 이후 읽기 전용으로 공유됩니다.

use std::env;

use crate::{Error, Result};

/// 데이터 백엔드(PostgREST 호환) 연결 설정
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// 백엔드 base URL (트레일링 슬래시 제거됨)
    pub url: String,

    /// 익명(public) API 키
    pub anon_key: String,

    /// 스코프 토큰 서명 시크릿 (HS256)
    pub jwt_secret: String,
}

impl BackendConfig {
    /// 환경변수에서 설정 로드
    ///
    /// 세 값 모두 필수입니다. 누락되거나 비어 있으면 에러를 반환하며,
    /// 토큰을 발급하는 경로에서 이는 기동 실패로 이어집니다.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            url: require("MOSHIM_BACKEND_URL")?.trim_end_matches('/').to_string(),
            anon_key: require("MOSHIM_BACKEND_ANON_KEY")?,
            jwt_secret: require("MOSHIM_JWT_SECRET")?,
        })
    }
}

/// 필수 환경변수 읽기 (누락/빈 값은 에러)
fn require(name: &str) -> Result<String> {
    let value = env::var(name).map_err(|_| Error::MissingConfig {
        name: name.to_string(),
    })?;
    if value.trim().is_empty() {
        return Err(Error::EmptyConfig {
            name: name.to_string(),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    // 환경변수는 프로세스 전역이라 한 테스트 안에서 순차로 검증한다
    #[test]
    fn test_from_env() {
        env::set_var("MOSHIM_BACKEND_URL", "http://localhost:54321/");
        env::set_var("MOSHIM_BACKEND_ANON_KEY", "anon-key");
        env::set_var("MOSHIM_JWT_SECRET", "super-secret");

        let config = BackendConfig::from_env().unwrap();
        assert_eq!(config.url, "http://localhost:54321");
        assert_eq!(config.anon_key, "anon-key");
        assert_eq!(config.jwt_secret, "super-secret");

        env::set_var("MOSHIM_JWT_SECRET", "   ");
        assert!(matches!(
            BackendConfig::from_env(),
            Err(Error::EmptyConfig { .. })
        ));

        env::remove_var("MOSHIM_JWT_SECRET");
        assert!(matches!(
            BackendConfig::from_env(),
            Err(Error::MissingConfig { .. })
        ));
    }
}
