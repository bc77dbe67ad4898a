//! Gateway 설정

use std::env;

use moshim_core::config::BackendConfig;

/// Gateway 설정
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// 서버 포트
    pub port: u16,

    /// 세션 TTL (초)
    pub session_ttl_secs: u64,

    /// 로그인 없이는 접근할 수 없는 경로 prefix 목록
    pub protected_paths: Vec<String>,

    /// Set-Cookie에 Secure 속성 부여 (HTTPS 배포 환경)
    pub secure_cookies: bool,

    /// 데이터 백엔드 설정
    pub backend: BackendConfig,
}

impl GatewayConfig {
    /// 환경변수에서 설정 로드
    ///
    /// 백엔드 설정(URL/익명 키/서명 시크릿)은 필수이고,
    /// 나머지는 기본값으로 동작합니다.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            port: env::var("MOSHIM_PORT")
                .unwrap_or_else(|_| "4400".to_string())
                .parse()?,

            session_ttl_secs: env::var("MOSHIM_SESSION_TTL_SECS")
                .unwrap_or_else(|_| "2592000".to_string())
                .parse()
                .unwrap_or(2_592_000),

            protected_paths: env::var("MOSHIM_PROTECTED_PATHS")
                .ok()
                .map(|v| {
                    v.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect::<Vec<_>>()
                })
                .unwrap_or_else(|| vec!["/builder".to_string(), "/mypage".to_string()]),

            secure_cookies: env::var("MOSHIM_SECURE_COOKIES")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .unwrap_or(false),

            backend: BackendConfig::from_env()?,
        })
    }
}
