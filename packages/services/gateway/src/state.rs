//! Gateway 앱 상태

use std::sync::Arc;

use moshim_core::auth::TokenMinter;

use crate::config::GatewayConfig;
use crate::session::{IdentityProvider, SessionStore};

/// 앱 상태
///
/// 모든 핸들러가 공유합니다. 설정과 발급기는 기동 후 읽기 전용이며,
/// 변하는 것은 세션 저장소의 맵뿐입니다.
pub struct AppState {
    /// 설정
    pub config: GatewayConfig,

    /// 스코프 토큰 발급기
    pub minter: TokenMinter,

    /// 세션 저장소
    pub sessions: SessionStore,

    /// 신원 공급자 (로그인 자격 증명 검증)
    pub identity: Arc<dyn IdentityProvider>,
}

impl AppState {
    /// 새 상태 생성
    ///
    /// 서명 시크릿이 비어 있으면 발급기 생성이 실패하고 기동이 중단됩니다.
    pub fn new(config: GatewayConfig, identity: Arc<dyn IdentityProvider>) -> anyhow::Result<Self> {
        let minter = TokenMinter::new(&config.backend.jwt_secret)?;
        Ok(Self {
            minter,
            sessions: SessionStore::new(config.session_ttl_secs),
            config,
            identity,
        })
    }
}
