//! 스코프 토큰 발급
//!
//! 세션의 사용자 ID로 단기 HS256 JWT를 서명합니다. 발급만 담당하며
//! 검증은 데이터 백엔드의 몫입니다.

use jsonwebtoken::{encode, EncodingKey, Header};

use crate::auth::ScopedClaims;
use crate::{Error, Result};

/// 스코프 토큰 발급기
///
/// 서명 시크릿은 시작 시 설정에서 한 번 받아 보관합니다.
/// 발급은 부수효과 없는 순수 연산이라 요청 간 공유가 안전합니다.
pub struct TokenMinter {
    key: EncodingKey,
}

impl TokenMinter {
    /// 발급기 생성
    ///
    /// 빈 시크릿은 설정 오류로 거부합니다. 토큰 없이 기동할 수 없습니다.
    pub fn new(secret: &str) -> Result<Self> {
        if secret.trim().is_empty() {
            return Err(Error::EmptyConfig {
                name: "MOSHIM_JWT_SECRET".to_string(),
            });
        }
        Ok(Self {
            key: EncodingKey::from_secret(secret.as_bytes()),
        })
    }

    /// 사용자 ID로 토큰 발급
    ///
    /// 빈 ID는 거부합니다. 세션 부재는 호출 전에 걸러야 합니다.
    pub fn mint(&self, user_id: &str) -> Result<String> {
        if user_id.is_empty() {
            return Err(Error::EmptySubject);
        }
        let claims = ScopedClaims::new(user_id.to_string());
        let token = encode(&Header::default(), &claims, &self.key)?;
        Ok(token)
    }
}
