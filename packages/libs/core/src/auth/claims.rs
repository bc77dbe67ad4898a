//! 스코프 토큰 클레임
//!
//! 데이터 백엔드에 사용자 신원을 주장하는 단기 토큰의 페이로드 구조입니다.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// 스코프 토큰 TTL (초)
///
/// 갱신·폐기 경로가 없으므로 만료는 항상 발급 시각 + 1시간입니다.
pub const TOKEN_TTL_SECS: i64 = 3600;

/// 스코프 토큰 클레임 (HS256 JWT 페이로드)
///
/// 백엔드의 row-level 권한 규칙이 `sub`와 `role`을 기준으로 평가합니다.
/// 여기 나열된 다섯 필드가 페이로드의 전부입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScopedClaims {
    /// Subject (사용자 ID)
    pub sub: String,

    /// 고정 role (`"authenticated"`)
    pub role: String,

    /// Audience (`"authenticated"`)
    pub aud: String,

    /// 발급 시각 (epoch 초)
    pub iat: i64,

    /// 만료 시각 (epoch 초)
    pub exp: i64,
}

impl ScopedClaims {
    /// 새 claims 생성
    pub fn new(sub: String) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub,
            role: "authenticated".to_string(),
            aud: "authenticated".to_string(),
            iat: now,
            exp: now + TOKEN_TTL_SECS,
        }
    }

    /// 만료 여부 확인
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }

    /// 남은 TTL (초)
    pub fn remaining_ttl(&self) -> i64 {
        (self.exp - Utc::now().timestamp()).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoped_claims() {
        let claims = ScopedClaims::new("user_123".to_string());

        assert_eq!(claims.sub, "user_123");
        assert_eq!(claims.role, "authenticated");
        assert_eq!(claims.aud, "authenticated");
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECS);
        assert!(!claims.is_expired());
        assert!(claims.remaining_ttl() > 0);
    }

    #[test]
    fn test_wire_shape() {
        let claims = ScopedClaims::new("user_123".to_string());
        let value = serde_json::to_value(&claims).unwrap();
        let object = value.as_object().unwrap();

        // 페이로드는 정확히 다섯 필드, 시각은 NumericDate(정수 초)
        assert_eq!(object.len(), 5);
        assert!(object["iat"].is_i64());
        assert!(object["exp"].is_i64());
    }
}
