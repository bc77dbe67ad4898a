//! 세션 뷰 타입
//!
//! 인증 서브시스템이 소유한 세션의 요청 단위 읽기 전용 뷰입니다.
//! "세션 없음"은 에러가 아니라 `Option<Session>`의 `None`으로 표현합니다.

use serde::{Deserialize, Serialize};

/// 로그인한 방문자의 세션 뷰
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// 현재 사용자
    pub user: SessionUser,
}

/// 세션에 담기는 사용자 정보
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    /// 사용자 ID (opaque 문자열)
    pub id: String,

    /// 이메일 (선택)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// 표시 이름 (선택)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Session {
    /// 사용자 ID만으로 세션 뷰 생성
    pub fn for_user(id: impl Into<String>) -> Self {
        Self {
            user: SessionUser {
                id: id.into(),
                email: None,
                name: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_shape() {
        let session = Session::for_user("u1");
        let value = serde_json::to_value(&session).unwrap();

        assert_eq!(value, serde_json::json!({"user": {"id": "u1"}}));
    }
}
