//! 청첩장 레코드 타입
//!
//! 데이터 백엔드의 `invitations` 테이블과 주고받는 구조체입니다.
//! 소유권 검사는 백엔드의 row-level 규칙이 수행하므로 여기서는 형태만 정의합니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// 청첩장 레코드
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invitation {
    /// 레코드 ID (백엔드 생성)
    pub id: Uuid,

    /// 소유자 사용자 ID
    pub owner_id: String,

    /// 공개 URL slug
    pub slug: String,

    /// 제목
    pub title: String,

    /// 본문 문서 (빌더가 저장하는 자유형 JSON)
    pub content: Value,

    /// 공개 여부
    pub published: bool,

    /// 생성 시각
    pub created_at: DateTime<Utc>,

    /// 수정 시각
    pub updated_at: DateTime<Utc>,
}

/// 새 청첩장 생성 요청 본문
///
/// `owner_id`는 클라이언트가 아니라 Gateway가 세션에서 채웁니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewInvitation {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub content: Value,
}

/// 청첩장 부분 수정 본문 (주어진 필드만 갱신)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvitationPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
}

impl InvitationPatch {
    /// 갱신할 필드가 하나도 없는지 확인
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.published.is_none()
    }
}
