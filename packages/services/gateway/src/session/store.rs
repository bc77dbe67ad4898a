//! 세션 저장소
//!
//! 프로세스 메모리에 세션을 보관하는 단순 저장소입니다.
//! 만료된 항목은 조회 시점에 제거됩니다.

use std::collections::HashMap;
use std::sync::RwLock;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use moshim_core::auth::{Session, SessionUser};
use rand::RngCore;

/// 저장된 세션 항목
#[derive(Debug, Clone)]
pub struct SessionEntry {
    pub user: SessionUser,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// 인메모리 세션 저장소
pub struct SessionStore {
    ttl_secs: i64,
    entries: RwLock<HashMap<String, SessionEntry>>,
}

impl SessionStore {
    pub fn new(ttl_secs: u64) -> Self {
        Self {
            ttl_secs: ttl_secs as i64,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// 새 세션 발급, 세션 ID 반환
    pub fn issue(&self, user: SessionUser) -> String {
        let id = new_session_id();
        let now = Utc::now();
        let entry = SessionEntry {
            user,
            issued_at: now,
            expires_at: now + Duration::seconds(self.ttl_secs),
        };
        self.entries.write().unwrap().insert(id.clone(), entry);
        id
    }

    /// 세션 해석
    ///
    /// 없거나 만료된 세션은 `None`입니다. 만료 항목은 이때 제거합니다.
    pub fn resolve(&self, id: &str) -> Option<Session> {
        {
            let entries = self.entries.read().unwrap();
            match entries.get(id) {
                Some(entry) if entry.expires_at > Utc::now() => {
                    return Some(Session {
                        user: entry.user.clone(),
                    });
                }
                Some(_) => {} // 만료, 아래에서 제거
                None => return None,
            }
        }
        self.entries.write().unwrap().remove(id);
        None
    }

    /// 세션 폐기 (로그아웃)
    pub fn revoke(&self, id: &str) {
        self.entries.write().unwrap().remove(id);
    }
}

/// 256비트 난수 세션 ID (base64url, 패딩 없음)
fn new_session_id() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}
