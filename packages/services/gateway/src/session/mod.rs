//! 세션 서브시스템
//!
//! 쿠키 ↔ 세션 저장소 ↔ 신원 공급자를 잇습니다.
//! 핸들러는 [`SessionStore::resolve`]가 돌려주는 읽기 전용 뷰만 보며,
//! 세션 부재는 `None`일 뿐 에러가 아닙니다.

mod provider;
mod store;

pub use provider::{BackendIdentityProvider, IdentityProvider, Verified};
pub use store::{SessionEntry, SessionStore};

use axum::http::{header, HeaderMap};

/// 세션 쿠키 이름
pub const SESSION_COOKIE: &str = "moshim_session";

/// Cookie 헤더에서 세션 ID 추출
pub fn session_id_from_headers(headers: &HeaderMap) -> Option<String> {
    let cookie_header = headers.get(header::COOKIE)?.to_str().ok()?;
    parse_cookie(cookie_header, SESSION_COOKIE)
}

/// 로그인 성공 시 내려줄 Set-Cookie 값
pub fn session_cookie(id: &str, ttl_secs: u64, secure: bool) -> String {
    let mut cookie = format!(
        "{}={}; HttpOnly; SameSite=Lax; Path=/; Max-Age={}",
        SESSION_COOKIE, id, ttl_secs
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// 로그아웃 시 쿠키 제거용 Set-Cookie 값
pub fn clear_session_cookie(secure: bool) -> String {
    let mut cookie = format!(
        "{}=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0",
        SESSION_COOKIE
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// `k=v; k2=v2` 형태의 Cookie 헤더에서 이름이 일치하는 값 추출
fn parse_cookie(header: &str, name: &str) -> Option<String> {
    for part in header.split(';') {
        let mut kv = part.trim().splitn(2, '=');
        if kv.next() == Some(name) {
            return kv.next().map(|v| v.trim().to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cookie() {
        let header = "theme=dark; moshim_session=abc123; lang=ko";
        assert_eq!(parse_cookie(header, "moshim_session"), Some("abc123".to_string()));
        assert_eq!(parse_cookie(header, "theme"), Some("dark".to_string()));
        assert_eq!(parse_cookie(header, "missing"), None);
    }

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie("abc123", 3600, false);
        assert_eq!(
            cookie,
            "moshim_session=abc123; HttpOnly; SameSite=Lax; Path=/; Max-Age=3600"
        );

        let secure = session_cookie("abc123", 3600, true);
        assert!(secure.ends_with("; Secure"));
    }

    #[test]
    fn test_clear_session_cookie() {
        let cookie = clear_session_cookie(false);
        assert!(cookie.starts_with("moshim_session=;"));
        assert!(cookie.contains("Max-Age=0"));
    }
}
