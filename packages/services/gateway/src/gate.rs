//! 라우트 게이트
//!
//! 세션 유무와 경로만으로 통과/리다이렉트를 결정합니다.
//! 결정 함수([`decide`])는 I/O가 없는 순수 함수이고, 미들웨어가
//! 세션을 해석해 그 결정을 적용합니다. 잘못 보낸 리다이렉트는
//! 다음 요청에서 스스로 교정되므로 재시도 같은 것은 없습니다.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

use crate::session::session_id_from_headers;
use crate::state::AppState;

/// 로그인 페이지 경로
pub const LOGIN_PATH: &str = "/login";

/// 로그인 직후 기본 랜딩 경로
pub const DEFAULT_LANDING: &str = "/builder";

/// 게이트 결정
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// 그대로 통과
    PassThrough,
    /// 다른 경로로 리다이렉트
    Redirect(String),
}

/// 순수 게이트 결정 함수
///
/// * 로그인 상태로 `/login`에 오면 callbackUrl(사이트 내부 경로이고
///   로그인 페이지 자신이 아닐 때만) 또는 기본 랜딩으로 보냅니다.
/// * 비로그인 상태로 보호 경로에 오면 원래 목적지를 callbackUrl에 실어
///   로그인 페이지로 보냅니다.
/// * 그 외에는 통과입니다.
pub fn decide(
    authenticated: bool,
    path: &str,
    query: Option<&str>,
    protected: &[String],
) -> GateDecision {
    if authenticated && path == LOGIN_PATH {
        let target = query
            .and_then(callback_url)
            .filter(|cb| {
                is_local_path(cb) && cb.as_str() != LOGIN_PATH && !cb.starts_with("/login?")
            })
            .unwrap_or_else(|| DEFAULT_LANDING.to_string());
        return GateDecision::Redirect(target);
    }

    if !authenticated && is_protected(path, protected) {
        let original = match query {
            Some(q) if !q.is_empty() => format!("{}?{}", path, q),
            _ => path.to_string(),
        };
        return GateDecision::Redirect(format!(
            "{}?callbackUrl={}",
            LOGIN_PATH,
            urlencoding::encode(&original)
        ));
    }

    GateDecision::PassThrough
}

/// 게이트 미들웨어
///
/// 페이지 경로에만 적용됩니다. API 경로는 리다이렉트 대신 401 JSON을
/// 돌려주는 영역이라 여기서 건드리지 않습니다.
pub async fn route_gate(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path();
    if path.starts_with("/api/") {
        return next.run(req).await;
    }

    let authenticated = session_id_from_headers(req.headers())
        .and_then(|id| state.sessions.resolve(&id))
        .is_some();

    let decision = decide(
        authenticated,
        path,
        req.uri().query(),
        &state.config.protected_paths,
    );

    match decision {
        GateDecision::PassThrough => next.run(req).await,
        GateDecision::Redirect(location) => {
            tracing::debug!(from = %req.uri(), to = %location, "gate redirect");
            Redirect::temporary(&location).into_response()
        }
    }
}

/// 쿼리 스트링에서 callbackUrl 값 추출 (percent-decoding 포함)
fn callback_url(query: &str) -> Option<String> {
    for pair in query.split('&') {
        let mut kv = pair.splitn(2, '=');
        if kv.next() == Some("callbackUrl") {
            let raw = kv.next().unwrap_or("");
            return urlencoding::decode(raw).ok().map(|cb| cb.into_owned());
        }
    }
    None
}

/// 사이트 내부 경로인지 확인 (외부/스킴 상대 URL로의 open redirect 차단)
fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.contains("://")
}

fn is_protected(path: &str, protected: &[String]) -> bool {
    protected.iter().any(|prefix| {
        path == prefix.as_str()
            || (path.starts_with(prefix.as_str())
                && path.as_bytes().get(prefix.len()) == Some(&b'/'))
    })
}
