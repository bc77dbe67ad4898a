//! 인증 핸들러 (로그인/로그아웃/토큰)

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue};
use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{GatewayError, Result};
use crate::middleware::RequestId;
use crate::session::{
    clear_session_cookie, session_cookie, session_id_from_headers, Verified,
};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /api/auth/login
///
/// 자격 증명을 신원 공급자로 검증하고, 성공하면 세션을 발급해
/// 쿠키로 내려줍니다.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Extension(RequestId(request_id)): Extension<RequestId>,
    Json(body): Json<LoginRequest>,
) -> Result<(HeaderMap, Json<Value>)> {
    let user = match state.identity.verify(&body.email, &body.password).await? {
        Verified::User(user) => user,
        Verified::Denied => {
            tracing::info!(request_id = %request_id, "login denied");
            return Err(GatewayError::InvalidCredentials);
        }
    };

    let session_id = state.sessions.issue(user.clone());
    tracing::info!(request_id = %request_id, user_id = %user.id, "login ok");

    let mut headers = HeaderMap::new();
    let cookie = session_cookie(
        &session_id,
        state.config.session_ttl_secs,
        state.config.secure_cookies,
    );
    if let Ok(value) = HeaderValue::from_str(&cookie) {
        headers.insert(header::SET_COOKIE, value);
    }

    Ok((headers, Json(json!({ "ok": true, "user": user }))))
}

/// POST /api/auth/logout
///
/// 세션을 폐기하고 쿠키를 지웁니다. 세션이 없어도 성공으로 답합니다.
pub async fn logout(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> (HeaderMap, Json<Value>) {
    if let Some(id) = session_id_from_headers(&headers) {
        state.sessions.revoke(&id);
    }

    let mut response_headers = HeaderMap::new();
    let cookie = clear_session_cookie(state.config.secure_cookies);
    if let Ok(value) = HeaderValue::from_str(&cookie) {
        response_headers.insert(header::SET_COOKIE, value);
    }

    (response_headers, Json(json!({ "ok": true })))
}

/// GET /api/auth/token
///
/// 세션이 있으면 스코프 토큰을 새로 발급해 돌려줍니다.
/// 호출마다 새 토큰이며 어디에도 캐시하지 않습니다.
pub async fn token(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Value>> {
    let session = session_id_from_headers(&headers)
        .and_then(|id| state.sessions.resolve(&id))
        .ok_or(GatewayError::Unauthorized)?;

    let token = state.minter.mint(&session.user.id)?;
    Ok(Json(json!({ "token": token })))
}
