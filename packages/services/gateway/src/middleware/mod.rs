//! Gateway 미들웨어

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

/// 요청 ID extension
#[derive(Clone, Debug)]
pub struct RequestId(pub String);

/// 요청 ID 부여
///
/// 들어온 `x-request-id`가 있으면 그대로 쓰고 없으면 새로 만듭니다.
/// 응답 헤더로 되돌려 주어 프론트 측 로그와 대조할 수 있게 합니다.
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = req
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .map(String::from)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    req.extensions_mut().insert(RequestId(id.clone()));
    let mut resp = next.run(req).await;
    if let Ok(value) = HeaderValue::from_str(&id) {
        resp.headers_mut().insert("x-request-id", value);
    }
    resp
}
