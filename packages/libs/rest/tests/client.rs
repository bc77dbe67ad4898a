//! 스코프 클라이언트 통합 테스트
//!
//! 포트 0에 스텁 백엔드를 띄우고 실제 HTTP 왕복으로
//! 헤더 부착과 거절 표면화를 검증합니다.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use moshim_core::config::BackendConfig;
use moshim_rest::{RestError, ScopedClient};
use serde_json::{json, Value};

#[derive(Default)]
struct Recorded {
    hits: AtomicUsize,
    authorization: Mutex<Option<String>>,
    apikey: Mutex<Option<String>>,
}

#[derive(Clone)]
struct StubBackend {
    recorded: Arc<Recorded>,
    status: StatusCode,
    body: Value,
}

async fn handle(
    State(stub): State<StubBackend>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    stub.recorded.hits.fetch_add(1, Ordering::SeqCst);
    *stub.recorded.authorization.lock().unwrap() = header_string(&headers, "authorization");
    *stub.recorded.apikey.lock().unwrap() = header_string(&headers, "apikey");
    (stub.status, Json(stub.body.clone()))
}

fn header_string(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(String::from)
}

async fn start_stub(status: StatusCode, body: Value) -> (SocketAddr, Arc<Recorded>) {
    let recorded = Arc::new(Recorded::default());
    let stub = StubBackend {
        recorded: recorded.clone(),
        status,
        body,
    };
    let app = Router::new()
        .route("/rest/v1/invitations", get(handle))
        .with_state(stub);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    tokio::time::sleep(Duration::from_millis(10)).await;

    (addr, recorded)
}

fn config_for(addr: SocketAddr) -> BackendConfig {
    BackendConfig {
        url: format!("http://{}", addr),
        anon_key: "anon-key".to_string(),
        jwt_secret: "secret".to_string(),
    }
}

#[tokio::test]
async fn test_anonymous_request_headers() {
    let (addr, recorded) = start_stub(StatusCode::OK, json!([])).await;
    let client = ScopedClient::new(&config_for(addr), None);

    let rows: Vec<Value> = client.from("invitations").select("*").fetch().await.unwrap();
    assert!(rows.is_empty());

    assert_eq!(recorded.hits.load(Ordering::SeqCst), 1);
    assert_eq!(recorded.apikey.lock().unwrap().as_deref(), Some("anon-key"));
    assert_eq!(
        recorded.authorization.lock().unwrap().as_deref(),
        Some("Bearer anon-key")
    );
}

#[tokio::test]
async fn test_scoped_request_carries_token() {
    let (addr, recorded) = start_stub(StatusCode::OK, json!([])).await;
    let client = ScopedClient::new(&config_for(addr), Some("minted-token".to_string()));

    let _rows: Vec<Value> = client.from("invitations").fetch().await.unwrap();

    assert_eq!(
        recorded.authorization.lock().unwrap().as_deref(),
        Some("Bearer minted-token")
    );
    assert_eq!(recorded.apikey.lock().unwrap().as_deref(), Some("anon-key"));
}

#[tokio::test]
async fn test_expired_token_not_retried() {
    let (addr, recorded) = start_stub(
        StatusCode::UNAUTHORIZED,
        json!({"message": "JWT expired"}),
    )
    .await;
    let client = ScopedClient::new(&config_for(addr), Some("expired-token".to_string()));

    let result = client.from("invitations").fetch::<Vec<Value>>().await;

    match result {
        Err(RestError::Unauthorized { message }) => assert_eq!(message, "JWT expired"),
        other => panic!("expected unauthorized, got {:?}", other),
    }
    // 이 계층은 재시도·갱신·재발급을 하지 않는다
    assert_eq!(recorded.hits.load(Ordering::SeqCst), 1);
}
