//! moshim-gateway: 모심 세션 게이트웨이
//!
//! 세션 해석, 스코프 토큰 발급, 라우트 게이트, 청첩장 API를 제공합니다.
//! 데이터는 PostgREST 호환 백엔드가 저장하며 row-level 규칙으로 보호됩니다.
//! Gateway는 요청마다 단기 토큰을 새로 발급해 백엔드에 신원을 주장할 뿐,
//! 토큰을 캐시하거나 갱신하지 않습니다.

use std::sync::Arc;

use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::{get, patch, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod gate;
pub mod handlers;
pub mod middleware;
pub mod session;
pub mod state;

use state::AppState;

/// 라우터 생성
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        // Auth
        .route("/api/auth/login", post(handlers::auth::login))
        .route("/api/auth/logout", post(handlers::auth::logout))
        .route("/api/auth/token", get(handlers::auth::token))
        // Invitations
        .route(
            "/api/invitations",
            get(handlers::invitations::list).post(handlers::invitations::create),
        )
        .route(
            "/api/invitations/{id}",
            patch(handlers::invitations::update).delete(handlers::invitations::delete),
        )
        // Public viewer
        .route("/i/{slug}", get(handlers::invitations::by_slug))
        // Health check
        .route("/health", get(handlers::health::health_check))
        // Middleware (안쪽부터: trace → cors → gate → request_id)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(from_fn_with_state(state.clone(), gate::route_gate))
        .layer(from_fn(middleware::request_id))
        // State
        .with_state(state)
}
