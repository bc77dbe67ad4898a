//! moshim Gateway 서버

use std::net::SocketAddr;
use std::sync::Arc;

use moshim_gateway::config::GatewayConfig;
use moshim_gateway::session::BackendIdentityProvider;
use moshim_gateway::state::AppState;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 환경변수 로드
    dotenvy::dotenv().ok();

    // 로깅 초기화
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "moshim_gateway=debug,tower_http=debug,axum=trace".into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 설정 로드 (서명 시크릿이 없으면 여기서 기동 실패)
    let config = GatewayConfig::from_env()?;
    tracing::info!(
        port = config.port,
        protected = ?config.protected_paths,
        "starting gateway"
    );

    // 앱 상태 초기화
    let identity = Arc::new(BackendIdentityProvider::new(config.backend.clone()));
    let state = Arc::new(AppState::new(config, identity)?);

    // 라우터 구성 및 서버 시작
    let app = moshim_gateway::app(state.clone());
    let addr = SocketAddr::from(([0, 0, 0, 0], state.config.port));
    tracing::info!("gateway listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
