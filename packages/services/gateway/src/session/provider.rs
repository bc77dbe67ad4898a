//! 신원 공급자
//!
//! 로그인 자격 증명을 검증하는 경계면입니다. 운영 구현은 백엔드의
//! password grant를 호출하고, 테스트는 스텁 구현으로 대체합니다.

use async_trait::async_trait;
use moshim_core::auth::SessionUser;
use moshim_core::config::BackendConfig;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::error::{GatewayError, Result};

/// 자격 증명 검증 결과
///
/// 거절은 에러가 아니라 정상 분기입니다. `Err`는 백엔드 장애처럼
/// 검증 자체가 불가능했을 때만 씁니다.
#[derive(Debug)]
pub enum Verified {
    User(SessionUser),
    Denied,
}

/// 자격 증명 검증 경계면
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// 이메일/비밀번호 검증
    async fn verify(&self, email: &str, password: &str) -> Result<Verified>;
}

/// 백엔드 password grant 기반 신원 공급자
pub struct BackendIdentityProvider {
    http: reqwest::Client,
    config: BackendConfig,
}

impl BackendIdentityProvider {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
}

/// password grant 응답 (필요한 필드만 디코드)
#[derive(Debug, Deserialize)]
struct GrantResponse {
    user: GrantUser,
}

#[derive(Debug, Deserialize)]
struct GrantUser {
    id: String,
    email: Option<String>,
    user_metadata: Option<serde_json::Value>,
}

#[async_trait]
impl IdentityProvider for BackendIdentityProvider {
    async fn verify(&self, email: &str, password: &str) -> Result<Verified> {
        let url = format!("{}/auth/v1/token?grant_type=password", self.config.url);
        let response = self
            .http
            .post(url)
            .header("apikey", &self.config.anon_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| GatewayError::Internal {
                message: format!("auth backend unreachable: {}", e),
            })?;

        let status = response.status();
        if status == StatusCode::BAD_REQUEST
            || status == StatusCode::UNAUTHORIZED
            || status == StatusCode::FORBIDDEN
        {
            // 자격 증명 불일치, 정상 거절 분기
            return Ok(Verified::Denied);
        }
        if !status.is_success() {
            return Err(GatewayError::Internal {
                message: format!("auth backend returned {}", status),
            });
        }

        let grant: GrantResponse = response.json().await.map_err(|e| GatewayError::Internal {
            message: format!("auth backend response decode failed: {}", e),
        })?;
        let name = grant
            .user
            .user_metadata
            .as_ref()
            .and_then(|metadata| metadata.get("name"))
            .and_then(|name| name.as_str())
            .map(String::from);

        Ok(Verified::User(SessionUser {
            id: grant.user.id,
            email: grant.user.email,
            name,
        }))
    }
}
