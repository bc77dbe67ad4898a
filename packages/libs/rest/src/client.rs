//! 스코프/익명 클라이언트 팩토리
//!
//! 토큰이 있으면 그 토큰으로, 없으면 익명 키로 Authorization을 채웁니다.
//! 생성 시 네트워크 호출은 없으며, 설정을 들고 있는 것이 전부입니다.

use moshim_core::config::BackendConfig;
use reqwest::Method;

use crate::query::QueryBuilder;

/// 스코프 데이터 클라이언트
///
/// 요청마다 하나씩 만들어 쓰고 버립니다. 백그라운드 갱신 작업이나
/// 요청 간 캐시가 없어 각 요청은 독립적으로 인가됩니다.
pub struct ScopedClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
    bearer: String,
}

impl ScopedClient {
    /// 클라이언트 생성
    ///
    /// `token`이 `None`이면 익명 주체로 동작합니다. PostgREST 관례대로
    /// 익명 요청도 Authorization에 익명 키를 bearer로 싣습니다.
    pub fn new(config: &BackendConfig, token: Option<String>) -> Self {
        let bearer = token.unwrap_or_else(|| config.anon_key.clone());
        Self {
            http: reqwest::Client::new(),
            base_url: config.url.clone(),
            anon_key: config.anon_key.clone(),
            bearer,
        }
    }

    /// 테이블에 대한 요청 빌더 시작
    pub fn from(&self, table: &str) -> QueryBuilder<'_> {
        QueryBuilder::new(self, table)
    }

    /// 공통 헤더(apikey, Authorization)가 설정된 요청 빌더
    pub(crate) fn request(&self, method: Method, url: String) -> reqwest::RequestBuilder {
        self.http
            .request(method, url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.bearer)
    }

    pub(crate) fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> BackendConfig {
        BackendConfig {
            url: "http://localhost:54321".to_string(),
            anon_key: "anon-key".to_string(),
            jwt_secret: "secret".to_string(),
        }
    }

    #[test]
    fn test_anonymous_construction() {
        // 토큰 없이도 생성은 항상 성공해야 한다
        let client = ScopedClient::new(&sample_config(), None);
        assert_eq!(client.bearer, "anon-key");
    }

    #[test]
    fn test_scoped_construction() {
        let client = ScopedClient::new(&sample_config(), Some("user-token".to_string()));
        assert_eq!(client.bearer, "user-token");
        assert_eq!(client.anon_key, "anon-key");
    }

    #[test]
    fn test_rest_url() {
        let client = ScopedClient::new(&sample_config(), None);
        assert_eq!(
            client.rest_url("invitations"),
            "http://localhost:54321/rest/v1/invitations"
        );
    }
}
