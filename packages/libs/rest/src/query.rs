//! PostgREST 요청 빌더
//!
//! 테이블 경로와 쿼리 스트링을 조립하고 CRUD 요청을 실행합니다.
//! 필터 값은 percent-encoding을 거치므로 임의 문자열을 그대로 넣을 수 있습니다.

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::ScopedClient;
use crate::error::{Result, RestError};

/// 정렬 방향
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// 단일 테이블에 대한 요청 빌더
///
/// `update`/`delete`는 최소 한 개의 필터를 요구합니다. 필터 없는 전체 갱신·삭제는
/// 빌더 단계에서 거부합니다.
pub struct QueryBuilder<'a> {
    client: &'a ScopedClient,
    table: String,
    select: Option<String>,
    filters: Vec<(String, String)>,
    order: Option<String>,
    limit: Option<u64>,
    single: bool,
}

impl<'a> QueryBuilder<'a> {
    pub(crate) fn new(client: &'a ScopedClient, table: &str) -> Self {
        Self {
            client,
            table: table.to_string(),
            select: None,
            filters: Vec::new(),
            order: None,
            limit: None,
            single: false,
        }
    }

    /// 조회할 컬럼 지정 (`"*"` 또는 콤마 목록)
    pub fn select(mut self, columns: &str) -> Self {
        self.select = Some(columns.to_string());
        self
    }

    /// equality 필터 추가 (`column=eq.value`)
    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.filters
            .push((column.to_string(), format!("eq.{}", urlencoding::encode(value))));
        self
    }

    /// 정렬 지정 (`order=column.asc|desc`)
    pub fn order(mut self, column: &str, direction: SortOrder) -> Self {
        self.order = Some(format!("{}.{}", column, direction.as_str()));
        self
    }

    /// 최대 행 수 제한
    pub fn limit(mut self, count: u64) -> Self {
        self.limit = Some(count);
        self
    }

    /// 정확히 한 행을 기대 (응답이 배열이 아닌 객체가 됨)
    ///
    /// 행이 없거나 둘 이상이면 백엔드가 406을 돌려주고,
    /// 이는 [`RestError::NotFound`]로 표면화됩니다.
    pub fn single(mut self) -> Self {
        self.single = true;
        self
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // 실행
    // ─────────────────────────────────────────────────────────────────────────────

    /// SELECT 실행
    pub async fn fetch<T: DeserializeOwned>(self) -> Result<T> {
        let request = self.client.request(Method::GET, self.url());
        send(self.apply_single(request)).await
    }

    /// INSERT 실행 (생성된 행 반환)
    pub async fn insert<T: DeserializeOwned>(self, body: &impl Serialize) -> Result<T> {
        let request = self
            .client
            .request(Method::POST, self.url())
            .header("Prefer", "return=representation")
            .json(body);
        send(self.apply_single(request)).await
    }

    /// UPDATE 실행 (갱신된 행 반환, 필터 필수)
    pub async fn update<T: DeserializeOwned>(self, body: &impl Serialize) -> Result<T> {
        if self.filters.is_empty() {
            return Err(RestError::MissingFilter {
                operation: "update",
            });
        }
        let request = self
            .client
            .request(Method::PATCH, self.url())
            .header("Prefer", "return=representation")
            .json(body);
        send(self.apply_single(request)).await
    }

    /// DELETE 실행 (삭제된 행 반환, 필터 필수)
    pub async fn delete<T: DeserializeOwned>(self) -> Result<T> {
        if self.filters.is_empty() {
            return Err(RestError::MissingFilter {
                operation: "delete",
            });
        }
        let request = self
            .client
            .request(Method::DELETE, self.url())
            .header("Prefer", "return=representation");
        send(self.apply_single(request)).await
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // 조립
    // ─────────────────────────────────────────────────────────────────────────────

    fn url(&self) -> String {
        let base = self.client.rest_url(&self.table);
        let query = self.query_string();
        if query.is_empty() {
            base
        } else {
            format!("{}?{}", base, query)
        }
    }

    fn query_string(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(select) = &self.select {
            parts.push(format!("select={}", select));
        }
        for (column, condition) in &self.filters {
            parts.push(format!("{}={}", column, condition));
        }
        if let Some(order) = &self.order {
            parts.push(format!("order={}", order));
        }
        if let Some(limit) = self.limit {
            parts.push(format!("limit={}", limit));
        }
        parts.join("&")
    }

    fn apply_single(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if self.single {
            request.header("Accept", "application/vnd.pgrst.object+json")
        } else {
            request
        }
    }
}

/// 요청 전송 후 상태 확인, 성공 시 JSON 디코드
async fn send<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T> {
    let response = request.send().await?;
    if !response.status().is_success() {
        return Err(RestError::from_response(response).await);
    }
    Ok(response.json::<T>().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use moshim_core::config::BackendConfig;

    fn sample_client() -> ScopedClient {
        ScopedClient::new(
            &BackendConfig {
                url: "http://localhost:54321".to_string(),
                anon_key: "anon-key".to_string(),
                jwt_secret: "secret".to_string(),
            },
            None,
        )
    }

    #[test]
    fn test_query_string_basic() {
        let client = sample_client();
        let builder = client
            .from("invitations")
            .select("*")
            .eq("published", "true")
            .order("updated_at", SortOrder::Desc)
            .limit(20);

        let query = builder.query_string();
        assert!(query.contains("select=*"));
        assert!(query.contains("published=eq.true"));
        assert!(query.contains("order=updated_at.desc"));
        assert!(query.contains("limit=20"));
    }

    #[test]
    fn test_filter_value_encoding() {
        let client = sample_client();
        let builder = client.from("invitations").eq("slug", "민수 eunji");

        // 공백과 비ASCII는 percent-encoding
        assert_eq!(
            builder.query_string(),
            "slug=eq.%EB%AF%BC%EC%88%98%20eunji"
        );
    }

    #[test]
    fn test_url_without_query() {
        let client = sample_client();
        let builder = client.from("invitations");
        assert_eq!(builder.url(), "http://localhost:54321/rest/v1/invitations");
    }

    #[tokio::test]
    async fn test_update_requires_filter() {
        let client = sample_client();
        let result = client
            .from("invitations")
            .update::<serde_json::Value>(&serde_json::json!({"title": "x"}))
            .await;

        assert!(matches!(result, Err(RestError::MissingFilter { .. })));
    }

    #[tokio::test]
    async fn test_delete_requires_filter() {
        let client = sample_client();
        let result = client.from("invitations").delete::<serde_json::Value>().await;

        assert!(matches!(result, Err(RestError::MissingFilter { .. })));
    }
}
