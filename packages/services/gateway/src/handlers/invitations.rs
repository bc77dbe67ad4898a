//! 청첩장 핸들러
//!
//! 세션에서 스코프 토큰을 발급해 요청 단위 클라이언트로 백엔드를 호출합니다.
//! 소유권 집행은 백엔드의 row-level 규칙에 맡기고, Gateway는 요청의
//! 스코프만 책임집니다.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use moshim_core::auth::Session;
use moshim_core::invitation::{Invitation, InvitationPatch, NewInvitation};
use moshim_rest::{ScopedClient, SortOrder};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::{GatewayError, Result};
use crate::session::session_id_from_headers;
use crate::state::AppState;

/// 세션 필수 (없으면 401)
fn require_session(state: &AppState, headers: &HeaderMap) -> Result<Session> {
    session_id_from_headers(headers)
        .and_then(|id| state.sessions.resolve(&id))
        .ok_or(GatewayError::Unauthorized)
}

/// 세션 사용자로 스코프 클라이언트 생성 (호출마다 새 토큰)
fn scoped_client(state: &AppState, session: &Session) -> Result<ScopedClient> {
    let token = state.minter.mint(&session.user.id)?;
    Ok(ScopedClient::new(&state.config.backend, Some(token)))
}

/// GET /api/invitations: 내 청첩장 목록
pub async fn list(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<Invitation>>> {
    let session = require_session(&state, &headers)?;
    let client = scoped_client(&state, &session)?;

    let rows: Vec<Invitation> = client
        .from("invitations")
        .select("*")
        .order("updated_at", SortOrder::Desc)
        .fetch()
        .await?;

    Ok(Json(rows))
}

/// POST /api/invitations: 새 청첩장 생성
pub async fn create(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<NewInvitation>,
) -> Result<(StatusCode, Json<Invitation>)> {
    let session = require_session(&state, &headers)?;
    if body.slug.trim().is_empty() || body.title.trim().is_empty() {
        return Err(GatewayError::BadRequest {
            message: "slug and title are required".to_string(),
        });
    }
    let client = scoped_client(&state, &session)?;

    // owner_id는 세션에서 채운다 (클라이언트 입력을 믿지 않음)
    let row = json!({
        "owner_id": session.user.id,
        "slug": body.slug,
        "title": body.title,
        "content": body.content,
    });

    let created: Invitation = client.from("invitations").single().insert(&row).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PATCH /api/invitations/{id}: 부분 수정
///
/// row-level 규칙이 남의 행을 숨기므로, 내 것이 아닌 id는 404가 됩니다.
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    Json(patch): Json<InvitationPatch>,
) -> Result<Json<Invitation>> {
    let session = require_session(&state, &headers)?;
    if patch.is_empty() {
        return Err(GatewayError::BadRequest {
            message: "no fields to update".to_string(),
        });
    }
    let client = scoped_client(&state, &session)?;

    let updated: Invitation = client
        .from("invitations")
        .eq("id", &id.to_string())
        .single()
        .update(&patch)
        .await?;

    Ok(Json(updated))
}

/// DELETE /api/invitations/{id}
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<Value>> {
    let session = require_session(&state, &headers)?;
    let client = scoped_client(&state, &session)?;

    let _deleted: Invitation = client
        .from("invitations")
        .eq("id", &id.to_string())
        .single()
        .delete()
        .await?;

    Ok(Json(json!({ "ok": true })))
}

/// GET /i/{slug}: 공개 뷰어 조회
///
/// 익명 클라이언트로 게시된 청첩장만 조회합니다. 세션 부재가
/// 에러가 아닌 대표적인 호출 지점입니다.
pub async fn by_slug(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<Invitation>> {
    let client = ScopedClient::new(&state.config.backend, None);

    let invitation: Invitation = client
        .from("invitations")
        .select("*")
        .eq("slug", &slug)
        .eq("published", "true")
        .single()
        .fetch()
        .await?;

    Ok(Json(invitation))
}
