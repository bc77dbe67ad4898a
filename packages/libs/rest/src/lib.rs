//! moshim-rest: 스코프 데이터 클라이언트
//!
//! PostgREST 호환 백엔드(Supabase 등)에 대한 요청을 생성합니다.
//! 클라이언트는 요청마다 새로 만들어지는 단명 객체이며, 세션 저장이나
//! 토큰 자동 갱신을 하지 않습니다. 모든 요청은 독립적으로 인가됩니다.
//!
//! # 모듈 구조
//!
//! - `client`: 스코프/익명 클라이언트 팩토리
//! - `query`: PostgREST 요청 빌더 (select/filter/order/limit, CRUD)
//! - `error`: 백엔드 응답 에러 타입

pub mod client;
pub mod error;
pub mod query;

pub use client::ScopedClient;
pub use error::{Result, RestError};
pub use query::{QueryBuilder, SortOrder};
