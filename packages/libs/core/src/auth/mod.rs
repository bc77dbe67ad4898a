//! 인증 관련 타입 및 로직
//!
//! # 개요
//!
//! moshim의 인증은 두 층으로 나뉩니다:
//!
//! - **세션**: 로그인한 방문자를 나타내는 요청 단위 읽기 전용 뷰 ([`Session`])
//! - **스코프 토큰**: 세션의 사용자 ID를 데이터 백엔드에 주장하는
//!   단기(1시간) HS256 JWT ([`ScopedClaims`], [`TokenMinter`])
//!
//! 스코프 토큰은 데이터 클라이언트 생성 시마다 새로 발급되며,
//! 캐시·저장·갱신 경로가 없습니다. 검증은 백엔드의 몫입니다.

mod claims;
mod minter;
mod session;

pub use claims::{ScopedClaims, TOKEN_TTL_SECS};
pub use minter::TokenMinter;
pub use session::{Session, SessionUser};
