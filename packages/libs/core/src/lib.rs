//! moshim-core: 모심 공통 핵심 라이브러리
//!
//! 이 크레이트는 Gateway와 데이터 클라이언트가 공유하는 핵심 타입과 로직을 제공합니다.
//!
//! # 모듈 구조
//!
//! - `auth`: 스코프 토큰 클레임/발급 및 세션 뷰 타입
//! - `config`: 백엔드 연결 설정 (프로세스 시작 시 1회 로드)
//! - `invitation`: 청첩장 레코드 타입
//! - `error`: 공통 에러 타입

pub mod auth;
pub mod config;
pub mod error;
pub mod invitation;

pub use error::{Error, Result};
