//! # Report Core
//!
//! 시뮬레이션 투자 에이전트 결과 리포트의 핵심 모델을 제공합니다.
//!
//! - 에이전트 데이터셋과 손익 계산
//! - 렌더러와 무관한 차트 모델 (가치 비교 차트, 보유 종목 그리드)
//! - 설정 관리
//! - 로깅 인프라

pub mod charts;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod types;

pub use charts::*;
pub use self::config::*;
pub use domain::*;
pub use error::*;
pub use logging::*;
pub use types::*;
