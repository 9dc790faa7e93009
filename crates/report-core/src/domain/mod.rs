//! 에이전트 결과 도메인 모델.

mod agent;
mod calculations;
mod dataset;
mod summary;

pub use agent::*;
pub use calculations::*;
pub use dataset::*;
pub use summary::*;
