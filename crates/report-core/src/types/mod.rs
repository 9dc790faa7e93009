//! 리포트 전반에서 사용되는 공통 타입.

mod decimal;

pub use decimal::*;
