//! 리포트 생성 에러 타입.

use thiserror::Error;

/// 리포트 생성 및 표시 과정의 에러.
#[derive(Debug, Error)]
pub enum ReportError {
    /// 설정 에러
    #[error("설정 에러: {0}")]
    Config(String),

    /// 데이터셋 레코드가 일관되지 않음
    #[error("데이터셋 에러: {0}")]
    Dataset(String),

    /// 차트 레이아웃이 데이터를 수용할 수 없음
    #[error("레이아웃 에러: {0}")]
    Layout(String),

    /// 표시 장치(대화형 터미널)를 사용할 수 없음
    #[error("디스플레이 에러: {0}")]
    Display(String),

    /// 터미널 입출력 에러
    #[error("입출력 에러: {0}")]
    Io(#[from] std::io::Error),
}

/// 리포트 작업을 위한 Result 타입.
pub type ReportResult<T> = Result<T, ReportError>;

impl From<::config::ConfigError> for ReportError {
    fn from(err: ::config::ConfigError) -> Self {
        ReportError::Config(err.to_string())
    }
}
