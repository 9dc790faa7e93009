//! 설정 관리.
//!
//! 표시 및 로깅 설정만 다룹니다. 에이전트 데이터셋은 설정으로 바꿀 수 없습니다.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::ReportResult;
use crate::logging::{LogConfig, LogFormat};

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config/report.toml";

/// 환경 변수 접두사 (예: `REPORT__DISPLAY__TICK_RATE_MS`).
pub const ENV_PREFIX: &str = "REPORT";

/// 키 입력 폴링 간격 하한 (밀리초). 0이면 폴링 루프가 CPU를 계속 점유합니다.
pub const MIN_TICK_RATE_MS: u64 = 1;

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ReportConfig {
    /// 로깅 설정
    #[serde(default)]
    pub logging: LoggingConfig,
    /// 화면 표시 설정
    #[serde(default)]
    pub display: DisplayConfig,
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
    /// 파일명과 줄 번호 포함 여부
    #[serde(default)]
    pub with_file: bool,
    /// 대상(모듈 경로) 포함 여부
    #[serde(default = "default_with_target")]
    pub with_target: bool,
}

fn default_with_target() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            with_file: false,
            with_target: default_with_target(),
        }
    }
}

impl LoggingConfig {
    /// [`LogConfig`]로 변환합니다. 알 수 없는 형식은 pretty로 처리합니다.
    pub fn to_log_config(&self) -> LogConfig {
        let format = self.format.parse().unwrap_or(LogFormat::Pretty);
        LogConfig::new(self.level.clone())
            .with_format(format)
            .with_file(self.with_file)
            .with_target(self.with_target)
    }
}

/// 처음 표시할 차트.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StartFigure {
    /// 최종 포트폴리오 가치 차트
    #[default]
    Values,
    /// 에이전트별 보유 종목 차트
    Holdings,
}

/// 화면 표시 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// 키 입력 폴링 간격 (밀리초)
    pub tick_rate_ms: u64,
    /// 처음 표시할 차트
    pub start_figure: StartFigure,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            start_figure: StartFigure::Values,
        }
    }
}

impl DisplayConfig {
    /// 폴링 간격. [`MIN_TICK_RATE_MS`] 미만은 하한으로 올립니다.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(MIN_TICK_RATE_MS))
    }
}

impl ReportConfig {
    /// 파일(선택)과 환경 변수에서 설정을 로드합니다.
    ///
    /// 파일이 없으면 기본값과 환경 변수만 사용합니다.
    pub fn load<P: AsRef<Path>>(path: P) -> ReportResult<Self> {
        let builder = ::config::Config::builder()
            // 기본값으로 시작
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?
            .set_default("logging.with_file", false)?
            .set_default("logging.with_target", true)?
            .set_default("display.tick_rate_ms", 250)?
            .set_default("display.start_figure", "values")?
            // 파일에서 로드 (선택)
            .add_source(::config::File::from(path.as_ref()).required(false))
            // 환경 변수로 오버라이드
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// 기본 경로에서 설정을 로드합니다.
    pub fn load_default() -> ReportResult<Self> {
        Self::load(DEFAULT_CONFIG_PATH)
    }
}
