//! 리포트 차트 데이터 구조.
//!
//! 렌더러와 무관한 차트 모델을 생성합니다. 실제 화면 출력은 `report-viz`가 담당합니다.
//!
//! # 제공 차트
//!
//! - 에이전트별 최종 포트폴리오 가치 (손익 주석 포함)
//! - 에이전트별 보유 종목 2x2 그리드
//!
//! # 사용 예시
//!
//! ```rust
//! use report_core::charts::ReportFigures;
//! use report_core::domain::AgentDataset;
//!
//! let dataset = AgentDataset::builtin();
//! let figures = ReportFigures::from_dataset(&dataset).unwrap();
//!
//! assert_eq!(figures.value_chart.len(), 4);
//! assert_eq!(figures.holdings_grid.panels.len(), 4);
//! ```

mod bar;
mod holdings_grid;
mod value_chart;

pub use bar::*;
pub use holdings_grid::*;
pub use value_chart::*;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::AgentDataset;
use crate::error::ReportResult;

/// 리포트에 표시되는 두 차트.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportFigures {
    /// 최종 가치 비교 차트
    pub value_chart: BarChartSpec,

    /// 보유 종목 그리드
    pub holdings_grid: HoldingsGrid,
}

impl ReportFigures {
    /// 데이터셋에서 두 차트를 생성합니다.
    pub fn from_dataset(dataset: &AgentDataset) -> ReportResult<Self> {
        let value_chart = build_value_chart(dataset);
        let holdings_grid = build_holdings_grid(dataset)?;

        info!(
            value_bars = value_chart.len(),
            holdings_panels = holdings_grid.panels.len(),
            "Report figures built"
        );

        Ok(Self {
            value_chart,
            holdings_grid,
        })
    }
}
