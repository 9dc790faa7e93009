//! 에이전트별 보유 종목 그리드 차트.
//!
//! 고정 2x2 그리드에 에이전트당 패널 하나를 배치합니다. 칸보다 에이전트가
//! 많으면 에러, 적으면 빈 칸을 남기고 경고를 기록합니다.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::bar::{BarChartSpec, BarPoint};
use crate::domain::{AgentDataset, AgentRecord};
use crate::error::{ReportError, ReportResult};

/// 그리드 전체 제목.
pub const HOLDINGS_GRID_TITLE: &str = "Holdings per Agent";

/// 패널 Y축 레이블.
pub const HOLDINGS_Y_LABEL: &str = "Quantity";

/// 심볼 레이블 회전 각도.
pub const SYMBOL_LABEL_ROTATION_DEG: u16 = 45;

/// 그리드 모양 (행 x 열).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridShape {
    pub rows: usize,
    pub cols: usize,
}

impl GridShape {
    /// 보유 종목 그리드의 고정 모양 (2x2).
    pub const FIXED: GridShape = GridShape { rows: 2, cols: 2 };

    /// 칸 수.
    pub fn cells(&self) -> usize {
        self.rows * self.cols
    }
}

/// 보유 종목 그리드.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingsGrid {
    /// 그리드 전체 제목
    pub title: String,

    /// 그리드 모양
    pub shape: GridShape,

    /// 패널 목록 (행 우선 순서)
    pub panels: Vec<BarChartSpec>,
}

impl HoldingsGrid {
    /// (행, 열) 위치의 패널. 빈 칸이면 `None`.
    pub fn panel_at(&self, row: usize, col: usize) -> Option<&BarChartSpec> {
        if row >= self.shape.rows || col >= self.shape.cols {
            return None;
        }
        self.panels.get(row * self.shape.cols + col)
    }

    /// 빈 칸 수.
    pub fn empty_cells(&self) -> usize {
        self.shape.cells().saturating_sub(self.panels.len())
    }
}

/// 에이전트 한 명의 보유 종목 패널을 생성합니다.
fn build_panel(agent: &AgentRecord) -> BarChartSpec {
    let mut panel = BarChartSpec::new(agent.name(), HOLDINGS_Y_LABEL)
        .with_label_rotation(SYMBOL_LABEL_ROTATION_DEG);

    for holding in agent.holdings() {
        panel.push(BarPoint::new(holding.symbol.clone(), holding.quantity));
    }

    panel
}

/// 고정 2x2 보유 종목 그리드를 생성합니다.
pub fn build_holdings_grid(dataset: &AgentDataset) -> ReportResult<HoldingsGrid> {
    build_holdings_grid_with_shape(dataset, GridShape::FIXED)
}

/// 지정한 모양으로 보유 종목 그리드를 생성합니다.
///
/// # Errors
///
/// 에이전트 수가 칸 수보다 많으면 [`ReportError::Layout`]을 반환합니다.
pub fn build_holdings_grid_with_shape(
    dataset: &AgentDataset,
    shape: GridShape,
) -> ReportResult<HoldingsGrid> {
    let cells = shape.cells();
    if dataset.len() > cells {
        return Err(ReportError::Layout(format!(
            "{} agents do not fit a {}x{} holdings grid",
            dataset.len(),
            shape.rows,
            shape.cols
        )));
    }

    let panels: Vec<BarChartSpec> = dataset.agents().iter().map(build_panel).collect();

    if panels.len() < cells {
        warn!(
            agents = panels.len(),
            cells,
            "Holdings grid has empty cells"
        );
    }

    debug!(panels = panels.len(), "Holdings grid built");

    Ok(HoldingsGrid {
        title: HOLDINGS_GRID_TITLE.to_string(),
        shape,
        panels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Holding, INITIAL_CAPITAL};
    use rust_decimal_macros::dec;

    fn agent(name: &str) -> AgentRecord {
        AgentRecord::new(
            name,
            dec!(10000),
            vec![Holding::new("SPY", dec!(1))],
            INITIAL_CAPITAL,
        )
    }

    #[test]
    fn test_grid_from_builtin() {
        let grid = build_holdings_grid(&AgentDataset::builtin()).unwrap();

        assert_eq!(grid.title, HOLDINGS_GRID_TITLE);
        assert_eq!(grid.panels.len(), 4);
        assert_eq!(grid.empty_cells(), 0);

        let bars: Vec<usize> = grid.panels.iter().map(|p| p.len()).collect();
        assert_eq!(bars, vec![7, 6, 7, 6]);
    }

    #[test]
    fn test_panel_layout() {
        let grid = build_holdings_grid(&AgentDataset::builtin()).unwrap();

        assert_eq!(grid.panel_at(0, 0).unwrap().title, "Warren");
        assert_eq!(grid.panel_at(0, 1).unwrap().title, "George");
        assert_eq!(grid.panel_at(1, 0).unwrap().title, "Ray");
        assert_eq!(grid.panel_at(1, 1).unwrap().title, "Cathie");
        assert!(grid.panel_at(2, 0).is_none());

        let warren = grid.panel_at(0, 0).unwrap();
        assert_eq!(warren.y_label, HOLDINGS_Y_LABEL);
        assert_eq!(warren.label_rotation_deg, 45);
        assert_eq!(warren.bars[0].label, "LI");
        assert_eq!(warren.bars[0].height(), 440);
        assert_eq!(warren.bars[2].label, "BRK.B");
        assert_eq!(warren.bars[2].height(), 0);
    }

    #[test]
    fn test_too_many_agents_is_layout_error() {
        let agents = ["A", "B", "C", "D", "E"].iter().map(|n| agent(n)).collect();
        let dataset = AgentDataset::from_agents(agents).unwrap();

        let err = build_holdings_grid(&dataset).unwrap_err();
        assert!(matches!(err, ReportError::Layout(_)));
    }

    #[test]
    fn test_fewer_agents_leave_empty_cells() {
        let agents = vec![agent("A"), agent("B"), agent("C")];
        let dataset = AgentDataset::from_agents(agents).unwrap();

        let grid = build_holdings_grid(&dataset).unwrap();
        assert_eq!(grid.panels.len(), 3);
        assert_eq!(grid.empty_cells(), 1);
        assert!(grid.panel_at(1, 1).is_none());
    }
}
