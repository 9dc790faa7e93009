//! 에이전트 성과 요약 (대시보드 표시용).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::agent::AgentRecord;
use crate::types::{Amount, DecimalExt, Percentage};

/// 에이전트 한 명의 성과 요약.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSummary {
    /// 에이전트 이름
    pub name: String,
    /// 최종 포트폴리오 가치
    pub final_value: Amount,
    /// 손익
    pub pnl: Amount,
    /// 손익률 (%)
    pub pnl_pct: Percentage,
}

impl AgentSummary {
    /// 레코드에서 요약을 생성합니다.
    pub fn from_agent(agent: &AgentRecord) -> Self {
        Self {
            name: agent.name().to_string(),
            final_value: agent.final_value(),
            pnl: agent.pnl(),
            pnl_pct: agent.pnl_pct(),
        }
    }

    /// 손익 방향 화살표.
    pub fn trend_arrow(&self) -> &'static str {
        if self.pnl > Decimal::ZERO {
            "⬆"
        } else if self.pnl < Decimal::ZERO {
            "⬇"
        } else {
            "→"
        }
    }

    /// 대시보드 형식 한 줄 (예: "$9,890 ⬇ $-110").
    pub fn dashboard_line(&self) -> String {
        format!(
            "${} {} ${}",
            self.final_value.to_thousands_string(),
            self.trend_arrow(),
            self.pnl.to_thousands_string()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Holding, INITIAL_CAPITAL};
    use rust_decimal_macros::dec;

    fn summary_for(final_value: Decimal) -> AgentSummary {
        let agent = AgentRecord::new(
            "George",
            final_value,
            vec![Holding::new("VTV", dec!(30))],
            INITIAL_CAPITAL,
        );
        AgentSummary::from_agent(&agent)
    }

    #[test]
    fn test_dashboard_line_loss() {
        assert_eq!(summary_for(dec!(9890)).dashboard_line(), "$9,890 ⬇ $-110");
    }

    #[test]
    fn test_dashboard_line_gain() {
        assert_eq!(summary_for(dec!(12500)).dashboard_line(), "$12,500 ⬆ $2,500");
    }

    #[test]
    fn test_dashboard_line_large_loss() {
        assert_eq!(summary_for(dec!(8765.4)).dashboard_line(), "$8,765 ⬇ $-1,235");
    }

    #[test]
    fn test_dashboard_line_flat() {
        let summary = summary_for(dec!(10000));
        assert_eq!(summary.trend_arrow(), "→");
        assert_eq!(summary.pnl_pct, Decimal::ZERO);
    }
}
