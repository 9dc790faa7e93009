//! 최종 포트폴리오 가치 비교 차트.

use tracing::debug;

use super::bar::{BarChartSpec, BarPoint};
use crate::domain::AgentDataset;
use crate::types::{Amount, DecimalExt};

/// 차트 제목.
pub const VALUE_CHART_TITLE: &str = "Final Portfolio Value per Agent";

/// Y축 레이블.
pub const VALUE_CHART_Y_LABEL: &str = "Final Portfolio Value ($)";

/// 막대 주석 문자열 (예: "9,769\n(-231)").
pub fn bar_annotation(final_value: Amount, pnl: Amount) -> String {
    format!(
        "{}\n({})",
        final_value.to_thousands_string(),
        pnl.to_signed_string()
    )
}

/// 에이전트별 최종 가치 막대 차트를 생성합니다.
///
/// 막대 순서는 데이터셋 순서를 따르며 값으로 정렬하지 않습니다.
pub fn build_value_chart(dataset: &AgentDataset) -> BarChartSpec {
    let mut chart = BarChartSpec::new(VALUE_CHART_TITLE, VALUE_CHART_Y_LABEL);

    for agent in dataset.agents() {
        chart.push(BarPoint::with_annotation(
            agent.name(),
            agent.final_value(),
            bar_annotation(agent.final_value(), agent.pnl()),
        ));
    }

    debug!(bars = chart.len(), "Value chart built");
    chart
}
