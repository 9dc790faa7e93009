//! 보유 종목 그리드 그리기.

use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
};

use report_core::{BarChartSpec, HoldingsGrid};

use super::value_chart::fit_bar_width;

const BAR_GAP: u16 = 1;

/// 그리드 전체를 그립니다. 패널이 없는 칸은 빈 테두리로 남깁니다.
pub fn draw_holdings_grid(frame: &mut Frame, area: Rect, grid: &HoldingsGrid) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(format!(" {} ", grid.title)).centered());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = u32::try_from(grid.shape.rows).unwrap_or(1).max(1);
    let cols = u32::try_from(grid.shape.cols).unwrap_or(1).max(1);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints((0..rows).map(|_| Constraint::Ratio(1, rows)))
        .split(inner);

    for (row, row_area) in row_areas.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints((0..cols).map(|_| Constraint::Ratio(1, cols)))
            .split(*row_area);

        for (col, cell) in cells.iter().enumerate() {
            match grid.panel_at(row, col) {
                Some(panel) => draw_panel(frame, *cell, panel),
                None => frame.render_widget(Block::default().borders(Borders::ALL), *cell),
            }
        }
    }
}

/// 패널 너비에 모든 막대가 들어가는 (막대 너비, 간격)을 고릅니다.
///
/// 가장 긴 레이블 너비를 우선 유지하고, 공간이 부족하면 간격을 없앤 뒤
/// 마지막으로 레이블을 자릅니다. 막대는 어떤 경우에도 빠지지 않습니다.
fn panel_bar_layout(area_width: u16, bars: usize, label_width: u16) -> (u16, u16) {
    let n = u16::try_from(bars).unwrap_or(u16::MAX).max(1);
    let label_width = label_width.max(1);
    let needed = |gap: u16| {
        u32::from(n) * u32::from(label_width) + u32::from(gap) * u32::from(n - 1)
    };

    if needed(BAR_GAP) <= u32::from(area_width) {
        (fit_bar_width(area_width, bars, BAR_GAP, label_width), BAR_GAP)
    } else if needed(0) <= u32::from(area_width) {
        (label_width, 0)
    } else {
        (fit_bar_width(area_width, bars, 0, 1), 0)
    }
}

/// 에이전트 한 명의 보유 종목 막대 차트를 그립니다.
///
/// 터미널은 회전된 글자를 그릴 수 없으므로, 레이블 회전이 지정된 패널은
/// 가장 긴 심볼 너비로 막대를 맞춥니다.
fn draw_panel(frame: &mut Frame, area: Rect, panel: &BarChartSpec) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", panel.title))
        .title_bottom(Line::from(format!(" {} ", panel.y_label)).centered());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label_width = if panel.label_rotation_deg > 0 {
        u16::try_from(panel.longest_label()).unwrap_or(u16::MAX)
    } else {
        1
    };
    let (bar_width, bar_gap) = panel_bar_layout(inner.width, panel.len(), label_width);

    let bars: Vec<Bar> = panel
        .bars
        .iter()
        .map(|b| {
            Bar::default()
                .value(b.height())
                .label(Line::from(b.label.clone()))
                .text_value(b.height().to_string())
                .style(Style::default().fg(Color::Green))
                .value_style(Style::default().fg(Color::Black).bg(Color::Green))
        })
        .collect();

    let bar_chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(bar_gap)
        .max(panel.max_height().max(1));

    frame.render_widget(bar_chart, inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_bar_layout_keeps_gap_when_room() {
        // 6 * 4 + 5 = 29 <= 37
        let (width, gap) = panel_bar_layout(37, 6, 4);
        assert_eq!(gap, BAR_GAP);
        assert!(width >= 4);
        assert!(6 * width + 5 * gap <= 37);
    }

    #[test]
    fn test_panel_bar_layout_drops_gap_before_labels() {
        // 간격 포함 7 * 5 + 6 = 41 > 37, 간격 없이 35 <= 37
        assert_eq!(panel_bar_layout(37, 7, 5), (5, 0));
    }

    #[test]
    fn test_panel_bar_layout_never_drops_bars() {
        // 레이블을 잘라서라도 7개 막대를 모두 배치
        let (width, gap) = panel_bar_layout(20, 7, 5);
        assert_eq!(gap, 0);
        assert!(width >= 1);
        assert!(7 * width <= 20);
    }
}
