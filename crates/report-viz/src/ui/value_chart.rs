//! 최종 가치 비교 차트 그리기.

use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
};

use report_core::BarChartSpec;

/// 막대 사이 간격 (칸).
const BAR_GAP: u16 = 2;

/// 막대 최대 너비 (칸).
const MAX_BAR_WIDTH: u16 = 16;

/// 주석 영역 높이 (값 + 손익 두 줄).
const ANNOTATION_ROWS: u16 = 2;

/// 영역 너비에 막대 `bars`개가 들어가도록 너비를 계산합니다.
///
/// 결과는 `min_width` 이상 [`MAX_BAR_WIDTH`] 이하입니다.
pub fn fit_bar_width(area_width: u16, bars: usize, gap: u16, min_width: u16) -> u16 {
    let max_width = MAX_BAR_WIDTH.max(min_width);
    if bars == 0 {
        return min_width;
    }

    let n = u16::try_from(bars).unwrap_or(u16::MAX);
    let gaps = gap.saturating_mul(n.saturating_sub(1));
    (area_width.saturating_sub(gaps) / n).clamp(min_width, max_width)
}

/// 주석 중 가장 긴 줄의 문자 수.
fn widest_annotation_line(chart: &BarChartSpec) -> u16 {
    let widest = chart
        .bars
        .iter()
        .filter_map(|b| b.annotation.as_deref())
        .flat_map(str::lines)
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(1);
    u16::try_from(widest).unwrap_or(u16::MAX)
}

/// 값 비교 차트를 그립니다.
///
/// 각 막대 위 칸에 두 줄 주석(값, 부호 있는 손익)을 가운데 정렬로 표시합니다.
pub fn draw_value_chart(frame: &mut Frame, area: Rect, chart: &BarChartSpec) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", chart.title))
        .title_bottom(Line::from(format!(" {} ", chart.y_label)).centered());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(ANNOTATION_ROWS), Constraint::Min(3)])
        .split(inner);

    let bar_width = fit_bar_width(
        rows[1].width,
        chart.len(),
        BAR_GAP,
        widest_annotation_line(chart),
    );

    draw_annotations(frame, rows[0], chart, bar_width);

    let bars: Vec<Bar> = chart
        .bars
        .iter()
        .map(|b| {
            Bar::default()
                .value(b.height())
                .label(Line::from(b.label.clone()))
                .text_value(String::new())
                .style(Style::default().fg(Color::Cyan))
        })
        .collect();

    let bar_chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(BAR_GAP)
        .max(chart.max_height().max(1))
        .label_style(Style::default().fg(Color::White));

    frame.render_widget(bar_chart, rows[1]);
}

/// 막대 열과 같은 위치에 주석을 그립니다.
fn draw_annotations(frame: &mut Frame, area: Rect, chart: &BarChartSpec, bar_width: u16) {
    let mut x = area.x;

    for bar in &chart.bars {
        let column = Rect::new(x, area.y, bar_width, area.height).intersection(area);
        if column.width == 0 {
            break;
        }

        if let Some(annotation) = &bar.annotation {
            let paragraph = Paragraph::new(Text::from(annotation.as_str()))
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Yellow));
            frame.render_widget(paragraph, column);
        }

        x = x.saturating_add(bar_width + BAR_GAP);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_bar_width() {
        // (40 - 2*3) / 4 = 8
        assert_eq!(fit_bar_width(40, 4, 2, 3), 8);
        // 넓은 화면은 최대 너비로 제한
        assert_eq!(fit_bar_width(200, 4, 2, 3), MAX_BAR_WIDTH);
        // 좁은 화면은 최소 너비 유지
        assert_eq!(fit_bar_width(10, 4, 2, 6), 6);
        assert_eq!(fit_bar_width(40, 0, 2, 5), 5);
    }
}
