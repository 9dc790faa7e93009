//! 전체 화면 레이아웃.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Tabs},
};

use super::holdings_grid::draw_holdings_grid;
use super::value_chart::draw_value_chart;
use crate::app::{App, FigureTab};

const HELP_TEXT: &str = "[1-2] Figure  [Tab/←→] Switch  [q/Esc] Close";

/// 요약 한 줄에 들어가는 에이전트 수. 80칸 화면 기준.
const SUMMARIES_PER_ROW: usize = 2;

/// 탭 바, 현재 차트, 하단 요약 줄을 그립니다.
pub fn draw_ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 탭 바
            Constraint::Min(10),   // 차트
            Constraint::Length(footer_height(app)), // 요약 + 도움말
        ])
        .split(frame.area());

    draw_tab_bar(frame, chunks[0], app);

    match app.current_tab {
        FigureTab::Values => draw_value_chart(frame, chunks[1], &app.figures.value_chart),
        FigureTab::Holdings => draw_holdings_grid(frame, chunks[1], &app.figures.holdings_grid),
    }

    draw_footer(frame, chunks[2], app);
}

fn draw_tab_bar(frame: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = FigureTab::all()
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!(" {} {} ", i + 1, tab.name())))
        .collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(" Agent Results "))
        .select(app.current_tab.index())
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .divider("|");

    frame.render_widget(tabs, area);
}

/// 요약 줄들을 만듭니다. 한 줄에 [`SUMMARIES_PER_ROW`]명씩.
fn summary_rows(app: &App) -> Vec<String> {
    app.summaries
        .chunks(SUMMARIES_PER_ROW)
        .map(|row| {
            row.iter()
                .map(|s| format!("{} {}", s.name, s.dashboard_line()))
                .collect::<Vec<_>>()
                .join("   ")
        })
        .collect()
}

/// 상단 테두리 + 요약 줄 + 도움말 줄
fn footer_height(app: &App) -> u16 {
    let rows = app.summaries.len().div_ceil(SUMMARIES_PER_ROW);
    u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(2)
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = summary_rows(app).into_iter().map(Line::from).collect();
    lines.push(Line::from(HELP_TEXT).style(Style::default().fg(Color::DarkGray)));

    let footer = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));

    frame.render_widget(footer, area);
}
