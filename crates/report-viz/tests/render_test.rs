//! 차트 화면 렌더링 테스트
//!
//! TestBackend 버퍼에 제목, 주석, 패널이 그려지는지 검증

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

use report_core::{AgentDataset, HoldingsGrid, ReportFigures, StartFigure};
use report_viz::event::handle_key_event;
use report_viz::ui::{draw_holdings_grid, draw_ui};
use report_viz::App;

fn test_app(start: StartFigure) -> App {
    let dataset = AgentDataset::builtin();
    let figures = ReportFigures::from_dataset(&dataset).unwrap();
    App::new(figures, dataset.summaries(), start)
}

/// 버퍼 내용을 줄 단위 문자열로 변환
fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;

    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_sized(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| draw_ui(frame, app)).unwrap();
    buffer_text(&terminal)
}

fn render(app: &App) -> String {
    render_sized(app, 140, 40)
}

#[test]
fn test_value_chart_render() {
    let app = test_app(StartFigure::Values);
    let screen = render(&app);

    assert!(screen.contains("Final Portfolio Value per Agent"));
    assert!(screen.contains("Final Portfolio Value ($)"));

    for (name, value, pnl) in [
        ("Warren", "9,769", "(-231)"),
        ("George", "9,890", "(-110)"),
        ("Ray", "9,854", "(-146)"),
        ("Cathie", "9,580", "(-420)"),
    ] {
        assert!(screen.contains(name), "missing {name}");
        assert!(screen.contains(value), "missing {value}");
        assert!(screen.contains(pnl), "missing {pnl}");
    }
}

#[test]
fn test_annotations_in_dataset_order() {
    let app = test_app(StartFigure::Values);
    let screen = render(&app);

    let values_row = screen
        .lines()
        .find(|line| line.contains("9,769"))
        .expect("annotation row");

    let positions: Vec<usize> = ["9,769", "9,890", "9,854", "9,580"]
        .iter()
        .map(|v| values_row.find(v).expect("value on annotation row"))
        .collect();

    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_holdings_grid_render_after_switch() {
    let mut app = test_app(StartFigure::Values);
    handle_key_event(&mut app, KeyEvent::new(KeyCode::Char('2'), KeyModifiers::NONE));

    let screen = render(&app);

    assert!(screen.contains("Holdings per Agent"));
    assert!(screen.contains("Quantity"));
    for name in ["Warren", "George", "Ray", "Cathie"] {
        assert!(screen.contains(&format!(" {name} ")), "missing panel {name}");
    }
    for symbol in ["BRK.B", "EIDO", "BITO", "XLP"] {
        assert!(screen.contains(symbol), "missing symbol {symbol}");
    }
}

#[test]
fn test_footer_shows_dashboard_summary() {
    let app = test_app(StartFigure::Holdings);
    let screen = render(&app);

    assert!(screen.contains("$9,580"));
    assert!(screen.contains("$-420"));
    assert!(screen.contains("[q/Esc] Close"));
}

#[test]
fn test_holdings_grid_shows_every_symbol_at_80_columns() {
    let app = test_app(StartFigure::Holdings);
    let screen = render_sized(&app, 80, 24);

    let dataset = AgentDataset::builtin();
    let symbols: Vec<&str> = dataset
        .agents()
        .iter()
        .flat_map(|agent| agent.holdings().iter().map(|h| h.symbol.as_str()))
        .collect();
    assert_eq!(symbols.len(), 26);

    for symbol in symbols {
        assert!(screen.contains(symbol), "missing symbol {symbol}");
    }
}

#[test]
fn test_footer_fits_80_columns() {
    let app = test_app(StartFigure::Values);
    let screen = render_sized(&app, 80, 24);

    for (name, value, pnl) in [
        ("Warren", "$9,769", "$-231"),
        ("George", "$9,890", "$-110"),
        ("Ray", "$9,854", "$-146"),
        ("Cathie", "$9,580", "$-420"),
    ] {
        assert!(screen.contains(&format!("{name} {value}")), "missing {name}");
        assert!(screen.contains(pnl), "missing {pnl}");
    }
    assert!(screen.contains("[q/Esc] Close"));
}

#[test]
fn test_grid_with_empty_cell_renders() {
    let dataset = AgentDataset::builtin();
    let figures = ReportFigures::from_dataset(&dataset).unwrap();
    let mut grid: HoldingsGrid = figures.holdings_grid;
    grid.panels.truncate(3);

    let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
    terminal
        .draw(|frame| draw_holdings_grid(frame, frame.area(), &grid))
        .unwrap();
    let screen = buffer_text(&terminal);

    assert!(screen.contains("Ray"));
    assert!(!screen.contains("Cathie"));
}
