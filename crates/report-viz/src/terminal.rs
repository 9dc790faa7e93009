//! 대화형 터미널 화면에 차트를 표시합니다.

use std::io::{self, IsTerminal};
use std::time::Duration;

use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::info;

use report_core::{ReportError, ReportResult};

use crate::app::App;
use crate::event::{handle_key_event, poll_event};
use crate::ui::draw_ui;

/// 표시 장치가 대화형인지 확인합니다.
///
/// # Errors
///
/// 대화형이 아니면 [`ReportError::Display`]를 반환합니다.
pub fn ensure_interactive(is_terminal: bool) -> ReportResult<()> {
    if is_terminal {
        Ok(())
    } else {
        Err(ReportError::Display(
            "stdout is not an interactive terminal".to_string(),
        ))
    }
}

/// 두 차트를 표시하고 사용자가 닫을 때까지 대기합니다.
///
/// 그리기 루프가 실패해도 터미널 상태는 복구됩니다.
pub fn present(app: &mut App, tick_rate: Duration) -> ReportResult<()> {
    ensure_interactive(io::stdout().is_terminal())?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(err) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(err.into());
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(err) => {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            return Err(err.into());
        }
    };

    info!("Display opened");
    let result = run_app(&mut terminal, app, tick_rate);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    info!("Display closed");

    result
}

/// 종료 요청이 올 때까지 그리기와 입력 처리를 반복합니다.
pub fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick_rate: Duration,
) -> ReportResult<()> {
    loop {
        terminal.draw(|frame| draw_ui(frame, app))?;

        if let Some(Event::Key(key)) = poll_event(tick_rate)? {
            handle_key_event(app, key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
