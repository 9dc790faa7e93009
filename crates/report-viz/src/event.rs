//! 키 입력 처리.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::app::App;

/// 키 입력을 처리합니다.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Windows는 키 release 이벤트도 전달함
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => app.next_tab(),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => app.previous_tab(),
        KeyCode::Char('1') => app.goto_tab(1),
        KeyCode::Char('2') => app.goto_tab(2),
        _ => {}
    }
}

/// `timeout` 동안 이벤트를 기다립니다.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::FigureTab;
    use report_core::{AgentDataset, ReportFigures, StartFigure};

    fn test_app() -> App {
        let dataset = AgentDataset::builtin();
        let figures = ReportFigures::from_dataset(&dataset).unwrap();
        App::new(figures, dataset.summaries(), StartFigure::Values)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        for key in [
            press(KeyCode::Char('q')),
            press(KeyCode::Esc),
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            let mut app = test_app();
            handle_key_event(&mut app, key);
            assert!(app.should_quit, "{:?}", key);
        }
    }

    #[test]
    fn test_plain_c_does_not_quit() {
        let mut app = test_app();
        handle_key_event(&mut app, press(KeyCode::Char('c')));
        assert!(!app.should_quit);
    }

    #[test]
    fn test_navigation_keys() {
        let mut app = test_app();

        handle_key_event(&mut app, press(KeyCode::Char('2')));
        assert_eq!(app.current_tab, FigureTab::Holdings);

        handle_key_event(&mut app, press(KeyCode::Char('1')));
        assert_eq!(app.current_tab, FigureTab::Values);

        handle_key_event(&mut app, press(KeyCode::Tab));
        assert_eq!(app.current_tab, FigureTab::Holdings);

        handle_key_event(&mut app, press(KeyCode::Left));
        assert_eq!(app.current_tab, FigureTab::Values);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = test_app();
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;

        handle_key_event(&mut app, key);
        assert!(!app.should_quit);
    }
}
