//! 에이전트 결과 리포트의 터미널 표시 계층.
//!
//! `report-core`가 만든 차트 모델을 ratatui로 그리고, 사용자가 화면을 닫을
//! 때까지 대기합니다.

pub mod app;
pub mod event;
pub mod terminal;
pub mod ui;

pub use app::{App, FigureTab};
pub use terminal::present;
