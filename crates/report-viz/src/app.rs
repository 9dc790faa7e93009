//! 차트 화면 상태 관리.

use report_core::{AgentSummary, ReportFigures, StartFigure};

/// 표시 가능한 차트 탭.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FigureTab {
    /// 최종 포트폴리오 가치 차트
    #[default]
    Values,
    /// 보유 종목 그리드
    Holdings,
}

impl FigureTab {
    /// 모든 탭 (표시 순서).
    pub fn all() -> &'static [FigureTab] {
        &[FigureTab::Values, FigureTab::Holdings]
    }

    /// 탭 이름.
    pub fn name(&self) -> &'static str {
        match self {
            FigureTab::Values => "Final Values",
            FigureTab::Holdings => "Holdings",
        }
    }

    /// 0부터 시작하는 탭 위치.
    pub fn index(&self) -> usize {
        match self {
            FigureTab::Values => 0,
            FigureTab::Holdings => 1,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            FigureTab::Values => FigureTab::Holdings,
            FigureTab::Holdings => FigureTab::Values,
        }
    }

    pub fn previous(&self) -> Self {
        // 탭이 두 개뿐이라 이전/다음이 같음
        self.next()
    }

    /// 번호(1부터)로 탭을 찾습니다. 범위 밖이면 `None`.
    pub fn from_num(num: u8) -> Option<Self> {
        match num {
            1 => Some(FigureTab::Values),
            2 => Some(FigureTab::Holdings),
            _ => None,
        }
    }
}

impl From<StartFigure> for FigureTab {
    fn from(start: StartFigure) -> Self {
        match start {
            StartFigure::Values => FigureTab::Values,
            StartFigure::Holdings => FigureTab::Holdings,
        }
    }
}

/// 화면 상태.
pub struct App {
    /// 표시할 두 차트
    pub figures: ReportFigures,
    /// 하단 요약 줄에 표시할 에이전트 요약
    pub summaries: Vec<AgentSummary>,
    /// 현재 탭
    pub current_tab: FigureTab,
    /// 종료 요청 여부
    pub should_quit: bool,
}

impl App {
    pub fn new(figures: ReportFigures, summaries: Vec<AgentSummary>, start: StartFigure) -> Self {
        Self {
            figures,
            summaries,
            current_tab: start.into(),
            should_quit: false,
        }
    }

    pub fn next_tab(&mut self) {
        self.current_tab = self.current_tab.next();
    }

    pub fn previous_tab(&mut self) {
        self.current_tab = self.current_tab.previous();
    }

    /// 번호로 탭을 이동합니다. 없는 번호는 무시합니다.
    pub fn goto_tab(&mut self, num: u8) {
        if let Some(tab) = FigureTab::from_num(num) {
            self.current_tab = tab;
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
