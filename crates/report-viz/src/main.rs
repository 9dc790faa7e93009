//! 시뮬레이션 에이전트 결과 리포트.
//!
//! Warren, George, Ray, Cathie 네 에이전트의 최종 포트폴리오 가치(손익 주석)와
//! 에이전트별 보유 종목을 터미널 차트로 표시합니다.
//!
//! ```bash
//! results-viz
//! # 보유 종목 차트부터 표시
//! REPORT__DISPLAY__START_FIGURE=holdings results-viz
//! ```

use report_core::{init_logging, AgentDataset, ReportConfig, ReportFigures};
use report_viz::{present, App};
use tracing::info;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = ReportConfig::load_default()?;
    init_logging(config.logging.to_log_config())
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    let dataset = AgentDataset::builtin();
    dataset.log_summaries();

    let figures = ReportFigures::from_dataset(&dataset)?;

    let mut app = App::new(figures, dataset.summaries(), config.display.start_figure);
    present(&mut app, config.display.tick_rate())?;

    info!("Report closed");
    Ok(())
}
