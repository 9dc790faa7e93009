//! 에이전트 결과 데이터셋.
//!
//! 대시보드에서 옮겨 적은 네 에이전트의 최종 결과를 상수로 보관합니다.
//! 데이터셋은 생성 시점에 손익이 한 번 계산되고 이후에는 읽기 전용입니다.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use tracing::info;

use super::agent::{AgentRecord, Holding};
use super::calculations::INITIAL_CAPITAL;
use super::summary::AgentSummary;
use crate::error::{ReportError, ReportResult};
use crate::types::Amount;

/// 종목 목록 상수의 한 항목 (심볼, 수량).
type HoldingSpec = (&'static str, Decimal);

/// 에이전트 상수 (이름, 최종 가치, 보유 종목).
type AgentSpec = (&'static str, Decimal, &'static [HoldingSpec]);

const AGENTS: &[AgentSpec] = &[
    (
        "Warren",
        dec!(9769),
        &[
            ("LI", dec!(440)),
            ("HBAN", dec!(50)),
            ("BRK.B", dec!(0)),
            ("AAPL", dec!(2)),
            ("JNJ", dec!(1)),
            ("PG", dec!(0)),
            ("KO", dec!(2)),
        ],
    ),
    (
        "George",
        dec!(9890),
        &[
            ("VTV", dec!(30)),
            ("HYG", dec!(8)),
            ("TLT", dec!(10)),
            ("XLK", dec!(5)),
            ("XLF", dec!(3)),
            ("XLP", dec!(4)),
        ],
    ),
    (
        "Ray",
        dec!(9854),
        &[
            ("EEM", dec!(40)),
            ("VWO", dec!(40)),
            ("VHT", dec!(5)),
            ("EIDO", dec!(45)),
            ("IEMG", dec!(10)),
            ("SCHE", dec!(10)),
            ("XBI", dec!(3)),
        ],
    ),
    (
        "Cathie",
        dec!(9580),
        &[
            ("BITO", dec!(150)),
            ("SOL", dec!(350)),
            ("XRP", dec!(150)),
            ("ETHE", dec!(55)),
            ("SATO", dec!(25)),
            ("DAPP", dec!(75)),
        ],
    ),
];

/// 손익이 계산된 에이전트 목록 (입력 순서 유지).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentDataset {
    initial_capital: Amount,
    agents: Vec<AgentRecord>,
}

impl AgentDataset {
    /// 내장 상수로 데이터셋을 생성합니다.
    pub fn builtin() -> Self {
        let agents = AGENTS
            .iter()
            .map(|(name, final_value, holdings)| {
                let holdings = holdings
                    .iter()
                    .map(|(symbol, quantity)| Holding::new(*symbol, *quantity))
                    .collect();
                AgentRecord::new(*name, *final_value, holdings, INITIAL_CAPITAL)
            })
            .collect();

        let dataset = Self {
            initial_capital: INITIAL_CAPITAL,
            agents,
        };
        info!(
            agents = dataset.len(),
            initial_capital = %dataset.initial_capital,
            "Agent dataset loaded"
        );
        dataset
    }

    /// 이미 만들어진 레코드로 데이터셋을 구성합니다.
    ///
    /// 모든 레코드는 [`INITIAL_CAPITAL`]을 기준으로 손익이 계산되어 있어야 합니다.
    ///
    /// # Errors
    ///
    /// 다른 초기 자본으로 만든 레코드가 있으면 [`ReportError::Dataset`]을 반환합니다.
    pub fn from_agents(agents: Vec<AgentRecord>) -> ReportResult<Self> {
        if let Some(agent) = agents
            .iter()
            .find(|a| a.initial_capital() != INITIAL_CAPITAL)
        {
            return Err(ReportError::Dataset(format!(
                "agent {} uses initial capital {}, expected {}",
                agent.name(),
                agent.initial_capital(),
                INITIAL_CAPITAL
            )));
        }

        Ok(Self {
            initial_capital: INITIAL_CAPITAL,
            agents,
        })
    }

    pub fn initial_capital(&self) -> Amount {
        self.initial_capital
    }

    pub fn agents(&self) -> &[AgentRecord] {
        &self.agents
    }

    /// 이름으로 에이전트를 찾습니다.
    pub fn get(&self, name: &str) -> Option<&AgentRecord> {
        self.agents.iter().find(|a| a.name() == name)
    }

    /// 에이전트 이름 (입력 순서).
    pub fn names(&self) -> Vec<&str> {
        self.agents.iter().map(|a| a.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// 에이전트별 요약을 생성합니다.
    pub fn summaries(&self) -> Vec<AgentSummary> {
        self.agents.iter().map(AgentSummary::from_agent).collect()
    }

    /// 에이전트별 요약을 info 레벨로 기록합니다.
    pub fn log_summaries(&self) {
        for summary in self.summaries() {
            info!(
                agent = %summary.name,
                final_value = %summary.final_value,
                pnl = %summary.pnl,
                pnl_pct = %summary.pnl_pct,
                "{}",
                summary.dashboard_line()
            );
        }
    }
}
