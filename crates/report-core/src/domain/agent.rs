//! 에이전트 레코드 및 보유 종목.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::calculations::{derive_pnl, return_pct};
use crate::types::{Amount, Percentage, Quantity};

/// 종목별 보유 수량.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holding {
    /// 티커 심볼 (예: "AAPL", "BRK.B")
    pub symbol: String,
    /// 보유 수량 (음수 불가)
    pub quantity: Quantity,
}

impl Holding {
    /// 새 보유 종목을 생성합니다. 음수 수량은 0으로 고정됩니다.
    pub fn new(symbol: impl Into<String>, quantity: Quantity) -> Self {
        Self {
            symbol: symbol.into(),
            quantity: quantity.max(Decimal::ZERO),
        }
    }
}

/// 시뮬레이션 에이전트 한 명의 결과.
///
/// 손익 필드는 최종 가치에서만 계산되며 별도로 설정할 수 없습니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentRecord {
    name: String,
    final_value: Amount,
    holdings: Vec<Holding>,
    initial_capital: Amount,
    pnl: Amount,
    pnl_pct: Percentage,
}

impl AgentRecord {
    /// 레코드를 생성하고 손익을 계산합니다.
    ///
    /// 보유 종목은 입력 순서를 유지합니다.
    pub fn new(
        name: impl Into<String>,
        final_value: Amount,
        holdings: Vec<Holding>,
        initial_capital: Amount,
    ) -> Self {
        let pnl = derive_pnl(final_value, initial_capital);
        Self {
            name: name.into(),
            final_value,
            holdings,
            initial_capital,
            pnl,
            pnl_pct: return_pct(pnl, initial_capital),
        }
    }

    /// 최종 가치만 바꾼 새 레코드를 반환합니다 (손익 재계산).
    pub fn with_final_value(&self, final_value: Amount) -> Self {
        Self::new(
            self.name.clone(),
            final_value,
            self.holdings.clone(),
            self.initial_capital,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn final_value(&self) -> Amount {
        self.final_value
    }

    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    pub fn initial_capital(&self) -> Amount {
        self.initial_capital
    }

    /// 손익 (최종 가치 - 초기 자본)
    pub fn pnl(&self) -> Amount {
        self.pnl
    }

    /// 손익률 (%)
    pub fn pnl_pct(&self) -> Percentage {
        self.pnl_pct
    }

    /// 서로 다른 심볼 수.
    pub fn distinct_symbols(&self) -> usize {
        let mut symbols: Vec<&str> = self.holdings.iter().map(|h| h.symbol.as_str()).collect();
        symbols.sort_unstable();
        symbols.dedup();
        symbols.len()
    }
}
