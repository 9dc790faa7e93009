//! 손익 계산 공통 로직.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::{Amount, Percentage};

/// 모든 에이전트가 공유하는 초기 자본.
pub const INITIAL_CAPITAL: Amount = dec!(10_000);

/// 손익 계산 (최종 가치 - 초기 자본).
///
/// # Arguments
///
/// * `final_value` - 최종 포트폴리오 가치
/// * `initial_capital` - 초기 자본
///
/// # Examples
///
/// ```
/// use report_core::domain::derive_pnl;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(derive_pnl(dec!(9580), dec!(10000)), dec!(-420));
/// ```
pub fn derive_pnl(final_value: Amount, initial_capital: Amount) -> Amount {
    final_value - initial_capital
}

/// 수익률 계산 (백분율).
///
/// 기준 자본이 0 이하이면 0을 반환합니다.
///
/// # Examples
///
/// ```
/// use report_core::domain::return_pct;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(return_pct(dec!(-420), dec!(10000)), dec!(-4.2));
/// ```
pub fn return_pct(pnl: Amount, capital: Amount) -> Percentage {
    if capital > Decimal::ZERO {
        (pnl / capital) * dec!(100)
    } else {
        Decimal::ZERO
    }
}
