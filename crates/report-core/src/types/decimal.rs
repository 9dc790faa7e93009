//! 금액/수량 계산과 표시를 위한 Decimal 유틸리티.
//!
//! 차트 주석과 요약 문자열에 쓰이는 숫자 포맷 규칙을 한 곳에 모아둡니다.

use rust_decimal::{Decimal, RoundingStrategy};

/// 통화 금액 타입 (달러, 소수점 없음).
pub type Amount = Decimal;

/// 보유 수량 타입.
pub type Quantity = Decimal;

/// 퍼센트 타입 (4.2 = 4.2%).
pub type Percentage = Decimal;

/// 표시용 Decimal 확장 트레이트.
pub trait DecimalExt {
    /// 정수로 반올림한 뒤 천 단위 구분자를 붙입니다 (예: "9,769").
    fn to_thousands_string(&self) -> String;

    /// 정수로 반올림한 뒤 부호를 항상 붙입니다 (예: "-231", "+150", "+0").
    fn to_signed_string(&self) -> String;

    /// 정수 자리로 반올림합니다 (banker's rounding).
    fn round_whole(&self) -> Decimal;
}

impl DecimalExt for Decimal {
    fn to_thousands_string(&self) -> String {
        let rounded = self.round_whole();
        let digits = group_thousands(&rounded.abs().to_string());

        if rounded.is_sign_negative() {
            format!("-{}", digits)
        } else {
            digits
        }
    }

    fn to_signed_string(&self) -> String {
        let rounded = self.round_whole();
        let sign = if rounded.is_sign_negative() { '-' } else { '+' };
        format!("{}{}", sign, rounded.abs())
    }

    fn round_whole(&self) -> Decimal {
        self.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
    }
}

/// 숫자 문자열에 세 자리마다 쉼표를 넣습니다.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}
