//! 막대 차트 데이터 구조.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 막대 하나.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarPoint {
    /// X축 눈금 레이블
    pub label: String,

    /// 막대 높이 (Y축 값)
    pub value: Decimal,

    /// 막대 위에 표시할 주석 (선택적)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
}

impl BarPoint {
    /// 새로운 막대를 생성합니다.
    pub fn new(label: impl Into<String>, value: Decimal) -> Self {
        Self {
            label: label.into(),
            value,
            annotation: None,
        }
    }

    /// 주석이 있는 막대를 생성합니다.
    pub fn with_annotation(
        label: impl Into<String>,
        value: Decimal,
        annotation: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            value,
            annotation: Some(annotation.into()),
        }
    }

    /// 렌더러용 정수 높이. 음수와 변환 불가 값은 0입니다.
    pub fn height(&self) -> u64 {
        self.value.round().to_u64().unwrap_or(0)
    }
}

/// 단일 막대 차트.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartSpec {
    /// 차트 제목
    pub title: String,

    /// Y축 레이블
    pub y_label: String,

    /// X축 눈금 레이블 회전 각도 (도)
    pub label_rotation_deg: u16,

    /// 막대 목록 (표시 순서)
    pub bars: Vec<BarPoint>,
}

impl BarChartSpec {
    /// 빈 막대 차트를 생성합니다.
    pub fn new(title: impl Into<String>, y_label: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            y_label: y_label.into(),
            label_rotation_deg: 0,
            bars: Vec::new(),
        }
    }

    /// 눈금 레이블 회전 각도를 설정합니다.
    pub fn with_label_rotation(mut self, degrees: u16) -> Self {
        self.label_rotation_deg = degrees;
        self
    }

    /// 막대를 추가합니다.
    pub fn push(&mut self, bar: BarPoint) {
        self.bars.push(bar);
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// 가장 높은 막대의 높이 (빈 차트는 0).
    pub fn max_height(&self) -> u64 {
        self.bars.iter().map(BarPoint::height).max().unwrap_or(0)
    }

    /// 가장 긴 X축 레이블의 문자 수.
    pub fn longest_label(&self) -> usize {
        self.bars
            .iter()
            .map(|b| b.label.chars().count())
            .max()
            .unwrap_or(0)
    }
}
