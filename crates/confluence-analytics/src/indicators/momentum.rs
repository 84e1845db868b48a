//! 모멘텀 지표 (Momentum Indicators).
//!
//! RSI (Relative Strength Index)를 제공합니다.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::{IndicatorError, IndicatorResult};

/// RSI 파라미터.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RsiParams {
    /// RSI 기간 (기본: 14).
    pub period: usize,
}

impl Default for RsiParams {
    fn default() -> Self {
        Self { period: 14 }
    }
}

/// 모멘텀 지표 계산기.
#[derive(Debug, Default)]
pub struct MomentumCalculator;

impl MomentumCalculator {
    /// 새로운 모멘텀 계산기 생성.
    pub fn new() -> Self {
        Self
    }

    /// RSI (Relative Strength Index) 계산.
    ///
    /// RSI = 100 - (100 / (1 + RS)), RS = 평균 상승폭 / 평균 하락폭.
    ///
    /// 초기 평균은 처음 `period`개 변화분의 단순 평균으로 시드하고,
    /// 이후에는 Wilder 평활 `avg = (avg × (period-1) + x) / period`를
    /// 적용합니다. 평균 하락폭이 0이면 (단조 비하락 시계열) 100을
    /// 반환합니다.
    ///
    /// # 인자
    /// * `prices` - 가격 데이터 (종가)
    /// * `params` - RSI 파라미터
    ///
    /// # 반환
    /// 최신 시점의 RSI 값 (0-100)
    pub fn rsi(&self, prices: &[Decimal], params: RsiParams) -> IndicatorResult<Decimal> {
        let period = params.period;

        if period == 0 {
            return Err(IndicatorError::InvalidParameter(
                "기간은 0보다 커야 합니다".to_string(),
            ));
        }

        if prices.len() < period + 1 {
            return Err(IndicatorError::InsufficientData {
                required: period + 1,
                provided: prices.len(),
            });
        }

        // 기간별 가격 변화
        let changes: Vec<Decimal> = prices.windows(2).map(|w| w[1] - w[0]).collect();

        let period_decimal = Decimal::from(period);
        let prev_weight = period_decimal - Decimal::ONE;

        // 초기 평균: 처음 period개 변화분의 단순 평균
        let mut avg_gain = Decimal::ZERO;
        let mut avg_loss = Decimal::ZERO;
        for change in &changes[..period] {
            if *change > Decimal::ZERO {
                avg_gain += *change;
            } else {
                avg_loss += change.abs();
            }
        }
        avg_gain /= period_decimal;
        avg_loss /= period_decimal;

        // Wilder 평활
        for change in &changes[period..] {
            if *change > Decimal::ZERO {
                avg_gain = (avg_gain * prev_weight + *change) / period_decimal;
                avg_loss = (avg_loss * prev_weight) / period_decimal;
            } else {
                avg_gain = (avg_gain * prev_weight) / period_decimal;
                avg_loss = (avg_loss * prev_weight + change.abs()) / period_decimal;
            }
        }

        if avg_loss == Decimal::ZERO {
            return Ok(dec!(100));
        }

        let rs = avg_gain / avg_loss;
        Ok(dec!(100) - dec!(100) / (Decimal::ONE + rs))
    }
}
