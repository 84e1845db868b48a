//! 변동성 지표 (Volatility Indicators).
//!
//! ATR (Average True Range)과 가격 대비 ATR 퍼센트를 제공합니다.

use confluence_core::{Percentage, Price};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::{IndicatorError, IndicatorResult};

/// ATR 파라미터.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AtrParams {
    /// ATR 기간 (기본: 14).
    pub period: usize,
}

impl Default for AtrParams {
    fn default() -> Self {
        Self { period: 14 }
    }
}

/// 변동성 지표 계산기.
#[derive(Debug, Default)]
pub struct VolatilityIndicators;

impl VolatilityIndicators {
    /// 새로운 변동성 지표 계산기 생성.
    pub fn new() -> Self {
        Self
    }

    /// ATR (Average True Range)의 최신 값 계산.
    ///
    /// True Range = max(고가 - 저가, |고가 - 전일종가|, |저가 - 전일종가|).
    /// 첫 ATR은 처음 `period`개 TR의 단순 평균으로 시드하고, 이후에는
    /// Wilder 평활 `atr = (atr × (period-1) + tr) / period`를 적용합니다.
    /// TR은 전일 종가가 필요하므로 두 번째 캔들부터 계산됩니다.
    ///
    /// # 인자
    /// * `high` - 고가 데이터
    /// * `low` - 저가 데이터
    /// * `close` - 종가 데이터
    /// * `params` - ATR 파라미터
    ///
    /// # 반환
    /// 최신 시점의 ATR 값
    pub fn atr(
        &self,
        high: &[Decimal],
        low: &[Decimal],
        close: &[Decimal],
        params: AtrParams,
    ) -> IndicatorResult<Decimal> {
        let len = high.len().min(low.len()).min(close.len());
        let period = params.period;

        if period == 0 {
            return Err(IndicatorError::InvalidParameter(
                "기간은 0보다 커야 합니다".to_string(),
            ));
        }

        if len < period + 1 {
            return Err(IndicatorError::InsufficientData {
                required: period + 1,
                provided: len,
            });
        }

        // True Range 계산 (전일 종가 필요)
        let mut true_ranges = Vec::with_capacity(len - 1);
        for i in 1..len {
            let hl = high[i] - low[i];
            let hc = (high[i] - close[i - 1]).abs();
            let lc = (low[i] - close[i - 1]).abs();
            true_ranges.push(hl.max(hc).max(lc));
        }

        let period_decimal = Decimal::from(period);
        let prev_weight = period_decimal - Decimal::ONE;

        // 시드: 처음 period개 TR의 단순 평균
        let mut atr: Decimal =
            true_ranges[..period].iter().sum::<Decimal>() / period_decimal;

        // Wilder 평활
        for tr in &true_ranges[period..] {
            atr = (atr * prev_weight + *tr) / period_decimal;
        }

        Ok(atr)
    }
}

/// ATR 퍼센트 계산 (ATR / 현재가 × 100).
///
/// 가격 대비 변동성을 측정합니다. 현재가가 0이면 비율이 정의되지
/// 않으므로 `None`을 반환합니다.
pub fn atr_percent(atr: Price, price: Price) -> Option<Percentage> {
    if price == Decimal::ZERO {
        return None;
    }
    Some(atr / price * dec!(100))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atr_flat_series_is_zero() {
        let volatility = VolatilityIndicators::new();
        let flat = vec![dec!(100); 30];

        let atr = volatility
            .atr(&flat, &flat, &flat, AtrParams::default())
            .unwrap();
        assert_eq!(atr, Decimal::ZERO);
    }

    #[test]
    fn test_atr_constant_range() {
        let volatility = VolatilityIndicators::new();
        // 매 캔들 고가-저가 2, 종가 중앙: TR은 항상 2
        let high: Vec<Decimal> = (0..30).map(|_| dec!(102)).collect();
        let low: Vec<Decimal> = (0..30).map(|_| dec!(100)).collect();
        let close: Vec<Decimal> = (0..30).map(|_| dec!(101)).collect();

        let atr = volatility
            .atr(&high, &low, &close, AtrParams::default())
            .unwrap();
        assert!((atr - dec!(2)).abs() < dec!(0.0000001));
    }

    #[test]
    fn test_atr_uses_gap_to_previous_close() {
        let volatility = VolatilityIndicators::new();
        // 갭 상승: |고가 - 전일종가|가 당일 범위보다 큼
        let high = vec![dec!(10), dec!(20)];
        let low = vec![dec!(9), dec!(19)];
        let close = vec![dec!(10), dec!(20)];

        let atr = volatility
            .atr(&high, &low, &close, AtrParams { period: 1 })
            .unwrap();
        // TR = max(1, |20-10|, |19-10|) = 10
        assert_eq!(atr, dec!(10));
    }

    #[test]
    fn test_atr_insufficient_data() {
        let volatility = VolatilityIndicators::new();
        let prices = vec![dec!(100); 10];

        let result = volatility.atr(&prices, &prices, &prices, AtrParams::default());
        assert!(matches!(
            result,
            Err(IndicatorError::InsufficientData {
                required: 15,
                provided: 10
            })
        ));
    }

    #[test]
    fn test_atr_percent() {
        assert_eq!(atr_percent(dec!(5), dec!(100)), Some(dec!(5)));
        assert_eq!(atr_percent(dec!(5), Decimal::ZERO), None);
        assert_eq!(atr_percent(Decimal::ZERO, dec!(100)), Some(Decimal::ZERO));
    }
}
