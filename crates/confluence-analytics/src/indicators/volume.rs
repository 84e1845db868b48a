//! 거래량 지표 (Volume Indicators).
//!
//! VWAP (Volume Weighted Average Price)를 제공합니다.

use confluence_core::{Candle, Price};
use rust_decimal::Decimal;

/// 거래량 지표 계산기.
#[derive(Debug, Default)]
pub struct VolumeIndicators;

impl VolumeIndicators {
    /// 새로운 거래량 지표 계산기 생성.
    pub fn new() -> Self {
        Self
    }

    /// VWAP (Volume Weighted Average Price) 계산.
    ///
    /// 시계열 전체에 대해 Σ(대표가격 × 거래량) / Σ(거래량)을 구합니다.
    /// 대표가격 = (고가 + 저가 + 종가) / 3. 누적 거래량이 0이면 평균이
    /// 정의되지 않으므로 `None`을 반환합니다 — 이 부재는 히스토리
    /// 부족이 아니라 데이터 성질에 따른 것입니다.
    pub fn vwap(&self, candles: &[Candle]) -> Option<Price> {
        let mut cumulative_volume = Decimal::ZERO;
        let mut cumulative_volume_price = Decimal::ZERO;

        for candle in candles {
            cumulative_volume_price += candle.typical_price() * candle.volume;
            cumulative_volume += candle.volume;
        }

        if cumulative_volume > Decimal::ZERO {
            Some(cumulative_volume_price / cumulative_volume)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn candle(price: Decimal, volume: Decimal) -> Candle {
        Candle::new(0, price, price, price, price, volume)
    }

    #[test]
    fn test_vwap_weights_by_volume() {
        let volume_indicators = VolumeIndicators::new();
        let candles = vec![candle(dec!(100), dec!(1)), candle(dec!(200), dec!(3))];

        // (100×1 + 200×3) / 4 = 175
        let vwap = volume_indicators.vwap(&candles).unwrap();
        assert_eq!(vwap, dec!(175));
    }

    #[test]
    fn test_vwap_zero_volume_is_absent() {
        let volume_indicators = VolumeIndicators::new();
        let candles = vec![candle(dec!(100), Decimal::ZERO)];

        assert_eq!(volume_indicators.vwap(&candles), None);
    }

    #[test]
    fn test_vwap_uses_typical_price() {
        let volume_indicators = VolumeIndicators::new();
        let candles = vec![Candle::new(0, dec!(10), dec!(12), dec!(8), dec!(10), dec!(2))];

        // 대표가격 = (12 + 8 + 10) / 3 = 10
        assert_eq!(volume_indicators.vwap(&candles), Some(dec!(10)));
    }
}
