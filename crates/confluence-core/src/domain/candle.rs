//! OHLCV 캔들 데이터 및 검증된 캔들 시계열.
//!
//! `CandleSeries`는 분석 요청당 한 번 생성되며 이후 불변입니다.
//! 생성 시 타임스탬프가 엄격히 증가하는지 검증합니다. 최소 길이
//! 요구사항(100개)은 시계열 자체가 아니라 분석 진입점이 강제합니다.

use crate::types::{Price, Quantity};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 유효한 분석에 필요한 최소 캔들 수.
pub const MIN_ANALYSIS_LEN: usize = 100;

/// OHLCV 캔들 한 개.
///
/// 업스트림 소스가 `low <= min(open, close)` / `high >= max(open, close)`
/// 를 보장하지 않으므로 엔진은 위반을 수치적으로만 허용합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// 캔들 시작 시간 (밀리초 epoch)
    pub timestamp: i64,
    /// 시가
    pub open: Price,
    /// 고가
    pub high: Price,
    /// 저가
    pub low: Price,
    /// 종가
    pub close: Price,
    /// 거래량
    pub volume: Quantity,
}

impl Candle {
    /// 새 캔들을 생성합니다.
    pub fn new(
        timestamp: i64,
        open: Price,
        high: Price,
        low: Price,
        close: Price,
        volume: Quantity,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// 대표 가격 ((고가 + 저가 + 종가) / 3)을 반환합니다.
    pub fn typical_price(&self) -> Price {
        (self.high + self.low + self.close) / dec!(3)
    }
}

/// 캔들 시계열 검증 오류.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeriesError {
    /// 빈 시계열
    #[error("캔들 시계열이 비어 있습니다")]
    Empty,

    /// 타임스탬프 순서 위반
    #[error("타임스탬프가 엄격히 증가하지 않습니다 (인덱스 {index})")]
    OutOfOrder { index: usize },
}

/// 타임스탬프 오름차순이 보장된 불변 캔들 시계열.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandleSeries {
    candles: Vec<Candle>,
}

impl CandleSeries {
    /// 캔들 벡터에서 시계열을 생성합니다.
    ///
    /// 타임스탬프가 엄격히 증가하지 않으면 `SeriesError`를 반환합니다.
    pub fn new(candles: Vec<Candle>) -> Result<Self, SeriesError> {
        if candles.is_empty() {
            return Err(SeriesError::Empty);
        }

        for i in 1..candles.len() {
            if candles[i].timestamp <= candles[i - 1].timestamp {
                return Err(SeriesError::OutOfOrder { index: i });
            }
        }

        Ok(Self { candles })
    }

    /// 캔들 수를 반환합니다.
    pub fn len(&self) -> usize {
        self.candles.len()
    }

    /// 시계열이 비어 있는지 확인합니다. 생성 규칙상 항상 `false`입니다.
    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    /// 캔들 슬라이스를 반환합니다.
    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    /// 마지막 캔들을 반환합니다.
    pub fn last(&self) -> &Candle {
        // 생성자가 빈 시계열을 거부함
        &self.candles[self.candles.len() - 1]
    }

    /// 최신 종가 (현재가)를 반환합니다.
    pub fn last_close(&self) -> Price {
        self.last().close
    }

    /// 종가 배열을 추출합니다.
    pub fn closes(&self) -> Vec<Decimal> {
        self.candles.iter().map(|c| c.close).collect()
    }

    /// 고가 배열을 추출합니다.
    pub fn highs(&self) -> Vec<Decimal> {
        self.candles.iter().map(|c| c.high).collect()
    }

    /// 저가 배열을 추출합니다.
    pub fn lows(&self) -> Vec<Decimal> {
        self.candles.iter().map(|c| c.low).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candle_at(ts: i64, price: Decimal) -> Candle {
        Candle::new(ts, price, price, price, price, dec!(100))
    }

    #[test]
    fn test_valid_series() {
        let series = CandleSeries::new(vec![
            candle_at(1_000, dec!(100)),
            candle_at(2_000, dec!(101)),
            candle_at(3_000, dec!(102)),
        ])
        .unwrap();

        assert_eq!(series.len(), 3);
        assert_eq!(series.last_close(), dec!(102));
        assert_eq!(series.closes(), vec![dec!(100), dec!(101), dec!(102)]);
    }

    #[test]
    fn test_empty_series_rejected() {
        assert_eq!(CandleSeries::new(vec![]), Err(SeriesError::Empty));
    }

    #[test]
    fn test_out_of_order_rejected() {
        let result = CandleSeries::new(vec![
            candle_at(2_000, dec!(100)),
            candle_at(1_000, dec!(101)),
        ]);
        assert_eq!(result, Err(SeriesError::OutOfOrder { index: 1 }));
    }

    #[test]
    fn test_duplicate_timestamp_rejected() {
        let result = CandleSeries::new(vec![
            candle_at(1_000, dec!(100)),
            candle_at(1_000, dec!(101)),
        ]);
        assert_eq!(result, Err(SeriesError::OutOfOrder { index: 1 }));
    }

    #[test]
    fn test_typical_price() {
        let candle = Candle::new(0, dec!(10), dec!(12), dec!(8), dec!(10), dec!(1));
        assert_eq!(candle.typical_price(), dec!(10));
    }
}
