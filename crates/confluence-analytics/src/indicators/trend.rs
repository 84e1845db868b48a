//! 추세 지표 (Trend Indicators).
//!
//! 이동평균 기반의 추세 지표들을 제공합니다.
//! - EMA (Exponential Moving Average)
//! - MACD (Moving Average Convergence Divergence)

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::{IndicatorError, IndicatorResult};

/// EMA 파라미터.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EmaParams {
    /// 이동평균 기간.
    pub period: usize,
}

impl Default for EmaParams {
    fn default() -> Self {
        Self { period: 20 }
    }
}

/// MACD 파라미터.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MacdParams {
    /// 단기 EMA 기간 (기본: 12).
    pub fast_period: usize,
    /// 장기 EMA 기간 (기본: 26).
    pub slow_period: usize,
    /// 시그널 라인 기간 (기본: 9).
    pub signal_period: usize,
}

impl Default for MacdParams {
    fn default() -> Self {
        Self {
            fast_period: 12,
            slow_period: 26,
            signal_period: 9,
        }
    }
}

/// MACD 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdResult {
    /// MACD 라인 (단기 EMA - 장기 EMA).
    pub line: Decimal,
    /// 시그널 라인 (MACD 히스토리의 EMA).
    pub signal: Decimal,
    /// 히스토그램 (MACD 라인 - 시그널 라인).
    pub histogram: Decimal,
}

/// 추세 지표 계산기.
#[derive(Debug, Default)]
pub struct TrendIndicators;

impl TrendIndicators {
    /// 새로운 추세 지표 계산기 생성.
    pub fn new() -> Self {
        Self
    }

    /// 지수 이동평균 (EMA)의 최신 값 계산.
    ///
    /// EMA = (현재가 × k) + (이전 EMA × (1 - k)), k = 2 / (period + 1).
    /// 첫 EMA는 처음 `period`개 가격의 단순 평균으로 시드합니다.
    ///
    /// # 인자
    /// * `prices` - 가격 데이터
    /// * `params` - EMA 파라미터
    ///
    /// # 반환
    /// 최신 시점의 EMA 값
    pub fn ema(&self, prices: &[Decimal], params: EmaParams) -> IndicatorResult<Decimal> {
        let period = params.period;

        if period == 0 {
            return Err(IndicatorError::InvalidParameter(
                "기간은 0보다 커야 합니다".to_string(),
            ));
        }

        if prices.len() < period {
            return Err(IndicatorError::InsufficientData {
                required: period,
                provided: prices.len(),
            });
        }

        let series = self.ema_series(prices, period);
        series
            .last()
            .copied()
            .ok_or_else(|| IndicatorError::CalculationError("EMA 시계열이 비어 있습니다".to_string()))
    }

    /// EMA 값 전체 시퀀스 계산 (시드 포함).
    ///
    /// MACD 히스토리/시그널 계산에 사용됩니다. 길이 검사를 하지
    /// 않습니다: 입력이 `period`보다 짧으면 시드는 가용 값의 합을
    /// `period`로 나눈 값이 되며, 결과는 시드 하나뿐입니다.
    pub fn ema_series(&self, prices: &[Decimal], period: usize) -> Vec<Decimal> {
        if prices.is_empty() || period == 0 {
            return Vec::new();
        }

        let multiplier = dec!(2) / Decimal::from(period + 1);
        let seed_len = period.min(prices.len());
        let seed: Decimal =
            prices[..seed_len].iter().sum::<Decimal>() / Decimal::from(period);

        let mut series = Vec::with_capacity(prices.len().saturating_sub(period) + 1);
        series.push(seed);

        let mut ema = seed;
        for price in prices.iter().skip(period) {
            ema = *price * multiplier + ema * (Decimal::ONE - multiplier);
            series.push(ema);
        }

        series
    }

    /// MACD 계산.
    ///
    /// MACD 라인 = 단기 EMA 최신값 - 장기 EMA 최신값.
    /// 히스토리는 두 EMA 시퀀스를 각 시퀀스의 시작부터 같은 인덱스끼리
    /// 빼서 만듭니다 (타임스탬프 정렬이 아니라 리스트 위치 정렬 —
    /// 짧은 쪽 길이로 잘립니다). 시그널 = 히스토리 EMA의 최신값,
    /// 히스토그램 = 라인 - 시그널.
    ///
    /// # 인자
    /// * `prices` - 가격 데이터
    /// * `params` - MACD 파라미터
    ///
    /// # 반환
    /// 최신 시점의 MACD 라인, 시그널, 히스토그램
    pub fn macd(&self, prices: &[Decimal], params: MacdParams) -> IndicatorResult<MacdResult> {
        if prices.len() < params.slow_period {
            return Err(IndicatorError::InsufficientData {
                required: params.slow_period,
                provided: prices.len(),
            });
        }

        let fast_series = self.ema_series(prices, params.fast_period);
        let slow_series = self.ema_series(prices, params.slow_period);

        let line = match (fast_series.last(), slow_series.last()) {
            (Some(fast), Some(slow)) => *fast - *slow,
            _ => {
                return Err(IndicatorError::CalculationError(
                    "EMA 시계열이 비어 있습니다".to_string(),
                ))
            }
        };

        let overlap = fast_series.len().min(slow_series.len());
        let history: Vec<Decimal> = (0..overlap)
            .map(|i| fast_series[i] - slow_series[i])
            .collect();

        let signal_series = self.ema_series(&history, params.signal_period);
        let signal = signal_series.last().copied().ok_or_else(|| {
            IndicatorError::CalculationError("시그널 시계열이 비어 있습니다".to_string())
        })?;

        Ok(MacdResult {
            line,
            signal,
            histogram: line - signal,
        })
    }
}
