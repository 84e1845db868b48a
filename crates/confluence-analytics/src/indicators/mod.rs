//! 기술적 지표 모듈.
//!
//! 스코어링 파이프라인이 사용하는 고정 지표 집합을 제공합니다.
//!
//! # 지원 지표
//!
//! ## 추세 지표 (Trend Indicators)
//! - **EMA**: 지수 이동평균 (Exponential Moving Average)
//! - **MACD**: 이동평균 수렴/확산 (라인/시그널/히스토그램)
//!
//! ## 모멘텀 지표 (Momentum Indicators)
//! - **RSI**: 상대강도지수 (Wilder 평활)
//!
//! ## 변동성 지표 (Volatility Indicators)
//! - **ATR**: 평균 실제 범위 (Average True Range)
//!
//! ## 거래량 지표 (Volume Indicators)
//! - **VWAP**: 거래량 가중 평균 가격
//!
//! 모든 계산기는 상태가 없고 결정적입니다. "데이터 부족"은 0이 아니라
//! 타입이 있는 오류(`IndicatorError::InsufficientData`)로 전파되므로,
//! 스코어러는 완전히 채워진 `IndicatorSet`만 받을 수 있습니다.

pub mod momentum;
pub mod trend;
pub mod volatility;
pub mod volume;

use confluence_core::{CandleSeries, Price};
use thiserror::Error;

pub use momentum::{MomentumCalculator, RsiParams};
pub use trend::{EmaParams, MacdParams, MacdResult, TrendIndicators};
pub use volatility::{atr_percent, AtrParams, VolatilityIndicators};
pub use volume::VolumeIndicators;

/// 지표 계산 오류.
#[derive(Debug, Error)]
pub enum IndicatorError {
    /// 데이터 부족 오류
    #[error("데이터가 부족합니다: 필요 {required}개, 제공 {provided}개")]
    InsufficientData { required: usize, provided: usize },

    /// 잘못된 파라미터
    #[error("잘못된 파라미터: {0}")]
    InvalidParameter(String),

    /// 계산 오류
    #[error("계산 오류: {0}")]
    CalculationError(String),
}

/// 지표 계산 결과 타입.
pub type IndicatorResult<T> = Result<T, IndicatorError>;

/// 스코어링에 필요한 전체 지표 집합.
///
/// 이 구조체가 존재한다는 것 자체가 모든 필수 지표가 계산 가능할 만큼
/// 히스토리가 충분했다는 뜻입니다. VWAP만 데이터 의존적으로 부재할 수
/// 있습니다 (누적 거래량 0).
#[derive(Debug, Clone, Copy)]
pub struct IndicatorSet {
    /// RSI (기간 14)
    pub rsi: Price,
    /// EMA 20
    pub ema20: Price,
    /// EMA 50
    pub ema50: Price,
    /// MACD 라인/시그널/히스토그램
    pub macd: MacdResult,
    /// ATR (기간 14)
    pub atr: Price,
    /// VWAP (누적 거래량이 0이면 None)
    pub vwap: Option<Price>,
}

/// 통합 지표 엔진.
///
/// 고정 파라미터(RSI 14, EMA 20/50, MACD 12-26-9, ATR 14)로
/// `IndicatorSet`을 구성하는 통합 인터페이스를 제공합니다.
#[derive(Debug, Default)]
pub struct IndicatorEngine {
    trend: TrendIndicators,
    momentum: MomentumCalculator,
    volatility: VolatilityIndicators,
    volume: VolumeIndicators,
}

impl IndicatorEngine {
    /// 새로운 지표 엔진 생성.
    pub fn new() -> Self {
        Self::default()
    }

    /// 캔들 시계열에서 전체 지표 집합을 계산합니다.
    ///
    /// 어떤 지표라도 히스토리가 부족하면 부분 결과 없이
    /// `IndicatorError::InsufficientData`를 반환합니다.
    pub fn indicator_set(&self, series: &CandleSeries) -> IndicatorResult<IndicatorSet> {
        let closes = series.closes();
        let highs = series.highs();
        let lows = series.lows();

        Ok(IndicatorSet {
            rsi: self.momentum.rsi(&closes, RsiParams::default())?,
            ema20: self.trend.ema(&closes, EmaParams { period: 20 })?,
            ema50: self.trend.ema(&closes, EmaParams { period: 50 })?,
            macd: self.trend.macd(&closes, MacdParams::default())?,
            atr: self
                .volatility
                .atr(&highs, &lows, &closes, AtrParams::default())?,
            vwap: self.volume.vwap(series.candles()),
        })
    }
}
