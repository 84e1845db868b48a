//! 분석 파이프라인 진입점.
//!
//! 캔들 시계열 하나를 받아 지표 계산 → 스코어링 → 트레이드 레벨 산출을
//! 거쳐 `AnalysisReport`를 반환합니다. 부분 결과는 없습니다: 어떤
//! 단계든 실패하면 전체 호출이 실패합니다.

use chrono::Utc;
use thiserror::Error;
use tracing::debug;

use confluence_core::{
    AnalysisReport, CandleSeries, DecimalExt, IndicatorSummary, Price, Symbol, Timeframe,
    MIN_ANALYSIS_LEN,
};
use confluence_risk::{LevelConfig, TradeLevelCalculator};

use crate::indicators::{atr_percent, IndicatorEngine, IndicatorError, IndicatorSet};
use crate::scorer::SignalScorer;

/// 분석 파이프라인 오류.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// 캔들 수 또는 지표 룩백 미충족
    #[error("데이터가 부족합니다: 필요 {required}개, 제공 {provided}개")]
    InsufficientData { required: usize, provided: usize },

    /// 지표 계산 오류
    #[error("지표 계산 실패: {0}")]
    Indicator(#[from] IndicatorError),
}

/// 시그널 분석기.
///
/// 지표 엔진, 스코어러, 레벨 계산기를 묶은 파이프라인입니다. 내부
/// 상태가 없으므로 하나를 만들어 여러 호출에 재사용해도 안전합니다.
#[derive(Debug, Default)]
pub struct SignalAnalyzer {
    engine: IndicatorEngine,
    scorer: SignalScorer,
    levels: TradeLevelCalculator,
}

impl SignalAnalyzer {
    /// 기본 설정으로 분석기를 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 트레이드 레벨 설정을 지정하여 분석기를 생성합니다.
    pub fn with_level_config(config: LevelConfig) -> Self {
        Self {
            engine: IndicatorEngine::new(),
            scorer: SignalScorer::new(),
            levels: TradeLevelCalculator::new(config),
        }
    }

    /// 캔들 시계열을 분석하여 리포트를 생성합니다.
    ///
    /// 캔들이 100개 미만이거나 필수 지표의 룩백이 충족되지 않으면
    /// `AnalyzeError::InsufficientData`로 실패합니다.
    pub fn analyze(
        &self,
        series: &CandleSeries,
        symbol: Symbol,
        timeframe: Timeframe,
    ) -> Result<AnalysisReport, AnalyzeError> {
        if series.len() < MIN_ANALYSIS_LEN {
            return Err(AnalyzeError::InsufficientData {
                required: MIN_ANALYSIS_LEN,
                provided: series.len(),
            });
        }

        let indicators = self.engine.indicator_set(series)?;
        let current_price = series.last_close();

        let card = self.scorer.score(current_price, &indicators);
        let levels = self.levels.compute(card.verdict, current_price, indicators.atr);

        debug!(
            %symbol,
            %timeframe,
            score = card.score,
            verdict = %card.verdict,
            "분석 완료"
        );

        Ok(AnalysisReport {
            symbol,
            timeframe,
            timestamp: Utc::now(),
            verdict: card.verdict,
            score: card.score,
            current_price,
            entry: levels.entry,
            stop_loss: levels.stop_loss,
            tp1: levels.tp1,
            tp2: levels.tp2,
            rr1: levels.rr1,
            rr2: levels.rr2,
            indicators: format_summary(&indicators, current_price),
            rules: card.rules,
        })
    }
}

/// 지표 집합을 표시용 요약(소수점 2자리)으로 포맷합니다.
fn format_summary(indicators: &IndicatorSet, price: Price) -> IndicatorSummary {
    IndicatorSummary {
        rsi: indicators.rsi.to_display_2dp(),
        ema20: indicators.ema20.to_display_2dp(),
        ema50: indicators.ema50.to_display_2dp(),
        macd: indicators.macd.line.to_display_2dp(),
        macd_signal: indicators.macd.signal.to_display_2dp(),
        macd_histogram: indicators.macd.histogram.to_display_2dp(),
        atr: indicators.atr.to_display_2dp(),
        atr_percent: atr_percent(indicators.atr, price)
            .map(|pct| pct.to_display_2dp())
            .unwrap_or_else(|| "N/A".to_string()),
        vwap: indicators
            .vwap
            .map(|v| v.to_display_2dp())
            .unwrap_or_else(|| "N/A".to_string()),
    }
}
