//! 분석 리포트 및 관련 타입.
//!
//! 이 모듈은 분석 파이프라인이 외부 소비자(렌더러, 익스포터, 히스토리
//! 저장소)에 반환하는 유일한 산출물인 `AnalysisReport`를 정의합니다.
//! 모든 필드는 엔진 내부에 대한 참조가 없는 일반 데이터이며 직렬화에
//! 적합합니다.

use crate::types::{Price, Symbol, Timeframe};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 매매 판정.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    /// 매수 진입 추천
    Long,
    /// 매도 진입 추천
    Short,
    /// 진입 비추천
    NoTrade,
}

impl Verdict {
    /// 실제 진입이 가능한 판정인지 확인합니다.
    pub fn is_actionable(&self) -> bool {
        !matches!(self, Verdict::NoTrade)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Long => write!(f, "LONG"),
            Verdict::Short => write!(f, "SHORT"),
            Verdict::NoTrade => write!(f, "NO_TRADE"),
        }
    }
}

/// 개별 규칙 평가 결과.
///
/// 리포트에 담기는 규칙 순서는 평가 순서와 동일하며 점수로 정렬되지
/// 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOutcome {
    /// 규칙 설명
    pub description: String,
    /// 통과 여부
    pub passed: bool,
    /// 부여/차감된 점수
    pub points: i32,
}

impl RuleOutcome {
    /// 새 규칙 결과를 생성합니다.
    pub fn new(description: impl Into<String>, passed: bool, points: i32) -> Self {
        Self {
            description: description.into(),
            passed,
            points,
        }
    }
}

/// 표시용으로 포맷된 지표 요약 (소수점 2자리).
///
/// VWAP은 누적 거래량이 0이면 "N/A"로 표기됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorSummary {
    /// RSI (14)
    pub rsi: String,
    /// EMA 20
    pub ema20: String,
    /// EMA 50
    pub ema50: String,
    /// MACD 라인
    pub macd: String,
    /// MACD 시그널
    pub macd_signal: String,
    /// MACD 히스토그램
    pub macd_histogram: String,
    /// ATR (14)
    pub atr: String,
    /// ATR 퍼센트 (현재가 대비)
    pub atr_percent: String,
    /// VWAP
    pub vwap: String,
}

/// 단일 분석 호출의 집계 결과.
///
/// 한 번 생성되면 불변이며 반환 후 호출자가 소유합니다. 엔진은 이후
/// 어떤 참조도 보유하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// 분석 대상 심볼
    pub symbol: Symbol,
    /// 분석 타임프레임
    pub timeframe: Timeframe,
    /// 리포트 생성 시각 (UTC)
    pub timestamp: DateTime<Utc>,
    /// 매매 판정
    pub verdict: Verdict,
    /// 컨플루언스 점수 (0-100, 클램프됨)
    pub score: u8,
    /// 현재가 (최신 종가)
    pub current_price: Price,
    /// 추천 진입가
    pub entry: Price,
    /// 손절가 (NO_TRADE면 없음)
    pub stop_loss: Option<Price>,
    /// 1차 목표가
    pub tp1: Option<Price>,
    /// 2차 목표가
    pub tp2: Option<Price>,
    /// TP1 기준 손익비 ("N/A" 가능)
    pub rr1: String,
    /// TP2 기준 손익비 ("N/A" 가능)
    pub rr2: String,
    /// 표시용 지표 요약
    pub indicators: IndicatorSummary,
    /// 평가 순서대로 나열된 규칙 결과
    pub rules: Vec<RuleOutcome>,
}

impl AnalysisReport {
    /// 점수 구간에 대한 한 줄 설명을 반환합니다.
    pub fn score_description(&self) -> &'static str {
        if self.score >= 70 {
            "High confluence - strong signal"
        } else if self.score >= 50 {
            "Moderate confluence"
        } else {
            "Low confluence - avoid trade"
        }
    }
}
