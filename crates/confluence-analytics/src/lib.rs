//! # Confluence Analytics
//!
//! 캔들 시계열로부터 트레이딩 시그널을 계산하는 분석 엔진입니다.
//!
//! 파이프라인: `CandleSeries` → 지표 계산 → 규칙 기반 스코어링 →
//! 트레이드 레벨 산출 → `AnalysisReport`.
//!
//! 모든 계산은 동기적이고 부수효과가 없으며, 호출 간 상태를 유지하지
//! 않습니다. 여러 독립 호출에서 동시에 사용해도 안전합니다.

pub mod analyzer;
pub mod indicators;
pub mod scorer;

pub use analyzer::{AnalyzeError, SignalAnalyzer};
pub use indicators::{IndicatorEngine, IndicatorError, IndicatorResult, IndicatorSet};
pub use scorer::{Scorecard, SignalScorer, TrendDirection};
