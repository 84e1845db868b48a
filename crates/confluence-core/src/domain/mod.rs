//! 분석 파이프라인의 도메인 모델.
//!
//! - `Candle` / `CandleSeries` - OHLCV 캔들 및 검증된 시계열
//! - `Verdict` - 매매 판정 (LONG / SHORT / NO_TRADE)
//! - `AnalysisReport` - 분석 결과 집계

pub mod candle;
pub mod report;

pub use candle::*;
pub use report::*;
