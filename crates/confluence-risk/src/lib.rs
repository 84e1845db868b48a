//! 트레이드 레벨 산출.
//!
//! 이 crate는 매매 판정과 ATR로부터 구체적인 가격 레벨을 계산합니다:
//! - 진입가 (현재가에서 ATR 기반 오프셋)
//! - 손절가
//! - 1차/2차 목표가
//! - 손익비 (R:R)
//!
//! # 예제
//!
//! ```rust,ignore
//! use confluence_risk::{LevelConfig, TradeLevelCalculator};
//!
//! let calculator = TradeLevelCalculator::new(LevelConfig::default());
//! let levels = calculator.compute(verdict, current_price, atr);
//! ```

pub mod config;
pub mod trade_levels;

pub use config::{ConfigValidationError, LevelConfig};
pub use trade_levels::{TradeLevelCalculator, TradeLevels};
