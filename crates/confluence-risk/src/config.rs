//! 트레이드 레벨 설정.
//!
//! 진입 오프셋과 손절/목표가 거리를 ATR 배수로 정의합니다.
//! 배수는 설계상 고정 상수이며 통계적 보정 대상이 아닙니다.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

fn default_entry_offset_atr() -> Decimal {
    dec!(0.25)
}

fn default_stop_atr() -> Decimal {
    dec!(1.0)
}

fn default_tp1_atr() -> Decimal {
    dec!(1.0)
}

fn default_tp2_atr() -> Decimal {
    dec!(2.0)
}

/// 설정 검증 오류.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// 0 이하의 ATR 배수
    #[error("{field}은(는) 0보다 커야 합니다: {value}")]
    NonPositiveMultiplier { field: &'static str, value: Decimal },
}

/// 트레이드 레벨 설정 (ATR 배수).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelConfig {
    /// 현재가 대비 진입 오프셋 (기본값: 0.25 ATR)
    #[serde(default = "default_entry_offset_atr")]
    pub entry_offset_atr: Decimal,

    /// 진입가 대비 손절 거리 (기본값: 1.0 ATR)
    #[serde(default = "default_stop_atr")]
    pub stop_atr: Decimal,

    /// 진입가 대비 1차 목표 거리 (기본값: 1.0 ATR)
    #[serde(default = "default_tp1_atr")]
    pub tp1_atr: Decimal,

    /// 진입가 대비 2차 목표 거리 (기본값: 2.0 ATR)
    #[serde(default = "default_tp2_atr")]
    pub tp2_atr: Decimal,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            entry_offset_atr: default_entry_offset_atr(),
            stop_atr: default_stop_atr(),
            tp1_atr: default_tp1_atr(),
            tp2_atr: default_tp2_atr(),
        }
    }
}

impl LevelConfig {
    /// 설정값을 검증합니다.
    ///
    /// 손절/목표 배수는 양수여야 합니다. 진입 오프셋은 0일 수 있습니다
    /// (현재가 그대로 진입).
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.entry_offset_atr < Decimal::ZERO {
            return Err(ConfigValidationError::NonPositiveMultiplier {
                field: "entry_offset_atr",
                value: self.entry_offset_atr,
            });
        }
        for (field, value) in [
            ("stop_atr", self.stop_atr),
            ("tp1_atr", self.tp1_atr),
            ("tp2_atr", self.tp2_atr),
        ] {
            if value <= Decimal::ZERO {
                return Err(ConfigValidationError::NonPositiveMultiplier { field, value });
            }
        }
        Ok(())
    }
}
