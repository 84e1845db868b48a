//! 진입/손절/목표 레벨 및 손익비 계산.
//!
//! 판정이 LONG이면 현재가 아래로 당겨 진입하고, SHORT이면 위로 올려
//! 진입합니다. NO_TRADE에서는 진입가만 현재가로 채워지고 나머지 레벨은
//! 비워 둡니다.

use crate::config::LevelConfig;
use confluence_core::{Price, Verdict};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 계산된 트레이드 레벨.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeLevels {
    /// 추천 진입가
    pub entry: Price,
    /// 손절가
    pub stop_loss: Option<Price>,
    /// 1차 목표가
    pub tp1: Option<Price>,
    /// 2차 목표가
    pub tp2: Option<Price>,
    /// TP1 기준 손익비 (소수점 2자리, 리스크가 0이면 "N/A")
    pub rr1: String,
    /// TP2 기준 손익비
    pub rr2: String,
}

/// 트레이드 레벨 계산기.
#[derive(Debug, Clone, Default)]
pub struct TradeLevelCalculator {
    config: LevelConfig,
}

impl TradeLevelCalculator {
    /// 새 계산기를 생성합니다.
    pub fn new(config: LevelConfig) -> Self {
        Self { config }
    }

    /// 판정, 현재가, ATR로부터 트레이드 레벨을 계산합니다.
    pub fn compute(&self, verdict: Verdict, price: Price, atr: Price) -> TradeLevels {
        let offset = self.config.entry_offset_atr * atr;
        let stop_distance = self.config.stop_atr * atr;
        let tp1_distance = self.config.tp1_atr * atr;
        let tp2_distance = self.config.tp2_atr * atr;

        match verdict {
            Verdict::Long => {
                let entry = price - offset;
                let stop_loss = entry - stop_distance;
                let tp1 = entry + tp1_distance;
                let tp2 = entry + tp2_distance;
                TradeLevels {
                    entry,
                    stop_loss: Some(stop_loss),
                    tp1: Some(tp1),
                    tp2: Some(tp2),
                    rr1: risk_reward_ratio(entry, stop_loss, tp1),
                    rr2: risk_reward_ratio(entry, stop_loss, tp2),
                }
            }
            Verdict::Short => {
                let entry = price + offset;
                let stop_loss = entry + stop_distance;
                let tp1 = entry - tp1_distance;
                let tp2 = entry - tp2_distance;
                TradeLevels {
                    entry,
                    stop_loss: Some(stop_loss),
                    tp1: Some(tp1),
                    tp2: Some(tp2),
                    rr1: risk_reward_ratio(entry, stop_loss, tp1),
                    rr2: risk_reward_ratio(entry, stop_loss, tp2),
                }
            }
            Verdict::NoTrade => TradeLevels {
                entry: price,
                stop_loss: None,
                tp1: None,
                tp2: None,
                rr1: "N/A".to_string(),
                rr2: "N/A".to_string(),
            },
        }
    }
}

/// 손익비를 소수점 2자리 문자열로 계산합니다.
///
/// 리스크(진입가-손절가 거리)가 0이면 비율이 정의되지 않으므로 "N/A"를
/// 반환합니다. 나머지 리포트 필드는 유효하게 유지됩니다.
fn risk_reward_ratio(entry: Price, stop_loss: Price, take_profit: Price) -> String {
    let risk = (entry - stop_loss).abs();
    if risk == Decimal::ZERO {
        return "N/A".to_string();
    }
    let reward = (take_profit - entry).abs();
    format!("{:.2}", reward / risk)
}
