//! 규칙 기반 시그널 스코어러.
//!
//! 현재가와 지표 집합에 대해 고정된 5개 규칙을 항상 같은 순서로
//! 평가하여 컨플루언스 점수와 매매 판정을 산출합니다.
//!
//! # 5개 규칙 (점수는 독립적으로 합산)
//!
//! 1. **추세** (±25): EMA20 vs EMA50, 어느 방향이든 +25
//! 2. **눌림목 근접** (+15): 현재가가 EMA20의 2% 이내
//! 3. **RSI 구간** (+20 / -10 / 0): 추세 방향의 유리한 밴드 +20,
//!    과매수/과매도 -10, 그 외 0
//! 4. **MACD 확인** (+20): 히스토그램 부호가 추세와 일치
//! 5. **변동성 필터** (+10 / -5): ATR%가 5% 미만이면 +10, 아니면 -5
//!
//! 판정은 클램프 전 원점수로 내립니다: 60점 이상이면서 상승 추세이고
//! RSI < 75면 LONG, 하락 추세이고 RSI > 25면 SHORT, 그 외 NO_TRADE.
//! 리포트 점수는 0-100으로 클램프됩니다.

use rust_decimal_macros::dec;

use confluence_core::{DecimalExt, Price, RuleOutcome, Verdict};

use crate::indicators::{atr_percent, IndicatorSet};

/// 판정에 필요한 최소 원점수.
const MIN_ACTIONABLE_SCORE: i32 = 60;

/// 규칙 가중치.
///
/// 설계상 고정 상수이며 통계적 보정 대상이 아닙니다.
#[derive(Debug, Clone, Copy)]
struct RuleWeights {
    trend: i32,
    pullback: i32,
    rsi_favorable: i32,
    rsi_extreme: i32,
    macd_confirm: i32,
    volatility_ok: i32,
    volatility_penalty: i32,
}

impl Default for RuleWeights {
    fn default() -> Self {
        Self {
            trend: 25,
            pullback: 15,
            rsi_favorable: 20,
            rsi_extreme: -10,
            macd_confirm: 20,
            volatility_ok: 10,
            volatility_penalty: -5,
        }
    }
}

/// 추세 방향.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    /// 상승 추세 (EMA20 > EMA50)
    Up,
    /// 하락 추세 (EMA20 < EMA50)
    Down,
    /// 추세 없음 (EMA20 == EMA50)
    Flat,
}

/// 스코어링 결과.
#[derive(Debug, Clone)]
pub struct Scorecard {
    /// 클램프 전 원점수 (음수나 100 초과 가능)
    pub raw_score: i32,
    /// 리포트용 점수 (0-100 클램프)
    pub score: u8,
    /// 매매 판정
    pub verdict: Verdict,
    /// 추세 방향
    pub trend: TrendDirection,
    /// 평가 순서대로 나열된 규칙 결과
    pub rules: Vec<RuleOutcome>,
}

/// 규칙 기반 시그널 스코어러.
#[derive(Debug, Default)]
pub struct SignalScorer {
    weights: RuleWeights,
}

impl SignalScorer {
    /// 새로운 스코어러 생성.
    pub fn new() -> Self {
        Self::default()
    }

    /// 현재가와 지표 집합을 평가하여 스코어카드를 생성합니다.
    pub fn score(&self, price: Price, indicators: &IndicatorSet) -> Scorecard {
        let weights = &self.weights;
        let mut raw_score = 0i32;
        let mut rules = Vec::with_capacity(5);

        // 1. 추세 (EMA20 vs EMA50)
        let trend = if indicators.ema20 > indicators.ema50 {
            TrendDirection::Up
        } else if indicators.ema20 < indicators.ema50 {
            TrendDirection::Down
        } else {
            TrendDirection::Flat
        };

        match trend {
            TrendDirection::Up => {
                raw_score += weights.trend;
                rules.push(RuleOutcome::new(
                    "Uptrend (EMA20 > EMA50)",
                    true,
                    weights.trend,
                ));
            }
            TrendDirection::Down => {
                raw_score += weights.trend;
                rules.push(RuleOutcome::new(
                    "Downtrend (EMA20 < EMA50)",
                    true,
                    weights.trend,
                ));
            }
            TrendDirection::Flat => {
                rules.push(RuleOutcome::new("No clear trend", false, 0));
            }
        }

        // 2. 눌림목 근접 (현재가가 EMA20의 2% 이내)
        // 현재가가 0이면 비율이 정의되지 않으므로 규칙 실패로 처리
        let near_ema20 = DecimalExt::is_positive(&price)
            && (price - indicators.ema20).abs() / price < dec!(0.02);
        if near_ema20 {
            raw_score += weights.pullback;
            rules.push(RuleOutcome::new(
                "Price near EMA20 (favorable pullback)",
                true,
                weights.pullback,
            ));
        } else {
            rules.push(RuleOutcome::new("Price far from EMA20", false, 0));
        }

        // 3. RSI 구간
        let rsi = indicators.rsi;
        if trend == TrendDirection::Up && rsi >= dec!(45) && rsi <= dec!(65) {
            raw_score += weights.rsi_favorable;
            rules.push(RuleOutcome::new(
                format!("RSI in favorable bullish zone ({:.1})", rsi),
                true,
                weights.rsi_favorable,
            ));
        } else if trend == TrendDirection::Down && rsi >= dec!(35) && rsi <= dec!(55) {
            raw_score += weights.rsi_favorable;
            rules.push(RuleOutcome::new(
                format!("RSI in favorable bearish zone ({:.1})", rsi),
                true,
                weights.rsi_favorable,
            ));
        } else if rsi > dec!(75) {
            raw_score += weights.rsi_extreme;
            rules.push(RuleOutcome::new(
                format!("RSI overbought ({:.1})", rsi),
                false,
                weights.rsi_extreme,
            ));
        } else if rsi < dec!(25) {
            raw_score += weights.rsi_extreme;
            rules.push(RuleOutcome::new(
                format!("RSI oversold ({:.1})", rsi),
                false,
                weights.rsi_extreme,
            ));
        } else {
            rules.push(RuleOutcome::new(
                format!("RSI neutral ({:.1})", rsi),
                false,
                0,
            ));
        }

        // 4. MACD 확인 (히스토그램 부호가 추세와 일치)
        let histogram = indicators.macd.histogram;
        let macd_confirms = (trend == TrendDirection::Up && histogram.is_positive())
            || (trend == TrendDirection::Down && histogram.is_negative());
        if macd_confirms {
            raw_score += weights.macd_confirm;
            rules.push(RuleOutcome::new(
                "MACD confirms the trend",
                true,
                weights.macd_confirm,
            ));
        } else {
            rules.push(RuleOutcome::new("MACD does not confirm", false, 0));
        }

        // 5. 변동성 필터 (유일하게 실패 시에도 감점되는 규칙)
        match atr_percent(indicators.atr, price) {
            Some(pct) if pct < dec!(5) => {
                raw_score += weights.volatility_ok;
                rules.push(RuleOutcome::new(
                    format!("Acceptable volatility (ATR: {:.2}%)", pct),
                    true,
                    weights.volatility_ok,
                ));
            }
            Some(pct) => {
                raw_score += weights.volatility_penalty;
                rules.push(RuleOutcome::new(
                    format!("High volatility (ATR: {:.2}%)", pct),
                    false,
                    weights.volatility_penalty,
                ));
            }
            None => {
                // 현재가 0: 비율이 정의되지 않으므로 고변동성으로 간주
                raw_score += weights.volatility_penalty;
                rules.push(RuleOutcome::new(
                    "High volatility (ATR: N/A)",
                    false,
                    weights.volatility_penalty,
                ));
            }
        }

        // 판정은 클램프 전 원점수로 결정
        let verdict = if raw_score >= MIN_ACTIONABLE_SCORE
            && trend == TrendDirection::Up
            && rsi < dec!(75)
        {
            Verdict::Long
        } else if raw_score >= MIN_ACTIONABLE_SCORE
            && trend == TrendDirection::Down
            && rsi > dec!(25)
        {
            Verdict::Short
        } else {
            Verdict::NoTrade
        };

        let score = raw_score.clamp(0, 100) as u8;

        Scorecard {
            raw_score,
            score,
            verdict,
            trend,
            rules,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::MacdResult;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    fn indicator_set(
        rsi: Decimal,
        ema20: Decimal,
        ema50: Decimal,
        histogram: Decimal,
        atr: Decimal,
    ) -> IndicatorSet {
        IndicatorSet {
            rsi,
            ema20,
            ema50,
            macd: MacdResult {
                line: histogram,
                signal: Decimal::ZERO,
                histogram,
            },
            atr,
            vwap: Some(dec!(100)),
        }
    }

    #[test]
    fn test_perfect_long_setup() {
        let scorer = SignalScorer::new();
        // 상승 추세, EMA20 근접, RSI 55, 양의 히스토그램, 낮은 변동성
        let set = indicator_set(dec!(55), dec!(99.5), dec!(98), dec!(1), dec!(1));

        let card = scorer.score(dec!(100), &set);

        assert_eq!(card.raw_score, 90);
        assert_eq!(card.score, 90);
        assert_eq!(card.verdict, Verdict::Long);
        assert_eq!(card.trend, TrendDirection::Up);
    }

    #[test]
    fn test_perfect_short_setup() {
        let scorer = SignalScorer::new();
        let set = indicator_set(dec!(45), dec!(100.5), dec!(102), dec!(-1), dec!(1));

        let card = scorer.score(dec!(100), &set);

        assert_eq!(card.raw_score, 90);
        assert_eq!(card.verdict, Verdict::Short);
        assert_eq!(card.trend, TrendDirection::Down);
    }

    #[test]
    fn test_score_below_60_is_no_trade() {
        let scorer = SignalScorer::new();
        // 상승 추세 + 근접이지만 RSI 중립, MACD 불일치: 25+15+0+0+10 = 50
        let set = indicator_set(dec!(70), dec!(99.5), dec!(98), dec!(-1), dec!(1));

        let card = scorer.score(dec!(100), &set);

        assert_eq!(card.raw_score, 50);
        assert_eq!(card.verdict, Verdict::NoTrade);
    }

    #[test]
    fn test_overbought_rsi_blocks_long() {
        let scorer = SignalScorer::new();
        // 점수는 60 이상이지만 RSI > 75: 25+15-10+20+10 = 60, LONG 차단
        let set = indicator_set(dec!(80), dec!(99.5), dec!(98), dec!(1), dec!(1));

        let card = scorer.score(dec!(100), &set);

        assert_eq!(card.raw_score, 60);
        assert_eq!(card.verdict, Verdict::NoTrade);
    }

    #[test]
    fn test_negative_raw_score_clamped_to_zero() {
        let scorer = SignalScorer::new();
        // 추세 없음(0), 근접 실패(0), RSI 과매수(-10), MACD 불일치(0),
        // 고변동성(-5): 원점수 -15
        let set = indicator_set(dec!(80), dec!(100), dec!(100), dec!(1), dec!(10));

        let card = scorer.score(dec!(200), &set);

        assert_eq!(card.raw_score, -15);
        assert_eq!(card.score, 0);
        assert_eq!(card.verdict, Verdict::NoTrade);
    }

    #[test]
    fn test_rules_order_is_evaluation_order() {
        let scorer = SignalScorer::new();
        let set = indicator_set(dec!(55), dec!(99.5), dec!(98), dec!(1), dec!(1));

        let card = scorer.score(dec!(100), &set);

        assert_eq!(card.rules.len(), 5);
        assert!(card.rules[0].description.contains("Uptrend"));
        assert!(card.rules[1].description.contains("EMA20"));
        assert!(card.rules[2].description.contains("RSI"));
        assert!(card.rules[3].description.contains("MACD"));
        assert!(card.rules[4].description.contains("volatility"));
    }

    #[test]
    fn test_flat_trend_scores_zero_for_trend_rule() {
        let scorer = SignalScorer::new();
        let set = indicator_set(dec!(50), dec!(100), dec!(100), Decimal::ZERO, dec!(1));

        let card = scorer.score(dec!(100), &set);

        assert_eq!(card.trend, TrendDirection::Flat);
        assert_eq!(card.rules[0].description, "No clear trend");
        assert_eq!(card.rules[0].points, 0);
        // 근접 +15, 변동성 +10만 득점
        assert_eq!(card.raw_score, 25);
    }

    #[test]
    fn test_zero_price_does_not_panic() {
        let scorer = SignalScorer::new();
        let set = indicator_set(dec!(50), dec!(100), dec!(90), dec!(1), dec!(1));

        let card = scorer.score(Decimal::ZERO, &set);

        // 근접 실패, 변동성은 정의 불가로 감점
        assert!(!card.rules[1].passed);
        assert_eq!(card.rules[4].points, -5);
    }

    proptest! {
        /// 리포트 점수는 어떤 입력 조합에서도 0-100 범위여야 함.
        #[test]
        fn prop_score_always_clamped(
            rsi_scaled in 0i64..10_000,
            ema20_cents in 1i64..1_000_000,
            ema50_cents in 1i64..1_000_000,
            hist_cents in -100_000i64..100_000,
            atr_cents in 0i64..1_000_000,
            price_cents in 1i64..1_000_000,
        ) {
            let scorer = SignalScorer::new();
            let set = indicator_set(
                Decimal::new(rsi_scaled, 2),
                Decimal::new(ema20_cents, 2),
                Decimal::new(ema50_cents, 2),
                Decimal::new(hist_cents, 2),
                Decimal::new(atr_cents, 2),
            );

            let card = scorer.score(Decimal::new(price_cents, 2), &set);

            prop_assert!(card.score <= 100);
            prop_assert_eq!(card.rules.len(), 5);
            // 60점 미만이면 판정은 반드시 NO_TRADE
            if card.raw_score < 60 {
                prop_assert_eq!(card.verdict, Verdict::NoTrade);
            }
        }
    }
}
