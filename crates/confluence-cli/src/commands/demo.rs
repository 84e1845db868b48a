//! demo 서브커맨드 - 합성 캔들로 파이프라인 실행.
//!
//! 실제 데이터 없이 전체 분석 흐름을 확인할 때 사용합니다. 시드를
//! 지정하면 같은 시계열이 재현됩니다.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::info;

use confluence_analytics::SignalAnalyzer;
use confluence_core::{AppConfig, Candle, CandleSeries, Symbol, Timeframe};

use super::{emit_report, OutputFormat};

/// 합성 캔들을 생성해 분석하고 리포트를 출력합니다.
pub fn run_demo(
    symbol: &str,
    timeframe: &str,
    count: usize,
    seed: Option<u64>,
    format: OutputFormat,
    config: &AppConfig,
) -> anyhow::Result<()> {
    let symbol = Symbol::new(format!("{} (DEMO)", symbol))?;
    let timeframe: Timeframe = timeframe.parse().map_err(anyhow::Error::msg)?;

    let candles = generate_candles(count, timeframe, seed);
    info!(count = candles.len(), seed = ?seed, "합성 캔들 생성 완료");

    let series = CandleSeries::new(candles)?;

    let analyzer = SignalAnalyzer::new();
    let report = analyzer.analyze(&series, symbol, timeframe)?;

    emit_report(&report, format, None, true, config)
}

/// 랜덤 워크 합성 캔들 생성.
///
/// 시작가는 40,000-60,000 사이이며 캔들마다 약 ±1% 내에서 움직입니다
/// (소폭 상승 편향). 고가/저가는 몸통 바깥 최대 1% 범위에서 만들어
/// `low <= min(open, close) <= max(open, close) <= high`를 만족합니다.
pub fn generate_candles(count: usize, timeframe: Timeframe, seed: Option<u64>) -> Vec<Candle> {
    let mut rng: StdRng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut price = dec!(40000) + Decimal::from(rng.gen_range(0..20_000));
    let step = timeframe.millis();
    let now = Utc::now().timestamp_millis();

    let mut candles = Vec::with_capacity(count);
    for i in 0..count {
        // 변화율: -0.96% ~ +1.04% (베이시스 포인트 단위)
        let change_bp = rng.gen_range(-96i64..104);
        let change = price * Decimal::new(change_bp, 4);

        let open = price;
        let close = price + change;

        // 몸통 바깥 심지: 0 ~ 1%
        let upper_wick_bp = rng.gen_range(0i64..100);
        let lower_wick_bp = rng.gen_range(0i64..100);
        let high = open.max(close) * (Decimal::ONE + Decimal::new(upper_wick_bp, 4));
        let low = open.min(close) * (Decimal::ONE - Decimal::new(lower_wick_bp, 4));

        let volume = Decimal::from(100 + rng.gen_range(0i64..500));

        candles.push(Candle::new(
            now - (count as i64 - i as i64) * step,
            open,
            high,
            low,
            close,
            volume,
        ));

        price = close;
    }

    candles
}
