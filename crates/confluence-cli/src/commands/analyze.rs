//! analyze 서브커맨드 - 캔들 JSON 파일 분석.

use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing::info;

use confluence_analytics::SignalAnalyzer;
use confluence_core::{AppConfig, Candle, CandleSeries, Symbol, Timeframe};

use super::{emit_report, OutputFormat};

/// 캔들 JSON 파일을 분석하고 리포트를 출력합니다.
pub fn run_analyze(
    input: &Path,
    symbol: &str,
    timeframe: &str,
    format: OutputFormat,
    output: Option<&Path>,
    save_history: bool,
    config: &AppConfig,
) -> anyhow::Result<()> {
    let symbol = Symbol::new(symbol)?;
    let timeframe: Timeframe = timeframe.parse().map_err(anyhow::Error::msg)?;

    let candles = load_candles(input)?;
    info!(count = candles.len(), path = %input.display(), "캔들 로드 완료");

    let series = CandleSeries::new(candles)?;

    let analyzer = SignalAnalyzer::new();
    let report = analyzer.analyze(&series, symbol, timeframe)?;

    emit_report(&report, format, output, save_history, config)
}

/// JSON 파일에서 캔들 배열을 읽습니다.
///
/// 형식: `[{"timestamp": 1700000000000, "open": "100.0", "high": "101.0",
/// "low": "99.5", "close": "100.5", "volume": "1250.0"}, ...]`
fn load_candles(path: &Path) -> anyhow::Result<Vec<Candle>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("캔들 파일을 읽을 수 없습니다: {}", path.display()))?;
    let candles: Vec<Candle> = serde_json::from_str(&text)
        .with_context(|| format!("캔들 JSON 파싱 실패: {}", path.display()))?;
    Ok(candles)
}
