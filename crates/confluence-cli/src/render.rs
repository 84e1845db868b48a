//! 텍스트 리포트 렌더링.

use confluence_core::{AnalysisReport, DecimalExt, Price};

/// Option 가격을 표시 문자열로 변환합니다.
fn format_level(level: Option<Price>) -> String {
    level
        .map(|price| format!("${}", price.to_display_2dp()))
        .unwrap_or_else(|| "N/A".to_string())
}

/// 리포트를 사람이 읽기 쉬운 텍스트 블록으로 렌더링합니다.
pub fn render_text(report: &AnalysisReport) -> String {
    let mut out = String::new();

    out.push_str("==============================================\n");
    out.push_str(&format!(
        "  TECHNICAL ANALYSIS - {} ({})\n",
        report.symbol, report.timeframe
    ));
    out.push_str("==============================================\n");
    out.push_str(&format!(
        "Time:   {}\n",
        report.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    out.push_str(&format!(
        "Price:  ${}\n",
        report.current_price.to_display_2dp()
    ));
    out.push('\n');
    out.push_str(&format!("SIGNAL: {}\n", report.verdict));
    out.push_str(&format!(
        "Confluence score: {}/100 ({})\n",
        report.score,
        report.score_description()
    ));
    out.push('\n');

    out.push_str("Trade parameters:\n");
    out.push_str(&format!(
        "  Entry:     ${}\n",
        report.entry.to_display_2dp()
    ));
    out.push_str(&format!(
        "  Stop loss: {}\n",
        format_level(report.stop_loss)
    ));
    out.push_str(&format!(
        "  TP1:       {}   (R:R {})\n",
        format_level(report.tp1),
        report.rr1
    ));
    out.push_str(&format!(
        "  TP2:       {}   (R:R {})\n",
        format_level(report.tp2),
        report.rr2
    ));
    out.push('\n');

    out.push_str("Indicators:\n");
    out.push_str(&format!("  RSI (14):        {}\n", report.indicators.rsi));
    out.push_str(&format!("  EMA 20:          {}\n", report.indicators.ema20));
    out.push_str(&format!("  EMA 50:          {}\n", report.indicators.ema50));
    out.push_str(&format!("  MACD line:       {}\n", report.indicators.macd));
    out.push_str(&format!(
        "  MACD signal:     {}\n",
        report.indicators.macd_signal
    ));
    out.push_str(&format!(
        "  MACD histogram:  {}\n",
        report.indicators.macd_histogram
    ));
    out.push_str(&format!(
        "  ATR (14):        {} ({}%)\n",
        report.indicators.atr, report.indicators.atr_percent
    ));
    out.push_str(&format!("  VWAP:            {}\n", report.indicators.vwap));
    out.push('\n');

    out.push_str("Rules:\n");
    for rule in &report.rules {
        let mark = if rule.passed { "✓" } else { "✗" };
        out.push_str(&format!(
            "  [{}] {:<45} {:+}\n",
            mark, rule.description, rule.points
        ));
    }
    out.push('\n');

    out.push_str("Disclaimer: for educational purposes only. Trade at your own risk.\n");

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use confluence_core::{IndicatorSummary, RuleOutcome, Symbol, Timeframe, Verdict};
    use rust_decimal_macros::dec;

    fn sample_report() -> AnalysisReport {
        AnalysisReport {
            symbol: Symbol::new("BTCUSDT").unwrap(),
            timeframe: Timeframe::H1,
            timestamp: Utc::now(),
            verdict: Verdict::NoTrade,
            score: 15,
            current_price: dec!(100),
            entry: dec!(100),
            stop_loss: None,
            tp1: None,
            tp2: None,
            rr1: "N/A".to_string(),
            rr2: "N/A".to_string(),
            indicators: IndicatorSummary {
                rsi: "100.00".to_string(),
                ema20: "100.00".to_string(),
                ema50: "100.00".to_string(),
                macd: "0.00".to_string(),
                macd_signal: "0.00".to_string(),
                macd_histogram: "0.00".to_string(),
                atr: "0.00".to_string(),
                atr_percent: "0.00".to_string(),
                vwap: "N/A".to_string(),
            },
            rules: vec![
                RuleOutcome::new("No clear trend", false, 0),
                RuleOutcome::new("Price near EMA20 (favorable pullback)", true, 15),
            ],
        }
    }

    #[test]
    fn test_render_contains_key_sections() {
        let text = render_text(&sample_report());

        assert!(text.contains("TECHNICAL ANALYSIS - BTCUSDT (1h)"));
        assert!(text.contains("SIGNAL: NO_TRADE"));
        assert!(text.contains("Confluence score: 15/100"));
        assert!(text.contains("Stop loss: N/A"));
        assert!(text.contains("R:R N/A"));
        assert!(text.contains("[✗] No clear trend"));
        assert!(text.contains("[✓] Price near EMA20"));
    }

    #[test]
    fn test_render_shows_levels_when_present() {
        let mut report = sample_report();
        report.verdict = Verdict::Long;
        report.stop_loss = Some(dec!(99));
        report.tp1 = Some(dec!(101));
        report.tp2 = Some(dec!(102));
        report.rr1 = "1.00".to_string();
        report.rr2 = "2.00".to_string();

        let text = render_text(&report);

        assert!(text.contains("SIGNAL: LONG"));
        assert!(text.contains("Stop loss: $99.00"));
        assert!(text.contains("TP1:       $101.00   (R:R 1.00)"));
        assert!(text.contains("TP2:       $102.00   (R:R 2.00)"));
    }
}
