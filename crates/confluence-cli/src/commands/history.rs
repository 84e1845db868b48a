//! history 서브커맨드 - 분석 히스토리 관리.
//!
//! 히스토리는 JSON 파일에 최신순으로 보관되며 최대 10개까지만
//! 유지됩니다. 리포트 전체가 아니라 식별에 필요한 필드만 저장합니다.

use std::fs;
use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use confluence_core::{AnalysisReport, AppConfig, Verdict};

/// 히스토리에 보관할 최대 항목 수.
pub const HISTORY_CAPACITY: usize = 10;

/// 히스토리 항목.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// 심볼 레이블
    pub symbol: String,
    /// 타임프레임 레이블
    pub timeframe: String,
    /// 매매 판정
    pub verdict: Verdict,
    /// 컨플루언스 점수
    pub score: u8,
    /// 분석 시각
    pub timestamp: DateTime<Utc>,
}

impl From<&AnalysisReport> for HistoryEntry {
    fn from(report: &AnalysisReport) -> Self {
        Self {
            symbol: report.symbol.to_string(),
            timeframe: report.timeframe.to_string(),
            verdict: report.verdict,
            score: report.score,
            timestamp: report.timestamp,
        }
    }
}

/// 히스토리 파일을 읽습니다. 파일이 없으면 빈 목록을 반환합니다.
pub fn load(path: &Path) -> anyhow::Result<Vec<HistoryEntry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let text = fs::read_to_string(path)
        .with_context(|| format!("히스토리 파일을 읽을 수 없습니다: {}", path.display()))?;
    let entries: Vec<HistoryEntry> = serde_json::from_str(&text)
        .with_context(|| format!("히스토리 JSON 파싱 실패: {}", path.display()))?;
    Ok(entries)
}

/// 항목을 맨 앞에 넣고 용량을 초과하면 가장 오래된 항목을 버립니다.
pub fn push_entry(entries: &mut Vec<HistoryEntry>, entry: HistoryEntry) {
    entries.insert(0, entry);
    entries.truncate(HISTORY_CAPACITY);
}

/// 리포트를 히스토리 파일에 추가합니다.
pub fn append(path: &Path, report: &AnalysisReport) -> anyhow::Result<()> {
    let mut entries = load(path)?;
    push_entry(&mut entries, HistoryEntry::from(report));

    let json = serde_json::to_string_pretty(&entries)?;
    fs::write(path, json)
        .with_context(|| format!("히스토리 저장 실패: {}", path.display()))?;
    info!(count = entries.len(), "히스토리 갱신 완료");
    Ok(())
}

/// history 서브커맨드 실행: 목록 출력 또는 전체 삭제.
pub fn run_history(clear: bool, config: &AppConfig) -> anyhow::Result<()> {
    let path = Path::new(&config.history.path);

    if clear {
        if path.exists() {
            fs::remove_file(path)
                .with_context(|| format!("히스토리 삭제 실패: {}", path.display()))?;
        }
        println!("분석 히스토리를 삭제했습니다.");
        return Ok(());
    }

    let entries = load(path)?;
    if entries.is_empty() {
        println!("분석 히스토리가 없습니다.");
        return Ok(());
    }

    println!("최근 분석 ({}개):", entries.len());
    for entry in &entries {
        println!(
            "  {}  {:<12} {:<4} {:<9} {:>3}/100",
            entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
            entry.symbol,
            entry.timeframe,
            entry.verdict.to_string(),
            entry.score
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(score: u8) -> HistoryEntry {
        HistoryEntry {
            symbol: "BTCUSDT".to_string(),
            timeframe: "1h".to_string(),
            verdict: Verdict::NoTrade,
            score,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_push_entry_newest_first() {
        let mut entries = Vec::new();
        push_entry(&mut entries, entry(10));
        push_entry(&mut entries, entry(20));

        assert_eq!(entries[0].score, 20);
        assert_eq!(entries[1].score, 10);
    }

    #[test]
    fn test_push_entry_truncates_at_capacity() {
        let mut entries = Vec::new();
        for score in 0..15 {
            push_entry(&mut entries, entry(score));
        }

        assert_eq!(entries.len(), HISTORY_CAPACITY);
        // 가장 최근 항목이 맨 앞, 가장 오래된 항목은 버려짐
        assert_eq!(entries[0].score, 14);
        assert_eq!(entries[HISTORY_CAPACITY - 1].score, 5);
    }
}
