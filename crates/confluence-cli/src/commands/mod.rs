//! CLI 서브커맨드 구현.

pub mod analyze;
pub mod demo;
pub mod history;

use std::path::Path;
use std::str::FromStr;

use anyhow::Context;
use tracing::info;

use confluence_core::{AnalysisReport, AppConfig};

use crate::render;

/// 리포트 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// 사람이 읽기 쉬운 텍스트 리포트
    Text,
    /// JSON 리포트
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("알 수 없는 출력 형식: {}", s)),
        }
    }
}

/// 리포트를 출력하고, 요청 시 파일 저장과 히스토리 기록을 수행합니다.
pub fn emit_report(
    report: &AnalysisReport,
    format: OutputFormat,
    output: Option<&Path>,
    save_history: bool,
    config: &AppConfig,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => println!("{}", render::render_text(report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
    }

    if let Some(path) = output {
        let json = serde_json::to_string_pretty(report)?;
        std::fs::write(path, json)
            .with_context(|| format!("리포트 저장 실패: {}", path.display()))?;
        info!(path = %path.display(), "리포트 저장 완료");
    }

    if save_history {
        history::append(Path::new(&config.history.path), report)?;
    }

    Ok(())
}
