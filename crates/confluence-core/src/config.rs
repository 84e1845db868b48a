//! 설정 관리.
//!
//! 애플리케이션 설정을 정의하고 로드합니다. 우선순위:
//! 기본값 → 설정 파일(`confluence.toml`) → 환경 변수(`CONFLUENCE__*`).

use serde::{Deserialize, Serialize};
use std::path::Path;

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// 로깅 설정
    #[serde(default)]
    pub logging: LoggingConfig,
    /// 분석 히스토리 설정
    #[serde(default)]
    pub history: HistoryConfig,
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// 분석 히스토리 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HistoryConfig {
    /// 히스토리 파일 경로
    pub path: String,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: "confluence_history.json".to_string(),
        }
    }
}

impl AppConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    ///
    /// 설정 파일은 없어도 됩니다. 환경 변수는 `CONFLUENCE__` 접두사와
    /// `__` 구분자를 사용합니다 (예: `CONFLUENCE__LOGGING__LEVEL=debug`).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::from(path.as_ref()).required(false))
            .add_source(
                config::Environment::with_prefix("CONFLUENCE")
                    .separator("__")
                    .try_parsing(true),
            );

        let loaded = builder.build()?;
        loaded.try_deserialize()
    }

    /// 기본 경로에서 설정을 로드합니다.
    pub fn load_default() -> Result<Self, config::ConfigError> {
        Self::load("confluence.toml")
    }
}
