//! 심볼 정의.
//!
//! 캔들 소스가 무엇을 공급했는지 나타내는 표시용 레이블입니다.
//! 분석 엔진은 심볼을 해석하지 않고 리포트와 히스토리에 그대로 전달합니다.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 심볼 파싱 오류.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SymbolError {
    /// 빈 심볼
    #[error("심볼이 비어 있습니다")]
    Empty,
}

/// 분석 대상 심볼 레이블 (예: "BTCUSDT").
///
/// 항상 대문자로 정규화됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// 새 심볼을 생성합니다. 공백을 제거하고 대문자로 정규화합니다.
    pub fn new(label: impl Into<String>) -> Result<Self, SymbolError> {
        let normalized = label.into().trim().to_uppercase();
        if normalized.is_empty() {
            return Err(SymbolError::Empty);
        }
        Ok(Self(normalized))
    }

    /// 심볼 레이블을 문자열 슬라이스로 반환합니다.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Symbol {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_normalization() {
        let symbol = Symbol::new(" btcusdt ").unwrap();
        assert_eq!(symbol.as_str(), "BTCUSDT");
        assert_eq!(symbol.to_string(), "BTCUSDT");
    }

    #[test]
    fn test_empty_symbol_rejected() {
        assert_eq!(Symbol::new("   "), Err(SymbolError::Empty));
    }

    #[test]
    fn test_symbol_serde_transparent() {
        let symbol = Symbol::new("ETHUSDT").unwrap();
        let json = serde_json::to_string(&symbol).unwrap();
        assert_eq!(json, "\"ETHUSDT\"");
        let back: Symbol = serde_json::from_str(&json).unwrap();
        assert_eq!(back, symbol);
    }
}
