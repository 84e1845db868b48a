//! 컨플루언스 시그널 분석 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # 캔들 JSON 파일 분석
//! confluence analyze -i candles.json -s BTCUSDT -t 1h
//!
//! # JSON 리포트로 내보내기
//! confluence analyze -i candles.json -s BTCUSDT -t 4h -f json -o report.json
//!
//! # 합성 데이터로 데모 분석 (시드 고정으로 재현 가능)
//! confluence demo -s BTCUSDT --seed 42
//!
//! # 최근 분석 히스토리 보기
//! confluence history
//!
//! # 히스토리 전체 삭제
//! confluence history --clear
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::error;

use confluence_core::{init_logging, AppConfig, LogConfig};

mod commands;
mod render;

use commands::analyze::run_analyze;
use commands::demo::run_demo;
use commands::history::run_history;
use commands::OutputFormat;

#[derive(Parser)]
#[command(name = "confluence")]
#[command(about = "Confluence signal analyzer - 캔들 데이터 기반 기술적 분석 CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, default_value = "confluence.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 캔들 JSON 파일을 분석하여 리포트 생성
    Analyze {
        /// 캔들 JSON 파일 경로 (OHLCV 배열)
        #[arg(short, long)]
        input: PathBuf,

        /// 심볼 레이블 (예: BTCUSDT)
        #[arg(short, long)]
        symbol: String,

        /// 타임프레임 (1m, 5m, 15m, 1h, 4h, 1d)
        #[arg(short, long, default_value = "1h")]
        timeframe: String,

        /// 출력 형식 (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// JSON 리포트를 저장할 파일 경로
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 히스토리에 저장하지 않음
        #[arg(long, default_value = "false")]
        no_history: bool,
    },

    /// 합성 캔들로 데모 분석 실행
    Demo {
        /// 심볼 레이블
        #[arg(short, long, default_value = "BTCUSDT")]
        symbol: String,

        /// 타임프레임
        #[arg(short, long, default_value = "1h")]
        timeframe: String,

        /// 생성할 캔들 수
        #[arg(short, long, default_value = "200")]
        count: usize,

        /// RNG 시드 (지정하면 재현 가능한 데모)
        #[arg(long)]
        seed: Option<u64>,

        /// 출력 형식 (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// 최근 분석 히스토리 보기/정리
    History {
        /// 히스토리 전체 삭제
        #[arg(long, default_value = "false")]
        clear: bool,
    },
}

fn main() {
    // .env가 있으면 환경 변수로 로드
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let app_config = match AppConfig::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("설정 로드 실패: {}", e);
            std::process::exit(1);
        }
    };

    let log_config = LogConfig {
        level: app_config.logging.level.clone(),
        format: app_config.logging.format.parse().unwrap_or_default(),
        ..LogConfig::default()
    };
    init_logging(&log_config);

    let result = match cli.command {
        Commands::Analyze {
            input,
            symbol,
            timeframe,
            format,
            output,
            no_history,
        } => match format.parse::<OutputFormat>() {
            Ok(format) => run_analyze(
                &input,
                &symbol,
                &timeframe,
                format,
                output.as_deref(),
                !no_history,
                &app_config,
            ),
            Err(e) => Err(anyhow::anyhow!(e)),
        },
        Commands::Demo {
            symbol,
            timeframe,
            count,
            seed,
            format,
        } => match format.parse::<OutputFormat>() {
            Ok(format) => run_demo(&symbol, &timeframe, count, seed, format, &app_config),
            Err(e) => Err(anyhow::anyhow!(e)),
        },
        Commands::History { clear } => run_history(clear, &app_config),
    };

    if let Err(e) = result {
        error!("명령 실행 실패: {:#}", e);
        eprintln!("오류: {:#}", e);
        std::process::exit(1);
    }
}
