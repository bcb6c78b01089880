use std::fs::File;
use std::io::{self, Read, Write};

use anyhow::Context;
use clap::Parser;

use throttle::algorithm::pacing::{effective_rate, Pacer};
use throttle::cli::Cli;
use throttle::output::Logger;
use throttle::Throttle;

fn main() -> anyhow::Result<()> {
    // コマンドライン引数のパース
    let options = Cli::parse().into_options()?;

    // ロガーの初期化（RUST_LOG が指定されていればそちらを優先）
    env_logger::Builder::new()
        .filter_level(options.log_level())
        .parse_default_env()
        .init();

    // ログファイルの初期化。出力先を作成（切り詰め）する前に失敗させる
    let mut logger = match &options.log_file {
        Some(path) => Some(
            Logger::new(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?,
        ),
        None => None,
    };
    if let Some(logger) = logger.as_mut() {
        let speed_bps = effective_rate(options.speed_bps);
        logger.log_start(speed_bps, Pacer::new(speed_bps).chunk_size())?;
    }

    let input: Box<dyn Read> = match &options.input {
        Some(path) => Box::new(
            File::open(path).with_context(|| format!("failed to open input {}", path.display()))?,
        ),
        None => Box::new(io::stdin().lock()),
    };
    let output: Box<dyn Write> = match &options.output {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("failed to create output {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let info: Box<dyn Write> = if options.quiet {
        Box::new(io::sink())
    } else {
        Box::new(io::stderr())
    };

    let mut throttle = Throttle::new(input, output, info, options.speed_bps);

    match throttle.start() {
        Ok(stats) => {
            if let Some(logger) = logger.as_mut() {
                logger.log_finish(&stats)?;
            }
            Ok(())
        }
        Err(e) => {
            if let Some(logger) = logger.as_mut() {
                if let Err(log_err) = logger.log_with_timestamp(&format!("throttle failed: {}", e)) {
                    eprintln!("Warning: Failed to write log file: {}", log_err);
                }
            }
            Err(e).context("throttled copy failed")
        }
    }
}
