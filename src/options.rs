use std::path::PathBuf;

/// 1回の実行の設定
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// バイト毎秒。0以下は 1 として扱われる
    pub speed_bps: i64,

    // 入出力
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,

    // 出力・表示オプション
    pub quiet: bool,
    pub verbose: u8,
    pub log_file: Option<PathBuf>,
}

impl Options {
    /// 冗長度に対応する既定のログレベル
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
