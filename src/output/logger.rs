use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use crate::error::Result;
use crate::output::stats::CopyStats;
use crate::output::status::speed_str;

/// 実行記録を追記するログファイル
pub struct Logger {
    file: File,
}

impl Logger {
    pub fn new(log_path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        Ok(Self { file })
    }

    pub fn log(&mut self, message: &str) -> Result<()> {
        writeln!(self.file, "{}", message)?;
        self.file.flush()?;
        Ok(())
    }

    pub fn log_with_timestamp(&mut self, message: &str) -> Result<()> {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        self.log(&format!("[{}] {}", timestamp, message))
    }

    pub fn log_start(&mut self, speed_bps: u64, chunk_size: usize) -> Result<()> {
        self.log_with_timestamp(&format!(
            "throttle started: limit {} B/s, chunk {} bytes",
            speed_bps, chunk_size
        ))
    }

    pub fn log_finish(&mut self, stats: &CopyStats) -> Result<()> {
        self.log_with_timestamp(&format!(
            "throttle finished: {} bytes in {:.3}s, average {}",
            stats.total_bytes,
            stats.total_time,
            speed_str(stats.average_speed)
        ))
    }
}
