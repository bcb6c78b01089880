use std::time::Instant;

/// 1回のコピー実行の統計情報
#[derive(Debug, Clone, Copy, Default)]
pub struct CopyStats {
    pub total_bytes: u64,
    pub start_time: Option<Instant>,
    pub total_time: f64,
    pub average_speed: f64,
}

impl CopyStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// 実行開始。カウンタをゼロに戻し開始時刻を記録する
    pub fn begin(&mut self) {
        *self = CopyStats {
            start_time: Some(Instant::now()),
            ..CopyStats::default()
        };
    }

    /// 書き込んだバイト数を加算し、経過時間と平均速度を再計算する
    pub fn record(&mut self, bytes: usize) {
        self.total_bytes += bytes as u64;
        self.total_time = self
            .start_time
            .map(|start| start.elapsed().as_secs_f64())
            .unwrap_or(0.0);
        self.average_speed = average_speed(self.total_bytes, self.total_time);
    }
}

/// 経過時間がゼロ以下なら 0 を返す
pub fn average_speed(total_bytes: u64, total_time: f64) -> f64 {
    if total_time > 0.0 {
        total_bytes as f64 / total_time
    } else {
        0.0
    }
}
