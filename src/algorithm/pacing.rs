use std::time::{Duration, Instant};

/// 1秒あたりのセグメント数
pub const SEGMENTS_PER_SECOND: u32 = 4;

/// 設定されたレートを実効レートにする。0以下は 1 B/s として扱う
pub fn effective_rate(speed_bps: i64) -> u64 {
    u64::try_from(speed_bps).unwrap_or(0).max(1)
}

/// セグメント単位のペーシング
///
/// 1秒を `segments` 個のタイムスライスに分け、各スライスで最大
/// `chunk_size` バイトだけ書き込むことで平均スループットを抑える。
/// 実測レートによるフィードバック制御は行わない。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacer {
    segments: u32,
    chunk_size: usize,
}

impl Pacer {
    pub fn new(speed_bps: u64) -> Self {
        Pacer {
            segments: SEGMENTS_PER_SECOND,
            chunk_size: Self::chunk_size_for(speed_bps, SEGMENTS_PER_SECOND),
        }
    }

    /// `max(1, speed_bps / segments)`
    pub fn chunk_size_for(speed_bps: u64, segments: u32) -> usize {
        let segments = u64::from(segments.max(1));
        usize::try_from(speed_bps / segments).unwrap_or(usize::MAX).max(1)
    }

    pub fn segments(&self) -> u32 {
        self.segments
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// 1セグメントに割り当てられた時間
    pub fn segment_budget(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.segments))
    }

    /// セグメントの残り時間だけスリープする
    ///
    /// 予算を超過していた場合は即座に戻り、超過分を次のセグメントに持ち越さない。
    /// 実際にスリープした時間を返す。
    pub fn pace(&self, segment_started: Instant) -> Duration {
        let remaining = self.remaining(segment_started.elapsed());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
        remaining
    }

    fn remaining(&self, spent: Duration) -> Duration {
        self.segment_budget().saturating_sub(spent)
    }
}
