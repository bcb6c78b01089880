use std::io::{ErrorKind, Read, Write};
use std::time::Instant;

use log::{debug, info, trace};

use crate::algorithm::pacing::{effective_rate, Pacer};
use crate::error::{Result, ThrottleError};
use crate::output::stats::CopyStats;
use crate::output::status;

/// 入力から一度に読み込む最大バイト数 (14 KiB)
pub const BLOCK_SIZE: usize = 14 * 1024;

struct Streams<R, W, I> {
    input: R,
    output: W,
    info: I,
}

/// スループット上限付きコピー
///
/// 入力をブロック単位で読み込み、各ブロックを `chunk_size` バイトずつ
/// セグメントごとに出力へ書き込む。書き込みのたびにステータス行を
/// `info` ストリームへ上書き表示する。
///
/// ```no_run
/// use throttle::Throttle;
///
/// let mut throttle = Throttle::new(std::io::stdin(), std::io::stdout(), std::io::stderr(), 9600);
/// throttle.start()?;
/// # Ok::<(), throttle::ThrottleError>(())
/// ```
pub struct Throttle<R, W, I> {
    streams: Option<Streams<R, W, I>>,
    speed_bps: u64,
    pacer: Pacer,
    stats: CopyStats,
}

impl<R: Read, W: Write, I: Write> Throttle<R, W, I> {
    /// 0以下のレートは 1 B/s として扱う
    pub fn new(input: R, output: W, info: I, speed_bps: i64) -> Self {
        let speed_bps = effective_rate(speed_bps);
        Throttle {
            streams: Some(Streams { input, output, info }),
            speed_bps,
            pacer: Pacer::new(speed_bps),
            stats: CopyStats::new(),
        }
    }

    /// コピーを実行し、終了時の統計を返す
    ///
    /// 3つのストリームはこの呼び出しの間だけ所有され、正常終了でも
    /// エラーでもスコープを抜ける時点でドロップ（クローズ）される。
    pub fn start(&mut self) -> Result<CopyStats> {
        let Streams {
            mut input,
            mut output,
            mut info,
        } = self.streams.take().ok_or(ThrottleError::StreamsReleased)?;

        self.stats.begin();
        info!(
            "throttling copy to {} B/s ({} segments/s, {} byte chunks)",
            self.speed_bps,
            self.pacer.segments(),
            self.pacer.chunk_size()
        );

        let mut block = vec![0u8; BLOCK_SIZE];
        loop {
            let read = match input.read(&mut block) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            debug!("read block of {} bytes", read);

            let mut remaining = &block[..read];
            while !remaining.is_empty() {
                let segment_started = Instant::now();

                let take = self.pacer.chunk_size().min(remaining.len());
                let (chunk, rest) = remaining.split_at(take);
                output.write_all(chunk)?;
                output.flush()?;

                self.stats.record(chunk.len());
                status::write_status(&mut info, &self.stats)?;

                remaining = rest;

                let slept = self.pacer.pace(segment_started);
                trace!("segment of {} bytes, slept {:?}", take, slept);
            }
        }

        status::finish_status(&mut info)?;
        output.flush()?;

        info!(
            "copied {} bytes in {:.3}s ({})",
            self.stats.total_bytes,
            self.stats.total_time,
            status::speed_str(self.stats.average_speed)
        );
        Ok(self.stats)
    }

    /// カウンタを構築直後の状態に戻す。レート設定はそのまま保持する
    pub fn reset(&mut self) {
        self.stats = CopyStats::new();
    }

    pub fn stats(&self) -> &CopyStats {
        &self.stats
    }

    pub fn speed_bps(&self) -> u64 {
        self.speed_bps
    }

    pub fn segments(&self) -> u32 {
        self.pacer.segments()
    }

    pub fn chunk_size(&self) -> usize {
        self.pacer.chunk_size()
    }
}
