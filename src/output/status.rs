use std::io::{self, Write};
use crate::output::stats::CopyStats;

/// カーソルを行頭へ移動
pub const CURSOR_TO_COLUMN_0: &str = "\x1b[0G";
/// カーソル位置から行末まで消去
pub const CLEAR_TO_END_OF_LINE: &str = "\x1b[K";

const KIB: f64 = 1024.0;
const MIB: f64 = 1024.0 * 1024.0;
const SIGNIFICANT_DIGITS: i32 = 4;

/// 速度を `,` 区切り・有効数字4桁で B/s | KiB/s | MiB/s 表記にする
///
/// 境界値はちょうど 1024 および 1024*1024 のとき下位の単位に含まれる。
pub fn speed_str(speed: f64) -> String {
    if speed > MIB {
        format!("{} MiB/s", format_significant(speed / MIB))
    } else if speed > KIB {
        format!("{} KiB/s", format_significant(speed / KIB))
    } else {
        format!("{} B/s", format_significant(speed))
    }
}

/// ステータス行を組み立てる（改行なし、同じ行を上書きする）
pub fn render_status(stats: &CopyStats) -> String {
    format!(
        "{}Total bytes: {} Total time: {:.3} Average speed: {}{}",
        CURSOR_TO_COLUMN_0,
        stats.total_bytes,
        stats.total_time,
        speed_str(stats.average_speed),
        CLEAR_TO_END_OF_LINE,
    )
}

/// ステータス行を書き込んでフラッシュする
pub fn write_status<W: Write>(info: &mut W, stats: &CopyStats) -> io::Result<()> {
    info.write_all(render_status(stats).as_bytes())?;
    info.flush()
}

/// 最後のステータス行を残して改行する
pub fn finish_status<W: Write>(info: &mut W) -> io::Result<()> {
    info.write_all(b"\n")?;
    info.flush()
}

fn format_significant(value: f64) -> String {
    if !value.is_finite() || value == 0.0 {
        return format!("{:.*}", (SIGNIFICANT_DIGITS - 1) as usize, 0.0);
    }

    let magnitude = value.abs().log10().floor() as i32;
    let mut decimals = SIGNIFICANT_DIGITS - 1 - magnitude;

    // 999.96 のように丸めで桁が繰り上がる場合
    let scale = 10f64.powi(decimals);
    if (value.abs() * scale).round() / scale >= 10f64.powi(magnitude + 1) {
        decimals -= 1;
    }

    let text = if decimals >= 0 {
        format!("{:.*}", decimals as usize, value)
    } else {
        let step = 10f64.powi(-decimals);
        format!("{:.0}", (value / step).round() * step)
    };
    group_thousands(&text)
}

fn group_thousands(text: &str) -> String {
    let (sign, rest) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (integer, fraction) = match rest.find('.') {
        Some(pos) => rest.split_at(pos),
        None => (rest, ""),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}{}", sign, grouped, fraction)
}
