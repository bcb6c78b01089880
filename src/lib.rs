//! 平均スループットに上限を設けてストリームをコピーする
//!
//! 入力をブロック単位で読み込み、1秒を4つのセグメントに分けて
//! 出力へ書き込みながら、進捗をステータス行として同じ行に上書き表示する。

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod options;
pub mod output;

pub use algorithm::Throttle;
pub use error::{Result, ThrottleError};
pub use output::{speed_str, CopyStats};
