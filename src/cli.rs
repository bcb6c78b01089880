use clap::{ArgAction, Parser};
use std::path::{Path, PathBuf};
use crate::error::{Result, ThrottleError};
use crate::options::Options;

#[derive(Parser, Debug)]
#[command(name = "throttle")]
#[command(version)]
#[command(about = "Copy stdin to stdout at a limited average throughput", long_about = None)]
pub struct Cli {
    /// Maximum throughput in bytes per second
    #[arg(allow_negative_numbers = true)]
    pub speed_bps: i64,

    /// Read from FILE instead of standard input
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Write to FILE instead of standard output
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Suppress the status line
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Append a record of the run to FILE
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn into_options(self) -> Result<Options> {
        if let (Some(input), Some(output)) = (&self.input, &self.output) {
            if is_same_file(input, output) {
                return Err(ThrottleError::InvalidOption(format!(
                    "input and output are the same file: {}",
                    input.display()
                )));
            }
        }

        Ok(Options {
            speed_bps: self.speed_bps,
            input: self.input,
            output: self.output,
            quiet: self.quiet,
            verbose: self.verbose,
            log_file: self.log_file,
        })
    }
}

/// 表記が異なっても同じファイルを指していれば true
///
/// 出力先がまだ存在しない場合は入力と同一になり得ないので、
/// 表記の比較だけを行う。
fn is_same_file(input: &Path, output: &Path) -> bool {
    if input == output {
        return true;
    }
    match (dunce::canonicalize(input), dunce::canonicalize(output)) {
        (Ok(input), Ok(output)) => input == output,
        _ => false,
    }
}
