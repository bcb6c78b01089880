pub mod logger;
pub mod stats;
pub mod status;

pub use logger::Logger;
pub use stats::CopyStats;
pub use status::speed_str;
