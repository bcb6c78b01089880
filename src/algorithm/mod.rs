pub mod pacing;
pub mod throttle;

pub use pacing::Pacer;
pub use throttle::Throttle;
