use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThrottleError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid option: {0}")]
    InvalidOption(String),

    #[error("Streams were already released by a previous run")]
    StreamsReleased,
}

pub type Result<T> = std::result::Result<T, ThrottleError>;
