// Domain Error Types

use thiserror::Error;

/// Reason a string was rejected as a queue URL
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueUrlError {
    #[error("Queue URL is empty")]
    Empty,

    #[error("Queue URL too long: {got} bytes (max {max})")]
    TooLong { max: usize, got: usize },

    #[error("Invalid scheme: {0:?} (expected \"https\")")]
    InvalidScheme(String),

    #[error("Invalid host: {0:?} (expected sqs.<region>.amazonaws.com)")]
    InvalidHost(String),

    #[error("Invalid region: {0:?}")]
    InvalidRegion(String),

    #[error("Missing account id")]
    MissingAccountId,

    #[error("Invalid account id: {0:?}")]
    InvalidAccountId(String),

    #[error("Missing queue name")]
    MissingQueueName,

    #[error("Invalid queue name: {0:?}")]
    InvalidQueueName(String),

    #[error("Unexpected trailing content: {0:?}")]
    UnexpectedSegment(String),
}

pub type Result<T> = std::result::Result<T, QueueUrlError>;
