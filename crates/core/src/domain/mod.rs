// Domain Layer - Queue URL model and its validation rules

pub mod config;
pub mod constants;
pub mod error;
pub mod queue;

// Re-exports
pub use config::{AccountIdPolicy, QueueNamePolicy, ValidatorConfig};
pub use error::{QueueUrlError, Result};
pub use queue::{AccountId, QueueName, QueueUrl, Region};
