// Queue URL Core - Domain Types & Validation
// NO I/O: every function here is pure and never panics on user input

pub mod application;
pub mod domain;

pub use application::validator::{
    is_queue_url, is_queue_url_value, Partitioned, QueueUrlValidator, Rejection,
};
pub use domain::{
    AccountId, AccountIdPolicy, QueueName, QueueNamePolicy, QueueUrl, QueueUrlError, Region,
    Result, ValidatorConfig,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
