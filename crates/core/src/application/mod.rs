// Application Layer - Use cases built on the queue URL domain

pub mod validator;

pub use validator::{is_queue_url, is_queue_url_value, QueueUrlValidator};
