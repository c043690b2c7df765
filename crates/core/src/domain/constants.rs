// Queue URL constants (ADR: No magic values)

/// Only scheme accepted for queue URLs
pub const SCHEME_PREFIX: &str = "https://";

/// Host prefix naming the queue service
pub const SERVICE_HOST_PREFIX: &str = "sqs.";

/// Host suffix shared by all regional endpoints
pub const HOST_SUFFIX: &str = ".amazonaws.com";

/// Upper bound on the raw (trimmed) input length in bytes
pub const MAX_URL_LEN: usize = 2048;

/// Upper bound on an account id under the lenient policy
pub const MAX_ACCOUNT_ID_DIGITS: usize = 32;

/// Exact account id length under the strict policy (AWS convention)
pub const STRICT_ACCOUNT_ID_DIGITS: usize = 12;

/// AWS queue name limit (suffix included)
pub const AWS_MAX_QUEUE_NAME_LEN: usize = 80;

/// Suffix marking a FIFO queue
pub const FIFO_SUFFIX: &str = ".fifo";
