//! Queue URL Validator
//!
//! The predicate side of the crate: answers "is this a queue URL?" with a
//! plain `bool`. It never panics and never surfaces an error; callers that
//! need the rejection reason use [`QueueUrl::parse_with`] or
//! [`QueueUrlValidator::partition`].

use serde_json::Value;
use tracing::debug;

use crate::domain::{QueueUrl, QueueUrlError, Result, ValidatorConfig};

/// Stateless validator carrying a [`ValidatorConfig`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueueUrlValidator {
    config: ValidatorConfig,
}

/// An input that failed validation, with the reason
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub input: String,
    pub error: QueueUrlError,
}

/// Result of [`QueueUrlValidator::partition`]; each side keeps input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partitioned {
    pub valid: Vec<QueueUrl>,
    pub rejected: Vec<Rejection>,
}

impl Partitioned {
    pub fn all_valid(&self) -> bool {
        self.rejected.is_empty()
    }
}

impl QueueUrlValidator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Parse `input` under this validator's configuration
    pub fn parse(&self, input: &str) -> Result<QueueUrl> {
        QueueUrl::parse_with(input, &self.config)
    }

    /// `true` iff `value` is present and its trimmed form is a queue URL
    pub fn is_valid(&self, value: Option<&str>) -> bool {
        let Some(input) = value else {
            debug!(reason = "missing", "Rejected queue URL");
            return false;
        };

        match self.parse(input) {
            Ok(_) => true,
            Err(e) => {
                debug!(input = %input, reason = %e, "Rejected queue URL");
                false
            }
        }
    }

    /// Untyped variant: only JSON strings can be queue URLs
    pub fn is_valid_value(&self, value: &Value) -> bool {
        match value {
            Value::String(s) => self.is_valid(Some(s.as_str())),
            other => {
                debug!(kind = json_kind(other), "Rejected non-string queue URL value");
                false
            }
        }
    }

    /// Split inputs into parsed URLs and rejections
    pub fn partition<I, S>(&self, inputs: I) -> Partitioned
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = Partitioned::default();

        for input in inputs {
            let input = input.as_ref();
            match self.parse(input) {
                Ok(url) => out.valid.push(url),
                Err(error) => out.rejected.push(Rejection {
                    input: input.to_string(),
                    error,
                }),
            }
        }

        debug!(
            valid = out.valid.len(),
            rejected = out.rejected.len(),
            "Partitioned queue URLs"
        );
        out
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Is `value` a syntactically valid SQS queue URL?
///
/// `None` models an absent value. Surrounding whitespace is ignored. Uses the
/// default configuration (any all-digit account id, any non-empty queue name).
///
/// ```
/// use queue_url_core::is_queue_url;
///
/// assert!(is_queue_url(Some("https://sqs.us-east-1.amazonaws.com/123456789012/my-queue")));
/// assert!(!is_queue_url(Some("http://example.com")));
/// assert!(!is_queue_url(None));
/// ```
pub fn is_queue_url(value: Option<&str>) -> bool {
    QueueUrlValidator::default().is_valid(value)
}

/// [`is_queue_url`] for values of unknown type
pub fn is_queue_url_value(value: &Value) -> bool {
    QueueUrlValidator::default().is_valid_value(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const VALID: &str = "https://sqs.us-east-1.amazonaws.com/123456789012/my-queue";

    #[test]
    fn test_none_is_invalid() {
        assert!(!is_queue_url(None));
    }

    #[test]
    fn test_is_valid_uses_config() {
        let strict = QueueUrlValidator::new(ValidatorConfig::strict());
        let url = "https://sqs.us-east-1.amazonaws.com/42/queue";

        assert!(QueueUrlValidator::default().is_valid(Some(url)));
        assert!(!strict.is_valid(Some(url)));
        assert!(strict.is_valid(Some(VALID)));
    }

    #[test]
    fn test_config_accessor() {
        assert_eq!(QueueUrlValidator::default().config(), &ValidatorConfig::default());
        assert_eq!(
            QueueUrlValidator::new(ValidatorConfig::strict()).config(),
            &ValidatorConfig::strict()
        );
    }

    #[test]
    fn test_value_kinds() {
        assert!(is_queue_url_value(&json!(VALID)));
        assert!(is_queue_url_value(&json!(format!(" {} ", VALID))));
        assert!(!is_queue_url_value(&Value::Null));
        assert!(!is_queue_url_value(&json!(123456789012u64)));
        assert!(!is_queue_url_value(&json!(true)));
        assert!(!is_queue_url_value(&json!([VALID])));
        assert!(!is_queue_url_value(&json!({ "url": VALID })));
    }

    #[test]
    fn test_partition_keeps_order() {
        let inputs = vec![
            VALID,
            "http://example.com",
            "https://sqs.eu-west-1.amazonaws.com/1/second",
            "",
        ];

        let result = QueueUrlValidator::default().partition(&inputs);

        assert!(!result.all_valid());
        assert_eq!(result.valid.len(), 2);
        assert_eq!(result.valid[0].queue_name().as_str(), "my-queue");
        assert_eq!(result.valid[1].queue_name().as_str(), "second");

        assert_eq!(result.rejected.len(), 2);
        assert_eq!(result.rejected[0].input, "http://example.com");
        assert_eq!(
            result.rejected[0].error,
            QueueUrlError::InvalidScheme("http".to_string())
        );
        assert_eq!(result.rejected[1].error, QueueUrlError::Empty);
    }

    #[test]
    fn test_partition_empty_input() {
        let result = QueueUrlValidator::default().partition(Vec::<String>::new());
        assert!(result.all_valid());
        assert!(result.valid.is_empty());
    }
}
