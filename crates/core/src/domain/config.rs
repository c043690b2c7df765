// Validation policy knobs

use super::constants::{
    AWS_MAX_QUEUE_NAME_LEN, FIFO_SUFFIX, MAX_ACCOUNT_ID_DIGITS, STRICT_ACCOUNT_ID_DIGITS,
};

/// How strictly the account id segment is checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccountIdPolicy {
    /// Any run of 1..=32 digits
    #[default]
    AnyDigits,
    /// Exactly 12 digits
    Strict,
}

impl AccountIdPolicy {
    /// Whether a digit run of `len` characters satisfies this policy
    pub fn accepts_len(self, len: usize) -> bool {
        match self {
            AccountIdPolicy::AnyDigits => (1..=MAX_ACCOUNT_ID_DIGITS).contains(&len),
            AccountIdPolicy::Strict => len == STRICT_ACCOUNT_ID_DIGITS,
        }
    }
}

impl std::fmt::Display for AccountIdPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountIdPolicy::AnyDigits => write!(f, "ANY_DIGITS"),
            AccountIdPolicy::Strict => write!(f, "STRICT"),
        }
    }
}

/// How strictly the queue name segment is checked
///
/// The URL parser already guarantees the segment holds no `/`, `?` or `#`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueueNamePolicy {
    /// Any non-empty segment
    #[default]
    AnySegment,
    /// AWS naming rules: up to 80 of `[A-Za-z0-9_-]`, optional `.fifo` suffix
    Aws,
}

impl QueueNamePolicy {
    pub fn accepts(self, name: &str) -> bool {
        match self {
            QueueNamePolicy::AnySegment => !name.is_empty(),
            QueueNamePolicy::Aws => {
                let base = name.strip_suffix(FIFO_SUFFIX).unwrap_or(name);
                !base.is_empty()
                    && name.len() <= AWS_MAX_QUEUE_NAME_LEN
                    && base
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
            }
        }
    }
}

impl std::fmt::Display for QueueNamePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueueNamePolicy::AnySegment => write!(f, "ANY_SEGMENT"),
            QueueNamePolicy::Aws => write!(f, "AWS"),
        }
    }
}

/// Validator configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidatorConfig {
    pub account_id_policy: AccountIdPolicy,
    pub queue_name_policy: QueueNamePolicy,
}

impl ValidatorConfig {
    /// Enforce AWS conventions on both account id and queue name
    pub fn strict() -> Self {
        Self {
            account_id_policy: AccountIdPolicy::Strict,
            queue_name_policy: QueueNamePolicy::Aws,
        }
    }
}
