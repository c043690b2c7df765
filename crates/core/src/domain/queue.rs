// Queue URL Domain Model
//
// Shape: https://sqs.<region>.amazonaws.com/<account-id>/<queue-name>

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::config::{AccountIdPolicy, QueueNamePolicy, ValidatorConfig};
use super::constants::{
    FIFO_SUFFIX, HOST_SUFFIX, MAX_URL_LEN, SCHEME_PREFIX, SERVICE_HOST_PREFIX,
};
use super::error::{QueueUrlError, Result};

/// Region token (e.g. `us-east-1`): lowercase letters, digits and hyphens,
/// starting and ending with a letter or digit
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Region(String);

impl Region {
    pub fn new(s: &str) -> Result<Self> {
        let is_alnum = |c: char| c.is_ascii_lowercase() || c.is_ascii_digit();
        let valid = s.starts_with(is_alnum)
            && s.ends_with(is_alnum)
            && s.chars().all(|c| is_alnum(c) || c == '-');

        if !valid {
            return Err(QueueUrlError::InvalidRegion(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Account id segment: all digits, length governed by [`AccountIdPolicy`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(s: &str, policy: AccountIdPolicy) -> Result<Self> {
        if !s.chars().all(|c| c.is_ascii_digit()) || !policy.accepts_len(s.len()) {
            return Err(QueueUrlError::InvalidAccountId(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Queue name segment, checked against a [`QueueNamePolicy`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueueName(String);

impl QueueName {
    pub fn new(s: &str, policy: QueueNamePolicy) -> Result<Self> {
        if !policy.accepts(s) {
            return Err(QueueUrlError::InvalidQueueName(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_fifo(&self) -> bool {
        self.0.ends_with(FIFO_SUFFIX)
    }
}

macro_rules! impl_display {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        })*
    };
}

impl_display!(Region, AccountId, QueueName);

/// A validated queue URL
///
/// Serializes as its canonical URL string and deserializes by parsing under
/// the default [`ValidatorConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QueueUrl {
    region: Region,
    account_id: AccountId,
    queue_name: QueueName,
}

impl QueueUrl {
    /// Assemble a URL from already-validated parts
    pub fn new(region: Region, account_id: AccountId, queue_name: QueueName) -> Self {
        Self {
            region,
            account_id,
            queue_name,
        }
    }

    /// Parse under the default (lenient) configuration
    pub fn parse(input: &str) -> Result<Self> {
        Self::parse_with(input, &ValidatorConfig::default())
    }

    /// Parse a queue URL, ignoring surrounding whitespace
    ///
    /// # Errors
    ///
    /// Returns the first [`QueueUrlError`] encountered walking scheme, host,
    /// account id, then queue name.
    pub fn parse_with(input: &str, config: &ValidatorConfig) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(QueueUrlError::Empty);
        }
        if trimmed.len() > MAX_URL_LEN {
            return Err(QueueUrlError::TooLong {
                max: MAX_URL_LEN,
                got: trimmed.len(),
            });
        }

        let rest = trimmed.strip_prefix(SCHEME_PREFIX).ok_or_else(|| {
            let scheme = trimmed.split_once("://").map_or("", |(scheme, _)| scheme);
            QueueUrlError::InvalidScheme(scheme.to_string())
        })?;

        let (host, path) = rest.split_once('/').unwrap_or((rest, ""));
        let region = parse_host(host)?;

        if let Some(idx) = path.find(['?', '#']) {
            return Err(QueueUrlError::UnexpectedSegment(path[idx..].to_string()));
        }

        let mut segments = path.split('/');

        let account_id = segments
            .next()
            .filter(|s| !s.is_empty())
            .ok_or(QueueUrlError::MissingAccountId)?;
        let account_id = AccountId::new(account_id, config.account_id_policy)?;

        let queue_name = segments
            .next()
            .filter(|s| !s.is_empty())
            .ok_or(QueueUrlError::MissingQueueName)?;
        let queue_name = QueueName::new(queue_name, config.queue_name_policy)?;

        if segments.next().is_some() {
            let consumed = account_id.as_str().len() + 1 + queue_name.as_str().len();
            return Err(QueueUrlError::UnexpectedSegment(path[consumed..].to_string()));
        }

        Ok(Self::new(region, account_id, queue_name))
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn account_id(&self) -> &AccountId {
        &self.account_id
    }

    pub fn queue_name(&self) -> &QueueName {
        &self.queue_name
    }

    pub fn is_fifo(&self) -> bool {
        self.queue_name.is_fifo()
    }
}

/// Extract the region from `sqs.<region>.amazonaws.com`
fn parse_host(host: &str) -> Result<Region> {
    let region = host
        .strip_prefix(SERVICE_HOST_PREFIX)
        .and_then(|h| h.strip_suffix(HOST_SUFFIX))
        .ok_or_else(|| QueueUrlError::InvalidHost(host.to_string()))?;
    Region::new(region)
}

impl fmt::Display for QueueUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}/{}/{}",
            SCHEME_PREFIX,
            SERVICE_HOST_PREFIX,
            self.region,
            HOST_SUFFIX,
            self.account_id,
            self.queue_name
        )
    }
}

impl FromStr for QueueUrl {
    type Err = QueueUrlError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for QueueUrl {
    type Error = QueueUrlError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<QueueUrl> for String {
    fn from(url: QueueUrl) -> Self {
        url.to_string()
    }
}
