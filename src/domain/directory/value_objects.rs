use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::errors::DirectoryError;

// ============================================================================
// Directory Value Objects
// ============================================================================

/// Opaque user identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9+_.-]+@([A-Za-z0-9.-]+\.[A-Za-z]{2,})$";

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(EMAIL_PATTERN)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// User email address.
///
/// `Email::new` wraps a stored value as-is (seed data, records written
/// directly to the store). Anything entering through the workflow goes
/// through `Email::parse`, which enforces the address grammar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email(pub String);

impl Email {
    pub fn new(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    /// Validate `raw` against the address grammar.
    pub fn parse(raw: &str) -> Result<Self, DirectoryError> {
        if raw.is_empty() || !email_regex().is_match(raw) {
            return Err(DirectoryError::InvalidEmail(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Everything after the first `@`, or `None` when there is no domain part.
    pub fn domain(&self) -> Option<&str> {
        self.0
            .split_once('@')
            .map(|(_, domain)| domain)
            .filter(|domain| !domain.is_empty())
    }

    /// ASCII case-insensitive domain comparison.
    pub fn is_in_domain(&self, domain: &str) -> bool {
        self.domain()
            .is_some_and(|own| own.eq_ignore_ascii_case(domain))
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether a user belongs to the company, derived from the email domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Classification {
    Employee,
    Customer,
}

impl Classification {
    pub fn for_email(email: &Email, company_domain: &str) -> Self {
        if email.is_in_domain(company_domain) {
            Classification::Employee
        } else {
            Classification::Customer
        }
    }

    /// Change in employee head-count when moving from `self` to `next`.
    pub fn employee_delta(self, next: Classification) -> i64 {
        match (self, next) {
            (Classification::Customer, Classification::Employee) => 1,
            (Classification::Employee, Classification::Customer) => -1,
            _ => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Classification::Employee => "EMPLOYEE",
            Classification::Customer => "CUSTOMER",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown classification: {0}")]
pub struct UnknownClassification(pub String);

impl FromStr for Classification {
    type Err = UnknownClassification;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EMPLOYEE" => Ok(Classification::Employee),
            "CUSTOMER" => Ok(Classification::Customer),
            other => Err(UnknownClassification(other.to_string())),
        }
    }
}
