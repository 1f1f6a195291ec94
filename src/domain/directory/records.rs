use serde::{Deserialize, Serialize};

use super::value_objects::{Classification, Email, UserId};

// ============================================================================
// Directory Records - User and Company state
// ============================================================================
//
// Both records are plain values: the store hands out clones and takes
// ownership of whatever is written back. Classification has no public
// setter; it only changes through `UserRecord::with_email`, which the
// email-change workflow calls.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    id: UserId,
    #[serde(default)]
    email: Option<Email>,
    classification: Classification,
    #[serde(default)]
    email_confirmed: Option<bool>,
}

impl UserRecord {
    pub fn new(id: UserId, email: Option<Email>, classification: Classification) -> Self {
        Self {
            id,
            email,
            classification,
            email_confirmed: None,
        }
    }

    pub fn with_email_confirmed(mut self, confirmed: bool) -> Self {
        self.email_confirmed = Some(confirmed);
        self
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    pub fn email_confirmed(&self) -> Option<bool> {
        self.email_confirmed
    }

    /// Copy of this record with a new email and classification.
    /// Every other field is carried over untouched.
    pub(crate) fn with_email(&self, email: Email, classification: Classification) -> Self {
        Self {
            email: Some(email),
            classification,
            ..self.clone()
        }
    }
}

/// The single company aggregate.
///
/// `employee_count` is derived: it should always equal the number of users
/// classified as [`Classification::Employee`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyAggregate {
    domain: String,
    employee_count: u32,
}

impl CompanyAggregate {
    pub fn new(domain: impl Into<String>, employee_count: u32) -> Self {
        Self {
            domain: domain.into(),
            employee_count,
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn employee_count(&self) -> u32 {
        self.employee_count
    }

    /// Copy with `delta` applied to the employee count.
    /// Returns `None` if the count would leave the `u32` range.
    pub fn adjusted(&self, delta: i64) -> Option<Self> {
        let next = i64::from(self.employee_count).checked_add(delta)?;
        let employee_count = u32::try_from(next).ok()?;
        Some(Self {
            domain: self.domain.clone(),
            employee_count,
        })
    }
}
