use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::{Classification, Email, UserId};

// ============================================================================
// Directory Events
// ============================================================================

/// A committed email change, including the employee-count adjustment it
/// caused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailChanged {
    pub event_id: Uuid,
    pub user_id: UserId,
    pub old_email: Email,
    pub new_email: Email,
    pub old_classification: Classification,
    pub new_classification: Classification,
    pub employee_delta: i64,
    pub employee_count: u32,
    pub occurred_at: DateTime<Utc>,
}

impl EmailChanged {
    pub fn reclassified(&self) -> bool {
        self.old_classification != self.new_classification
    }
}

/// Result of a successful `change_email` call
#[derive(Debug, Clone, PartialEq)]
pub enum ChangeOutcome {
    /// Requested email equals the stored one; nothing was written.
    Unchanged,
    Changed(EmailChanged),
}

impl ChangeOutcome {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, ChangeOutcome::Unchanged)
    }

    pub fn event(&self) -> Option<&EmailChanged> {
        match self {
            ChangeOutcome::Unchanged => None,
            ChangeOutcome::Changed(event) => Some(event),
        }
    }
}
