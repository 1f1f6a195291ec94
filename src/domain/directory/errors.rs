use super::value_objects::UserId;

// ============================================================================
// Directory Errors
// ============================================================================

/// Coarse taxonomy callers branch on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    InternalInconsistency,
}

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("Invalid user id: {0:?}")]
    InvalidUserId(String),

    #[error("Invalid email format: {0}")]
    InvalidEmail(String),

    #[error("User not found. User ID: {0}")]
    UserNotFound(UserId),

    #[error("Inconsistent record for user {user_id}: {reason}")]
    InternalInconsistency { user_id: UserId, reason: String },
}

impl DirectoryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DirectoryError::InvalidUserId(_) | DirectoryError::InvalidEmail(_) => {
                ErrorKind::InvalidArgument
            }
            DirectoryError::UserNotFound(_) => ErrorKind::NotFound,
            DirectoryError::InternalInconsistency { .. } => ErrorKind::InternalInconsistency,
        }
    }

    pub(crate) fn inconsistent(user_id: &UserId, reason: impl Into<String>) -> Self {
        DirectoryError::InternalInconsistency {
            user_id: user_id.clone(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_carries_literal_id() {
        let err = DirectoryError::UserNotFound(UserId::new("999"));
        assert_eq!(err.to_string(), "User not found. User ID: 999");
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_invalid_email_message_carries_rejected_value() {
        let err = DirectoryError::InvalidEmail("invalid-email".to_string());
        assert!(err.to_string().contains("Invalid email format"));
        assert!(err.to_string().contains("invalid-email"));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_inconsistency_kind() {
        let err = DirectoryError::inconsistent(&UserId::new("7"), "stored email is missing");
        assert_eq!(err.kind(), ErrorKind::InternalInconsistency);
        assert_eq!(
            err.to_string(),
            "Inconsistent record for user 7: stored email is missing"
        );
    }
}
