use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::directory::{Classification, CompanyAggregate, Email, UserId, UserRecord};

// ============================================================================
// Seed Data - initial contents of the record store
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedData {
    pub company: CompanyAggregate,
    #[serde(default)]
    pub users: Vec<UserRecord>,
}

impl SeedData {
    /// Load seed data from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read seed file {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("Invalid seed file {}", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

impl Default for SeedData {
    fn default() -> Self {
        let user = |id: &str, email: &str, classification, confirmed| {
            UserRecord::new(UserId::new(id), Some(Email::new(email)), classification)
                .with_email_confirmed(confirmed)
        };

        Self {
            company: CompanyAggregate::new("loglass.co.jp", 2),
            users: vec![
                user("1", "alice@loglass.co.jp", Classification::Employee, true),
                user("2", "bob@loglass.co.jp", Classification::Employee, false),
                user("3", "michael@example.com", Classification::Customer, true),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed_is_consistent() {
        let seed = SeedData::default();
        let employees = seed
            .users
            .iter()
            .filter(|u| u.classification() == Classification::Employee)
            .count();
        assert_eq!(employees as u32, seed.company.employee_count());
    }

    #[test]
    fn test_from_json() {
        let raw = r#"{
            "company": { "domain": "acme.io", "employee_count": 1 },
            "users": [
                { "id": "a", "email": "ann@acme.io", "classification": "EMPLOYEE", "email_confirmed": true },
                { "id": "b", "email": "ben@mail.com", "classification": "CUSTOMER" }
            ]
        }"#;

        let seed = SeedData::from_json(raw).unwrap();
        assert_eq!(seed.company.domain(), "acme.io");
        assert_eq!(seed.users.len(), 2);
        assert_eq!(seed.users[0].email_confirmed(), Some(true));
        assert_eq!(seed.users[1].classification(), Classification::Customer);
    }

    #[test]
    fn test_from_json_rejects_unknown_classification() {
        let raw = r#"{
            "company": { "domain": "acme.io", "employee_count": 0 },
            "users": [ { "id": "a", "email": "ann@acme.io", "classification": "ADMIN" } ]
        }"#;
        assert!(SeedData::from_json(raw).is_err());
    }

    #[test]
    fn test_load_reports_missing_file() {
        let err = SeedData::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read seed file"));
    }
}
