use std::path::PathBuf;

use anyhow::Result;

use crate::store::SeedData;

// ============================================================================
// Driver Configuration
// ============================================================================
//
// Read once at start-up from the environment. Nothing in the domain or store
// layers looks at the environment.
//
// ============================================================================

pub const DEFAULT_LOG_FILTER: &str = "info,company_directory=debug";

const SEED_PATH_VAR: &str = "DIRECTORY_SEED_PATH";
const DEMO_USER_VAR: &str = "DIRECTORY_DEMO_USER";
const DEMO_EMAIL_VAR: &str = "DIRECTORY_DEMO_EMAIL";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// JSON seed file; the built-in data set is used when unset
    pub seed_path: Option<PathBuf>,
    pub demo_user_id: String,
    pub demo_email: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed_path: None,
            demo_user_id: "3".to_string(),
            demo_email: "michael@loglass.co.jp".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            seed_path: non_empty(SEED_PATH_VAR).map(PathBuf::from),
            demo_user_id: non_empty(DEMO_USER_VAR).unwrap_or(defaults.demo_user_id),
            demo_email: non_empty(DEMO_EMAIL_VAR).unwrap_or(defaults.demo_email),
        }
    }

    pub fn load_seed(&self) -> Result<SeedData> {
        match &self.seed_path {
            Some(path) => {
                tracing::info!(path = %path.display(), "Loading seed data");
                SeedData::load(path)
            }
            None => Ok(SeedData::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.demo_user_id, "3");
    }

    #[test]
    fn test_overrides_from_environment() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (SEED_PATH_VAR, "/tmp/seed.json"),
            (DEMO_USER_VAR, "1"),
            (DEMO_EMAIL_VAR, "alice@example.com"),
        ]));
        assert_eq!(config.seed_path, Some(PathBuf::from("/tmp/seed.json")));
        assert_eq!(config.demo_user_id, "1");
        assert_eq!(config.demo_email, "alice@example.com");
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[(SEED_PATH_VAR, "  ")]));
        assert_eq!(config.seed_path, None);
    }

    #[test]
    fn test_load_seed_defaults_to_builtin() {
        let seed = AppConfig::default().load_seed().unwrap();
        assert_eq!(seed, SeedData::default());
    }
}
