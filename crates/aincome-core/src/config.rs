//! Auth backend configuration
//!
//! The Supabase project URL and anon key are read from the environment at
//! startup. Neither value is persisted by this crate.

use crate::error::{Error, Result};

/// Environment variable holding the Supabase project URL
pub const ENV_SUPABASE_URL: &str = "AINCOME_SUPABASE_URL";

/// Environment variable holding the Supabase anon (publishable) key
pub const ENV_SUPABASE_ANON_KEY: &str = "AINCOME_SUPABASE_ANON_KEY";

/// Connection settings for the auth backend
#[derive(Debug, Clone, PartialEq)]
pub struct AuthConfig {
    /// Project base URL, without a trailing slash
    pub url: String,
    /// Anon key sent as the `apikey` header on every request
    pub anon_key: String,
}

impl AuthConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        }
    }

    /// Load configuration from AINCOME_SUPABASE_URL / AINCOME_SUPABASE_ANON_KEY
    pub fn from_env() -> Result<Self> {
        let url = std::env::var(ENV_SUPABASE_URL)
            .map_err(|_| Error::config(format!("{} is not set", ENV_SUPABASE_URL)))?;
        let anon_key = std::env::var(ENV_SUPABASE_ANON_KEY)
            .map_err(|_| Error::config(format!("{} is not set", ENV_SUPABASE_ANON_KEY)))?;

        if url.trim().is_empty() {
            return Err(Error::config(format!("{} is empty", ENV_SUPABASE_URL)));
        }
        if anon_key.trim().is_empty() {
            return Err(Error::config(format!("{} is empty", ENV_SUPABASE_ANON_KEY)));
        }

        Ok(Self::new(url, anon_key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests don't run in parallel
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn test_from_env_missing_url() {
        let _guard = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_SUPABASE_URL);
        std::env::remove_var(ENV_SUPABASE_ANON_KEY);

        let result = AuthConfig::from_env();
        assert!(result.is_err());
    }

    #[test]
    fn test_from_env_reads_both_vars() {
        let _guard = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_SUPABASE_URL, "https://project.supabase.co/");
        std::env::set_var(ENV_SUPABASE_ANON_KEY, "anon-key");

        let config = AuthConfig::from_env().unwrap();
        assert_eq!(config.url, "https://project.supabase.co");
        assert_eq!(config.anon_key, "anon-key");

        std::env::remove_var(ENV_SUPABASE_URL);
        std::env::remove_var(ENV_SUPABASE_ANON_KEY);
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let config = AuthConfig::new("https://project.supabase.co///", "key");
        assert_eq!(config.url, "https://project.supabase.co");
    }
}
