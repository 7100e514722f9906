//! Configuration module
//!
//! Turns CLI settings into the client's repositories.

use anyhow::{Context, Result};
use trialdesk_client::{ApiConfig, Repositories};

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the TrialDesk API
    pub api_url: String,
}

impl Config {
    /// Build the entity repositories for the configured API
    pub fn repositories(&self) -> Result<Repositories> {
        Repositories::from_config(&ApiConfig::new(self.api_url.clone()))
            .with_context(|| format!("Invalid API URL: {}", self.api_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repositories_from_valid_url() {
        let config = Config {
            api_url: "http://localhost:5000/".to_string(),
        };
        let repos = config.repositories().unwrap();
        assert_eq!(repos.studies.base().base_url(), "http://localhost:5000");
    }

    #[test]
    fn test_repositories_reject_bad_url() {
        let config = Config {
            api_url: "localhost".to_string(),
        };
        assert!(config.repositories().is_err());
    }
}
