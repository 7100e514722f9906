//! Client configuration
//!
//! The API base URL is the only setting; it is passed explicitly at
//! construction or read from the environment.

use reqwest::Url;

use crate::error::{ClientError, Result};

/// Environment variable holding the API base URL
pub const API_URL_ENV: &str = "TRIALDESK_API_URL";

/// TrialDesk API configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the API (e.g., "https://trialdesk.example.com/api")
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - TRIALDESK_API_URL (required)
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(API_URL_ENV).map_err(|_| {
            ClientError::InvalidConfig(format!("{API_URL_ENV} environment variable not set"))
        })?;

        let config = Self::new(base_url);
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(ClientError::InvalidConfig(
                "base_url cannot be empty".to_string(),
            ));
        }

        // Url lowercases the scheme, so HTTPS://host is accepted
        let scheme_ok = Url::parse(self.base_url.trim())
            .map(|url| matches!(url.scheme(), "http" | "https"))
            .unwrap_or(false);
        if !scheme_ok {
            return Err(ClientError::InvalidConfig(
                "base_url must start with http:// or https://".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_http_and_https() {
        assert!(ApiConfig::new("http://localhost:5000").validate().is_ok());
        assert!(ApiConfig::new("https://trialdesk.example.com/api").validate().is_ok());
    }

    #[test]
    fn test_validate_scheme_is_case_insensitive() {
        assert!(ApiConfig::new("HTTPS://TrialDesk.example.com").validate().is_ok());
        assert!(ApiConfig::new("Http://localhost:5000").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_url() {
        let err = ApiConfig::new("  ").validate().unwrap_err();
        assert!(matches!(err, ClientError::InvalidConfig(_)));
    }

    #[test]
    fn test_validate_rejects_missing_scheme() {
        let err = ApiConfig::new("localhost:5000").validate().unwrap_err();
        assert!(err.to_string().contains("http://"));
    }

    #[test]
    fn test_from_env() {
        // Only test in this crate touching API_URL_ENV
        unsafe { std::env::set_var(API_URL_ENV, "https://trialdesk.example.com") };
        let config = ApiConfig::from_env().unwrap();
        assert_eq!(config.base_url, "https://trialdesk.example.com");

        unsafe { std::env::set_var(API_URL_ENV, "trialdesk.example.com") };
        assert!(matches!(
            ApiConfig::from_env(),
            Err(ClientError::InvalidConfig(_))
        ));

        unsafe { std::env::remove_var(API_URL_ENV) };
        let err = ApiConfig::from_env().unwrap_err();
        assert!(err.to_string().contains(API_URL_ENV));
    }
}
