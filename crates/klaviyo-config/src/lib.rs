use klaviyo_core::{ApiError, Result, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

mod env_substitution;

pub use env_substitution::substitute_env_vars;

/// Environment variable the token source reads when no config file
/// overrides it.
pub const DEFAULT_TOKEN_ENV: &str = "KLAVIYO_API_TOKEN";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub transport: TransportSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Overridable for tests; everything real goes to a.klaviyo.com.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Name of the environment variable holding the bearer token.
    /// The token itself is read per call, never stored here.
    #[serde(default = "default_token_env")]
    pub token_env: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportSettings {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Settings {
    pub fn from_yaml(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ApiError::ConfigError(format!("failed to read config file: {e}")))?;
        Self::from_str(&content)
    }

    pub fn from_str(yaml: &str) -> Result<Self> {
        let expanded = substitute_env_vars(yaml)?;
        let settings: Settings = serde_yaml::from_str(&expanded)
            .map_err(|e| ApiError::ConfigError(format!("failed to parse YAML: {e}")))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Pure-environment configuration for running without a file:
    /// `KLAVIYO_BASE_URL` overrides the host, `KLAVIYO_API_TOKEN`
    /// holds the bearer token.
    pub fn from_env() -> Result<Self> {
        let mut settings = Settings::default();
        if let Ok(base_url) = env::var("KLAVIYO_BASE_URL") {
            settings.api.base_url = base_url;
        }
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.api.base_url.is_empty() {
            return Err(ApiError::ConfigError("base_url cannot be empty".into()));
        }
        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://") {
            return Err(ApiError::ConfigError(format!(
                "base_url must be an http(s) URL, got '{}'",
                self.api.base_url
            )));
        }
        if self.api.token_env.is_empty() {
            return Err(ApiError::ConfigError("token_env cannot be empty".into()));
        }
        if self.transport.timeout_secs == 0 {
            return Err(ApiError::ConfigError(
                "transport timeout must be at least one second".into(),
            ));
        }
        Ok(())
    }

    /// Base URL with any trailing slash stripped, ready for the
    /// request builder to append an absolute path.
    pub fn base_url(&self) -> &str {
        self.api.base_url.trim_end_matches('/')
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiSettings::default(),
            transport: TransportSettings::default(),
        }
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token_env: default_token_env(),
        }
    }
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_token_env() -> String {
    DEFAULT_TOKEN_ENV.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let yaml = r#"
api:
  base_url: https://a.klaviyo.com/
  token_env: KLAVIYO_API_TOKEN

transport:
  timeout_secs: 15
"#;
        let settings = Settings::from_str(yaml).unwrap();
        assert_eq!(settings.base_url(), "https://a.klaviyo.com");
        assert_eq!(settings.api.token_env, "KLAVIYO_API_TOKEN");
        assert_eq!(settings.transport.timeout_secs, 15);
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::from_str("{}").unwrap();
        assert_eq!(settings.base_url(), DEFAULT_BASE_URL);
        assert_eq!(settings.api.token_env, DEFAULT_TOKEN_ENV);
        assert_eq!(settings.transport.timeout_secs, 30);
    }

    #[test]
    fn test_validation_rejects_bad_base_url() {
        let yaml = r#"
api:
  base_url: a.klaviyo.com
"#;
        assert!(Settings::from_str(yaml).is_err());
    }

    #[test]
    fn test_from_yaml_reads_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "api:\n  base_url: https://a.klaviyo.com\n").unwrap();
        let settings = Settings::from_yaml(&path).unwrap();
        assert_eq!(settings.base_url(), "https://a.klaviyo.com");
        assert!(Settings::from_yaml(dir.path().join("missing.yaml")).is_err());
    }

    #[test]
    fn test_env_substitution_in_config() {
        env::set_var("KLAVIYO_TEST_HOST", "https://sandbox.example.com");
        let yaml = r#"
api:
  base_url: ${KLAVIYO_TEST_HOST}
"#;
        let settings = Settings::from_str(yaml).unwrap();
        assert_eq!(settings.base_url(), "https://sandbox.example.com");
        env::remove_var("KLAVIYO_TEST_HOST");
    }
}
