use qm_answer::{Strictness, ValidatorConfig};
use serde::Deserialize;
use thiserror::Error;

/// Deployment environment, read from `ENV`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub const fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration from environment: {0}")]
    Env(#[from] envy::Error),
    #[error("Invalid similarity thresholds: {0}")]
    Threshold(String),
}

/// Service configuration, read from environment variables.
///
/// | Variable              | Default                  |
/// |-----------------------|--------------------------|
/// | `ENV`                 | `development`            |
/// | `PORT`                | `3000`                   |
/// | `ALLOWED_ORIGINS`     | `http://localhost:8080`  |
/// | `DEFAULT_STRICTNESS`  | `standard`               |
/// | `STANDARD_SIMILARITY` | `0.85`                   |
/// | `LENIENT_SIMILARITY`  | `0.75`                   |
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub env: Environment,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Comma-separated list of origins allowed by CORS
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: String,
    /// Strictness used when a request does not name one
    #[serde(default)]
    pub default_strictness: Strictness,
    #[serde(default = "default_standard_similarity")]
    pub standard_similarity: f64,
    #[serde(default = "default_lenient_similarity")]
    pub lenient_similarity: f64,
}

fn default_port() -> u16 {
    3000
}

fn default_allowed_origins() -> String {
    "http://localhost:8080".to_string()
}

const fn default_standard_similarity() -> f64 {
    ValidatorConfig::DEFAULT_STANDARD_SIMILARITY
}

const fn default_lenient_similarity() -> f64 {
    ValidatorConfig::DEFAULT_LENIENT_SIMILARITY
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            env: Environment::default(),
            port: default_port(),
            allowed_origins: default_allowed_origins(),
            default_strictness: Strictness::default(),
            standard_similarity: default_standard_similarity(),
            lenient_similarity: default_lenient_similarity(),
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let config: Self = envy::from_env()?;
        config.check()?;
        Ok(config)
    }

    /// Same as [`ApiConfig::from_env`], reading from the given pairs instead.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config: Self = envy::from_iter(vars)?;
        config.check()?;
        Ok(config)
    }

    pub fn parsed_allowed_origins(&self) -> Vec<String> {
        self.allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }

    pub const fn validator_config(&self) -> ValidatorConfig {
        ValidatorConfig {
            standard_similarity: self.standard_similarity,
            lenient_similarity: self.lenient_similarity,
        }
    }

    fn check(&self) -> Result<(), ConfigError> {
        let in_range = |t: f64| t > 0.0 && t <= 1.0;
        if !in_range(self.standard_similarity) || !in_range(self.lenient_similarity) {
            return Err(ConfigError::Threshold(format!(
                "thresholds must be in (0, 1], got standard={} lenient={}",
                self.standard_similarity, self.lenient_similarity
            )));
        }
        if self.lenient_similarity > self.standard_similarity {
            return Err(ConfigError::Threshold(format!(
                "lenient ({}) must not be stricter than standard ({})",
                self.lenient_similarity, self.standard_similarity
            )));
        }
        Ok(())
    }
}
