//! Factory settings loaded from the environment.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Environment variable for the deployment environment.
pub const ENVIRONMENT_ENV: &str = "FACTORY_ENVIRONMENT";

/// Environment variable for the default LLM provider.
pub const PROVIDER_ENV: &str = "FACTORY_LLM_PROVIDER";

/// Environment variable for the default model identifier.
pub const MODEL_ENV: &str = "FACTORY_MODEL";

/// Environment variable for the default sampling temperature.
pub const TEMPERATURE_ENV: &str = "FACTORY_TEMPERATURE";

/// Environment variable for the default max completion tokens.
pub const MAX_TOKENS_ENV: &str = "FACTORY_MAX_TOKENS";

/// Environment variable for the advisory per-agent iteration cap.
pub const MAX_ITERATIONS_ENV: &str = "FACTORY_MAX_ITERATIONS";

/// Environment variable for the advisory per-agent timeout in seconds.
pub const AGENT_TIMEOUT_ENV: &str = "FACTORY_AGENT_TIMEOUT";

/// Environment variable for verbose agent execution.
pub const AGENT_VERBOSE_ENV: &str = "FACTORY_AGENT_VERBOSE";

/// Environment variables for provider API keys.
pub const OPENROUTER_API_KEY_ENV: &str = "OPENROUTER_API_KEY";
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const ANTHROPIC_API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// Environment variables for provider endpoint overrides.
pub const OPENROUTER_BASE_URL_ENV: &str = "OPENROUTER_BASE_URL";
pub const OPENAI_BASE_URL_ENV: &str = "OPENAI_BASE_URL";
pub const ANTHROPIC_BASE_URL_ENV: &str = "ANTHROPIC_BASE_URL";
pub const OLLAMA_BASE_URL_ENV: &str = "OLLAMA_BASE_URL";

const DEFAULT_PROVIDER: &str = "openrouter";
const DEFAULT_MODEL: &str = "anthropic/claude-3.5-sonnet";
const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_MAX_TOKENS: u32 = 4096;
const DEFAULT_MAX_ITERATIONS: u32 = 10;
const DEFAULT_AGENT_TIMEOUT_SECS: u64 = 300;

const DEFAULT_OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";
// Ollama serves its OpenAI-compatible API under /v1.
const DEFAULT_OLLAMA_BASE_URL: &str = "http://localhost:11434/v1";

/// Errors raised while loading or validating settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Environment name outside the allowed set.
    #[error("invalid environment: {0} (expected development, staging, production, or testing)")]
    InvalidEnvironment(String),

    /// A numeric or boolean variable failed to parse.
    #[error("invalid value for {var}: {message}")]
    InvalidValue {
        /// Name of the offending variable.
        var: String,
        /// Parse error message.
        message: String,
    },
}

/// Result type for settings operations.
pub type Result<T> = std::result::Result<T, SettingsError>;

/// Deployment environment for the factory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development (the default).
    #[default]
    Development,
    /// Staging deployment.
    Staging,
    /// Production deployment.
    Production,
    /// Test runs.
    Testing,
}

impl Environment {
    /// Parse an environment name, case-insensitively.
    pub fn parse(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "development" => Ok(Self::Development),
            "staging" => Ok(Self::Staging),
            "production" => Ok(Self::Production),
            "testing" => Ok(Self::Testing),
            other => Err(SettingsError::InvalidEnvironment(other.to_string())),
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Staging => write!(f, "staging"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Runtime settings for the factory pipeline.
///
/// Provider names are kept as strings here; the agent crate resolves them
/// into a concrete LLM binding and rejects unsupported values at that point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorySettings {
    /// Deployment environment.
    pub environment: Environment,

    /// Default LLM provider name (openrouter, openai, anthropic, ollama).
    pub default_provider: String,

    /// Default model identifier.
    pub default_model: String,

    /// Default sampling temperature.
    pub default_temperature: f32,

    /// Default max completion tokens.
    pub default_max_tokens: u32,

    /// Advisory iteration cap handed to the execution layer.
    pub max_iterations: u32,

    /// Advisory per-agent timeout in seconds.
    pub agent_timeout_secs: u64,

    /// Whether agents run with verbose execution.
    pub agent_verbose: bool,

    /// OpenRouter API key.
    pub openrouter_api_key: Option<String>,

    /// OpenAI API key.
    pub openai_api_key: Option<String>,

    /// Anthropic API key.
    pub anthropic_api_key: Option<String>,

    /// OpenRouter endpoint base URL.
    pub openrouter_base_url: String,

    /// OpenAI endpoint base URL.
    pub openai_base_url: String,

    /// Anthropic endpoint base URL.
    pub anthropic_base_url: String,

    /// Ollama endpoint base URL (no API key required).
    pub ollama_base_url: String,
}

impl Default for FactorySettings {
    fn default() -> Self {
        Self {
            environment: Environment::Development,
            default_provider: DEFAULT_PROVIDER.into(),
            default_model: DEFAULT_MODEL.into(),
            default_temperature: DEFAULT_TEMPERATURE,
            default_max_tokens: DEFAULT_MAX_TOKENS,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            agent_timeout_secs: DEFAULT_AGENT_TIMEOUT_SECS,
            agent_verbose: false,
            openrouter_api_key: None,
            openai_api_key: None,
            anthropic_api_key: None,
            openrouter_base_url: DEFAULT_OPENROUTER_BASE_URL.into(),
            openai_base_url: DEFAULT_OPENAI_BASE_URL.into(),
            anthropic_base_url: DEFAULT_ANTHROPIC_BASE_URL.into(),
            ollama_base_url: DEFAULT_OLLAMA_BASE_URL.into(),
        }
    }
}

impl FactorySettings {
    /// Load settings from the process environment.
    ///
    /// A `.env` file in the working directory is loaded first when present;
    /// variables already set in the environment take precedence. Unset
    /// variables fall back to the defaults above.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let mut settings = Self::default();

        if let Ok(value) = std::env::var(ENVIRONMENT_ENV) {
            settings.environment = Environment::parse(&value)?;
        }
        if let Ok(value) = std::env::var(PROVIDER_ENV) {
            settings.default_provider = value.to_lowercase();
        }
        if let Ok(value) = std::env::var(MODEL_ENV) {
            settings.default_model = value;
        }
        if let Ok(value) = std::env::var(TEMPERATURE_ENV) {
            settings.default_temperature = parse_var(TEMPERATURE_ENV, &value)?;
        }
        if let Ok(value) = std::env::var(MAX_TOKENS_ENV) {
            settings.default_max_tokens = parse_var(MAX_TOKENS_ENV, &value)?;
        }
        if let Ok(value) = std::env::var(MAX_ITERATIONS_ENV) {
            settings.max_iterations = parse_var(MAX_ITERATIONS_ENV, &value)?;
        }
        if let Ok(value) = std::env::var(AGENT_TIMEOUT_ENV) {
            settings.agent_timeout_secs = parse_var(AGENT_TIMEOUT_ENV, &value)?;
        }
        if let Ok(value) = std::env::var(AGENT_VERBOSE_ENV) {
            settings.agent_verbose = parse_var(AGENT_VERBOSE_ENV, &value)?;
        }

        settings.openrouter_api_key = std::env::var(OPENROUTER_API_KEY_ENV).ok();
        settings.openai_api_key = std::env::var(OPENAI_API_KEY_ENV).ok();
        settings.anthropic_api_key = std::env::var(ANTHROPIC_API_KEY_ENV).ok();

        if let Ok(value) = std::env::var(OPENROUTER_BASE_URL_ENV) {
            settings.openrouter_base_url = value;
        }
        if let Ok(value) = std::env::var(OPENAI_BASE_URL_ENV) {
            settings.openai_base_url = value;
        }
        if let Ok(value) = std::env::var(ANTHROPIC_BASE_URL_ENV) {
            settings.anthropic_base_url = value;
        }
        if let Ok(value) = std::env::var(OLLAMA_BASE_URL_ENV) {
            settings.ollama_base_url = value;
        }

        debug!(
            environment = %settings.environment,
            provider = %settings.default_provider,
            model = %settings.default_model,
            "settings loaded from environment"
        );

        Ok(settings)
    }

    /// Set the default provider name.
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.default_provider = provider.into().to_lowercase();
        self
    }

    /// Set the default model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    /// Set the default sampling temperature, clamped to [0.0, 2.0].
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.default_temperature = temperature.clamp(0.0, 2.0);
        self
    }

    /// Set the default max completion tokens.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.default_max_tokens = max_tokens;
        self
    }

    /// Set the deployment environment.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Check if running in production.
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Check if running in development.
    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}

fn parse_var<T>(var: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e: T::Err| SettingsError::InvalidValue {
        var: var.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = FactorySettings::default();

        assert_eq!(settings.environment, Environment::Development);
        assert_eq!(settings.default_provider, "openrouter");
        assert_eq!(settings.default_model, "anthropic/claude-3.5-sonnet");
        assert_eq!(settings.default_temperature, 0.7);
        assert_eq!(settings.default_max_tokens, 4096);
        assert_eq!(settings.max_iterations, 10);
        assert!(!settings.agent_verbose);
        assert!(settings.openrouter_api_key.is_none());
    }

    #[test]
    fn test_environment_parse() {
        assert_eq!(
            Environment::parse("development").unwrap(),
            Environment::Development
        );
        assert_eq!(
            Environment::parse("PRODUCTION").unwrap(),
            Environment::Production
        );
        assert_eq!(Environment::parse("testing").unwrap(), Environment::Testing);

        let err = Environment::parse("qa-lab").unwrap_err();
        assert!(matches!(err, SettingsError::InvalidEnvironment(_)));
    }

    #[test]
    fn test_environment_display() {
        assert_eq!(Environment::Development.to_string(), "development");
        assert_eq!(Environment::Production.to_string(), "production");
    }

    #[test]
    fn test_builder() {
        let settings = FactorySettings::default()
            .with_provider("Anthropic")
            .with_model("claude-3-opus")
            .with_temperature(0.2)
            .with_max_tokens(1024)
            .with_environment(Environment::Production);

        assert_eq!(settings.default_provider, "anthropic");
        assert_eq!(settings.default_model, "claude-3-opus");
        assert_eq!(settings.default_temperature, 0.2);
        assert_eq!(settings.default_max_tokens, 1024);
        assert!(settings.is_production());
        assert!(!settings.is_development());
    }

    #[test]
    fn test_temperature_clamping() {
        let settings = FactorySettings::default().with_temperature(5.0);
        assert_eq!(settings.default_temperature, 2.0);

        let settings = FactorySettings::default().with_temperature(-1.0);
        assert_eq!(settings.default_temperature, 0.0);
    }

    #[test]
    fn test_parse_var_errors() {
        let err = parse_var::<u32>(MAX_TOKENS_ENV, "not-a-number").unwrap_err();
        match err {
            SettingsError::InvalidValue { var, .. } => assert_eq!(var, MAX_TOKENS_ENV),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_serialization() {
        let settings = FactorySettings::default().with_model("test-model");
        let json = serde_json::to_string(&settings).unwrap();
        let parsed: FactorySettings = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.default_model, "test-model");
        assert_eq!(parsed.environment, settings.environment);
    }
}
