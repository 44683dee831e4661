//! Agent and model configuration types.

use serde::{Deserialize, Serialize};

use factory_core::FactorySettings;

use crate::error::{ExecutorError, ExecutorResult};
use crate::profile;
use crate::role::AgentRole;
use crate::tool::ToolCapability;

/// LLM provider behind a model binding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    /// OpenRouter API (multi-model access, OpenAI-compatible wire format).
    #[default]
    OpenRouter,
    /// OpenAI API.
    OpenAI,
    /// Anthropic API (Claude models).
    Anthropic,
    /// Local Ollama server (no API key).
    Ollama,
}

impl Provider {
    /// Parse a provider name, case-insensitively.
    ///
    /// Unsupported names are a configuration error, surfaced when the
    /// binding is resolved rather than silently defaulted.
    pub fn parse(name: &str) -> ExecutorResult<Self> {
        match name.to_lowercase().as_str() {
            "openrouter" => Ok(Self::OpenRouter),
            "openai" => Ok(Self::OpenAI),
            "anthropic" => Ok(Self::Anthropic),
            "ollama" => Ok(Self::Ollama),
            other => Err(ExecutorError::Configuration(format!(
                "unsupported LLM provider: {other}"
            ))),
        }
    }

    /// Whether this provider requires an API key.
    pub fn requires_api_key(&self) -> bool {
        !matches!(self, Self::Ollama)
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OpenRouter => write!(f, "openrouter"),
            Self::OpenAI => write!(f, "openai"),
            Self::Anthropic => write!(f, "anthropic"),
            Self::Ollama => write!(f, "ollama"),
        }
    }
}

/// Model configuration for an agent's LLM binding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// LLM provider to use.
    pub provider: Provider,

    /// Model identifier (e.g. "anthropic/claude-3.5-sonnet").
    pub model: String,

    /// Sampling temperature (0.0 to 2.0).
    pub temperature: f32,

    /// Maximum tokens to generate.
    pub max_tokens: u32,

    /// API key for the provider, if it requires one.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub api_key: Option<String>,

    /// Endpoint base URL.
    pub base_url: String,
}

impl ModelConfig {
    /// Resolve a model configuration from factory settings.
    ///
    /// Picks the API key and base URL matching the configured provider.
    /// An unsupported provider name is rejected here.
    pub fn from_settings(settings: &FactorySettings) -> ExecutorResult<Self> {
        let provider = Provider::parse(&settings.default_provider)?;

        let (api_key, base_url) = match provider {
            Provider::OpenRouter => (
                settings.openrouter_api_key.clone(),
                settings.openrouter_base_url.clone(),
            ),
            Provider::OpenAI => (
                settings.openai_api_key.clone(),
                settings.openai_base_url.clone(),
            ),
            Provider::Anthropic => (
                settings.anthropic_api_key.clone(),
                settings.anthropic_base_url.clone(),
            ),
            Provider::Ollama => (None, settings.ollama_base_url.clone()),
        };

        Ok(Self {
            provider,
            model: settings.default_model.clone(),
            temperature: settings.default_temperature,
            max_tokens: settings.default_max_tokens,
            api_key,
            base_url,
        })
    }

    /// Set the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the sampling temperature, clamped to [0.0, 2.0].
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature.clamp(0.0, 2.0);
        self
    }
}

/// Configuration for one agent, immutable once constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Role identity.
    pub role: AgentRole,

    /// What the agent is trying to achieve.
    pub goal: String,

    /// Persona backstory for the system prompt.
    pub backstory: String,

    /// Declared tool capabilities.
    pub tools: Vec<ToolCapability>,

    /// Verbose execution.
    pub verbose: bool,

    /// Whether the agent may delegate work.
    pub allow_delegation: bool,

    /// Advisory iteration cap handed to the execution layer.
    pub max_iterations: u32,

    /// Whether the execution layer should keep per-agent memory.
    pub memory: bool,
}

impl AgentConfig {
    /// Build the configuration for a role from its static profile.
    pub fn for_role(role: AgentRole, settings: &FactorySettings) -> Self {
        let profile = profile::profile(role);
        Self {
            role,
            goal: profile.goal.to_string(),
            backstory: profile.backstory.to_string(),
            tools: profile.tools.to_vec(),
            verbose: settings.agent_verbose,
            allow_delegation: profile.allow_delegation,
            max_iterations: settings.max_iterations,
            memory: true,
        }
    }
}
