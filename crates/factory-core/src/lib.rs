//! Shared runtime settings for the AI Factory pipeline.
//!
//! This crate holds the configuration value that every other factory crate
//! receives explicitly at construction time. There is no ambient global:
//! callers build a [`FactorySettings`] (from defaults, the environment, or
//! the builder methods) and pass it down to the agent roster and the LLM
//! binding factory.
//!
//! # Environment Variables
//!
//! - `FACTORY_ENVIRONMENT`: development, staging, production, or testing
//! - `FACTORY_LLM_PROVIDER`: openrouter, openai, anthropic, or ollama
//! - `FACTORY_MODEL`: default model identifier
//! - `FACTORY_TEMPERATURE` / `FACTORY_MAX_TOKENS`: sampling defaults
//! - `FACTORY_MAX_ITERATIONS` / `FACTORY_AGENT_TIMEOUT` / `FACTORY_AGENT_VERBOSE`:
//!   agent behavior knobs
//! - `OPENROUTER_API_KEY`, `OPENAI_API_KEY`, `ANTHROPIC_API_KEY`: provider keys
//! - `OPENROUTER_BASE_URL`, `OPENAI_BASE_URL`, `ANTHROPIC_BASE_URL`,
//!   `OLLAMA_BASE_URL`: provider endpoint overrides

pub mod settings;

pub use settings::{Environment, FactorySettings, SettingsError};
