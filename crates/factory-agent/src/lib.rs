//! Agent types for the AI software factory.
//!
//! This crate defines the role-playing agents that staff a project pipeline:
//! their role identities, static prompt profiles, per-role task templates,
//! the shared project context, and the execution seam that the orchestration
//! layer drives them through.
//!
//! # Overview
//!
//! An agent is a fixed role (architect, backend developer, QA engineer, ...)
//! bound to a model. Agents do not talk to providers themselves; they render
//! tasks and prompts, and a [`TaskExecutor`] carries the batch out. The
//! production executor ([`LlmExecutor`]) drives each task through the agent's
//! [`LlmBinding`]; tests substitute scripted executors.
//!
//! # Core Types
//!
//! - [`AgentRole`]: Closed enum of the ten factory roles
//! - [`RoleProfile`]: Static goal/backstory/tool data per role
//! - [`ProjectAgent`]: A role bound to a model, ready to execute
//! - [`ProjectContext`]: String-keyed JSON context threaded through a run
//! - [`Task`]: One unit of agent work, rendered from a template
//! - [`TaskExecutor`]: The execution seam between orchestration and models
//! - [`ModelConfig`]: Provider, model, and sampling configuration
//!
//! # Example
//!
//! ```ignore
//! use factory_agent::{AgentConfig, AgentRole, LlmExecutor, ModelConfig, ProjectAgent, ProjectContext};
//! use factory_core::FactorySettings;
//!
//! let settings = FactorySettings::from_env()?;
//! let model = ModelConfig::from_settings(&settings)?;
//! let config = AgentConfig::for_role(AgentRole::Architect, &settings);
//! let architect = ProjectAgent::new(config, model);
//!
//! let ctx = ProjectContext::with_project_name("Acme CRM");
//! let run = architect.execute(&ctx, &LlmExecutor::new()).await?;
//! ```

pub mod agent;
pub mod config;
pub mod context;
pub mod error;
pub mod executor;
pub mod llm;
pub mod profile;
pub mod role;
pub mod task;
pub mod templates;
pub mod tool;

// Re-export commonly used items
pub use agent::{AgentRun, ProjectAgent, RunStatus};
pub use config::{AgentConfig, ModelConfig, Provider};
pub use context::{keys, ProjectContext, UNKNOWN_PROJECT};
pub use error::{ExecutorError, ExecutorResult};
pub use executor::{LlmExecutor, TaskExecutor};
pub use llm::LlmBinding;
pub use profile::{profile, RoleProfile};
pub use role::AgentRole;
pub use task::Task;
pub use tool::ToolCapability;
