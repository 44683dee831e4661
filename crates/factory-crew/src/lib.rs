//! Phase pipeline orchestration for the AI software factory.
//!
//! A project run moves through six fixed phases (planning, architecture,
//! development, testing, deployment, documentation), each staffed by a fixed
//! set of roles. The [`ProjectCrew`] owns the agent roster, the shared
//! context, and an ordered results log; it executes phases one at a time and
//! records one [`CrewResult`] per execution.
//!
//! Execution errors never unwind through the phase loop: they are captured
//! into `failed` results, and the full pipeline halts by inspecting the
//! status value. Phases with nothing to do yield `skipped` results, which do
//! not halt the pipeline.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use factory_agent::{LlmExecutor, ProjectContext};
//! use factory_core::FactorySettings;
//! use factory_crew::ProjectCrew;
//!
//! let settings = FactorySettings::from_env()?;
//! let context = ProjectContext::with_project_name("Acme CRM");
//! let mut crew = ProjectCrew::new(context, &settings, Arc::new(LlmExecutor::new()))?;
//!
//! let results = crew.execute_full_pipeline().await;
//! for result in &results {
//!     println!("{}: {}", result.phase, result.status);
//! }
//! ```

pub mod batch;
pub mod crew;
pub mod factory;
pub mod phase;

pub use batch::TaskBatch;
pub use crew::{CrewResult, ProjectCrew};
pub use factory::AgentFactory;
pub use phase::{PhaseStatus, ProjectPhase};
