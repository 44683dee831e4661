//! Task type: one unit of agent-generated work.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::role::AgentRole;

/// An immutable unit of work produced by a role's task templates.
///
/// The `agent` field records the originating role; many tasks may reference
/// the same agent. Tasks are never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier.
    pub id: Uuid,

    /// Natural-language instruction, rendered from a template plus context.
    pub description: String,

    /// Description of the expected output.
    pub expected_output: String,

    /// Role of the originating agent.
    pub agent: AgentRole,
}

impl Task {
    /// Create a new task for the given role.
    pub fn new(
        agent: AgentRole,
        description: impl Into<String>,
        expected_output: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            expected_output: expected_output.into(),
            agent,
        }
    }

    /// Short ID for logging (first 8 chars).
    pub fn short_id(&self) -> String {
        self.id.to_string()[..8].to_string()
    }
}
