//! Pipeline phases and their role assignments.

use serde::{Deserialize, Serialize};

use factory_agent::AgentRole;

/// One stage of the project pipeline. Ordering is significant and fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectPhase {
    Planning,
    Architecture,
    Development,
    Testing,
    Deployment,
    Documentation,
}

impl ProjectPhase {
    /// All phases in pipeline order.
    pub const ALL: [ProjectPhase; 6] = [
        Self::Planning,
        Self::Architecture,
        Self::Development,
        Self::Testing,
        Self::Deployment,
        Self::Documentation,
    ];

    /// Roles responsible for this phase, in execution order.
    pub fn roles(&self) -> &'static [AgentRole] {
        match self {
            Self::Planning => &[AgentRole::Architect],
            Self::Architecture => &[
                AgentRole::Architect,
                AgentRole::DatabaseEngineer,
                AgentRole::SecurityAnalyst,
            ],
            Self::Development => &[
                AgentRole::BackendDeveloper,
                AgentRole::FrontendDeveloper,
                AgentRole::DatabaseEngineer,
            ],
            Self::Testing => &[AgentRole::QaEngineer, AgentRole::SecurityAnalyst],
            Self::Deployment => &[AgentRole::DevOpsEngineer],
            Self::Documentation => &[AgentRole::TechnicalWriter],
        }
    }

    /// Snake-case phase name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Planning => "planning",
            Self::Architecture => "architecture",
            Self::Development => "development",
            Self::Testing => "testing",
            Self::Deployment => "deployment",
            Self::Documentation => "documentation",
        }
    }
}

impl std::fmt::Display for ProjectPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome classification of one phase execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseStatus {
    /// The phase's task batch ran to completion.
    Completed,
    /// Execution raised an error; the pipeline halts here.
    Failed,
    /// No agents or no tasks for this phase; non-fatal.
    Skipped,
}

impl std::fmt::Display for PhaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Completed => f.write_str("completed"),
            Self::Failed => f.write_str("failed"),
            Self::Skipped => f.write_str("skipped"),
        }
    }
}
