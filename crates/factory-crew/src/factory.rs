//! Convenience constructors for single agents and pre-defined groups.

use tracing::debug;

use factory_agent::{
    AgentConfig, AgentRole, ExecutorResult, ModelConfig, ProjectAgent, ProjectContext,
};
use factory_core::FactorySettings;

use crate::batch::TaskBatch;

/// Builds agents on demand from a resolved model configuration.
///
/// The factory only instantiates roster roles; lookups for roles outside
/// the default roster (or unknown names) return `None` rather than erroring.
pub struct AgentFactory {
    settings: FactorySettings,
    model: ModelConfig,
}

impl AgentFactory {
    /// Create a factory from settings, resolving the model configuration
    /// once up front.
    pub fn new(settings: &FactorySettings) -> ExecutorResult<Self> {
        let model = ModelConfig::from_settings(settings)?;
        Ok(Self {
            settings: settings.clone(),
            model,
        })
    }

    /// Create a single agent by role name.
    ///
    /// Accepts both short keys ("qa") and full role names ("qa_engineer").
    /// Unknown names and non-roster roles yield `None`.
    pub fn create_agent(&self, name: &str) -> Option<ProjectAgent> {
        let role = AgentRole::parse(name)?;
        self.agent_for(role)
    }

    /// Create a single agent for a roster role.
    pub fn agent_for(&self, role: AgentRole) -> Option<ProjectAgent> {
        if !role.in_roster() {
            debug!(%role, "role not in roster");
            return None;
        }
        let config = AgentConfig::for_role(role, &self.settings);
        Some(ProjectAgent::new(config, self.model.clone()))
    }

    /// The implementation group: architect plus the three developers, with
    /// their tasks generated from the given context.
    pub fn development_crew(&self, ctx: &ProjectContext) -> TaskBatch {
        self.group(
            &[
                AgentRole::Architect,
                AgentRole::BackendDeveloper,
                AgentRole::FrontendDeveloper,
                AgentRole::DatabaseEngineer,
            ],
            ctx,
        )
    }

    /// The quality group: QA plus security.
    pub fn review_crew(&self, ctx: &ProjectContext) -> TaskBatch {
        self.group(&[AgentRole::QaEngineer, AgentRole::SecurityAnalyst], ctx)
    }

    fn group(&self, roles: &[AgentRole], ctx: &ProjectContext) -> TaskBatch {
        let agents = roles
            .iter()
            .filter_map(|&role| self.agent_for(role))
            .collect();
        TaskBatch::for_agents(agents, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factory() -> AgentFactory {
        AgentFactory::new(&FactorySettings::default()).unwrap()
    }

    #[test]
    fn test_create_agent_by_name() {
        let factory = factory();

        let agent = factory.create_agent("architect").unwrap();
        assert_eq!(agent.role(), AgentRole::Architect);

        let agent = factory.create_agent("qa_engineer").unwrap();
        assert_eq!(agent.role(), AgentRole::QaEngineer);
    }

    #[test]
    fn test_unknown_name_returns_none() {
        let factory = factory();
        assert!(factory.create_agent("astrologer").is_none());
        assert!(factory.create_agent("").is_none());
    }

    #[test]
    fn test_non_roster_roles_return_none() {
        let factory = factory();
        assert!(factory.create_agent("product_manager").is_none());
        assert!(factory.create_agent("tech_lead").is_none());
    }

    #[test]
    fn test_every_roster_role_is_constructible() {
        let factory = factory();
        for role in AgentRole::ROSTER {
            assert!(factory.agent_for(role).is_some(), "missing {role}");
        }
    }

    #[test]
    fn test_predefined_groups() {
        let factory = factory();
        let ctx = ProjectContext::with_project_name("Acme");

        let dev = factory.development_crew(&ctx);
        let roles: Vec<AgentRole> = dev.agents().iter().map(|a| a.role()).collect();
        assert_eq!(
            roles,
            vec![
                AgentRole::Architect,
                AgentRole::BackendDeveloper,
                AgentRole::FrontendDeveloper,
                AgentRole::DatabaseEngineer,
            ]
        );
        // 2 architect + 2 backend + 2 frontend + 2 database tasks.
        assert_eq!(dev.tasks().len(), 8);

        let review = factory.review_crew(&ctx);
        let roles: Vec<AgentRole> = review.agents().iter().map(|a| a.role()).collect();
        assert_eq!(roles, vec![AgentRole::QaEngineer, AgentRole::SecurityAnalyst]);
        assert_eq!(review.tasks().len(), 6);
    }

    #[test]
    fn test_unsupported_provider_fails_construction() {
        let settings = FactorySettings::default().with_provider("bedrock");
        assert!(AgentFactory::new(&settings).is_err());
    }
}
