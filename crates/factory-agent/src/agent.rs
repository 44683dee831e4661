//! Project agents: a role identity bound to a model.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::config::{AgentConfig, ModelConfig};
use crate::context::ProjectContext;
use crate::error::ExecutorResult;
use crate::executor::TaskExecutor;
use crate::llm::LlmBinding;
use crate::role::AgentRole;
use crate::task::Task;
use crate::templates;

/// How an agent run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    /// All tasks were executed.
    Completed,
    /// The role had no tasks for this context; nothing was executed.
    NoTasks,
}

/// Outcome of one agent run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentRun {
    /// How the run ended.
    pub status: RunStatus,

    /// Final task output, or `Null` when no tasks ran.
    pub output: Value,
}

impl AgentRun {
    /// A run that executed tasks and produced output.
    pub fn completed(output: Value) -> Self {
        Self {
            status: RunStatus::Completed,
            output,
        }
    }

    /// A run for a role with no tasks in this context.
    pub fn no_tasks() -> Self {
        Self {
            status: RunStatus::NoTasks,
            output: Value::Null,
        }
    }
}

/// One role-playing agent with an immutable configuration and a model binding.
#[derive(Debug, Clone)]
pub struct ProjectAgent {
    config: AgentConfig,
    binding: LlmBinding,
}

impl ProjectAgent {
    /// Create an agent from a role configuration and a model to bind it to.
    pub fn new(config: AgentConfig, model: ModelConfig) -> Self {
        Self {
            config,
            binding: LlmBinding::resolve(model),
        }
    }

    /// The agent's role.
    pub fn role(&self) -> AgentRole {
        self.config.role
    }

    /// The agent's configuration.
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// The model binding used for execution.
    pub fn binding(&self) -> &LlmBinding {
        &self.binding
    }

    /// Generate this role's tasks for the given context.
    pub fn tasks(&self, ctx: &ProjectContext) -> Vec<Task> {
        templates::tasks_for(self.config.role, ctx)
    }

    /// Render the system prompt from role, goal, backstory, and declared
    /// capabilities.
    pub fn system_prompt(&self) -> String {
        let mut prompt = format!(
            "You are the {role} on a software project.\n\
             \n\
             Goal: {goal}\n\
             \n\
             Backstory: {backstory}\n",
            role = self.config.role.title(),
            goal = self.config.goal,
            backstory = self.config.backstory,
        );

        if !self.config.tools.is_empty() {
            prompt.push_str("\nCapabilities available in your environment:\n");
            for tool in &self.config.tools {
                prompt.push_str(&format!("- {}: {}\n", tool.name(), tool.description()));
            }
        }

        prompt.push_str("\nProduce the requested deliverable directly, without preamble.");
        prompt
    }

    /// Run this agent's tasks for the given context through an executor.
    ///
    /// Returns a `NoTasks` run without touching the executor when the role
    /// has no tasks for this context.
    pub async fn execute(
        &self,
        ctx: &ProjectContext,
        executor: &dyn TaskExecutor,
    ) -> ExecutorResult<AgentRun> {
        let tasks = self.tasks(ctx);
        if tasks.is_empty() {
            info!(role = %self.config.role, "no tasks for role, skipping execution");
            return Ok(AgentRun::no_tasks());
        }

        debug!(role = %self.config.role, tasks = tasks.len(), "executing agent tasks");
        let agents = [self];
        let output = executor.run_batch(&agents, &tasks).await?;
        Ok(AgentRun::completed(output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::tests::StubExecutor;
    use factory_core::FactorySettings;
    use serde_json::json;

    fn agent(role: AgentRole) -> ProjectAgent {
        let settings = FactorySettings::default();
        let model = ModelConfig::from_settings(&settings).unwrap();
        let config = AgentConfig::for_role(role, &settings);
        ProjectAgent::new(config, model)
    }

    #[test]
    fn test_system_prompt_contains_profile() {
        let agent = agent(AgentRole::Architect);
        let prompt = agent.system_prompt();

        assert!(prompt.contains("You are the Architect"));
        assert!(prompt.contains("Design scalable"));
        assert!(prompt.contains("15+ years"));
    }

    #[test]
    fn test_system_prompt_lists_capabilities() {
        let prompt = agent(AgentRole::BackendDeveloper).system_prompt();
        assert!(prompt.contains("- file_read: read the contents of a file"));
        assert!(prompt.contains("- code_interpreter:"));

        let prompt = agent(AgentRole::DatabaseEngineer).system_prompt();
        assert!(prompt.contains("- file_read:"));
        assert!(!prompt.contains("- directory_read:"));
    }

    #[test]
    fn test_tasks_delegate_to_templates() {
        let agent = agent(AgentRole::DevOpsEngineer);
        let ctx = ProjectContext::with_project_name("Acme");

        let tasks = agent.tasks(&ctx);
        assert_eq!(tasks.len(), 3);
        assert!(tasks[0].description.contains("Acme"));
    }

    #[tokio::test]
    async fn test_execute_runs_tasks() {
        let agent = agent(AgentRole::QaEngineer);
        let ctx = ProjectContext::with_project_name("Acme");
        let executor = StubExecutor::succeeding(json!({"plan": "done"}));

        let run = agent.execute(&ctx, &executor).await.unwrap();
        assert_eq!(run.status, RunStatus::Completed);
        assert_eq!(run.output, json!({"plan": "done"}));
        assert_eq!(executor.calls(), 1);
    }

    #[tokio::test]
    async fn test_execute_with_no_tasks_skips_executor() {
        let agent = agent(AgentRole::ProductManager);
        let ctx = ProjectContext::with_project_name("Acme");
        let executor = StubExecutor::succeeding(json!("unused"));

        let run = agent.execute(&ctx, &executor).await.unwrap();
        assert_eq!(run.status, RunStatus::NoTasks);
        assert_eq!(run.output, Value::Null);
        assert_eq!(executor.calls(), 0);
    }
}
