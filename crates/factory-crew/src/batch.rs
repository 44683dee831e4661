//! Ad-hoc task batches outside the phase pipeline.

use tracing::{debug, info};

use factory_agent::{
    AgentRun, ExecutorResult, ProjectAgent, ProjectContext, Task, TaskExecutor,
};

/// A group of agents and their combined task list, ready to run as one
/// sequential batch.
///
/// Phases build their batches internally; this type exists for callers that
/// want to run a custom group (for example the factory's development or
/// review crews) against a context directly.
#[derive(Debug)]
pub struct TaskBatch {
    agents: Vec<ProjectAgent>,
    tasks: Vec<Task>,
}

impl TaskBatch {
    /// Build a batch from a group of agents, generating each agent's tasks
    /// from the context in roster order.
    pub fn for_agents(agents: Vec<ProjectAgent>, ctx: &ProjectContext) -> Self {
        let tasks = agents.iter().flat_map(|agent| agent.tasks(ctx)).collect();
        Self { agents, tasks }
    }

    /// The agents in this batch.
    pub fn agents(&self) -> &[ProjectAgent] {
        &self.agents
    }

    /// The combined task list, in execution order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Run the batch through an executor.
    ///
    /// An empty batch resolves to a `NoTasks` run without calling the
    /// executor.
    pub async fn kickoff(&self, executor: &dyn TaskExecutor) -> ExecutorResult<AgentRun> {
        if self.tasks.is_empty() {
            debug!("batch has no tasks, nothing to run");
            return Ok(AgentRun::no_tasks());
        }

        info!(agents = self.agents.len(), tasks = self.tasks.len(), "running batch");
        let agents: Vec<&ProjectAgent> = self.agents.iter().collect();
        let output = executor.run_batch(&agents, &self.tasks).await?;
        Ok(AgentRun::completed(output))
    }
}
