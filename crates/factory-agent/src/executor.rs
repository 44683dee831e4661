//! Task execution seam.
//!
//! The orchestration layer never talks to a model directly; it hands a batch
//! of agents and tasks to a `TaskExecutor` and gets back a single output
//! value or an error. Production runs use [`LlmExecutor`]; tests substitute
//! stubs to script success and failure without network access.

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

use crate::agent::ProjectAgent;
use crate::error::{ExecutorError, ExecutorResult};
use crate::task::Task;

/// Executes a batch of tasks against a set of agents.
///
/// Implementations must execute tasks sequentially in list order and return
/// the output of the final task. Any task failure aborts the batch.
#[async_trait]
pub trait TaskExecutor: Send + Sync {
    /// Run the tasks and return the final task's output.
    async fn run_batch(&self, agents: &[&ProjectAgent], tasks: &[Task]) -> ExecutorResult<Value>;
}

/// Production executor that drives each task through its agent's model
/// binding.
///
/// Tasks run sequentially; each task's prompt carries the outputs of the
/// tasks before it, so later tasks can build on earlier results the way a
/// sequential crew does.
#[derive(Debug, Clone, Copy, Default)]
pub struct LlmExecutor;

impl LlmExecutor {
    /// Create a new executor.
    pub fn new() -> Self {
        Self
    }

    fn agent_for<'a>(
        agents: &[&'a ProjectAgent],
        task: &Task,
    ) -> ExecutorResult<&'a ProjectAgent> {
        agents
            .iter()
            .find(|a| a.role() == task.agent)
            .copied()
            .ok_or_else(|| {
                ExecutorError::Configuration(format!(
                    "no agent available for role {}",
                    task.agent
                ))
            })
    }

    fn user_prompt(task: &Task, prior_outputs: &[(String, String)]) -> String {
        let mut prompt = String::new();
        if !prior_outputs.is_empty() {
            prompt.push_str("Results from earlier tasks:\n\n");
            for (role, output) in prior_outputs {
                prompt.push_str(&format!("[{role}]\n{output}\n\n"));
            }
        }
        prompt.push_str(&task.description);
        prompt.push_str(&format!("\n\nExpected output: {}", task.expected_output));
        prompt
    }
}

#[async_trait]
impl TaskExecutor for LlmExecutor {
    async fn run_batch(&self, agents: &[&ProjectAgent], tasks: &[Task]) -> ExecutorResult<Value> {
        let mut prior_outputs: Vec<(String, String)> = Vec::new();
        let mut last_output = String::new();

        for task in tasks {
            let agent = Self::agent_for(agents, task)?;
            debug!(task = %task.short_id(), role = %task.agent, "running task");

            let system = agent.system_prompt();
            let user = Self::user_prompt(task, &prior_outputs);
            let output = agent.binding().chat(&system, &user).await?;

            info!(task = %task.short_id(), role = %task.agent, "task completed");
            prior_outputs.push((task.agent.title().to_string(), output.clone()));
            last_output = output;
        }

        Ok(Value::String(last_output))
    }
}
