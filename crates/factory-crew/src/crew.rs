//! Project crew orchestration.
//!
//! A [`ProjectCrew`] owns a roster of agents, the shared project context,
//! and an ordered results log. Phases execute one at a time; each execution
//! appends exactly one [`CrewResult`] to the log. Execution failures are
//! captured as `failed` results instead of propagating, so the halt-on-failure
//! check in the full pipeline is a plain value comparison.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{info, warn};

use factory_agent::{
    keys, AgentConfig, AgentRole, ExecutorResult, ModelConfig, ProjectAgent, ProjectContext, Task,
    TaskExecutor,
};
use factory_core::FactorySettings;

use crate::phase::{PhaseStatus, ProjectPhase};

/// Outcome of one phase execution. Appended to the results log and never
/// mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewResult {
    /// Which phase ran.
    pub phase: ProjectPhase,

    /// How it ended.
    pub status: PhaseStatus,

    /// Phase outputs; `{"result": <raw batch output>}` on success, empty
    /// otherwise.
    pub outputs: Map<String, Value>,

    /// Error strings; empty on success.
    pub errors: Vec<String>,

    /// When the phase execution finished.
    pub finished_at: DateTime<Utc>,
}

impl CrewResult {
    /// A successful phase carrying the raw batch output.
    pub fn completed(phase: ProjectPhase, result: Value) -> Self {
        let mut outputs = Map::new();
        outputs.insert("result".to_string(), result);
        Self {
            phase,
            status: PhaseStatus::Completed,
            outputs,
            errors: Vec::new(),
            finished_at: Utc::now(),
        }
    }

    /// A failed phase carrying the captured error message.
    pub fn failed(phase: ProjectPhase, message: impl Into<String>) -> Self {
        Self {
            phase,
            status: PhaseStatus::Failed,
            outputs: Map::new(),
            errors: vec![message.into()],
            finished_at: Utc::now(),
        }
    }

    /// A skipped phase carrying the reason it did not run.
    pub fn skipped(phase: ProjectPhase, reason: impl Into<String>) -> Self {
        Self {
            phase,
            status: PhaseStatus::Skipped,
            outputs: Map::new(),
            errors: vec![reason.into()],
            finished_at: Utc::now(),
        }
    }

    /// The raw batch output, present only for completed results.
    pub fn result(&self) -> Option<&Value> {
        self.outputs.get("result")
    }
}

/// Orchestrator for one project pipeline run.
///
/// The roster is instantiated once at construction and reused across all
/// phases; agents hold no state between phases beyond their model binding.
pub struct ProjectCrew {
    context: ProjectContext,
    results: Vec<CrewResult>,
    agents: BTreeMap<AgentRole, ProjectAgent>,
    executor: Arc<dyn TaskExecutor>,
}

impl ProjectCrew {
    /// Create a crew with the default eight-role roster.
    pub fn new(
        context: ProjectContext,
        settings: &FactorySettings,
        executor: Arc<dyn TaskExecutor>,
    ) -> ExecutorResult<Self> {
        Self::with_roster(context, &AgentRole::ROSTER, settings, executor)
    }

    /// Create a crew with an explicit roster.
    pub fn with_roster(
        context: ProjectContext,
        roster: &[AgentRole],
        settings: &FactorySettings,
        executor: Arc<dyn TaskExecutor>,
    ) -> ExecutorResult<Self> {
        let model = ModelConfig::from_settings(settings)?;
        let agents = roster
            .iter()
            .map(|&role| {
                let config = AgentConfig::for_role(role, settings);
                (role, ProjectAgent::new(config, model.clone()))
            })
            .collect();

        Ok(Self {
            context,
            results: Vec::new(),
            agents,
            executor,
        })
    }

    /// The current context.
    pub fn context(&self) -> &ProjectContext {
        &self.context
    }

    /// The results log, in execution order.
    pub fn results(&self) -> &[CrewResult] {
        &self.results
    }

    /// Look up a roster agent by role.
    pub fn agent(&self, role: AgentRole) -> Option<&ProjectAgent> {
        self.agents.get(&role)
    }

    /// Execute one phase and append its result to the log.
    ///
    /// A phase with no roster agents or no generated tasks yields a
    /// `skipped` result and leaves the context untouched. Executor errors
    /// are captured into a `failed` result rather than returned.
    pub async fn execute_phase(&mut self, phase: ProjectPhase) -> CrewResult {
        info!(%phase, "executing phase");

        let agents: Vec<&ProjectAgent> = phase
            .roles()
            .iter()
            .filter_map(|role| self.agents.get(role))
            .collect();

        let result = if agents.is_empty() {
            warn!(%phase, "no agents assigned, skipping");
            CrewResult::skipped(phase, "No agents assigned to this phase")
        } else {
            let tasks: Vec<Task> = agents
                .iter()
                .flat_map(|agent| agent.tasks(&self.context))
                .collect();

            if tasks.is_empty() {
                warn!(%phase, "no tasks defined, skipping");
                CrewResult::skipped(phase, "No tasks defined for this phase")
            } else {
                info!(%phase, agents = agents.len(), tasks = tasks.len(), "running batch");
                match self.executor.run_batch(&agents, &tasks).await {
                    Ok(output) => CrewResult::completed(phase, output),
                    Err(err) => {
                        warn!(%phase, error = %err, "phase execution failed");
                        CrewResult::failed(phase, err.to_string())
                    }
                }
            }
        };

        if result.status == PhaseStatus::Completed {
            if let Some(output) = result.result() {
                self.apply_phase_output(phase, output.clone());
            }
        }

        info!(%phase, status = %result.status, "phase finished");
        self.results.push(result.clone());
        result
    }

    /// Execute all six phases in order, halting after the first `failed`
    /// result. Skipped phases do not halt the pipeline.
    ///
    /// Returns the accumulated results log, including entries from earlier
    /// invocations; the log is never reset.
    pub async fn execute_full_pipeline(&mut self) -> Vec<CrewResult> {
        for phase in ProjectPhase::ALL {
            let result = self.execute_phase(phase).await;
            if result.status == PhaseStatus::Failed {
                warn!(%phase, "pipeline halted");
                break;
            }
        }
        self.results.clone()
    }

    /// Merge a completed phase's output into the context.
    ///
    /// Only planning and architecture write back; the whitelist is
    /// deliberately narrow, and other phases leave the context untouched.
    fn apply_phase_output(&mut self, phase: ProjectPhase, output: Value) {
        match phase {
            ProjectPhase::Planning => self.context.insert(keys::API_SPEC, output),
            ProjectPhase::Architecture => self.context.insert(keys::ARCHITECTURE, output),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use factory_agent::ExecutorError;
    use serde_json::json;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Executor that returns a fixed outcome for every batch.
    struct FixedExecutor(Result<Value, String>);

    #[async_trait]
    impl TaskExecutor for FixedExecutor {
        async fn run_batch(
            &self,
            _agents: &[&ProjectAgent],
            _tasks: &[Task],
        ) -> ExecutorResult<Value> {
            match &self.0 {
                Ok(value) => Ok(value.clone()),
                Err(message) => Err(ExecutorError::Upstream(message.clone())),
            }
        }
    }

    /// Executor that replays a scripted sequence of outcomes.
    struct SequenceExecutor(Mutex<VecDeque<Result<Value, String>>>);

    impl SequenceExecutor {
        fn new(outcomes: Vec<Result<Value, String>>) -> Self {
            Self(Mutex::new(outcomes.into()))
        }
    }

    #[async_trait]
    impl TaskExecutor for SequenceExecutor {
        async fn run_batch(
            &self,
            _agents: &[&ProjectAgent],
            _tasks: &[Task],
        ) -> ExecutorResult<Value> {
            let outcome = self
                .0
                .lock()
                .unwrap()
                .pop_front()
                .expect("executor called more times than scripted");
            match outcome {
                Ok(value) => Ok(value),
                Err(message) => Err(ExecutorError::Upstream(message)),
            }
        }
    }

    fn crew(executor: Arc<dyn TaskExecutor>) -> ProjectCrew {
        let context = ProjectContext::with_project_name("Acme");
        ProjectCrew::new(context, &FactorySettings::default(), executor).unwrap()
    }

    #[tokio::test]
    async fn test_planning_success_sets_api_spec() {
        let executor = Arc::new(FixedExecutor(Ok(json!({"ok": true}))));
        let mut crew = crew(executor);

        let result = crew.execute_phase(ProjectPhase::Planning).await;

        assert_eq!(result.phase, ProjectPhase::Planning);
        assert_eq!(result.status, PhaseStatus::Completed);
        assert_eq!(result.outputs.get("result"), Some(&json!({"ok": true})));
        assert!(result.errors.is_empty());
        assert_eq!(crew.context().get(keys::API_SPEC), Some(&json!({"ok": true})));
        assert_eq!(crew.results().len(), 1);
    }

    #[tokio::test]
    async fn test_architecture_success_sets_architecture_key() {
        let executor = Arc::new(FixedExecutor(Ok(json!("the design"))));
        let mut crew = crew(executor);

        let result = crew.execute_phase(ProjectPhase::Architecture).await;

        assert_eq!(result.status, PhaseStatus::Completed);
        assert_eq!(
            crew.context().get(keys::ARCHITECTURE),
            Some(&json!("the design"))
        );
        assert!(!crew.context().contains(keys::API_SPEC));
    }

    #[tokio::test]
    async fn test_other_phases_never_mutate_context() {
        let executor = Arc::new(FixedExecutor(Ok(json!({"artifacts": 3}))));
        let mut crew = crew(executor);
        let before = crew.context().clone();

        for phase in [
            ProjectPhase::Development,
            ProjectPhase::Testing,
            ProjectPhase::Deployment,
            ProjectPhase::Documentation,
        ] {
            let result = crew.execute_phase(phase).await;
            assert_eq!(result.status, PhaseStatus::Completed);
        }

        assert_eq!(crew.context(), &before);
    }

    #[tokio::test]
    async fn test_phase_without_agents_is_skipped() {
        let executor = Arc::new(FixedExecutor(Ok(json!("unused"))));
        let context = ProjectContext::with_project_name("Acme");
        // Roster without an architect: planning has nobody to run it.
        let mut crew = ProjectCrew::with_roster(
            context,
            &[AgentRole::QaEngineer],
            &FactorySettings::default(),
            executor,
        )
        .unwrap();
        let before = crew.context().clone();

        let result = crew.execute_phase(ProjectPhase::Planning).await;

        assert_eq!(result.status, PhaseStatus::Skipped);
        assert_eq!(result.errors, vec!["No agents assigned to this phase"]);
        assert!(result.outputs.is_empty());
        assert_eq!(crew.context(), &before);
        assert_eq!(crew.results().len(), 1);
    }

    #[tokio::test]
    async fn test_failure_is_captured_not_propagated() {
        let executor = Arc::new(FixedExecutor(Err("timeout".to_string())));
        let mut crew = crew(executor);
        let before = crew.context().clone();

        let result = crew.execute_phase(ProjectPhase::Architecture).await;

        assert_eq!(result.status, PhaseStatus::Failed);
        assert_eq!(result.errors, vec!["timeout"]);
        assert!(result.outputs.is_empty());
        assert_eq!(crew.context(), &before);
    }

    #[tokio::test]
    async fn test_repeated_execution_appends_independent_results() {
        let executor = Arc::new(FixedExecutor(Ok(json!("spec"))));
        let mut crew = crew(executor);

        crew.execute_phase(ProjectPhase::Planning).await;
        crew.execute_phase(ProjectPhase::Planning).await;

        assert_eq!(crew.results().len(), 2);
        assert!(crew
            .results()
            .iter()
            .all(|r| r.status == PhaseStatus::Completed));
    }

    #[tokio::test]
    async fn test_pipeline_halts_after_first_failure() {
        let executor = Arc::new(SequenceExecutor::new(vec![
            Ok(json!("plan")),
            Err("timeout".to_string()),
        ]));
        let mut crew = crew(executor);

        let results = crew.execute_full_pipeline().await;

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].phase, ProjectPhase::Planning);
        assert_eq!(results[0].status, PhaseStatus::Completed);
        assert_eq!(results[1].phase, ProjectPhase::Architecture);
        assert_eq!(results[1].status, PhaseStatus::Failed);
        assert_eq!(results[1].errors, vec!["timeout"]);
    }

    #[tokio::test]
    async fn test_pipeline_runs_all_phases_on_success() {
        let executor = Arc::new(FixedExecutor(Ok(json!("done"))));
        let mut crew = crew(executor);

        let results = crew.execute_full_pipeline().await;

        assert_eq!(results.len(), 6);
        let phases: Vec<ProjectPhase> = results.iter().map(|r| r.phase).collect();
        assert_eq!(phases, ProjectPhase::ALL);
        assert!(results.iter().all(|r| r.status == PhaseStatus::Completed));
    }

    #[tokio::test]
    async fn test_skipped_phase_does_not_halt_pipeline() {
        let executor = Arc::new(FixedExecutor(Ok(json!("done"))));
        let context = ProjectContext::with_project_name("Acme");
        // No architect: planning and architecture degrade, later phases run.
        let roster = [
            AgentRole::BackendDeveloper,
            AgentRole::FrontendDeveloper,
            AgentRole::DatabaseEngineer,
            AgentRole::DevOpsEngineer,
            AgentRole::QaEngineer,
            AgentRole::SecurityAnalyst,
            AgentRole::TechnicalWriter,
        ];
        let mut crew =
            ProjectCrew::with_roster(context, &roster, &FactorySettings::default(), executor)
                .unwrap();

        let results = crew.execute_full_pipeline().await;

        assert_eq!(results.len(), 6);
        assert_eq!(results[0].status, PhaseStatus::Skipped);
        assert_eq!(results[1].status, PhaseStatus::Completed);
        assert_eq!(results[2].status, PhaseStatus::Completed);
    }

    #[tokio::test]
    async fn test_second_pipeline_run_returns_accumulated_log() {
        let executor = Arc::new(FixedExecutor(Ok(json!("done"))));
        let mut crew = crew(executor);

        let first = crew.execute_full_pipeline().await;
        assert_eq!(first.len(), 6);

        let second = crew.execute_full_pipeline().await;
        assert_eq!(second.len(), 12);
        assert_eq!(crew.results().len(), 12);
        assert_eq!(second[6].phase, ProjectPhase::Planning);
    }

    #[tokio::test]
    async fn test_default_roster() {
        let executor = Arc::new(FixedExecutor(Ok(json!("unused"))));
        let crew = crew(executor);

        for role in AgentRole::ROSTER {
            assert!(crew.agent(role).is_some(), "missing {role}");
        }
        assert!(crew.agent(AgentRole::ProductManager).is_none());
        assert!(crew.agent(AgentRole::TechLead).is_none());
    }
}
