//! Run Solver use case
//!
//! Orchestrates the full step-execution flow: decompose the goal into atomic
//! steps, route each step to a model profile, then solve each step in order
//! by generating candidates, judging a winner, validating it, and
//! accumulating into the state snapshot. Steps run strictly in order — each
//! step's prompt embeds the snapshot built by its predecessors — while
//! candidate generation inside a step runs concurrently.

use crate::config::SolverParams;
use crate::ports::completion::{BackendError, CompletionBackend, CompletionRequest};
use crate::ports::progress::{NoProgress, SolveProgressNotifier};
use ballot_domain::{
    BACKEND_FAILURE_PREFIX, CandidateSet, DomainError, Goal, Model, Profile, RoutingDecodeError,
    SolveReport, SolverPromptTemplate, StateSnapshot, StepPlan, StepRecord, StepState,
    TaskClassification, decode_classifications, strip_markup_tags, validate,
};
use futures::future::join_all;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can abort a solver run
///
/// Almost nothing does: backend failures become sentinel text, decomposition
/// failures degrade to a one-step plan, judging failures default to the
/// first candidate, and validation failures are repaired or skipped. The
/// one unrecoverable condition is an undecodable routing response.
#[derive(Error, Debug)]
pub enum RunSolverError {
    #[error("Routing decode failed: {0}")]
    RoutingDecode(#[from] RoutingDecodeError),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}

/// Input for the RunSolver use case
#[derive(Debug, Clone)]
pub struct RunSolverInput {
    /// The goal to decompose and solve
    pub goal: Goal,
    /// Caller-supplied background text, immutable for the run
    pub context: String,
}

impl RunSolverInput {
    pub fn new(goal: impl Into<Goal>, context: impl Into<String>) -> Self {
        Self {
            goal: goal.into(),
            context: context.into(),
        }
    }
}

/// Use case for running the atomic solver
pub struct RunSolverUseCase<G: CompletionBackend + 'static> {
    backend: Arc<G>,
    params: SolverParams,
    worker: Model,
    finalizer: Model,
}

impl<G: CompletionBackend + 'static> RunSolverUseCase<G> {
    pub fn new(backend: Arc<G>) -> Self {
        Self {
            backend,
            params: SolverParams::default(),
            worker: Model::default_worker(),
            finalizer: Model::default_finalizer(),
        }
    }

    pub fn with_params(mut self, params: SolverParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_worker(mut self, model: Model) -> Self {
        self.worker = model;
        self
    }

    pub fn with_finalizer(mut self, model: Model) -> Self {
        self.finalizer = model;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: RunSolverInput) -> Result<SolveReport, RunSolverError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: RunSolverInput,
        progress: &dyn SolveProgressNotifier,
    ) -> Result<SolveReport, RunSolverError> {
        let RunSolverInput { goal, context } = input;

        info!("Starting solver run");
        let mut snapshot = StateSnapshot::new(context);
        let mut rng = match self.params.shuffle_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        // Phase 1: Decomposition
        let plan = self.decompose(&snapshot, &goal).await;
        progress.on_plan_ready(plan.steps(), plan.is_degraded());

        // Phase 2: Routing
        let classifications = self.route(&plan).await?;
        progress.on_routing_ready(&classifications);

        // Phase 3: Step execution, strictly in plan order
        let total = plan.len();
        let mut records = Vec::with_capacity(total);

        for (index, instruction) in plan.steps().iter().enumerate() {
            progress.on_step_start(index, total, instruction);

            let record = self
                .solve_step(
                    &mut snapshot,
                    &mut rng,
                    &classifications[index],
                    instruction,
                    index,
                    plan.is_final(index),
                    progress,
                )
                .await?;

            progress.on_step_complete(&record);
            records.push(record);
        }

        let contributed = records.iter().filter(|r| r.state.contributed()).count();
        info!("Solver run done: {contributed}/{total} steps contributed");

        Ok(SolveReport::new(
            goal.content(),
            snapshot.into_solution(),
            records,
            plan.is_degraded(),
        ))
    }

    /// Phase 1: break the goal into atomic steps. Never fails — an
    /// undecodable response degrades to the one-step plan `[goal]`.
    async fn decompose(&self, snapshot: &StateSnapshot, goal: &Goal) -> StepPlan {
        info!("Decomposing goal");
        let prompt = SolverPromptTemplate::decompose(&snapshot.prompt_context(), goal.content());
        let raw = self
            .complete_soft(
                &self.worker,
                CompletionRequest::new(prompt).with_reasoning(true),
            )
            .await;

        let plan = StepPlan::from_response(&raw, goal.content());
        if plan.is_degraded() {
            warn!("Decomposition response not decodable, degrading to single-step plan");
        } else {
            debug!("Plan has {} steps", plan.len());
        }
        plan
    }

    /// Phase 2: classify every step to a profile. Undecodable output is
    /// fatal — there is no fallback routing.
    async fn route(&self, plan: &StepPlan) -> Result<Vec<TaskClassification>, RunSolverError> {
        info!("Routing {} steps", plan.len());
        let prompt = SolverPromptTemplate::route(plan.steps());
        let raw = self
            .complete_soft(
                &self.worker,
                CompletionRequest::new(prompt).with_reasoning(true),
            )
            .await;

        Ok(decode_classifications(&raw, plan.len())?)
    }

    /// Solve one step: candidates → shuffle → judge → validate → accumulate,
    /// with a single repair attempt on rejection. A step that fails both
    /// gates is skipped; the run continues.
    #[allow(clippy::too_many_arguments)]
    async fn solve_step(
        &self,
        snapshot: &mut StateSnapshot,
        rng: &mut StdRng,
        classification: &TaskClassification,
        instruction: &str,
        index: usize,
        is_final: bool,
        progress: &dyn SolveProgressNotifier,
    ) -> Result<StepRecord, RunSolverError> {
        let model = if is_final && self.params.escalate_final {
            &self.finalizer
        } else {
            &self.worker
        };

        debug!(
            "Step {index}: profile {} on {model}",
            classification.profile
        );
        let mut record = StepRecord::new(index, instruction, classification.profile);

        // Generate candidates from the same prompt at increasing temperature
        let prompt = SolverPromptTemplate::solve(&snapshot.prompt_context(), instruction);
        let candidates = self
            .generate_candidates(model, classification.profile, &prompt, index, progress)
            .await;

        let mut set = CandidateSet::new(candidates)?;
        set.shuffle(rng);

        // Judge the shuffled set
        let judge_prompt = SolverPromptTemplate::judge(instruction, &set);
        let reply = self
            .complete_soft(
                model,
                CompletionRequest::new(judge_prompt).with_temperature(self.params.base_temperature),
            )
            .await;
        let winner = strip_markup_tags(set.pick_winner(&reply)).trim().to_string();
        record.state = StepState::Solved;

        // Validate, with one self-correction attempt
        let verdict = validate(&winner);
        if verdict.accepted {
            if verdict.is_warning() {
                warn!("Step {index}: {}", verdict.message);
            }
            Self::accumulate(snapshot, is_final, instruction, &winner);
            snapshot.clear_failure();
            record.resolve(StepState::Validated, verdict.message);
            return Ok(record);
        }

        warn!("Step {index}: validation failed ({})", verdict.message);
        snapshot.record_failure(verdict.message.clone());

        let repair_prompt = SolverPromptTemplate::repair(&verdict.message, &winner);
        let repaired = self
            .complete_soft(model, CompletionRequest::new(repair_prompt))
            .await;

        let second = validate(&repaired);
        if second.accepted {
            if second.is_warning() {
                warn!("Step {index}: {}", second.message);
            }
            Self::accumulate(snapshot, is_final, instruction, repaired.trim());
            snapshot.clear_failure();
            record.resolve(StepState::Repaired, second.message);
        } else {
            warn!("Step {index}: repair failed ({}), skipping step", second.message);
            record.resolve(StepState::Skipped, second.message);
        }

        Ok(record)
    }

    /// Generate `vote_count` candidates concurrently. Output order matches
    /// candidate index, so temperature assignment stays deterministic.
    async fn generate_candidates(
        &self,
        model: &Model,
        profile: Profile,
        prompt: &str,
        step_index: usize,
        progress: &dyn SolveProgressNotifier,
    ) -> Vec<String> {
        let vote_count = self.params.vote_count;
        let calls = (0..vote_count).map(|candidate_index| {
            let request = CompletionRequest::new(prompt.to_string())
                .with_temperature(self.params.temperature_for(candidate_index))
                .with_reasoning(profile.uses_reasoning());

            async move {
                let text = self.complete_soft(model, request).await;
                progress.on_candidate_done(step_index, candidate_index, vote_count);
                text
            }
        });

        join_all(calls).await
    }

    /// Soft-fail completion boundary: applies the per-call timeout and
    /// converts every backend failure into sentinel text the validator will
    /// reject, so a transient error degrades the pipeline instead of
    /// aborting the run.
    async fn complete_soft(&self, model: &Model, request: CompletionRequest) -> String {
        let call = self.backend.complete(model, request);

        let outcome = match self.params.request_timeout {
            Some(limit) => match tokio::time::timeout(limit, call).await {
                Ok(result) => result,
                Err(_) => Err(BackendError::Timeout),
            },
            None => call.await,
        };

        match outcome {
            Ok(text) => text.trim().to_string(),
            Err(error) => {
                warn!("Completion on {model} failed: {error}");
                format!("{BACKEND_FAILURE_PREFIX} {error}")
            }
        }
    }

    /// Intermediate steps append a labeled section; the final step's output
    /// is the whole report and replaces the solution outright.
    fn accumulate(snapshot: &mut StateSnapshot, is_final: bool, instruction: &str, text: &str) {
        if is_final {
            snapshot.replace_solution(text);
        } else {
            snapshot.append_section(instruction, text);
        }
    }
}
