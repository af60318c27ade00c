use serde::{Deserialize, Serialize};

use prompt_bench_core::{CompletionProvider, ProviderResponse, Result, Task};

use crate::strategy::Strategy;
use crate::templates::PromptLibrary;

/// One strategy execution against one task, before scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyRun {
    pub task: Task,
    pub strategy: Strategy,
    pub prompt: String,
    pub response: ProviderResponse,
}

/// Sequences prompt generation and provider dispatch.
///
/// Dispatch is strictly sequential: one provider call per (task, strategy)
/// pair, awaited to completion before the next, no caching or deduplication.
pub struct StrategyRunner {
    library: PromptLibrary,
    strategies: Vec<Strategy>,
}

impl StrategyRunner {
    /// Runner with the default template library and all strategies in
    /// registration order.
    pub fn new() -> Self {
        Self::with_strategies(Strategy::ALL.to_vec())
    }

    /// Restrict the runner to a subset of strategies. Order is preserved.
    pub fn with_strategies(strategies: Vec<Strategy>) -> Self {
        Self {
            library: PromptLibrary::default(),
            strategies,
        }
    }

    pub fn with_library(mut self, library: PromptLibrary) -> Self {
        self.library = library;
        self
    }

    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    /// Run a single strategy on a single task. Fails only on configuration
    /// errors (no template for the pair); upstream failures come back as a
    /// `StrategyRun` whose response has `success == false`.
    pub async fn run_one(
        &self,
        strategy: Strategy,
        task: &Task,
        provider: &dyn CompletionProvider,
    ) -> Result<StrategyRun> {
        let prompt = self.library.generate_prompt(strategy, task)?;

        tracing::debug!(
            task_id = task.id,
            strategy = %strategy,
            provider = provider.label(),
            "dispatching completion"
        );
        let response = provider.complete(&prompt).await;

        if !response.success {
            tracing::warn!(
                task_id = task.id,
                strategy = %strategy,
                error = %response.error_message,
                "provider call failed"
            );
        }

        Ok(StrategyRun {
            task: task.clone(),
            strategy,
            prompt,
            response,
        })
    }

    /// Run every registered strategy on one task, in registration order.
    ///
    /// A configuration error on one strategy is logged and skipped; the rest
    /// of the batch proceeds.
    pub async fn run_all_strategies(
        &self,
        task: &Task,
        provider: &dyn CompletionProvider,
    ) -> Vec<StrategyRun> {
        let mut runs = Vec::with_capacity(self.strategies.len());

        for &strategy in &self.strategies {
            match self.run_one(strategy, task, provider).await {
                Ok(run) => runs.push(run),
                Err(e) => {
                    tracing::error!(
                        task_id = task.id,
                        strategy = %strategy,
                        error = %e,
                        "skipping strategy"
                    );
                }
            }
        }

        runs
    }

    /// Cartesian product of tasks and strategies, flattened task-major.
    pub async fn run_on_tasks(
        &self,
        tasks: &[Task],
        provider: &dyn CompletionProvider,
    ) -> Vec<StrategyRun> {
        let mut all_runs = Vec::with_capacity(tasks.len() * self.strategies.len());

        for task in tasks {
            let runs = self.run_all_strategies(task, provider).await;
            all_runs.extend(runs);
        }

        all_runs
    }
}

impl Default for StrategyRunner {
    fn default() -> Self {
        Self::new()
    }
}
