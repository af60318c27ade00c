use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::task::Task;

/// The four rubric sub-scores, each in `0..=3`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreCard {
    pub correctness: u8,
    pub reasoning_clarity: u8,
    pub completeness: u8,
    pub conciseness: u8,
}

impl ScoreCard {
    pub const MAX_SUB_SCORE: u8 = 3;

    pub fn new(correctness: u8, reasoning_clarity: u8, completeness: u8, conciseness: u8) -> Self {
        Self {
            correctness,
            reasoning_clarity,
            completeness,
            conciseness,
        }
    }

    pub fn total(&self) -> u8 {
        self.correctness + self.reasoning_clarity + self.completeness + self.conciseness
    }
}

/// Scored outcome of one (task, strategy) execution.
///
/// Snapshots the task fields it reports on so a result stays usable after the
/// source collection is gone. Created once, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub task_id: i64,
    pub question: String,
    pub expected_answer: String,
    pub strategy: String,
    pub prompt_used: String,
    pub response_text: String,
    pub model_used: String,
    pub tokens_used: u32,
    pub scores: ScoreCard,
    pub created_at: DateTime<Utc>,
}

impl EvaluationResult {
    pub const MAX_SCORE: u8 = 12;

    #[allow(clippy::too_many_arguments)]
    pub fn new(
        task: &Task,
        strategy: impl Into<String>,
        prompt_used: impl Into<String>,
        response_text: impl Into<String>,
        model_used: impl Into<String>,
        tokens_used: u32,
        scores: ScoreCard,
    ) -> Self {
        Self {
            task_id: task.id,
            question: task.question.clone(),
            expected_answer: task.expected_answer.clone(),
            strategy: strategy.into(),
            prompt_used: prompt_used.into(),
            response_text: response_text.into(),
            model_used: model_used.into(),
            tokens_used,
            scores,
            created_at: Utc::now(),
        }
    }

    pub fn total_score(&self) -> u8 {
        self.scores.total()
    }
}
