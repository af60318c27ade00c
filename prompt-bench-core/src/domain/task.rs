use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{CoreError, Result};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    Logic,
    Math,
    Reasoning,
}

impl std::fmt::Display for TaskType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Logic => write!(f, "logic"),
            Self::Math => write!(f, "math"),
            Self::Reasoning => write!(f, "reasoning"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Medium
    }
}

/// A single benchmark question with its reference answer.
///
/// Validated at construction; immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Task {
    pub id: i64,
    pub task_type: TaskType,
    #[validate(length(min = 1))]
    pub question: String,
    #[validate(length(min = 1))]
    pub expected_answer: String,
    #[serde(default)]
    pub difficulty: Difficulty,
}

impl Task {
    pub fn new(
        id: i64,
        task_type: TaskType,
        question: impl Into<String>,
        expected_answer: impl Into<String>,
        difficulty: Difficulty,
    ) -> Result<Self> {
        let task = Self {
            id,
            task_type,
            question: question.into(),
            expected_answer: expected_answer.into(),
            difficulty,
        };
        task.validate_fields()?;
        Ok(task)
    }

    /// Re-check invariants on a deserialized task before it enters a run.
    pub fn validate_fields(&self) -> Result<()> {
        self.validate()
            .map_err(|e| CoreError::Validation(e.to_string()))?;

        // Whitespace-only fields pass the length check but are still unusable.
        if self.question.trim().is_empty() {
            return Err(CoreError::Validation(
                "task question cannot be empty".to_string(),
            ));
        }
        if self.expected_answer.trim().is_empty() {
            return Err(CoreError::Validation(
                "task expected answer cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
