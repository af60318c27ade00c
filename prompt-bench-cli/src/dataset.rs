//! Benchmark task loading.
//!
//! The nine assignment tasks ship embedded in the binary; a data directory
//! with the same file names overrides them. Tasks are validated eagerly so a
//! bad record never reaches the runner.

use std::path::Path;

use anyhow::{Context, Result};
use prompt_bench_core::{Task, TaskType};

const EMBEDDED_LOGIC: &str = include_str!("../data/logic_puzzles.json");
const EMBEDDED_MATH: &str = include_str!("../data/math_problems.json");
const EMBEDDED_REASONING: &str = include_str!("../data/reasoning_tasks.json");

const DATASET_FILES: [&str; 3] = [
    "logic_puzzles.json",
    "math_problems.json",
    "reasoning_tasks.json",
];

/// Load all tasks, preferring files under `data_dir` when given.
///
/// An unreadable or malformed override file logs a warning and the embedded
/// set is used instead; a task failing validation is always fatal.
pub fn load_tasks(data_dir: Option<&Path>) -> Result<Vec<Task>> {
    if let Some(dir) = data_dir {
        match load_from_dir(dir) {
            Ok(tasks) => return Ok(tasks),
            Err(e) => {
                tracing::warn!(
                    dir = %dir.display(),
                    error = %e,
                    "could not load datasets from directory, using embedded data"
                );
            }
        }
    }

    let mut tasks = Vec::new();
    for source in [EMBEDDED_LOGIC, EMBEDDED_MATH, EMBEDDED_REASONING] {
        tasks.extend(parse_tasks(source)?);
    }
    Ok(tasks)
}

/// First `n_per_type` tasks of each type, in type order.
pub fn sample_tasks(tasks: &[Task], n_per_type: usize) -> Vec<Task> {
    let mut sampled = Vec::new();
    for task_type in [TaskType::Logic, TaskType::Math, TaskType::Reasoning] {
        sampled.extend(
            tasks
                .iter()
                .filter(|t| t.task_type == task_type)
                .take(n_per_type)
                .cloned(),
        );
    }
    sampled
}

fn load_from_dir(dir: &Path) -> Result<Vec<Task>> {
    let mut tasks = Vec::new();
    for file_name in DATASET_FILES {
        let path = dir.join(file_name);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        tasks.extend(
            parse_tasks(&content).with_context(|| format!("parsing {}", path.display()))?,
        );
    }
    Ok(tasks)
}

fn parse_tasks(json: &str) -> Result<Vec<Task>> {
    let tasks: Vec<Task> = serde_json::from_str(json).context("invalid task JSON")?;
    for task in &tasks {
        task.validate_fields()
            .with_context(|| format!("task {} failed validation", task.id))?;
    }
    Ok(tasks)
}
