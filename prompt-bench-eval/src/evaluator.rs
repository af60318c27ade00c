use regex::Regex;

use prompt_bench_core::{EvaluationResult, ScoreCard, TaskType};
use prompt_bench_strategies::{Strategy, StrategyRun};

/// Step-structure indicators expected in chain-of-thought output.
const COT_STEP_INDICATORS: [&str; 7] = [
    "step",
    "first",
    "second",
    "next",
    "then",
    "therefore",
    "because",
];

/// Logical connectors expected in any reasoned answer.
const REASONING_CONNECTORS: [&str; 8] = [
    "because",
    "since",
    "therefore",
    "thus",
    "hence",
    "so",
    "if",
    "then",
];

/// Rule-based scorer for model responses.
///
/// Pure and deterministic: the same (task, response, strategy, prompt) tuple
/// always scores identically. Each rubric yields 0..=3 and the branches are
/// checked in a fixed order with no blending of signals.
#[derive(Debug, Clone)]
pub struct ResponseEvaluator {
    digit_run: Regex,
}

impl ResponseEvaluator {
    pub fn new() -> Self {
        Self {
            // First integer literal encountered, left to right.
            digit_run: Regex::new(r"\d+").expect("digit-run pattern is valid"),
        }
    }

    /// Score a completed run across all four rubrics.
    ///
    /// A failed provider call short-circuits to an all-zero score card with
    /// the error message recorded as the response text.
    pub fn evaluate(&self, run: &StrategyRun) -> EvaluationResult {
        if !run.response.success {
            tracing::debug!(
                task_id = run.task.id,
                strategy = %run.strategy,
                "scoring failed response as zero"
            );
            return EvaluationResult::new(
                &run.task,
                run.strategy.name(),
                run.prompt.clone(),
                format!("API Error: {}", run.response.error_message),
                run.response.provider_label.clone(),
                0,
                ScoreCard::default(),
            );
        }

        let scores = ScoreCard::new(
            self.correctness(
                &run.task.expected_answer,
                &run.response.text,
                run.task.task_type,
            ),
            self.reasoning_clarity(&run.response.text, run.strategy),
            self.completeness(&run.response.text, run.strategy),
            self.conciseness(&run.response.text, run.strategy),
        );

        EvaluationResult::new(
            &run.task,
            run.strategy.name(),
            run.prompt.clone(),
            run.response.text.clone(),
            run.response.provider_label.clone(),
            run.response.total_tokens(),
            scores,
        )
    }

    /// Correctness, dispatched by task type. First matching branch wins.
    pub fn correctness(&self, expected: &str, actual: &str, task_type: TaskType) -> u8 {
        let expected_lower = expected.trim().to_lowercase();
        let actual_lower = actual.trim().to_lowercase();

        match task_type {
            TaskType::Math => {
                // Compare the first integer literal on each side. If either
                // side has none, fall through to the generic text match.
                let expected_num = self.first_digit_run(expected);
                let actual_num = self.first_digit_run(actual);

                if let (Some(e), Some(a)) = (expected_num, actual_num) {
                    return if e == a { 3 } else { 0 };
                }
            }
            TaskType::Logic => {
                if actual_lower.contains(&expected_lower) {
                    return 3;
                }

                let key_words: Vec<&str> = expected_lower.split_whitespace().collect();
                let matches = key_words
                    .iter()
                    .filter(|w| actual_lower.contains(**w))
                    .count();
                return if matches as f64 > key_words.len() as f64 * 0.5 {
                    2
                } else {
                    1
                };
            }
            TaskType::Reasoning => {
                if expected_lower.contains("not necessarily")
                    && actual_lower.contains("not necessarily")
                {
                    return 3;
                }
                if expected_lower.contains("necessarily") && actual_lower.contains("necessarily") {
                    return 3;
                }
                if expected_lower
                    .split_whitespace()
                    .any(|w| actual_lower.contains(w))
                {
                    return 2;
                }
                return 1;
            }
        }

        // Generic fallback: exact equality, then containment either way.
        if expected_lower == actual_lower {
            3
        } else if actual_lower.contains(&expected_lower) || expected_lower.contains(&actual_lower) {
            2
        } else {
            1
        }
    }

    /// Reasoning clarity: count of distinct indicator words present, with a
    /// stricter indicator set and thresholds for chain-of-thought output.
    pub fn reasoning_clarity(&self, response: &str, strategy: Strategy) -> u8 {
        let response_lower = response.to_lowercase();

        if strategy == Strategy::ChainOfThought {
            let hits = Self::distinct_hits(&response_lower, &COT_STEP_INDICATORS);
            match hits {
                h if h >= 3 => 3,
                h if h >= 2 => 2,
                _ => 1,
            }
        } else {
            let hits = Self::distinct_hits(&response_lower, &REASONING_CONNECTORS);
            match hits {
                h if h >= 2 => 3,
                h if h >= 1 => 2,
                _ => 1,
            }
        }
    }

    /// Completeness: trimmed character count as a length proxy.
    /// Chain-of-thought is expected to be more detailed.
    pub fn completeness(&self, response: &str, strategy: Strategy) -> u8 {
        let length = response.trim().chars().count();

        if strategy == Strategy::ChainOfThought {
            match length {
                l if l >= 200 => 3,
                l if l >= 100 => 2,
                _ => 1,
            }
        } else {
            match length {
                l if l >= 50 => 3,
                l if l >= 20 => 2,
                _ => 1,
            }
        }
    }

    /// Conciseness: word count, inverted relative to completeness. The
    /// chain-of-thought budget is looser because longer output is expected.
    pub fn conciseness(&self, response: &str, strategy: Strategy) -> u8 {
        let word_count = response.split_whitespace().count();

        if strategy == Strategy::ChainOfThought {
            match word_count {
                w if w <= 150 => 3,
                w if w <= 250 => 2,
                _ => 1,
            }
        } else {
            match word_count {
                w if w <= 50 => 3,
                w if w <= 100 => 2,
                _ => 1,
            }
        }
    }

    fn first_digit_run(&self, text: &str) -> Option<String> {
        self.digit_run.find(text).map(|m| m.as_str().to_string())
    }

    fn distinct_hits(haystack: &str, needles: &[&str]) -> usize {
        needles.iter().filter(|n| haystack.contains(**n)).count()
    }
}

impl Default for ResponseEvaluator {
    fn default() -> Self {
        Self::new()
    }
}
