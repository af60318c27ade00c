use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use prompt_bench_core::{CoreError, EvaluationResult, Result};

/// Per-strategy aggregate statistics over a result collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StrategySummary {
    pub strategy: String,
    pub sample_count: usize,
    pub avg_total: f64,
    pub avg_correctness: f64,
    pub avg_reasoning_clarity: f64,
    pub avg_completeness: f64,
    pub avg_conciseness: f64,
    pub avg_tokens: f64,
    pub total_tokens: u64,
}

#[derive(Debug, Default)]
struct Accumulator {
    count: usize,
    total: u64,
    correctness: u64,
    reasoning_clarity: u64,
    completeness: u64,
    conciseness: u64,
    tokens: u64,
}

impl Accumulator {
    fn push(&mut self, result: &EvaluationResult) {
        self.count += 1;
        self.total += u64::from(result.total_score());
        self.correctness += u64::from(result.scores.correctness);
        self.reasoning_clarity += u64::from(result.scores.reasoning_clarity);
        self.completeness += u64::from(result.scores.completeness);
        self.conciseness += u64::from(result.scores.conciseness);
        self.tokens += u64::from(result.tokens_used);
    }

    fn summarize(&self, strategy: &str) -> StrategySummary {
        let n = self.count as f64;
        StrategySummary {
            strategy: strategy.to_string(),
            sample_count: self.count,
            avg_total: self.total as f64 / n,
            avg_correctness: self.correctness as f64 / n,
            avg_reasoning_clarity: self.reasoning_clarity as f64 / n,
            avg_completeness: self.completeness as f64 / n,
            avg_conciseness: self.conciseness as f64 / n,
            avg_tokens: self.tokens as f64 / n,
            total_tokens: self.tokens,
        }
    }
}

/// Pure aggregation over evaluation results, grouped by strategy.
///
/// Failed runs are already zero-scored results and count toward the means.
pub struct ResultAnalyzer;

impl ResultAnalyzer {
    /// Group results by strategy and compute averages.
    ///
    /// Strategies appear in first-appearance order over the input, which makes
    /// the rendered report deterministic. An empty input is an explicit error,
    /// never a division by zero.
    pub fn aggregate(results: &[EvaluationResult]) -> Result<Vec<StrategySummary>> {
        if results.is_empty() {
            return Err(CoreError::EmptyResults);
        }

        let mut order: Vec<String> = Vec::new();
        let mut buckets: HashMap<String, Accumulator> = HashMap::new();

        for result in results {
            if !buckets.contains_key(&result.strategy) {
                order.push(result.strategy.clone());
            }
            buckets.entry(result.strategy.clone()).or_default().push(result);
        }

        Ok(order
            .iter()
            .map(|strategy| buckets[strategy].summarize(strategy))
            .collect())
    }

    /// Render the human-readable comparison report.
    ///
    /// Plain markdown text; the caller owns writing it to a file or console.
    pub fn render_report(results: &[EvaluationResult]) -> Result<String> {
        let summaries = Self::aggregate(results)?;
        let total_tokens: u64 = results.iter().map(|r| u64::from(r.tokens_used)).sum();

        let mut report = String::new();
        report.push_str("# Prompting Strategy Comparison Report\n\n");
        report.push_str(&format!("**Total Tokens Used**: {}\n", total_tokens));
        report.push_str(&format!("**Model Used**: {}\n\n", results[0].model_used));
        report.push_str("## Strategy Performance Summary\n\n");

        for summary in &summaries {
            report.push_str(&format!("### {}\n", summary.strategy.to_uppercase()));
            report.push_str(&format!(
                "- **Average Total Score**: {:.1}/12\n",
                summary.avg_total
            ));
            report.push_str(&format!(
                "- **Correctness**: {:.1}/3\n",
                summary.avg_correctness
            ));
            report.push_str(&format!(
                "- **Reasoning Clarity**: {:.1}/3\n",
                summary.avg_reasoning_clarity
            ));
            report.push_str(&format!(
                "- **Completeness**: {:.1}/3\n",
                summary.avg_completeness
            ));
            report.push_str(&format!(
                "- **Conciseness**: {:.1}/3\n",
                summary.avg_conciseness
            ));
            report.push_str(&format!("- **Average Tokens**: {:.0}\n", summary.avg_tokens));
            report.push_str(&format!("- **Total Tokens**: {}\n\n", summary.total_tokens));
        }

        Ok(report)
    }
}
