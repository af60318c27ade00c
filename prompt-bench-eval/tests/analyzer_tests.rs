use pretty_assertions::assert_eq;

use prompt_bench_core::{CoreError, Difficulty, EvaluationResult, ScoreCard, Task, TaskType};
use prompt_bench_eval::ResultAnalyzer;

fn result(strategy: &str, scores: ScoreCard, tokens: u32) -> EvaluationResult {
    let task = Task::new(
        1,
        TaskType::Math,
        "What is 23 x 17?",
        "391",
        Difficulty::Easy,
    )
    .unwrap();
    EvaluationResult::new(
        &task,
        strategy,
        "prompt",
        "response",
        "Gemini",
        tokens,
        scores,
    )
}

#[test]
fn test_aggregate_empty_input_is_error() {
    let err = ResultAnalyzer::aggregate(&[]).unwrap_err();
    assert!(matches!(err, CoreError::EmptyResults));

    let err = ResultAnalyzer::render_report(&[]).unwrap_err();
    assert!(matches!(err, CoreError::EmptyResults));
}

#[test]
fn test_aggregate_average_total() {
    let results = vec![
        result("cot", ScoreCard::new(3, 2, 2, 1), 100), // total 8
        result("cot", ScoreCard::new(3, 3, 2, 2), 120), // total 10
    ];

    let summaries = ResultAnalyzer::aggregate(&results).unwrap();

    assert_eq!(summaries.len(), 1);
    let cot = &summaries[0];
    assert_eq!(cot.strategy, "cot");
    assert_eq!(cot.sample_count, 2);
    assert_eq!(cot.avg_total, 9.0);
    assert_eq!(cot.avg_correctness, 3.0);
    assert_eq!(cot.avg_reasoning_clarity, 2.5);
    assert_eq!(cot.avg_tokens, 110.0);
    assert_eq!(cot.total_tokens, 220);
}

#[test]
fn test_aggregate_groups_in_first_appearance_order() {
    let results = vec![
        result("few_shot", ScoreCard::new(1, 1, 1, 1), 10),
        result("zero_shot", ScoreCard::new(2, 2, 2, 2), 20),
        result("few_shot", ScoreCard::new(3, 3, 3, 3), 30),
    ];

    let summaries = ResultAnalyzer::aggregate(&results).unwrap();

    let order: Vec<&str> = summaries.iter().map(|s| s.strategy.as_str()).collect();
    assert_eq!(order, vec!["few_shot", "zero_shot"]);
    assert_eq!(summaries[0].sample_count, 2);
    assert_eq!(summaries[0].avg_total, 8.0);
    assert_eq!(summaries[1].sample_count, 1);
}

#[test]
fn test_zero_scored_failures_count_toward_means() {
    let results = vec![
        result("zero_shot", ScoreCard::new(3, 3, 3, 3), 40),
        result("zero_shot", ScoreCard::default(), 0), // failed call
    ];

    let summaries = ResultAnalyzer::aggregate(&results).unwrap();

    assert_eq!(summaries[0].sample_count, 2);
    assert_eq!(summaries[0].avg_total, 6.0);
    assert_eq!(summaries[0].total_tokens, 40);
}

#[test]
fn test_render_report_contents() {
    let results = vec![
        result("zero_shot", ScoreCard::new(3, 2, 3, 3), 50),
        result("cot", ScoreCard::new(3, 3, 3, 2), 150),
    ];

    let report = ResultAnalyzer::render_report(&results).unwrap();

    assert!(report.starts_with("# Prompting Strategy Comparison Report"));
    assert!(report.contains("**Total Tokens Used**: 200"));
    assert!(report.contains("**Model Used**: Gemini"));
    assert!(report.contains("### ZERO_SHOT"));
    assert!(report.contains("### COT"));
    assert!(report.contains("- **Average Total Score**: 11.0/12"));
    // zero_shot section precedes cot (first appearance order).
    assert!(report.find("### ZERO_SHOT").unwrap() < report.find("### COT").unwrap());
}

#[test]
fn test_render_report_is_deterministic() {
    let results = vec![
        result("few_shot", ScoreCard::new(2, 2, 2, 2), 60),
        result("cot", ScoreCard::new(3, 3, 3, 3), 90),
    ];

    let a = ResultAnalyzer::render_report(&results).unwrap();
    let b = ResultAnalyzer::render_report(&results).unwrap();
    assert_eq!(a, b);
}
