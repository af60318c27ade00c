use pretty_assertions::assert_eq;
use prompt_bench_core::{
    CoreError, Difficulty, EvaluationResult, ProviderResponse, ScoreCard, Task, TaskType,
    TokenUsage,
};

// ===== Task Tests =====

#[test]
fn test_task_creation() {
    let task = Task::new(
        1,
        TaskType::Math,
        "What is 23 x 17?",
        "391",
        Difficulty::Easy,
    )
    .unwrap();

    assert_eq!(task.id, 1);
    assert_eq!(task.task_type, TaskType::Math);
    assert_eq!(task.question, "What is 23 x 17?");
    assert_eq!(task.expected_answer, "391");
    assert_eq!(task.difficulty, Difficulty::Easy);
}

#[test]
fn test_task_rejects_empty_question() {
    let err = Task::new(1, TaskType::Logic, "", "yes", Difficulty::Easy).unwrap_err();
    assert!(matches!(err, CoreError::Validation(_)));
}

#[test]
fn test_task_rejects_whitespace_only_answer() {
    let err = Task::new(1, TaskType::Logic, "Who?", "   ", Difficulty::Easy).unwrap_err();
    assert!(matches!(err, CoreError::Validation(_)));
}

#[test]
fn test_task_type_wire_names() {
    assert_eq!(
        serde_json::to_string(&TaskType::Reasoning).unwrap(),
        "\"reasoning\""
    );
    let parsed: TaskType = serde_json::from_str("\"math\"").unwrap();
    assert_eq!(parsed, TaskType::Math);
}

#[test]
fn test_task_deserialization_defaults_difficulty() {
    let json = r#"{
        "id": 7,
        "task_type": "reasoning",
        "question": "Does wet ground imply rain?",
        "expected_answer": "Not necessarily (other causes possible)."
    }"#;

    let task: Task = serde_json::from_str(json).unwrap();
    assert_eq!(task.difficulty, Difficulty::Medium);
    task.validate_fields().unwrap();
}

// ===== ProviderResponse Tests =====

#[test]
fn test_response_total_tokens() {
    let response = ProviderResponse::ok("391", "Gemini", TokenUsage::new(12, 8, 20));
    assert!(response.success);
    assert_eq!(response.total_tokens(), 20);
}

#[test]
fn test_failed_response_has_no_tokens() {
    let response = ProviderResponse::failure("Gemini", "quota exceeded");
    assert!(!response.success);
    assert_eq!(response.total_tokens(), 0);
    assert_eq!(response.error_message, "quota exceeded");
    assert!(response.text.is_empty());
}

// ===== EvaluationResult Tests =====

#[test]
fn test_score_card_total() {
    let scores = ScoreCard::new(3, 2, 3, 1);
    assert_eq!(scores.total(), 9);
}

#[test]
fn test_evaluation_result_snapshots_task() {
    let task = Task::new(
        4,
        TaskType::Logic,
        "Who is the youngest?",
        "Charlie",
        Difficulty::Easy,
    )
    .unwrap();

    let result = EvaluationResult::new(
        &task,
        "zero_shot",
        "Solve this logic puzzle: Who is the youngest?",
        "The youngest person is Charlie.",
        "Gemini",
        42,
        ScoreCard::new(3, 1, 2, 3),
    );

    assert_eq!(result.task_id, 4);
    assert_eq!(result.question, task.question);
    assert_eq!(result.expected_answer, "Charlie");
    assert_eq!(result.total_score(), 9);
    assert_eq!(EvaluationResult::MAX_SCORE, 12);
}

#[test]
fn test_evaluation_result_serialization_round_trip() {
    let task = Task::new(2, TaskType::Math, "2 + 2?", "4", Difficulty::Easy).unwrap();
    let result = EvaluationResult::new(
        &task,
        "cot",
        "prompt",
        "The answer is 4.",
        "OpenRouter",
        10,
        ScoreCard::new(3, 1, 1, 3),
    );

    let json = serde_json::to_string(&result).unwrap();
    let back: EvaluationResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back.total_score(), result.total_score());
    assert_eq!(back.strategy, "cot");
}
