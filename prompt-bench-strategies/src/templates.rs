use std::collections::HashMap;

use prompt_bench_core::{CoreError, Result, Task, TaskType};

use crate::strategy::Strategy;

const ZERO_SHOT_LOGIC: &str = "Solve this logic puzzle: {question}";
const ZERO_SHOT_MATH: &str = "Solve this math problem: {question}";
const ZERO_SHOT_REASONING: &str = "Answer this question: {question}";

const FEW_SHOT_LOGIC: &str = "\
Solve these logic puzzles:

Example 1:
Puzzle: If all cats are animals and Fluffy is a cat, is Fluffy an animal?
Answer: Yes, because if all cats are animals and Fluffy is a cat, then Fluffy must be an animal.

Example 2:
Puzzle: Tom is taller than Jerry. Jerry is taller than Spike. Who is the shortest?
Answer: Spike, because if Tom > Jerry and Jerry > Spike, then Spike is the shortest.

Now solve:
Puzzle: {question}
Answer:";

const FEW_SHOT_MATH: &str = "\
Solve these math problems:

Example 1:
Problem: A car travels 50 km in 1 hour. How far will it go in 3 hours?
Answer: 150 km (50 km/hour x 3 hours = 150 km)

Example 2:
Problem: What is 15 x 8?
Answer: 120

Now solve:
Problem: {question}
Answer:";

const FEW_SHOT_REASONING: &str = "\
Answer these reasoning questions:

Example 1:
Question: If Sarah is older than Mike, and Mike is older than Lisa, who is the oldest?
Answer: Sarah is the oldest.

Example 2:
Question: A bakery makes 12 cookies per hour. How many cookies in 4 hours?
Answer: 48 cookies (12 x 4 = 48)

Now answer:
Question: {question}
Answer:";

const COT_LOGIC: &str = "\
Solve this logic puzzle step by step, showing your reasoning:

Puzzle: {question}

Think step by step and explain your reasoning:";

const COT_MATH: &str = "\
Solve this math problem step by step:

Problem: {question}

Show your work step by step:";

const COT_REASONING: &str = "\
Answer this question by thinking through it step by step:

Question: {question}

Think step by step and explain your reasoning:";

/// Prompt templates addressable by (strategy, task type).
///
/// Templates are configuration data, not code: the default library carries
/// one entry per pair, but a custom library with a missing entry surfaces a
/// configuration error instead of falling back to a generic wrapper.
#[derive(Debug, Clone)]
pub struct PromptLibrary {
    templates: HashMap<(Strategy, TaskType), &'static str>,
}

impl PromptLibrary {
    pub fn empty() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    pub fn register(&mut self, strategy: Strategy, task_type: TaskType, template: &'static str) {
        self.templates.insert((strategy, task_type), template);
    }

    pub fn template(&self, strategy: Strategy, task_type: TaskType) -> Option<&'static str> {
        self.templates.get(&(strategy, task_type)).copied()
    }

    /// Render the prompt for a task. Pure string formatting, no side effects.
    pub fn generate_prompt(&self, strategy: Strategy, task: &Task) -> Result<String> {
        let template = self.template(strategy, task.task_type).ok_or_else(|| {
            CoreError::Configuration(format!(
                "no prompt template registered for strategy '{}' and task type '{}'",
                strategy, task.task_type
            ))
        })?;

        Ok(template.replace("{question}", &task.question))
    }
}

impl Default for PromptLibrary {
    fn default() -> Self {
        let mut library = Self::empty();

        library.register(Strategy::ZeroShot, TaskType::Logic, ZERO_SHOT_LOGIC);
        library.register(Strategy::ZeroShot, TaskType::Math, ZERO_SHOT_MATH);
        library.register(Strategy::ZeroShot, TaskType::Reasoning, ZERO_SHOT_REASONING);

        library.register(Strategy::FewShot, TaskType::Logic, FEW_SHOT_LOGIC);
        library.register(Strategy::FewShot, TaskType::Math, FEW_SHOT_MATH);
        library.register(Strategy::FewShot, TaskType::Reasoning, FEW_SHOT_REASONING);

        library.register(Strategy::ChainOfThought, TaskType::Logic, COT_LOGIC);
        library.register(Strategy::ChainOfThought, TaskType::Math, COT_MATH);
        library.register(Strategy::ChainOfThought, TaskType::Reasoning, COT_REASONING);

        library
    }
}
