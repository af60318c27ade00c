//! Console output formatting.

use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, Color, Table};

use prompt_bench_core::Task;
use prompt_bench_eval::StrategySummary;
use prompt_bench_strategies::StrategyRun;

pub fn task_header(task_num: usize, total_tasks: usize, task: &Task) {
    println!("\n{}", "=".repeat(60).dimmed());
    println!(
        "{} {}",
        format!("TASK {}/{}:", task_num, total_tasks).bold(),
        task.task_type.to_string().to_uppercase().cyan()
    );
    println!("Question: {}", task.question);
    println!("Expected: {}", task.expected_answer);
    println!("{}", "=".repeat(60).dimmed());
}

pub fn strategy_result(run: &StrategyRun, verbose: bool) {
    println!(
        "\n--- {} ---",
        run.strategy.name().to_uppercase().bold()
    );

    if verbose {
        let preview: String = run.prompt.chars().take(100).collect();
        println!("Prompt: {}...", preview.dimmed());
    }

    if run.response.success {
        println!("Response: {}", run.response.text);
        println!(
            "Tokens Used: {}",
            run.response.total_tokens().to_string().green()
        );
    } else {
        println!("{} {}", "ERROR:".red().bold(), run.response.error_message);
    }
}

pub fn summary_table(summaries: &[StrategySummary]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.apply_modifier(UTF8_ROUND_CORNERS);
    table.set_header(vec![
        Cell::new("Strategy").fg(Color::Cyan),
        Cell::new("Avg Total").fg(Color::Cyan),
        Cell::new("Correctness").fg(Color::Cyan),
        Cell::new("Clarity").fg(Color::Cyan),
        Cell::new("Completeness").fg(Color::Cyan),
        Cell::new("Conciseness").fg(Color::Cyan),
        Cell::new("Avg Tokens").fg(Color::Cyan),
        Cell::new("Total Tokens").fg(Color::Cyan),
    ]);

    for summary in summaries {
        table.add_row(vec![
            summary.strategy.clone(),
            format!("{:.1}/12", summary.avg_total),
            format!("{:.1}/3", summary.avg_correctness),
            format!("{:.1}/3", summary.avg_reasoning_clarity),
            format!("{:.1}/3", summary.avg_completeness),
            format!("{:.1}/3", summary.avg_conciseness),
            format!("{:.0}", summary.avg_tokens),
            summary.total_tokens.to_string(),
        ]);
    }

    table
}
