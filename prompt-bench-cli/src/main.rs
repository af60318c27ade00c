use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use prompt_bench_client::{BoundProvider, ClientConfig, LlmClient, Provider};
use prompt_bench_eval::{ResponseEvaluator, ResultAnalyzer};
use prompt_bench_strategies::{Strategy, StrategyRunner};

mod dataset;
mod display;

/// Compare prompting strategies against real LLM APIs.
#[derive(Debug, Parser)]
#[command(name = "prompt-bench", version, about)]
struct Args {
    /// API provider to use
    #[arg(long, default_value = "gemini", value_parser = parse_provider)]
    provider: Provider,

    /// Prompting strategies to test (default: all)
    #[arg(long, value_parser = parse_strategy, value_delimiter = ',')]
    strategies: Vec<Strategy>,

    /// Use sample tasks only (1 per type)
    #[arg(long)]
    sample: bool,

    /// Directory with dataset JSON files overriding the embedded tasks
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Output file for the summary report
    #[arg(long)]
    output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short)]
    verbose: bool,
}

fn parse_provider(s: &str) -> Result<Provider, String> {
    s.parse().map_err(|e: prompt_bench_core::CoreError| e.to_string())
}

fn parse_strategy(s: &str) -> Result<Strategy, String> {
    s.parse().map_err(|e: prompt_bench_core::CoreError| e.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "prompt_bench=debug"
    } else {
        "prompt_bench=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    let config = ClientConfig::from_env();
    let client = LlmClient::new(config)?;

    if !client.available_providers().contains(&args.provider) {
        // Keep going: every call will come back as a failed response, which
        // still produces a zero-scored report. Warn loudly up front.
        println!(
            "{} no API key configured for provider '{}'",
            "WARNING:".yellow().bold(),
            args.provider
        );
    }

    let all_tasks = dataset::load_tasks(args.data_dir.as_deref())?;
    let tasks = if args.sample {
        dataset::sample_tasks(&all_tasks, 1)
    } else {
        all_tasks
    };

    let strategies = if args.strategies.is_empty() {
        Strategy::ALL.to_vec()
    } else {
        args.strategies.clone()
    };

    println!(
        "Running {} task(s) x {} strategies on {}",
        tasks.len(),
        strategies.len(),
        args.provider.label().bold()
    );

    let runner = StrategyRunner::with_strategies(strategies);
    let provider = BoundProvider::new(client, args.provider);
    let evaluator = ResponseEvaluator::new();

    let mut results = Vec::new();
    for (i, task) in tasks.iter().enumerate() {
        display::task_header(i + 1, tasks.len(), task);

        let runs = runner.run_all_strategies(task, &provider).await;
        for run in &runs {
            display::strategy_result(run, args.verbose);
            results.push(evaluator.evaluate(run));
        }
    }

    let summaries =
        ResultAnalyzer::aggregate(&results).context("no results were produced by this run")?;

    println!("\n{}", "STRATEGY PERFORMANCE SUMMARY".bold());
    println!("{}", display::summary_table(&summaries));

    let report = ResultAnalyzer::render_report(&results)?;
    if let Some(path) = &args.output {
        std::fs::write(path, &report)
            .with_context(|| format!("writing report to {}", path.display()))?;
        println!("Report written to {}", path.display().to_string().green());
    }

    Ok(())
}
