//! CLI entrypoint for Atomic Ballot
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use ballot_application::{RunSolverInput, RunSolverUseCase, SolverParams};
use ballot_domain::Goal;
use ballot_infrastructure::{
    ConfigLoader, DailyInput, FileConfig, GeminiBackend, JournalLayout, JournalStore, WeekPlan,
    WeekReview, aggregate_month, month_name, previous_month, render_aggregate, summary_context,
    summary_goal,
};
use ballot_infrastructure::journal::weekly::{render_week_plan, render_week_review};
use ballot_presentation::{Cli, Command, ConsoleFormatter, ProgressReporter, input};
use chrono::{Datelike, Local};
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("loading configuration")?
    };

    let layout = if cli.logseq || config.journal.logseq {
        JournalLayout::Logseq
    } else {
        JournalLayout::Flat
    };
    let root = cli
        .log_dir
        .clone()
        .or_else(|| config.journal.root.clone())
        .unwrap_or_else(JournalStore::default_root);

    match cli.command.unwrap_or(Command::Daily) {
        Command::Daily => {
            let store = JournalStore::open(&root, layout)?;
            run_daily(&store)
        }
        Command::Sow => {
            let store = JournalStore::open(&root, layout)?;
            run_sow(&store)
        }
        Command::Eow => {
            let store = JournalStore::open(&root, layout)?;
            run_eow(&store)
        }
        Command::Summary { month } => {
            let store = JournalStore::open(&root, layout)?;
            run_summary(&store, &config, month, cli.quiet).await
        }
        Command::Solve {
            goal,
            context_file,
            vote_count,
            model,
            final_model,
            seed,
        } => {
            let context = match context_file {
                Some(path) => std::fs::read_to_string(&path)
                    .with_context(|| format!("reading context file {}", path.display()))?,
                None => String::new(),
            };

            let mut params = config.solver_params();
            if let Some(count) = vote_count {
                params = params.with_vote_count(count);
            }
            if let Some(seed) = seed {
                params = params.with_shuffle_seed(seed);
            }

            let worker = match model {
                Some(name) => name.parse().unwrap(),
                None => config.worker_model(),
            };
            let finalizer = match final_model {
                Some(name) => name.parse().unwrap(),
                None => config.finalizer_model(),
            };

            run_solve(&config, params, worker, finalizer, goal, context, cli.quiet).await
        }
    }
}

/// Write or update today's daily log
fn run_daily(store: &JournalStore) -> Result<()> {
    if store.layout() == JournalLayout::Logseq {
        bail!("Daily logs are not supported for Logseq. Use Logseq's journal feature instead.");
    }

    println!("Daily Log");
    println!("----------------------------------------------------------");

    let today = Local::now().date_naive();
    let path = store.daily_path(today);
    println!("Daily log file: {}", path.display());

    let new_input = DailyInput {
        did: input::read_bullet_points("What I did (new entries):")?,
        next_up: input::read_bullet_points("What's next (new entries):")?,
        broke: input::read_bullet_points("What broke or got weird (new entries):")?,
        score: input::read_score()?,
        insights: input::read_bullet_points("Quick insights (optional):")?,
    };

    use ballot_infrastructure::journal::daily;
    let existing = match store.read_if_exists(&path)? {
        Some(content) => {
            println!("\nFound existing log for today. Merging entries.");
            daily::parse_sections(&content)
        }
        None => {
            println!("\nCreating new log for today.");
            daily::parse_sections("")
        }
    };

    let date_label = today.format("%Y-%m-%d").to_string();
    store.write(&path, &daily::render(&existing, &new_input, &date_label))?;
    println!("Saved daily log to: {}", path.display());
    Ok(())
}

/// Start-of-week planning
fn run_sow(store: &JournalStore) -> Result<()> {
    println!("Start of Week Planning");

    let today = Local::now().date_naive();
    let path = store.weekly_path(today);
    println!("This will create/overwrite the weekly log at: {}", path.display());

    let plan = WeekPlan {
        goals: input::read_bullet_points("Set yourself one, two or three goals for the week.")?,
        next_steps: input::read_bullet_points(
            "What are the next steps you need to take to achieve your goals?",
        )?,
        other_tasks: input::read_bullet_points("What other tasks spring to mind?")?,
    };

    store.write(&path, &render_week_plan(today, &plan, store.layout()))?;
    println!("Saved Start of Week plan to: {}", path.display());
    Ok(())
}

/// End-of-week review, appended to the existing weekly log
fn run_eow(store: &JournalStore) -> Result<()> {
    println!("End of Week Review");

    let today = Local::now().date_naive();
    let path = store.weekly_path(today);
    println!("This will append a review to the weekly log at: {}", path.display());

    let review = WeekReview {
        went_well: input::read_multiline("Based on your logs: What went well?")?,
        happy_about: input::read_multiline("What are you happy about?")?,
        made_laugh: input::read_multiline("What made you laugh?")?,
        progress: input::read_multiline("Please describe any progress that you have observed.")?,
    };

    store.append(&path, &render_week_review(&review, store.layout()))?;
    println!("Appended End of Week review to: {}", path.display());
    Ok(())
}

/// Aggregate a month of logs and solve the summary goal over them
async fn run_summary(
    store: &JournalStore,
    config: &FileConfig,
    month_arg: Option<u32>,
    quiet: bool,
) -> Result<()> {
    println!("Monthly Summary & Insights Generation");

    let today = Local::now().date_naive();
    let (year, month) = match month_arg {
        None => previous_month(today),
        Some(m) if (1..=12).contains(&m) => (today.year(), m),
        Some(m) => bail!("Invalid month number {m}. Provide a number between 1 and 12."),
    };

    println!("\nAggregating logs for {} {year}...", month_name(month));
    let entries = aggregate_month(store, year, month)?;
    if entries.is_empty() {
        println!("No log files found for {} {year}. Nothing to summarize.", month_name(month));
        return Ok(());
    }

    let aggregated = render_aggregate(&entries);
    println!(
        "Found {} log entries. Total length: {} characters.",
        entries.len(),
        aggregated.len()
    );

    let report = solve(
        config,
        config.solver_params(),
        config.worker_model(),
        config.finalizer_model(),
        summary_goal(),
        summary_context(year, month, &aggregated),
        quiet,
    )
    .await?;

    let skipped = report.skipped_steps().count();
    if skipped > 0 {
        println!("Note: {skipped} step(s) were skipped; the report may be incomplete.");
    }

    let path = store.summary_path(year, month);
    store.write(&path, &report.solution)?;
    println!("Saved monthly summary to: {}", path.display());
    Ok(())
}

/// Solve a goal given directly on the command line
async fn run_solve(
    config: &FileConfig,
    params: SolverParams,
    worker: ballot_domain::Model,
    finalizer: ballot_domain::Model,
    goal: String,
    context: String,
    quiet: bool,
) -> Result<()> {
    if !quiet {
        println!("Goal: {goal}");
        println!("Models: {worker} (worker), {finalizer} (finalizer)");
        println!();
    }

    let report = solve(config, params, worker, finalizer, goal, context, quiet).await?;

    if quiet {
        println!("{}", ConsoleFormatter::format_solution_only(&report));
    } else {
        println!("{}", ConsoleFormatter::format(&report));
    }
    Ok(())
}

/// Shared solver wiring: backend construction and use case execution
async fn solve(
    config: &FileConfig,
    params: SolverParams,
    worker: ballot_domain::Model,
    finalizer: ballot_domain::Model,
    goal: String,
    context: String,
    quiet: bool,
) -> Result<ballot_domain::SolveReport> {
    let Some(goal) = Goal::try_new(goal) else {
        bail!("Goal cannot be empty");
    };

    // === Dependency Injection ===
    let backend = Arc::new(GeminiBackend::from_env_var(&config.backend.api_key_env)?);

    let use_case = RunSolverUseCase::new(backend)
        .with_params(params)
        .with_worker(worker)
        .with_finalizer(finalizer);

    info!("Dispatching solver run");
    let input = RunSolverInput::new(goal, context);

    let report = if quiet {
        use_case.execute(input).await?
    } else {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(input, &progress).await?
    };

    Ok(report)
}
