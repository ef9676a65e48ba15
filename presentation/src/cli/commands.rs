//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for atomic-ballot
#[derive(Parser, Debug)]
#[command(name = "atomic-ballot")]
#[command(author, version, about = "Atomic step solver with candidate voting and a judge")]
#[command(long_about = r#"
Atomic Ballot decomposes a goal into atomic steps and solves them one by one.

Each step is routed to a fast or reasoning profile, answered by several
candidates generated at increasing temperature, and decided by a judge call.
Winners pass a validation gate (with one self-correction attempt) before
being accumulated into the final report.

The journal commands manage the markdown logs the monthly summary feeds to
the solver.

Configuration files are loaded from (in priority order):
1. BALLOT_* environment variables
2. --config <path>     Explicit config file
3. ./ballot.toml       Project-level config
4. ~/.config/atomic-ballot/config.toml   Global config

Example:
  atomic-ballot daily
  atomic-ballot summary 5
  atomic-ballot solve "Summarize project X" --context-file notes.md
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Journal directory (default: ~/daily_logs)
    #[arg(long, value_name = "DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    /// Use a Logseq folder layout for the journal
    #[arg(long, global = true)]
    pub logseq: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write or update today's daily log (the default command)
    Daily,

    /// Start-of-week planning: create this week's log
    Sow,

    /// End-of-week review: append to this week's log
    Eow,

    /// Generate a monthly summary report from the aggregated logs
    Summary {
        /// Month of the current year (1-12); omit for the previous full month
        #[arg(value_name = "MONTH")]
        month: Option<u32>,
    },

    /// Run the solver directly on a goal
    Solve {
        /// The goal to decompose and solve
        goal: String,

        /// File whose contents seed the run's context
        #[arg(long, value_name = "PATH")]
        context_file: Option<PathBuf>,

        /// Candidates generated per step
        #[arg(long, value_name = "N")]
        vote_count: Option<usize>,

        /// Worker model override
        #[arg(long, value_name = "MODEL")]
        model: Option<String>,

        /// Finalizer model override for the last step
        #[arg(long, value_name = "MODEL")]
        final_model: Option<String>,

        /// Fixed shuffle seed for reproducible judging order
        #[arg(long, value_name = "SEED")]
        seed: Option<u64>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_no_subcommand() {
        let cli = Cli::try_parse_from(["atomic-ballot"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
        assert!(!cli.logseq);
    }

    #[test]
    fn test_summary_month_parsing() {
        let cli = Cli::try_parse_from(["atomic-ballot", "summary", "5"]).unwrap();
        match cli.command {
            Some(Command::Summary { month }) => assert_eq!(month, Some(5)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_solve_with_overrides() {
        let cli = Cli::try_parse_from([
            "atomic-ballot",
            "solve",
            "Summarize project X",
            "--vote-count",
            "5",
            "--seed",
            "42",
        ])
        .unwrap();

        match cli.command {
            Some(Command::Solve {
                goal,
                vote_count,
                seed,
                ..
            }) => {
                assert_eq!(goal, "Summarize project X");
                assert_eq!(vote_count, Some(5));
                assert_eq!(seed, Some(42));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["atomic-ballot", "daily", "-vv", "--logseq"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.logseq);
    }
}
