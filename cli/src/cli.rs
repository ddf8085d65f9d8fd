//! Command-line argument definitions

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// LLM Council - put a question before a council of independent models
#[derive(Parser, Debug)]
#[command(name = "llm-council", version, about)]
pub struct Cli {
    /// The question to put before the council
    pub question: Option<String>,

    /// Probe every member and the chairman instead of running a query
    #[arg(long)]
    pub health: bool,

    /// Explicit config file path (overrides council.toml discovery)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Skip config file discovery and use built-in defaults
    #[arg(long)]
    pub no_config: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Full)]
    pub output: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress bars and headers
    #[arg(short, long)]
    pub quiet: bool,
}

/// How to render the council result
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// All stages: answers, reviews, and synthesis
    Full,
    /// Final synthesis only
    Synthesis,
    /// Machine-readable JSON
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_question_and_flags() {
        let cli = Cli::parse_from(["llm-council", "What is Rust?", "--output", "json", "-vv"]);
        assert_eq!(cli.question.as_deref(), Some("What is Rust?"));
        assert_eq!(cli.output, OutputFormat::Json);
        assert_eq!(cli.verbose, 2);
        assert!(!cli.health);
    }

    #[test]
    fn test_health_flag() {
        let cli = Cli::parse_from(["llm-council", "--health"]);
        assert!(cli.health);
        assert!(cli.question.is_none());
    }
}
