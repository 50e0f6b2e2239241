//! logsieve CLI - inspect which log records a function host prints to the console.
//!
//! Loads the host document (`host.json` by default), resolves the console
//! filtering policy the same way the host does at startup, and answers
//! visibility questions about categories and levels. The tool's own
//! diagnostics are filtered by that same policy.
//!
//! # Usage
//!
//! ```bash
//! # Would a user debug record be printed?
//! logsieve check Function.HttpTrigger.User Debug
//!
//! # Show resolved defaults and configured overrides
//! logsieve levels --config ./app/host.json
//!
//! # Force verbose off, ignoring CI detection
//! logsieve --verbose=false levels
//! ```

use clap::{Parser, Subcommand};
use logsieve_core::{FilterPolicy, SeverityLevel};
use std::sync::Arc;

mod cli;
mod logging;

/// logsieve - console log visibility for a function host.
#[derive(Parser, Debug)]
#[command(name = "logsieve")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Host configuration document (JSON or TOML). Defaults to ./host.json when present
    #[arg(long, global = true, env = "LOGSIEVE_CONFIG", value_name = "PATH")]
    config: Option<String>,

    /// Verbose host output. A bare flag means true; `--verbose=false` disables CI detection
    #[arg(
        short,
        long,
        global = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_name = "BOOL"
    )]
    verbose: Option<bool>,

    /// Mute every category that has no explicit override
    #[arg(long, global = true)]
    silent: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Decide whether a record with the given category and level is printed
    Check(cli::check::CheckArgs),

    /// Show the resolved default levels and configured overrides
    Levels,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let source = cli::load_host_config(cli.config.as_deref())?;
    let host_config = source.as_ref().map(|s| Arc::clone(&s.config));
    let mut policy = FilterPolicy::new(host_config, cli.verbose);
    if cli.silent {
        policy = policy.with_effective_default_level(SeverityLevel::None);
    }

    logging::init(&policy, cli.json_logs);

    tracing::debug!(target: "Host.Cli", "logsieve v{}", logsieve_core::VERSION);
    // Config loading and policy resolution ran before the subscriber existed
    logging::report_startup(&policy, source.as_ref().map(|s| s.path.as_path()));

    match cli.command {
        Commands::Check(args) => cli::check::execute(args, &policy),
        Commands::Levels => cli::levels::execute(&policy),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_absent_by_default() {
        let cli = Cli::try_parse_from(["logsieve", "levels"]).unwrap();
        assert_eq!(cli.verbose, None);
        assert!(!cli.silent);
    }

    #[test]
    fn bare_verbose_means_true() {
        let cli = Cli::try_parse_from(["logsieve", "--verbose", "levels"]).unwrap();
        assert_eq!(cli.verbose, Some(true));
    }

    #[test]
    fn explicit_verbose_false_is_kept() {
        let cli = Cli::try_parse_from(["logsieve", "levels", "--verbose=false"]).unwrap();
        assert_eq!(cli.verbose, Some(false));
    }

    #[test]
    fn check_parses_level_case_insensitively() {
        let cli = Cli::try_parse_from(["logsieve", "check", "Host.Startup", "warning"]).unwrap();
        match cli.command {
            Commands::Check(args) => {
                assert_eq!(args.category, "Host.Startup");
                assert_eq!(args.level, SeverityLevel::Warning);
            }
            Commands::Levels => panic!("expected check"),
        }
    }

    #[test]
    fn check_rejects_unknown_level() {
        assert!(Cli::try_parse_from(["logsieve", "check", "Host.Startup", "loud"]).is_err());
    }
}
