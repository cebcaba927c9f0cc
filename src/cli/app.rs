//! CLI definitions and entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use super::commands;
use fixversion_gate::output::OutputMode;

/// fixversion-gate - Check pull requests against Jira fix versions
#[derive(Parser, Debug)]
#[command(
    name = "fixversion-gate",
    version,
    about = "Check pull requests against Jira fix versions",
    long_about = "Fail a pull request whose Jira ticket is planned for another release.\n\n\
                  The ticket key comes from the source branch (optionally through\n\
                  JIRA_ISSUE_REGEX); its first fix version must correspond to the\n\
                  target branch, e.g. fix version 1.2.3 for release/1.2.3."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check the current pull request (default)
    Check {
        /// Event payload to read instead of GITHUB_EVENT_PATH
        #[arg(long)]
        event_path: Option<PathBuf>,
    },

    /// Print the issue key resolved from a branch name
    Resolve {
        /// Branch name
        branch: String,

        /// Issue pattern (defaults to the JIRA_ISSUE_REGEX input)
        #[arg(short, long)]
        pattern: Option<String>,
    },

    /// Check whether a fix version matches a target branch
    Match {
        /// Fix version from the ticket
        fix_version: String,

        /// Target branch of the pull request
        target_branch: String,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Check { event_path }) => commands::check(event_path, output_mode),
        None => commands::check(None, output_mode),
        Some(Command::Resolve { branch, pattern }) => {
            commands::resolve(&branch, pattern.as_deref(), output_mode)
        },
        Some(Command::Match {
            fix_version,
            target_branch,
        }) => Ok(commands::match_version(&fix_version, &target_branch, output_mode)),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("fixversion-gate v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(ExitCode::SUCCESS)
        },
    }
}

/// Report a fatal error to the invoking environment
///
/// Inside GitHub Actions the message is also emitted as an `::error::`
/// workflow command so it shows up as an annotation.
pub fn report_failure(err: &anyhow::Error) {
    let message = format!("{err:#}");
    eprintln!("Error: {message}");
    if std::env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true") {
        println!("::error::{}", escape_workflow_data(&message));
    }
}

/// Escape a workflow command payload
fn escape_workflow_data(data: &str) -> String {
    data.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}
