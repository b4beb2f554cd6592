//! taskwright CLI — the main entry point.
//!
//! Commands:
//! - `run`   — Execute a task against a working directory
//! - `tools` — List the available tools

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "taskwright",
    about = "taskwright — a single-agent, tool-using task executor",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute a task against a working directory
    Run {
        /// The task text (omit when using --task-file)
        task: Option<String>,

        /// Read the task text from a file instead
        #[arg(short = 'f', long, conflicts_with = "task")]
        task_file: Option<String>,

        /// Working directory for the run (default: a fresh runs/run_attempt_N)
        #[arg(short, long)]
        workspace: Option<String>,

        /// Override the configured model
        #[arg(short, long)]
        model: Option<String>,

        /// Override the configured turn budget
        #[arg(short, long)]
        turn_budget: Option<u32>,
    },

    /// List the available tools
    Tools,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Run {
            task,
            task_file,
            workspace,
            model,
            turn_budget,
        } => commands::run::run(task, task_file, workspace, model, turn_budget).await?,
        Commands::Tools => commands::tools::run()?,
    }

    Ok(())
}
