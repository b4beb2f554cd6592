//! `taskwright run` — execute a task against a working directory.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use taskwright_agent::TaskRunner;
use taskwright_config::AppConfig;
use taskwright_providers::OpenAiCompatProvider;

pub async fn run(
    task: Option<String>,
    task_file: Option<String>,
    workspace: Option<String>,
    model: Option<String>,
    turn_budget: Option<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    tracing::debug!(?config, "Configuration loaded");

    // Check for API key early — give a clear error
    let Some(api_key) = config.api_key.clone() else {
        eprintln!();
        eprintln!("  ERROR: No API key configured!");
        eprintln!();
        eprintln!("  Set one of these environment variables:");
        eprintln!("    OPENAI_API_KEY      (for OpenAI direct)");
        eprintln!("    OPENROUTER_API_KEY  (for OpenRouter)");
        eprintln!("    TASKWRIGHT_API_KEY  (generic)");
        eprintln!();
        eprintln!("  Or add it to your config file:");
        eprintln!("    {}", AppConfig::config_dir().join("config.toml").display());
        eprintln!();
        return Err("No API key found. See above for setup instructions.".into());
    };

    // Task text: positional argument or file
    let task = match (task, task_file) {
        (Some(text), None) => text,
        (None, Some(path)) => std::fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read task file '{path}': {e}"))?,
        _ => return Err("Provide a task, either inline or via --task-file.".into()),
    };

    // Workspace: explicit, or a fresh attempt-numbered run directory
    let workspace = match workspace {
        Some(dir) => PathBuf::from(dir),
        None => allocate_run_dir(&std::env::current_dir()?.join("runs")),
    };
    std::fs::create_dir_all(&workspace)
        .map_err(|e| format!("Failed to create workspace '{}': {e}", workspace.display()))?;

    let model = model.unwrap_or_else(|| config.default_model.clone());
    let turn_budget = turn_budget.unwrap_or(config.turn_budget);

    println!("  Workspace:   {}", workspace.display());
    println!("  Model:       {model}");
    println!("  Turn budget: {turn_budget}");
    println!();

    let provider = Arc::new(OpenAiCompatProvider::new(
        "openai",
        &config.base_url,
        api_key,
    ));
    let tools = Arc::new(taskwright_tools::default_registry());

    let mut runner = TaskRunner::new(provider, model, tools)
        .with_turn_budget(turn_budget)
        .with_temperature(config.default_temperature);
    if config.default_max_tokens > 0 {
        runner = runner.with_max_tokens(config.default_max_tokens);
    }

    runner.run(&workspace, &task).await?;

    println!();
    println!("  Run complete. Workspace: {}", workspace.display());
    Ok(())
}

/// Pick the first free `run_attempt_N` directory under `base`.
fn allocate_run_dir(base: &Path) -> PathBuf {
    let mut attempt = 1;
    loop {
        let candidate = base.join(format!("run_attempt_{attempt}"));
        if !candidate.exists() {
            return candidate;
        }
        attempt += 1;
    }
}
