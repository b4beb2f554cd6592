//! The turn loop implementation.

use std::path::Path;
use std::sync::Arc;

use taskwright_core::context::RunContext;
use taskwright_core::message::Message;
use taskwright_core::provider::{Provider, ProviderRequest};
use taskwright_core::tool::ToolRegistry;
use tracing::{debug, info, warn};

use crate::completion;
use crate::parser;
use crate::prompt;

/// The task runner — drives one bounded conversation per run.
///
/// State machine per turn: request a completion, parse it for a tool call,
/// then either dispatch the call or apply the completion heuristic. Tool
/// failures are folded back into the transcript; only a provider failure
/// aborts the run.
pub struct TaskRunner {
    /// The LLM provider to use
    provider: Arc<dyn Provider>,

    /// The model to use
    model: String,

    /// Temperature setting
    temperature: f32,

    /// Default max tokens per response
    max_tokens: Option<u32>,

    /// Tool registry
    tools: Arc<ToolRegistry>,

    /// Fixed instructions seeded as the leading system message
    system_prompt: String,

    /// Maximum request/parse cycles per run
    turn_budget: u32,
}

impl TaskRunner {
    /// Create a new runner with default settings.
    pub fn new(provider: Arc<dyn Provider>, model: impl Into<String>, tools: Arc<ToolRegistry>) -> Self {
        let system_prompt = prompt::build_system_prompt(&tools);
        Self {
            provider,
            model: model.into(),
            temperature: 0.7,
            max_tokens: None,
            tools,
            system_prompt,
            turn_budget: 50,
        }
    }

    /// Set the maximum number of request/parse cycles.
    pub fn with_turn_budget(mut self, budget: u32) -> Self {
        self.turn_budget = budget;
        self
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the default max tokens per model response.
    pub fn with_max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = Some(max);
        self
    }

    /// Override the system prompt.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    /// Run a task against a working directory.
    ///
    /// Completes with no value: either the model signalled completion, or
    /// the turn budget ran out (normal termination either way). The only
    /// error path is a provider failure.
    pub async fn run(
        &self,
        workspace: impl AsRef<Path>,
        task: &str,
    ) -> Result<(), taskwright_core::Error> {
        let mut ctx = RunContext::new(workspace.as_ref(), self.turn_budget);
        self.process(&mut ctx, task).await
    }

    /// Drive the turn loop over a caller-provided context.
    ///
    /// Seeds the transcript, then iterates until a `finished` dispatch, a
    /// completion phrase, or budget exhaustion. The context retains the
    /// full transcript afterwards for inspection.
    pub async fn process(
        &self,
        ctx: &mut RunContext,
        task: &str,
    ) -> Result<(), taskwright_core::Error> {
        ctx.transcript.push(Message::system(&self.system_prompt));
        ctx.transcript
            .push(Message::user(prompt::build_task_prompt(&ctx.workspace, task)));

        info!(
            workspace = %ctx.workspace.display(),
            turn_budget = ctx.turn_budget,
            model = %self.model,
            "Run starting"
        );

        while ctx.next_turn() {
            debug!(turn = ctx.turns_used, "Requesting completion");

            let request = ProviderRequest {
                model: self.model.clone(),
                messages: ctx.transcript.snapshot().to_vec(),
                temperature: self.temperature,
                max_tokens: self.max_tokens,
            };

            // A provider failure is the single abnormal termination path.
            let response = self.provider.complete(request).await?;
            let text = response.content;
            ctx.transcript.push(Message::assistant(&text));

            match parser::parse_tool_call(&text) {
                Some(call) => {
                    debug!(turn = ctx.turns_used, tool = %call.name, "Dispatching tool call");
                    let result = self.tools.dispatch(ctx, &call).await;

                    if result.finished {
                        info!(turns = ctx.turns_used, "Run complete (finish call)");
                        return Ok(());
                    }

                    ctx.transcript.push(Message::user(format!(
                        "Result of {}:\n{}",
                        call.name, result.output
                    )));
                }
                None => {
                    if completion::is_completion(&text) {
                        info!(turns = ctx.turns_used, "Run complete (completion phrase)");
                        return Ok(());
                    }

                    debug!(turn = ctx.turns_used, "No tool call, injecting corrective instruction");
                    ctx.transcript
                        .push(Message::user(completion::CORRECTIVE_INSTRUCTION));
                }
            }
        }

        warn!(
            turns = ctx.turns_used,
            "Turn budget exhausted without a completion signal"
        );
        Ok(())
    }
}
