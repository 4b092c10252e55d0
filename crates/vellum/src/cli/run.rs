//! One-shot `run` and `agent` command handlers.

use std::path::Path;
use tracing::info;
use vellum::{
    Assistant, InvocationRequest, InvocationRequestBuilder, ProviderError, ProviderErrorKind,
    VellumResult, read_input,
};

use super::{PromptArgs, load_roster};

impl PromptArgs {
    /// Request builder for `content`, before credentials are applied.
    ///
    /// The instruction comes from `--prompt` or the task; the model from
    /// `--model`, the task, or the selected model, in that order.
    pub fn builder(
        &self,
        assistant: &Assistant,
        content: &str,
    ) -> VellumResult<InvocationRequestBuilder> {
        let mut builder = match (self.task, &self.prompt) {
            (Some(task), _) => task.task(&self.keywords).request(content),
            (None, Some(_)) => {
                let mut builder = InvocationRequest::builder();
                builder
                    .user_content(content)
                    .model_identifier(assistant.selected_model());
                builder
            }
            (None, None) => {
                return Err(ProviderError::new(ProviderErrorKind::InvalidRequest(
                    "either --task or --prompt is required".to_string(),
                ))
                .into());
            }
        };

        if let Some(prompt) = &self.prompt {
            builder.instruction_prompt(prompt.as_str());
        }
        if let Some(model) = &self.model {
            builder.model_identifier(model.as_str());
        }
        builder.max_output_tokens(assistant.config().provider.max_output_tokens);
        Ok(builder)
    }
}

/// Run a task or custom prompt once and print the generated markdown.
pub async fn run_prompt(
    assistant: &Assistant,
    prompt: &PromptArgs,
    input: Option<&Path>,
    hud: bool,
) -> VellumResult<()> {
    let content = read_input(input)?;
    let request = assistant.prepare(prompt.builder(assistant, &content)?)?;
    info!(model = %request.model_identifier(), "Running review");

    assistant.run(&request, |text| println!("{}", text)).await?;

    if hud {
        eprintln!("{}", assistant.context().snapshot());
    }
    Ok(())
}

/// Run a roster agent once and print the generated markdown.
pub async fn run_agent(
    assistant: &Assistant,
    id: &str,
    agents: Option<&Path>,
    input: Option<&Path>,
) -> VellumResult<()> {
    let roster = load_roster(agents)?;
    let agent = roster.get(id).ok_or_else(|| {
        ProviderError::new(ProviderErrorKind::InvalidRequest(format!(
            "unknown agent '{}'",
            id
        )))
    })?;

    let content = read_input(input)?;
    let request = assistant.prepare(agent.request(content))?;
    info!(agent = %agent.id(), model = %agent.model(), "Running agent");

    assistant.run(&request, |text| println!("{}", text)).await?;
    Ok(())
}
