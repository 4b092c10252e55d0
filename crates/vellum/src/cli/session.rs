//! Interactive session over stdin.

use tokio::io::BufReader;
use tracing::{debug, warn};
use vellum::{Assistant, BlockReader, InputBlock, VellumResult};

use super::PromptArgs;

/// Read blocks of text ended by a line holding a single `.`, run each through
/// the gate against one session and print the HUD after every block.
pub async fn run_session(assistant: &Assistant, prompt: &PromptArgs) -> VellumResult<()> {
    eprintln!("Enter text, then a line with a single '.' to submit. Ctrl-D to quit.");
    eprintln!("{}", assistant.context().snapshot());

    let mut blocks = BlockReader::new(BufReader::new(tokio::io::stdin()));
    while let Some(block) = blocks.next_block().await? {
        match block {
            InputBlock::Text(text) => submit(assistant, prompt, &text).await,
            InputBlock::Blank => eprintln!("Please provide content."),
        }
    }

    debug!("End of input, closing session");
    Ok(())
}

/// Failures are reported and the session continues.
async fn submit(assistant: &Assistant, prompt: &PromptArgs, block: &str) {
    if let Err(e) = invoke(assistant, prompt, block).await {
        warn!(error = %e, "Session invocation failed");
        eprintln!("Error: {}", e.user_message());
    }
    eprintln!("{}", assistant.context().snapshot());
}

async fn invoke(assistant: &Assistant, prompt: &PromptArgs, block: &str) -> VellumResult<String> {
    let request = assistant.prepare(prompt.builder(assistant, block)?)?;
    assistant.run(&request, |text| println!("{}\n", text)).await
}
